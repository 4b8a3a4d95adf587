use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_first_page_ten_latest() {
    let p = Pagination::default();
    assert_eq!(p.page, 1);
    assert_eq!(p.page_size, PageSize::Ten);
    assert_eq!(p.sort, SortOrder::Desc);
}

#[test]
fn default_query_string_matches_backend_format() {
    assert_eq!(
        Pagination::default().query_string(),
        "pagination[pageSize]=10&pagination[page]=1&sort=createdAt:DESC"
    );
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_increments_page_and_changes_query() {
    let mut p = Pagination::default();
    let before_key = p.query_key();
    p.next();
    assert_eq!(p.page, 2);
    assert!(p.query_string().contains("pagination[page]=2"));
    assert_ne!(p.query_key(), before_key);
}

#[test]
fn prev_never_goes_below_one() {
    let mut p = Pagination::default();
    p.prev();
    assert_eq!(p.page, 1);
    p.next();
    p.next();
    p.prev();
    assert_eq!(p.page, 2);
}

#[test]
fn bounds_follow_page_count() {
    let mut p = Pagination::default();
    assert!(!p.can_prev());
    assert!(p.can_next(3));
    p.next();
    p.next();
    assert!(p.can_prev());
    assert!(!p.can_next(3));
    assert!(!Pagination::default().can_next(0));
}

#[test]
fn changing_size_or_sort_resets_page() {
    let mut p = Pagination::default();
    p.next();
    p.set_page_size(PageSize::Fifty);
    assert_eq!(p.page, 1);
    assert!(p.query_string().starts_with("pagination[pageSize]=50&"));

    p.next();
    p.set_sort(SortOrder::Asc);
    assert_eq!(p.page, 1);
    assert!(p.query_string().ends_with("sort=createdAt:ASC"));
}

#[test]
fn setting_same_size_keeps_page() {
    let mut p = Pagination::default();
    p.next();
    p.set_page_size(PageSize::Ten);
    assert_eq!(p.page, 2);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn page_size_parses_only_allowed_values() {
    assert_eq!("50".parse::<PageSize>(), Ok(PageSize::Fifty));
    assert_eq!(" 100 ".parse::<PageSize>(), Ok(PageSize::Hundred));
    assert!("25".parse::<PageSize>().is_err());
    assert!("abc".parse::<PageSize>().is_err());
}

#[test]
fn sort_order_parses_case_insensitively() {
    assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
    assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
    assert!("sideways".parse::<SortOrder>().is_err());
}

#[test]
fn query_key_scope_is_todos() {
    assert_eq!(Pagination::default().query_key().scope(), TODOS_PAGE_SCOPE);
}
