//! Pagination and sort state for the paginated todos page.
//!
//! DESIGN
//! ======
//! The state is never persisted. Every field flows into both the backend
//! query string and the cache key, so any change produces a distinct key and
//! therefore a fresh fetch.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::fmt;
use std::str::FromStr;

use crate::net::query::QueryKey;

/// Cache scope for paginated todo queries.
pub const TODOS_PAGE_SCOPE: &str = "todos";

/// Allowed page sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    #[default]
    Ten,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Fifty, PageSize::Hundred];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(PageSize::Ten),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(ParseError::PageSize(other.to_string())),
        }
    }
}

impl FromStr for PageSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| ParseError::PageSize(s.to_owned()))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Sort direction on `createdAt`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Latest first.
    #[default]
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Oldest",
            SortOrder::Desc => "Latest",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(ParseError::SortOrder(s.to_owned())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported page size: {0}")]
    PageSize(String),
    #[error("unsupported sort order: {0}")]
    SortOrder(String),
}

/// Current page, page size and sort order. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub page: u32,
    pub page_size: PageSize,
    pub sort: SortOrder,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: PageSize::default(), sort: SortOrder::default() }
    }
}

impl Pagination {
    pub fn next(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self, page_count: u32) -> bool {
        self.page < page_count
    }

    /// Change page size; the current page may no longer exist so restart at 1.
    pub fn set_page_size(&mut self, size: PageSize) {
        if self.page_size != size {
            self.page_size = size;
            self.page = 1;
        }
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        if self.sort != sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Query string for `GET /todos`.
    pub fn query_string(&self) -> String {
        format!(
            "pagination[pageSize]={}&pagination[page]={}&sort=createdAt:{}",
            self.page_size.get(),
            self.page,
            self.sort.as_str()
        )
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey::new(TODOS_PAGE_SCOPE)
            .with(self.page)
            .with(self.page_size)
            .with(self.sort)
    }
}
