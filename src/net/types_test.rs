use super::*;

// =============================================================
// Session
// =============================================================

#[test]
fn session_keeps_unknown_user_fields() {
    let raw = serde_json::json!({
        "jwt": "tok",
        "user": {
            "id": 7,
            "username": "alice",
            "email": "alice@example.com",
            "confirmed": true,
            "provider": "local"
        }
    });
    let session: Session = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(session.user.id, 7);
    assert_eq!(session.user.extra.get("provider"), Some(&serde_json::json!("local")));
    assert_eq!(serde_json::to_value(&session).unwrap(), raw);
}

// =============================================================
// Todo
// =============================================================

#[test]
fn todo_null_description_decodes_empty() {
    let todo: Todo = serde_json::from_value(serde_json::json!({
        "id": 1,
        "documentId": "abc",
        "title": "Buy milk",
        "description": null
    }))
    .unwrap();
    assert_eq!(todo.description, "");
    assert_eq!(todo.title, "Buy milk");
}

#[test]
fn todo_missing_description_decodes_empty() {
    let todo: Todo = serde_json::from_value(serde_json::json!({ "id": 2, "title": "x" })).unwrap();
    assert_eq!(todo.description, "");
}

#[test]
fn me_with_todos_ignores_user_fields() {
    let me: MeWithTodos = serde_json::from_value(serde_json::json!({
        "id": 3,
        "username": "bob",
        "todos": [{ "id": 9, "title": "t", "description": "d" }]
    }))
    .unwrap();
    assert_eq!(me.todos.len(), 1);
    assert_eq!(me.todos[0].id, 9);
}

// =============================================================
// Pagination envelope
// =============================================================

#[test]
fn todo_page_reads_camel_case_pagination() {
    let page: TodoPage = serde_json::from_value(serde_json::json!({
        "data": [{ "id": 1, "title": "a", "description": "" }],
        "meta": { "pagination": { "page": 2, "pageSize": 10, "pageCount": 5, "total": 42 } }
    }))
    .unwrap();
    assert_eq!(page.meta.pagination.page, 2);
    assert_eq!(page.meta.pagination.page_count, 5);
    assert_eq!(page.meta.pagination.total, 42);
}

#[test]
fn todo_page_without_meta_defaults_to_first_page() {
    let page: TodoPage = serde_json::from_value(serde_json::json!({ "data": [] })).unwrap();
    assert_eq!(page.meta.pagination, PaginationMeta::default());
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn create_payload_includes_user_relation() {
    let body = DataEnvelope {
        data: TodoPayload { title: "t", description: "d", user: Some(vec![4]) },
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "data": { "title": "t", "description": "d", "user": [4] } })
    );
}

#[test]
fn update_payload_omits_user_relation() {
    let body = DataEnvelope { data: TodoPayload { title: "t", description: "d", user: None } };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "data": { "title": "t", "description": "d" } })
    );
}

#[test]
fn error_response_reads_message() {
    let body: ErrorResponse = serde_json::from_value(serde_json::json!({
        "data": null,
        "error": { "status": 400, "name": "ValidationError", "message": "Invalid identifier or password" }
    }))
    .unwrap();
    assert_eq!(body.error.message, "Invalid identifier or password");
    assert_eq!(body.error.status, 400);
}
