mod common;

use api::app::build_router;
use api::config::Environment;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::*;
use tower::ServiceExt;

#[tokio::test]
async fn protected_operations_require_a_token() {
    let state = lazy_state(Environment::Development);
    let schema = schema_for(&state);

    let operations = [
        "{ revalidate { token } }",
        "{ users { id } }",
        "{ items { id } }",
        "{ lists { id } }",
        r#"{ item(id: "5b0c5d5c-1f4e-4c44-9d55-6a9f3e9c2a10") { id } }"#,
        r#"{ listItem(id: "5b0c5d5c-1f4e-4c44-9d55-6a9f3e9c2a10") { id } }"#,
        r#"mutation { createItem(createItemInput: { name: "Milk" }) { id } }"#,
        r#"mutation { createList(createListInput: { name: "Weekly" }) { id } }"#,
        r#"mutation { blockUser(id: "5b0c5d5c-1f4e-4c44-9d55-6a9f3e9c2a10") { id } }"#,
    ];

    for query in operations {
        let response = execute_graphql(&schema, query, None, None).await;
        assert_eq!(
            error_code(&response).as_deref(),
            Some("UNAUTHORIZED"),
            "{query}"
        );
        assert_eq!(error_message(&response), "Token needed", "{query}");
    }
}

#[tokio::test]
async fn pagination_bounds_are_validated_before_resolvers() {
    let state = lazy_state(Environment::Development);
    let schema = schema_for(&state);

    for query in [
        "{ items(limit: 0) { id } }",
        "{ lists(offset: -1) { id } }",
    ] {
        let response = execute_graphql(&schema, query, None, None).await;
        assert!(!response.errors.is_empty(), "{query}");
        // Rejected by validation, so no guard ever ran.
        assert_ne!(error_message(&response), "Token needed", "{query}");
    }
}

#[tokio::test]
async fn paginated_fields_take_flat_offset_and_limit() {
    let state = lazy_state(Environment::Development);
    let schema = schema_for(&state);

    for query in [
        r#"{ items(offset: 0, limit: 10, search: "app") { id } }"#,
        r#"{ lists(offset: 5, limit: 1) { id items(offset: 0, limit: 3, search: "x") { id } } }"#,
        "{ revalidate { user { items(limit: 2) { id } lists(offset: 1) { id } } } }",
    ] {
        let response = execute_graphql(&schema, query, None, None).await;
        // Arguments validated; only the missing token stops the query.
        assert_eq!(error_message(&response), "Token needed", "{query}");
    }
}

#[tokio::test]
async fn signup_input_is_validated() {
    let state = lazy_state(Environment::Development);
    let schema = schema_for(&state);

    let cases = [
        r#"mutation { signup(signupInput: { email: "not-an-email", fullName: "Jo", password: "123456" }) { token } }"#,
        r#"mutation { signup(signupInput: { email: "jo@shop.dev", fullName: "", password: "123456" }) { token } }"#,
        r#"mutation { signup(signupInput: { email: "jo@shop.dev", fullName: "Jo", password: "123" }) { token } }"#,
    ];

    for query in cases {
        let response = execute_graphql(&schema, query, None, None).await;
        assert!(!response.errors.is_empty(), "{query}");
    }
}

#[tokio::test]
async fn stale_token_does_not_block_public_operations() {
    let state = lazy_state(Environment::Development);
    let token = expired_token();

    // Invalid input is rejected by the schema, which proves the request got
    // past the middleware without touching the database.
    let (status, body) = post_graphql(
        &state,
        r#"mutation { login(loginInput: { email: "not-an-email", password: "123456" }) { token } }"#,
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let message = body["errors"][0]["message"].as_str().unwrap_or_default();
    assert!(!message.is_empty());
    assert_ne!(body["errors"][0]["extensions"]["code"], "UNAUTHORIZED");

    let (status, body) = post_graphql(&state, "{ items { id } }", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"][0]["message"], "Token not valid");
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn garbage_bearer_token_is_not_valid_for_guarded_operations() {
    let state = lazy_state(Environment::Development);

    let (status, body) = post_graphql(&state, "{ revalidate { token } }", Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"][0]["message"], "Token not valid");
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn anonymous_request_reaches_the_schema() {
    let state = lazy_state(Environment::Development);

    let (status, body) = post_graphql(&state, "{ items { id } }", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"][0]["message"], "Token needed");
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn graphiql_is_hidden_without_introspection() {
    let state = lazy_state(Environment::Development);
    let app = build_router(state.clone(), schema_for(&state));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/graphql")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn introspection_is_disabled_by_default() {
    let state = lazy_state(Environment::Development);
    let schema = schema_for(&state);

    let response =
        execute_graphql(&schema, "{ __schema { queryType { name } } }", None, None).await;
    let body = data(response);
    assert!(body["__schema"].is_null(), "schema leaked: {body}");
}
