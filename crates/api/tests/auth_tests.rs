mod common;

use async_graphql::Variables;
use common::*;
use serde_json::json;

const SIGNUP: &str = r#"
    mutation Signup($input: SignupInput!) {
        signup(signupInput: $input) { token user { id email fullName roles isActive } }
    }
"#;

const LOGIN: &str = r#"
    mutation Login($input: LoginInput!) {
        login(loginInput: $input) { token user { id email } }
    }
"#;

fn login_vars(email: &str, password: &str) -> Variables {
    Variables::from_json(json!({ "input": { "email": email, "password": password } }))
}

#[tokio::test]
async fn signup_issues_a_token_for_a_plain_user() {
    let Some(state) = setup_test_db().await else {
        return;
    };
    let schema = schema_for(&state);
    let email = unique_email("signup");

    let vars = Variables::from_json(json!({
        "input": {
            "email": email.to_uppercase(),
            "fullName": "  Jane Doe ",
            "password": TEST_PASSWORD
        }
    }));
    let body = data(execute_graphql(&schema, SIGNUP, Some(vars), None).await);

    let user = &body["signup"]["user"];
    assert_eq!(user["email"], email);
    assert_eq!(user["fullName"], "Jane Doe");
    assert_eq!(user["roles"], json!(["USER"]));
    assert_eq!(user["isActive"], true);

    let token = body["signup"]["token"].as_str().expect("token");
    let claims = state.jwt_service().verify_token(token).expect("valid token");
    assert_eq!(claims.sub, user["id"].as_str().expect("id"));
    assert_eq!(claims.roles, vec!["user".to_string()]);
}

#[tokio::test]
async fn duplicate_email_is_a_bad_request() {
    let Some(state) = setup_test_db().await else {
        return;
    };
    let schema = schema_for(&state);
    let email = unique_email("dup");

    let vars = || {
        Variables::from_json(json!({
            "input": { "email": email, "fullName": "Dup", "password": TEST_PASSWORD }
        }))
    };
    data(execute_graphql(&schema, SIGNUP, Some(vars()), None).await);

    let second = execute_graphql(&schema, SIGNUP, Some(vars()), None).await;
    assert_eq!(error_code(&second).as_deref(), Some("BAD_REQUEST"));
    assert!(error_message(&second).contains("already exists"));
}

#[tokio::test]
async fn login_checks_credentials_and_activity() {
    let Some(state) = setup_test_db().await else {
        return;
    };
    let schema = schema_for(&state);
    let email = unique_email("login");
    let (user_id, _) = create_test_user(&state, &email, &["user"]).await;

    let ok = execute_graphql(&schema, LOGIN, Some(login_vars(&email, TEST_PASSWORD)), None).await;
    assert_eq!(data(ok)["login"]["user"]["id"], user_id.to_string());

    let wrong = execute_graphql(&schema, LOGIN, Some(login_vars(&email, "wrong-pass")), None).await;
    assert_eq!(error_code(&wrong).as_deref(), Some("BAD_REQUEST"));
    assert_eq!(error_message(&wrong), "Email / Password do not match");

    let unknown = execute_graphql(
        &schema,
        LOGIN,
        Some(login_vars(&unique_email("nobody"), TEST_PASSWORD)),
        None,
    )
    .await;
    assert_eq!(error_message(&unknown), "Email / Password do not match");

    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user_id)
        .execute(&state.db)
        .await
        .expect("deactivate");

    let blocked = execute_graphql(
        &schema,
        LOGIN,
        Some(login_vars(&email, TEST_PASSWORD)),
        None,
    )
    .await;
    assert_eq!(error_code(&blocked).as_deref(), Some("UNAUTHORIZED"));
    assert_eq!(error_message(&blocked), "User is inactive, talk with an admin");
}

#[tokio::test]
async fn revalidate_returns_the_current_user() {
    let Some(state) = setup_test_db().await else {
        return;
    };
    let schema = schema_for(&state);
    let email = unique_email("revalidate");
    let (user_id, claims) = create_test_user(&state, &email, &["user"]).await;

    let response = execute_graphql(
        &schema,
        "{ revalidate { token user { id email } } }",
        None,
        Some(claims),
    )
    .await;
    let body = data(response);
    assert_eq!(body["revalidate"]["user"]["id"], user_id.to_string());
    assert!(body["revalidate"]["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn token_of_a_deleted_user_is_not_valid() {
    let Some(state) = setup_test_db().await else {
        return;
    };
    let schema = schema_for(&state);
    let (user_id, claims) = create_test_user(&state, &unique_email("gone"), &["user"]).await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&state.db)
        .await
        .expect("delete user");

    let response = execute_graphql(&schema, "{ revalidate { token } }", None, Some(claims)).await;
    assert_eq!(error_code(&response).as_deref(), Some("UNAUTHORIZED"));
    assert_eq!(error_message(&response), "Token not valid");
}

#[tokio::test]
async fn login_works_while_holding_an_expired_token() {
    let Some(state) = setup_test_db().await else {
        return;
    };
    let email = unique_email("stale");
    let (user_id, _) = create_test_user(&state, &email, &["user"]).await;

    let query = format!(
        r#"mutation {{ login(loginInput: {{ email: "{email}", password: "{TEST_PASSWORD}" }}) {{ token user {{ id }} }} }}"#
    );
    let (status, body) = post_graphql(&state, &query, Some(&expired_token())).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["data"]["login"]["user"]["id"], user_id.to_string());
    let fresh = body["data"]["login"]["token"].as_str().expect("token");
    assert!(state.jwt_service().verify_token(fresh).is_ok());
}
