use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::{Claims, InvalidToken};
use crate::state::AppState;

/// Verifies a bearer token whenever one is sent and exposes the outcome to
/// GraphQL through the request extensions.
///
/// Nothing is rejected here. `signup`, `login` and `executeSeed` are public
/// and must keep working for a client holding a stale token; every other
/// operation checks in its resolver. A valid token leaves its [`Claims`], a
/// bad one leaves [`InvalidToken`] so guards answer "Token not valid".
pub async fn jwt_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string());

    if let Some(token) = token {
        match state.jwt_service().verify_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert::<Claims>(claims);
            }
            Err(_) => {
                request.extensions_mut().insert(InvalidToken);
            }
        }
    }

    next.run(request).await
}
