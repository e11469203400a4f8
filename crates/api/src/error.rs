use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

pub const INTERNAL_MESSAGE: &str = "Please check server logs";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::Internal(_) | AppError::Anyhow(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) | AppError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand to a client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Anyhow(e) => {
                tracing::error!("Unhandled error: {e:?}");
                INTERNAL_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DbErrorClass {
    UniqueViolation,
    ForeignKeyViolation,
    Other,
}

fn classify_db_code(code: Option<&str>) -> DbErrorClass {
    match code {
        Some("23505") => DbErrorClass::UniqueViolation,
        Some("23503") => DbErrorClass::ForeignKeyViolation,
        _ => DbErrorClass::Other,
    }
}

/// Drop the leading `Key` from a Postgres constraint detail, e.g.
/// `Key (email)=(a@b.c) already exists.` becomes `(email)=(a@b.c) already exists.`
fn sanitize_detail(detail: &str) -> String {
    detail.trim().replacen("Key ", "", 1).trim().to_string()
}

/// The one place database failures turn into client-facing errors.
pub fn handle_db_error(error: sqlx::Error) -> AppError {
    match &error {
        sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
        sqlx::Error::Database(db_err) => {
            let class = classify_db_code(db_err.code().as_deref());
            if class == DbErrorClass::Other {
                tracing::error!("Database error: {error}");
                return AppError::Internal(INTERNAL_MESSAGE.to_string());
            }

            let detail = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(|e| e.detail())
                .unwrap_or_else(|| db_err.message());
            tracing::warn!(?class, "Database constraint violated: {detail}");
            AppError::BadRequest(sanitize_detail(detail))
        }
        _ => {
            tracing::error!("Database error: {error}");
            AppError::Internal(INTERNAL_MESSAGE.to_string())
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        handle_db_error(error)
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.public_message()).extend_with(|_, e| e.set("code", code))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorBody {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
