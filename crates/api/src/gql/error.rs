//! Bridge from service errors to GraphQL errors.
//!
//! async-graphql has a blanket `impl<T: Display> From<T> for Error`, so a bare
//! `?` on `Result<_, AppError>` would lose the `code` extension. Resolvers go
//! through [`AppResultExt::into_gql`] instead.

use async_graphql::ErrorExtensions;

use crate::error::AppError;

pub trait AppResultExt<T> {
    fn into_gql(self) -> async_graphql::Result<T>;
}

impl<T> AppResultExt<T> for Result<T, AppError> {
    fn into_gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}
