use async_graphql::{Error, ErrorExtensions};

use crate::application::{AppError, ErrorClassification};

/// Converts an application error into a GraphQL error carrying
/// `extensions.code` and `extensions.classification`.
///
/// async-graphql converts anything `Display` through `?`, which would drop
/// both extensions, so resolvers go through [`GqlResultExt::gql`] instead.
pub fn to_gql_error(err: AppError) -> Error {
    if err.classification() == ErrorClassification::ServerError {
        tracing::error!(error = %err, "unexpected error in GraphQL resolver");
    }

    let code = err.code();
    let classification = err.classification();
    Error::new(err.public_message()).extend_with(|_, ext| {
        ext.set("code", code.as_str());
        ext.set("classification", classification.as_str());
    })
}

pub trait GqlResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T, E: Into<AppError>> GqlResultExt<T> for Result<T, E> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| to_gql_error(e.into()))
    }
}
