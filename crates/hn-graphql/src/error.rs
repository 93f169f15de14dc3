//! API error type: business failures plus storage failures.

use async_graphql::ErrorExtensions;
use thiserror::Error;

use hn_core::errors::CoreError;
use hn_db::error::DatabaseError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure, passed through with its original message.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ApiError {
    /// Machine-readable code placed in the GraphQL error's `extensions.code`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Core(CoreError::Authorization(_)) => "UNAUTHORIZED",
            Self::Core(CoreError::NotFound { .. }) => "NOT_FOUND",
            Self::Core(CoreError::InvalidArgument(_)) => "BAD_USER_INPUT",
            Self::Database(_) => "INTERNAL",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.code());
            if let Self::Core(CoreError::NotFound { entity_type, id, .. }) = self {
                ext.set("entity", *entity_type);
                ext.set("id", *id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn codes_distinguish_business_and_storage_failures() {
        let unauthorized = ApiError::from(CoreError::Authorization("no".into()));
        let missing = ApiError::from(CoreError::not_found("link", 4, "Invalid link!"));
        let bad_input = ApiError::from(CoreError::InvalidArgument("skip".into()));
        let storage = ApiError::from(DatabaseError::NoResult);

        assert_eq!(unauthorized.code(), "UNAUTHORIZED");
        assert_eq!(missing.code(), "NOT_FOUND");
        assert_eq!(bad_input.code(), "BAD_USER_INPUT");
        assert_eq!(storage.code(), "INTERNAL");
    }

    #[test]
    fn storage_message_is_preserved() {
        let err = ApiError::from(DatabaseError::Query("disk full".into()));
        assert_eq!(err.extend().message, "Query failed: disk full");
    }
}
