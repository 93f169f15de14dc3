//! Domain error kinds for hackernews.
//!
//! These are business failures a caller can act on. Storage failures are
//! `DatabaseError` in `hn-db`; both converge in `hn-graphql::error::ApiError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The request identity is anonymous but the operation needs a user.
    #[error("{0}")]
    Authorization(String),

    /// A referenced entity does not exist.
    #[error("{message}")]
    NotFound {
        entity_type: &'static str,
        id: i64,
        message: String,
    },

    /// A caller-supplied argument is outside its accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoreError {
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: i64, message: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id,
            message: message.into(),
        }
    }
}
