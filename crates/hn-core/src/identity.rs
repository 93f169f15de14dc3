//! Request identity.
//!
//! Produced by whatever authenticates the caller (the CLI resolves it from
//! `--as <username>`), attached to each GraphQL request, and read by the
//! resolvers. Contains only data: no credential checks happen here.

use crate::errors::CoreError;

/// An authenticated user reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthIdentity {
    pub user_id: i64,
    pub username: String,
}

/// The identity a request runs as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Anonymous,
    User(AuthIdentity),
}

impl Identity {
    #[must_use]
    pub fn user(user_id: i64, username: impl Into<String>) -> Self {
        Self::User(AuthIdentity {
            user_id,
            username: username.into(),
        })
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Reference to the current user, or `None` when anonymous.
    #[must_use]
    pub const fn user_id(&self) -> Option<i64> {
        match self {
            Self::Anonymous => None,
            Self::User(auth) => Some(auth.user_id),
        }
    }

    /// Return the authenticated user or fail with [`CoreError::Authorization`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Authorization` carrying `message` when anonymous.
    pub fn require_user(&self, message: &str) -> Result<&AuthIdentity, CoreError> {
        match self {
            Self::Anonymous => Err(CoreError::Authorization(message.to_string())),
            Self::User(auth) => Ok(auth),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_is_anonymous() {
        let identity = Identity::default();
        assert!(identity.is_anonymous());
        assert_eq!(identity.user_id(), None);
    }

    #[test]
    fn user_exposes_reference() {
        let identity = Identity::user(7, "alice");
        assert!(!identity.is_anonymous());
        assert_eq!(identity.user_id(), Some(7));
        let auth = identity.require_user("login required").unwrap();
        assert_eq!(auth.username, "alice");
    }

    #[test]
    fn require_user_rejects_anonymous() {
        let err = Identity::Anonymous
            .require_user("You must be logged in to vote!")
            .unwrap_err();
        assert!(matches!(err, CoreError::Authorization(_)));
        assert_eq!(err.to_string(), "You must be logged in to vote!");
    }
}
