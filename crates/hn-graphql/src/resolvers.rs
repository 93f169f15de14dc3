//! Query resolver: read-only access to links, votes and users.

use hn_core::entities::{Link, User, Vote};
use hn_core::errors::CoreError;
use hn_core::identity::Identity;
use hn_db::repos::LinkQuery;

use crate::context::Repositories;
use crate::error::ApiError;

pub const NOT_LOGGED_IN: &str = "Not logged in!";

/// Arguments of the `links` query as the caller sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkArgs {
    pub search: Option<String>,
    pub skip: Option<i32>,
    pub first: Option<i32>,
}

impl LinkArgs {
    /// Translate caller arguments into a storage query.
    ///
    /// Zero and empty values mean "not provided": `first: 0` returns every
    /// remaining link, not an empty page.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` for a negative `skip` or `first`.
    pub fn to_query(&self) -> Result<LinkQuery, CoreError> {
        Ok(LinkQuery {
            search: self.search.clone().filter(|search| !search.is_empty()),
            offset: window("skip", self.skip)?,
            limit: window("first", self.first)?,
        })
    }
}

fn window(name: &str, value: Option<i32>) -> Result<Option<u64>, CoreError> {
    match value {
        None | Some(0) => Ok(None),
        Some(n) if n < 0 => Err(CoreError::InvalidArgument(format!(
            "{name} must be non-negative, got {n}"
        ))),
        Some(n) => Ok(Some(u64::from(n.unsigned_abs()))),
    }
}

/// Answers read requests. Holds no state beyond its repository handles.
#[derive(Clone)]
pub struct QueryResolver {
    repos: Repositories,
}

impl QueryResolver {
    #[must_use]
    pub const fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Links, optionally filtered by `search` and sliced by `skip`/`first`.
    ///
    /// # Errors
    ///
    /// `ApiError::Core` for negative pagination arguments, `ApiError::Database`
    /// if the store fails.
    pub async fn links(&self, args: &LinkArgs) -> Result<Vec<Link>, ApiError> {
        let query = args.to_query()?;
        Ok(self.repos.links.list_links(&query).await?)
    }

    /// Every vote, unfiltered.
    ///
    /// # Errors
    ///
    /// `ApiError::Database` if the store fails.
    pub async fn votes(&self) -> Result<Vec<Vote>, ApiError> {
        Ok(self.repos.votes.list_votes().await?)
    }

    /// # Errors
    ///
    /// `ApiError::Database` if the store fails.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.repos.users.list_users().await?)
    }

    /// The user the request runs as.
    ///
    /// # Errors
    ///
    /// `CoreError::Authorization` when anonymous, `CoreError::NotFound` when
    /// the identity references a user the store does not know.
    pub async fn me(&self, identity: &Identity) -> Result<User, ApiError> {
        let auth = identity.require_user(NOT_LOGGED_IN)?;
        self.repos
            .users
            .find_user(auth.user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("user", auth.user_id, "Unknown user!").into())
    }
}
