//! Mutation handler: create links and cast votes.

use hn_core::entities::{Link, NewLink, User, Vote};
use hn_core::errors::CoreError;
use hn_core::identity::Identity;

use crate::context::Repositories;
use crate::error::ApiError;

pub const LOGIN_REQUIRED: &str = "You must be logged in to vote!";
pub const INVALID_LINK: &str = "Invalid link!";

/// Result of a successful vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastVote {
    pub link: Link,
    pub vote: Vote,
    pub user: User,
}

/// Performs state-changing operations. Each call is a single write.
#[derive(Clone)]
pub struct MutationHandler {
    repos: Repositories,
}

impl MutationHandler {
    #[must_use]
    pub const fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Persist a link, attributed to the current user when there is one.
    ///
    /// Anonymous submissions are accepted and stored without an owner. No
    /// validation beyond what the store enforces.
    ///
    /// # Errors
    ///
    /// `ApiError::Database` if the store rejects the insert.
    pub async fn create_link(
        &self,
        identity: &Identity,
        url: String,
        description: String,
    ) -> Result<Link, ApiError> {
        let new_link = NewLink::new(url, description).posted_by(identity.user_id());
        Ok(self.repos.links.create_link(new_link).await?)
    }

    /// Record a vote by the current user for `link_id`.
    ///
    /// Checks run in order: identity, link existence, then the voter's user
    /// record. The vote is the only write and happens after every read has
    /// succeeded. Repeat votes are recorded as new votes.
    ///
    /// # Errors
    ///
    /// - `CoreError::Authorization` when the request is anonymous.
    /// - `CoreError::NotFound` when no link has id `link_id`, or the identity
    ///   references a user the store does not know.
    /// - `ApiError::Database` if the store fails.
    pub async fn create_vote(&self, identity: &Identity, link_id: i64) -> Result<CastVote, ApiError> {
        let voter = identity.require_user(LOGIN_REQUIRED).inspect_err(|_| {
            tracing::warn!(link_id, "rejected vote from anonymous request");
        })?;

        let Some(link) = self.repos.links.find_link(link_id).await? else {
            tracing::warn!(link_id, user_id = voter.user_id, "rejected vote for unknown link");
            return Err(CoreError::not_found("link", link_id, INVALID_LINK).into());
        };

        let Some(user) = self.repos.users.find_user(voter.user_id).await? else {
            tracing::warn!(link_id, user_id = voter.user_id, "rejected vote from unknown user");
            return Err(CoreError::not_found("user", voter.user_id, "Unknown user!").into());
        };

        let vote = self.repos.votes.create_vote(link.id, user.id).await?;

        Ok(CastVote { link, vote, user })
    }
}
