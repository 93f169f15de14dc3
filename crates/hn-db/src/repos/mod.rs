//! Repository traits, one per entity, and their libSQL implementations.
//!
//! Each module implements its trait for [`crate::HnDb`]. The traits are
//! object-safe (`async_trait`) so consumers can hold `Arc<dyn …>` and swap
//! in another store.

pub mod link;
pub mod user;
pub mod vote;

use async_trait::async_trait;

use hn_core::entities::{Link, NewLink, User, Vote};

use crate::error::DatabaseError;

/// Storage-level filter for [`LinkRepository::list_links`].
///
/// `search` matches URL or description, case-insensitively. `offset` is
/// applied before `limit`. Links come back in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkQuery {
    pub search: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persist a new link and return it with its assigned id.
    async fn create_link(&self, link: NewLink) -> Result<Link, DatabaseError>;

    /// Look up a link by id. `Ok(None)` when absent.
    async fn find_link(&self, id: i64) -> Result<Option<Link>, DatabaseError>;

    async fn list_links(&self, query: &LinkQuery) -> Result<Vec<Link>, DatabaseError>;

    async fn links_posted_by(&self, user_id: i64) -> Result<Vec<Link>, DatabaseError>;
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Persist a vote. Repeat votes by the same user are not deduplicated.
    async fn create_vote(&self, link_id: i64, user_id: i64) -> Result<Vote, DatabaseError>;

    async fn list_votes(&self) -> Result<Vec<Vote>, DatabaseError>;

    async fn votes_for_link(&self, link_id: i64) -> Result<Vec<Vote>, DatabaseError>;

    async fn votes_by_user(&self, user_id: i64) -> Result<Vec<Vote>, DatabaseError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, username: &str, email: &str) -> Result<User, DatabaseError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, DatabaseError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;

    async fn list_users(&self) -> Result<Vec<User>, DatabaseError>;
}
