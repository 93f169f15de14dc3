//! Repository handles shared by every resolver.

use std::sync::Arc;

use hn_db::repos::{LinkRepository, UserRepository, VoteRepository};

/// One handle per entity repository.
///
/// Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct Repositories {
    pub links: Arc<dyn LinkRepository>,
    pub votes: Arc<dyn VoteRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// Build all three handles from a single store implementing every trait.
    #[must_use]
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: LinkRepository + VoteRepository + UserRepository + 'static,
    {
        Self {
            links: store.clone(),
            votes: store.clone(),
            users: store,
        }
    }
}
