//! Shared test utilities for hn-db unit tests.

use hn_core::entities::{Link, NewLink};

use crate::HnDb;
use crate::repos::{LinkRepository, UserRepository};

/// Create an in-memory database with migrations applied.
pub async fn test_db() -> HnDb {
    HnDb::open_local(":memory:").await.unwrap()
}

/// Register a user and return its id.
pub async fn seed_user(db: &HnDb, username: &str) -> i64 {
    db.create_user(username, &format!("{username}@example.com"))
        .await
        .unwrap()
        .id
}

/// Create an anonymous link.
pub async fn seed_link(db: &HnDb, url: &str, description: &str) -> Link {
    db.create_link(NewLink::new(url, description)).await.unwrap()
}
