//! # hn-core
//!
//! Core types shared across all hackernews crates:
//! - Entity structs for the persisted domain objects (links, votes, users)
//! - The request [`identity::Identity`] resolvers read the current user from
//! - Domain error kinds kept distinct from storage failures

pub mod entities;
pub mod errors;
pub mod identity;
