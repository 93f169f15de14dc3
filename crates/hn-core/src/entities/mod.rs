//! Entity structs for all hackernews domain objects.
//!
//! Each entity maps to a table in the libSQL database. Identifiers are the
//! integer row IDs assigned by the store.

mod link;
mod user;
mod vote;

pub use link::{Link, NewLink};
pub use user::User;
pub use vote::Vote;
