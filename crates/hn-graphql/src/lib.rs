//! # hn-graphql
//!
//! GraphQL API for hackernews.
//!
//! - [`resolvers::QueryResolver`] answers `links`, `votes`, `users` and `me`.
//! - [`mutations::MutationHandler`] performs `createLink` and `createVote`.
//! - [`types`] maps persisted entities onto GraphQL response shapes.
//! - [`schema`] wires both into an async-graphql schema.
//!
//! Both handlers are constructed from [`context::Repositories`] and know
//! nothing about GraphQL; the schema roots only bind arguments, read the
//! request [`hn_core::identity::Identity`], and convert errors.
//!
//! ```graphql
//! query {
//!   links(search: "rust", skip: 10, first: 10) {
//!     id url description
//!     postedBy { username }
//!     votes { user { username } }
//!   }
//! }
//!
//! mutation {
//!   createVote(linkId: 3) { link { url } user { username } }
//! }
//! ```

pub mod context;
pub mod error;
pub mod mutations;
pub mod resolvers;
pub mod schema;
pub mod types;

pub use context::Repositories;
pub use error::ApiError;
pub use schema::{HnSchema, build_schema, execute_as};
