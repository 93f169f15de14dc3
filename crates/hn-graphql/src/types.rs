//! GraphQL response shapes and their mappings from persisted entities.
//!
//! Scalar fields come straight from the wrapped entity. Relation fields
//! (`postedBy`, `votes`, `link`, `user`, `links`) are fetched through the
//! [`Repositories`] stored in the schema data only when selected.

use async_graphql::{Context, ErrorExtensions, Object, Result};
use chrono::{DateTime, Utc};

use hn_core::entities::{Link, User, Vote};
use hn_core::errors::CoreError;

use crate::context::Repositories;
use crate::error::ApiError;
use crate::mutations::CastVote;

fn repos<'a>(ctx: &Context<'a>) -> Result<&'a Repositories> {
    ctx.data::<Repositories>()
}

fn api_err(err: impl Into<ApiError>) -> async_graphql::Error {
    let err: ApiError = err.into();
    err.extend()
}

async fn user_by_id(ctx: &Context<'_>, id: i64) -> Result<UserObject> {
    repos(ctx)?
        .users
        .find_user(id)
        .await
        .map_err(api_err)?
        .map(UserObject::from)
        .ok_or_else(|| api_err(CoreError::not_found("user", id, "Unknown user!")))
}

async fn owner(ctx: &Context<'_>, posted_by: Option<i64>) -> Result<Option<UserObject>> {
    match posted_by {
        Some(id) => user_by_id(ctx, id).await.map(Some),
        None => Ok(None),
    }
}

async fn link_votes(ctx: &Context<'_>, link_id: i64) -> Result<Vec<VoteObject>> {
    let votes = repos(ctx)?
        .votes
        .votes_for_link(link_id)
        .await
        .map_err(api_err)?;
    Ok(votes.into_iter().map(VoteObject::from).collect())
}

pub struct LinkObject(Link);

impl From<Link> for LinkObject {
    fn from(link: Link) -> Self {
        Self(link)
    }
}

#[Object(name = "Link")]
impl LinkObject {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn url(&self) -> &str {
        &self.0.url
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    /// Submitter, or null for anonymous submissions.
    async fn posted_by(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        owner(ctx, self.0.posted_by).await
    }

    async fn votes(&self, ctx: &Context<'_>) -> Result<Vec<VoteObject>> {
        link_votes(ctx, self.0.id).await
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }
}

pub struct VoteObject(Vote);

impl From<Vote> for VoteObject {
    fn from(vote: Vote) -> Self {
        Self(vote)
    }
}

#[Object(name = "Vote")]
impl VoteObject {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn link(&self, ctx: &Context<'_>) -> Result<LinkObject> {
        let link_id = self.0.link_id;
        repos(ctx)?
            .links
            .find_link(link_id)
            .await
            .map_err(api_err)?
            .map(LinkObject::from)
            .ok_or_else(|| api_err(CoreError::not_found("link", link_id, "Invalid link!")))
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<UserObject> {
        user_by_id(ctx, self.0.user_id).await
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }
}

pub struct UserObject(User);

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self(user)
    }
}

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    /// Links this user submitted.
    async fn links(&self, ctx: &Context<'_>) -> Result<Vec<LinkObject>> {
        let links = repos(ctx)?
            .links
            .links_posted_by(self.0.id)
            .await
            .map_err(api_err)?;
        Ok(links.into_iter().map(LinkObject::from).collect())
    }

    /// Votes this user cast.
    async fn votes(&self, ctx: &Context<'_>) -> Result<Vec<VoteObject>> {
        let votes = repos(ctx)?
            .votes
            .votes_by_user(self.0.id)
            .await
            .map_err(api_err)?;
        Ok(votes.into_iter().map(VoteObject::from).collect())
    }
}

/// Payload of `createLink`.
pub struct CreateLinkPayload(Link);

impl From<Link> for CreateLinkPayload {
    fn from(link: Link) -> Self {
        Self(link)
    }
}

#[Object(name = "CreateLink")]
impl CreateLinkPayload {
    async fn id(&self) -> i64 {
        self.0.id
    }

    async fn url(&self) -> &str {
        &self.0.url
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn posted_by(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        owner(ctx, self.0.posted_by).await
    }
}

/// Payload of `createVote`: the voted-on link and the voter.
pub struct CreateVotePayload {
    link: Link,
    user: User,
}

impl From<CastVote> for CreateVotePayload {
    fn from(cast: CastVote) -> Self {
        Self {
            link: cast.link,
            user: cast.user,
        }
    }
}

#[Object(name = "CreateVote")]
impl CreateVotePayload {
    async fn link(&self) -> LinkObject {
        LinkObject(self.link.clone())
    }

    async fn user(&self) -> UserObject {
        UserObject(self.user.clone())
    }
}
