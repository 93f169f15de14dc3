//! Schema roots and construction.
//!
//! The roots bind GraphQL arguments, read the request identity, delegate to
//! [`QueryResolver`] / [`MutationHandler`], and map results onto
//! [`crate::types`].

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Request, Response, Result, Schema,
};

use hn_config::GraphqlConfig;
use hn_core::identity::Identity;

use crate::context::Repositories;
use crate::mutations::MutationHandler;
use crate::resolvers::{LinkArgs, QueryResolver};
use crate::types::{CreateLinkPayload, CreateVotePayload, LinkObject, UserObject, VoteObject};

pub type HnSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

static ANONYMOUS: Identity = Identity::Anonymous;

/// Identity attached to the current request; anonymous when none was attached.
#[must_use]
pub fn current_identity<'a>(ctx: &Context<'a>) -> &'a Identity {
    ctx.data_opt::<Identity>().unwrap_or(&ANONYMOUS)
}

/// Build the schema with the resolver and handler injected as schema data.
#[must_use]
pub fn build_schema(repos: Repositories, config: &GraphqlConfig) -> HnSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(QueryResolver::new(repos.clone()))
        .data(MutationHandler::new(repos.clone()))
        .data(repos)
        .limit_depth(config.depth_limit)
        .limit_complexity(config.complexity_limit);
    if !config.introspection {
        builder = builder.disable_introspection();
    }
    builder.finish()
}

/// SDL of the schema, without any data attached.
#[must_use]
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// Execute `request` on behalf of `identity`.
pub async fn execute_as(
    schema: &HnSchema,
    request: impl Into<Request>,
    identity: Identity,
) -> Response {
    let request = request.into().data(identity);
    schema.execute(request).await
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Links whose URL or description contains `search` (case-insensitive),
    /// skipping `skip` and returning at most `first`. Zero means "not set".
    async fn links(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        skip: Option<i32>,
        first: Option<i32>,
    ) -> Result<Vec<LinkObject>> {
        let links = ctx
            .data::<QueryResolver>()?
            .links(&LinkArgs {
                search,
                skip,
                first,
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(links.into_iter().map(LinkObject::from).collect())
    }

    async fn votes(&self, ctx: &Context<'_>) -> Result<Vec<VoteObject>> {
        let votes = ctx
            .data::<QueryResolver>()?
            .votes()
            .await
            .map_err(|e| e.extend())?;
        Ok(votes.into_iter().map(VoteObject::from).collect())
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let users = ctx
            .data::<QueryResolver>()?
            .users()
            .await
            .map_err(|e| e.extend())?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    /// The user this request runs as.
    async fn me(&self, ctx: &Context<'_>) -> Result<UserObject> {
        let user = ctx
            .data::<QueryResolver>()?
            .me(current_identity(ctx))
            .await
            .map_err(|e| e.extend())?;
        Ok(UserObject::from(user))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Submit a link. Anonymous submissions are allowed.
    async fn create_link(
        &self,
        ctx: &Context<'_>,
        url: String,
        description: String,
    ) -> Result<CreateLinkPayload> {
        let link = ctx
            .data::<MutationHandler>()?
            .create_link(current_identity(ctx), url, description)
            .await
            .map_err(|e| e.extend())?;
        Ok(CreateLinkPayload::from(link))
    }

    /// Vote for a link. Requires a logged-in user.
    async fn create_vote(&self, ctx: &Context<'_>, link_id: i64) -> Result<CreateVotePayload> {
        let cast = ctx
            .data::<MutationHandler>()?
            .create_vote(current_identity(ctx), link_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(CreateVotePayload::from(cast))
    }
}
