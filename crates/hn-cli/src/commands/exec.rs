use anyhow::{Context, bail};
use async_graphql::{Request, Response, Variables};
use hn_core::identity::Identity;
use hn_db::repos::UserRepository;
use hn_graphql::execute_as;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExecArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hn exec`: print the response, fail if it carries errors.
pub async fn handle(
    args: &ExecArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = execute(args, ctx).await?;
    output(&response, flags.format)?;

    if !response.errors.is_empty() {
        bail!("response contained {} error(s)", response.errors.len());
    }
    Ok(())
}

async fn execute(args: &ExecArgs, ctx: &AppContext) -> anyhow::Result<Response> {
    let document = read_document(&args.document)?;
    let identity = resolve_identity(ctx, args.as_user.as_deref()).await?;

    let mut request = Request::new(document);
    if let Some(raw) = &args.variables {
        request = request.variables(parse_variables(raw)?);
    }

    tracing::debug!(anonymous = identity.is_anonymous(), "executing document");
    Ok(execute_as(&ctx.schema, request, identity).await)
}

fn read_document(arg: &str) -> anyhow::Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read GraphQL document from {path}")),
        None => Ok(arg.to_string()),
    }
}

fn parse_variables(raw: &str) -> anyhow::Result<Variables> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("--variables must be valid JSON")?;
    if !value.is_object() {
        bail!("--variables must be a JSON object");
    }
    Ok(Variables::from_json(value))
}

async fn resolve_identity(ctx: &AppContext, username: Option<&str>) -> anyhow::Result<Identity> {
    let Some(username) = username else {
        return Ok(Identity::Anonymous);
    };
    let user = ctx
        .db
        .find_user_by_username(username)
        .await?
        .with_context(|| {
            format!("unknown user '{username}'; add it with `hn user add {username}`")
        })?;
    Ok(Identity::user(user.id, user.username))
}
