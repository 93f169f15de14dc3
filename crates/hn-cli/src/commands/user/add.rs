use anyhow::{Context, bail};
use hn_core::entities::User;
use hn_db::repos::UserRepository;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserAddArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &UserAddArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = add_user(args, ctx).await?;
    output(&user, flags.format)
}

async fn add_user(args: &UserAddArgs, ctx: &AppContext) -> anyhow::Result<User> {
    let username = args.username.trim();
    if username.is_empty() {
        bail!("username must not be empty");
    }
    if ctx.db.find_user_by_username(username).await?.is_some() {
        bail!("user '{username}' already exists");
    }

    ctx.db
        .create_user(username, &args.email)
        .await
        .with_context(|| format!("failed to add user '{username}'"))
}
