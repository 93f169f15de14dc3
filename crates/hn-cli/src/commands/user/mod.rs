pub mod add;
pub mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `hn user <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Add(args) => add::handle(args, ctx, flags).await,
        UserCommands::List => list::handle(ctx, flags).await,
    }
}
