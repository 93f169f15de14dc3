use clap::{Args, Subcommand};

use crate::cli::subcommands::UserCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Execute a GraphQL query or mutation.
    Exec(ExecArgs),
    /// User management.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Print the GraphQL schema (SDL).
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct ExecArgs {
    /// GraphQL document, or `@path` to read it from a file.
    pub document: String,
    /// Variables as a JSON object.
    #[arg(long)]
    pub variables: Option<String>,
    /// Run as this username (anonymous when omitted).
    #[arg(long = "as", value_name = "USERNAME")]
    pub as_user: Option<String>,
}
