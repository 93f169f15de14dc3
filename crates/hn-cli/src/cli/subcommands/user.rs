use clap::{Args, Subcommand};

/// User management commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Register a user that `exec --as` can act as.
    Add(UserAddArgs),
    /// List registered users.
    List,
}

#[derive(Clone, Debug, Args)]
pub struct UserAddArgs {
    pub username: String,
    /// Contact email (optional).
    #[arg(long, default_value = "")]
    pub email: String,
}
