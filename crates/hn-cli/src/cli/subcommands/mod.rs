mod user;

pub use user::{UserAddArgs, UserCommands};
