pub mod dispatch;
pub mod exec;
pub mod schema;
pub mod user;
