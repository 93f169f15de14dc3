use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered identity that links and votes are attributed to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
