use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's vote for one link. The same user may vote for a link repeatedly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub id: i64,
    pub link_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
