use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted URL with its description. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub description: String,
    /// Owning user. `None` when the link was posted anonymously.
    pub posted_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to persist a new [`Link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
    pub description: String,
    pub posted_by: Option<i64>,
}

impl NewLink {
    #[must_use]
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
            posted_by: None,
        }
    }

    /// Attribute the link to a user.
    #[must_use]
    pub const fn posted_by(mut self, user_id: Option<i64>) -> Self {
        self.posted_by = user_id;
        self
    }
}
