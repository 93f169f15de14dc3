//! GraphQL executor limits.

use serde::{Deserialize, Serialize};

const fn default_depth_limit() -> usize {
    16
}

const fn default_complexity_limit() -> usize {
    512
}

const fn default_introspection() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphqlConfig {
    /// Maximum selection-set nesting depth of a document.
    #[serde(default = "default_depth_limit")]
    pub depth_limit: usize,

    /// Maximum complexity score of a document.
    #[serde(default = "default_complexity_limit")]
    pub complexity_limit: usize,

    /// Whether `__schema` / `__type` introspection is served.
    #[serde(default = "default_introspection")]
    pub introspection: bool,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            depth_limit: default_depth_limit(),
            complexity_limit: default_complexity_limit(),
            introspection: default_introspection(),
        }
    }
}
