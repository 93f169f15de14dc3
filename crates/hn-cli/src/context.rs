use std::sync::Arc;

use anyhow::Context;
use hn_config::HnConfig;
use hn_db::HnDb;
use hn_graphql::{HnSchema, Repositories, build_schema};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: Arc<HnDb>,
    pub schema: HnSchema,
}

impl AppContext {
    /// Open the configured database and build the schema on top of it.
    pub async fn init(config: HnConfig) -> anyhow::Result<Self> {
        if config.database.is_in_memory() {
            tracing::warn!("using an in-memory database; nothing will be persisted");
        }

        let db = HnDb::open_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        let db = Arc::new(db);

        let schema = build_schema(Repositories::from_store(db.clone()), &config.graphql);
        Ok(Self { db, schema })
    }
}

#[cfg(test)]
pub async fn test_context() -> AppContext {
    let mut config = HnConfig::default();
    config.database.path = ":memory:".into();
    AppContext::init(config).await.unwrap()
}
