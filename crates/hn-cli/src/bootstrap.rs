use hn_config::HnConfig;

use crate::cli::GlobalFlags;

/// Load configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HnConfig> {
    let mut config = HnConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut HnConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        tracing::debug!(path = %db, "database path overridden from command line");
        config.database.path.clone_from(db);
    }
}
