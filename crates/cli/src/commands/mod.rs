use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use showcase_infra::{bootstrap, AppConfig, CatalogResources, ResourceStatus};

pub mod browse;
pub mod facets;
pub mod show;
pub mod status;

/// Where the catalog comes from. Unset flags fall back to the environment.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Directory containing `data/er/v73/resources` (default: $SHOWCASE_DATA_ROOT or .)
    #[arg(long, global = true)]
    pub data_root: Option<PathBuf>,

    /// Remote resource base tried before the local files (default: $SHOWCASE_REMOTE_BASE)
    #[arg(long, global = true)]
    pub remote_base: Option<String>,
}

impl SourceArgs {
    pub fn config(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::from_env().context("invalid configuration")?;
        if let Some(root) = &self.data_root {
            config.data_root = root.clone();
        }
        if let Some(base) = &self.remote_base {
            config.remote_base = Some(base.clone());
        }
        Ok(config)
    }
}

/// Load the catalog, treating a failed load as an error.
pub async fn load_catalog(config: &AppConfig) -> anyhow::Result<CatalogResources> {
    let loaded = bootstrap::load(config).await;
    if let ResourceStatus::Failed { message, .. } = &loaded.status {
        anyhow::bail!("{}: {message}", loaded.status.summary());
    }
    Ok(loaded)
}
