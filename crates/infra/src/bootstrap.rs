//! Startup wiring shared by the binaries: which sources to try, and how the
//! loaded catalog's images and links are presented.

use showcase_catalog::{CardOptions, Product};

use crate::config::AppConfig;
use crate::resources::{ResourceLayout, ResourceOrigin, ResourceResolver, ResourceStatus};
use crate::source::{FallbackSource, FileProductSource, HttpProductSource};

/// Everything a front end needs from the initial catalog load.
#[derive(Debug, Clone)]
pub struct CatalogResources {
    pub products: Vec<Product>,
    pub status: ResourceStatus,
    pub resolver: ResourceResolver,
    pub card_options: CardOptions,
}

/// Remote resources first when a remote base is configured, then the local files.
pub fn source_for(config: &AppConfig) -> FallbackSource {
    let local = FileProductSource::from_layout(&ResourceLayout::new(&config.data_root));
    match &config.remote_base {
        Some(base) => FallbackSource::new(HttpProductSource::from_base(base)).or_else(local),
        None => FallbackSource::new(local),
    }
}

/// Load the catalog. Never fails: a failed load yields no products and a
/// `Failed` status.
pub async fn load(config: &AppConfig) -> CatalogResources {
    let (products, status) = source_for(config).load_with_status().await;

    let layout = ResourceLayout::new(&config.data_root);
    let local_base = layout.prefix_dir().to_string_lossy().into_owned();
    let origin = match &status {
        ResourceStatus::Ready { origin, .. } => *origin,
        _ => ResourceOrigin::Local,
    };
    let resolver =
        ResourceResolver::for_origin(origin, config.remote_base.as_deref(), &local_base);

    tracing::info!(
        summary = %status.summary(),
        products = products.len(),
        resource_base = resolver.base(),
        "catalog resources loaded"
    );

    CatalogResources {
        products,
        status,
        resolver,
        card_options: CardOptions {
            default_marketplace_link: config.marketplace_link.clone(),
            ..CardOptions::default()
        },
    }
}
