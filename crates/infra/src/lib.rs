//! Infrastructure layer: product sources, resource layout, configuration.

pub mod bootstrap;
pub mod config;
pub mod resources;
pub mod source;

pub use bootstrap::CatalogResources;
pub use config::{AppConfig, ConfigError};
pub use resources::{ResourceLayout, ResourceOrigin, ResourceResolver, ResourceStatus};
pub use source::{
    FallbackSource, FileProductSource, HttpProductSource, LoadedCatalog, ProductSource,
    SourceError,
};
