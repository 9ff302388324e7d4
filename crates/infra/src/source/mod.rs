//! Product sources: where the full ordered product list comes from.
//!
//! Failures are reported here, never recovered by the catalog store.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use showcase_catalog::Product;

use crate::resources::ResourceOrigin;

pub mod fallback;
pub mod file;
pub mod http;

pub use fallback::{FallbackSource, LoadedCatalog};
pub use file::FileProductSource;
pub use http::HttpProductSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid catalog document: {0}")]
    InvalidDocument(String),

    #[error("all product sources failed (primary: {primary}; fallback: {fallback})")]
    Exhausted {
        primary: Box<SourceError>,
        fallback: Box<SourceError>,
    },
}

/// Supplier of the full ordered product list.
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    /// Origin reported when this source supplies the catalog.
    fn origin(&self) -> ResourceOrigin;

    /// Human-readable location (path or URL) for logs.
    fn location(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Product>, SourceError>;
}

#[async_trait::async_trait]
impl<S> ProductSource for Arc<S>
where
    S: ProductSource + ?Sized,
{
    fn origin(&self) -> ResourceOrigin {
        (**self).origin()
    }

    fn location(&self) -> String {
        (**self).location()
    }

    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        (**self).fetch().await
    }
}

pub(crate) fn parse_document(raw: &str) -> Result<Vec<Product>, SourceError> {
    showcase_catalog::CatalogDocument::from_json(raw)
        .map(showcase_catalog::CatalogDocument::into_products)
        .map_err(|e| SourceError::InvalidDocument(e.to_string()))
}
