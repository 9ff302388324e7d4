use std::path::PathBuf;

use showcase_catalog::Product;

use super::{parse_document, ProductSource, SourceError};
use crate::resources::{ResourceLayout, ResourceOrigin};

/// Catalog document read from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The `products.json` of a resource layout.
    pub fn from_layout(layout: &ResourceLayout) -> Self {
        Self::new(layout.products_file())
    }
}

#[async_trait::async_trait]
impl ProductSource for FileProductSource {
    fn origin(&self) -> ResourceOrigin {
        ResourceOrigin::Local
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let products = parse_document(&raw)?;
        tracing::debug!(path = %self.path.display(), count = products.len(), "catalog read from disk");
        Ok(products)
    }
}
