use showcase_catalog::Product;

use super::{ProductSource, SourceError};
use crate::resources::{ResourceOrigin, ResourceStatus};

/// Products plus the origin that actually supplied them.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    pub origin: ResourceOrigin,
}

impl LoadedCatalog {
    pub fn status(&self) -> ResourceStatus {
        ResourceStatus::ready(self.origin, self.products.len())
    }
}

/// Try `primary` (usually remote) first, then `fallback` (usually local).
pub struct FallbackSource {
    primary: Box<dyn ProductSource>,
    fallback: Option<Box<dyn ProductSource>>,
}

impl FallbackSource {
    pub fn new(primary: impl ProductSource + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: None,
        }
    }

    pub fn or_else(mut self, fallback: impl ProductSource + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub async fn load(&self) -> Result<LoadedCatalog, SourceError> {
        tracing::info!(location = %self.primary.location(), "fetching products");

        let primary_err = match self.primary.fetch().await {
            Ok(products) => return Ok(self.loaded(&*self.primary, products)),
            Err(e) => e,
        };

        let Some(fallback) = &self.fallback else {
            tracing::error!(error = %primary_err, "product source failed");
            return Err(primary_err);
        };

        tracing::warn!(
            error = %primary_err,
            fallback = %fallback.location(),
            "primary product source failed; falling back"
        );

        match fallback.fetch().await {
            Ok(products) => Ok(self.loaded(&**fallback, products)),
            Err(fallback_err) => {
                tracing::error!(error = %fallback_err, "fallback product source failed");
                Err(SourceError::Exhausted {
                    primary: Box::new(primary_err),
                    fallback: Box::new(fallback_err),
                })
            }
        }
    }

    /// Load and fold the outcome into a status report.
    pub async fn load_with_status(&self) -> (Vec<Product>, ResourceStatus) {
        match self.load().await {
            Ok(catalog) => {
                let status = catalog.status();
                (catalog.products, status)
            }
            Err(e) => (Vec::new(), ResourceStatus::failed(e.to_string())),
        }
    }

    fn loaded(&self, source: &dyn ProductSource, products: Vec<Product>) -> LoadedCatalog {
        let origin = source.origin();
        tracing::info!(
            origin = origin.as_str(),
            count = products.len(),
            "products loaded"
        );
        LoadedCatalog { products, origin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource {
        origin: ResourceOrigin,
        products: Option<Vec<Product>>,
    }

    impl StubSource {
        fn ok(origin: ResourceOrigin, n: usize) -> Self {
            let products = (0..n)
                .map(|i| Product::new(format!("p{i}"), "x", 1.0))
                .collect();
            Self {
                origin,
                products: Some(products),
            }
        }

        fn failing(origin: ResourceOrigin) -> Self {
            Self {
                origin,
                products: None,
            }
        }
    }

    #[async_trait::async_trait]
    impl ProductSource for StubSource {
        fn origin(&self) -> ResourceOrigin {
            self.origin
        }

        fn location(&self) -> String {
            format!("stub:{}", self.origin.as_str())
        }

        async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
            self.products
                .clone()
                .ok_or_else(|| SourceError::Status {
                    url: self.location(),
                    status: 503,
                })
        }
    }

    #[tokio::test]
    async fn primary_success_reports_remote_origin() {
        let source = FallbackSource::new(StubSource::ok(ResourceOrigin::Remote, 3))
            .or_else(StubSource::ok(ResourceOrigin::Local, 1));

        let loaded = source.load().await.unwrap();
        assert_eq!(loaded.origin, ResourceOrigin::Remote);
        assert_eq!(loaded.products.len(), 3);
    }

    #[tokio::test]
    async fn falls_back_to_local_when_remote_fails() {
        let source = FallbackSource::new(StubSource::failing(ResourceOrigin::Remote))
            .or_else(StubSource::ok(ResourceOrigin::Local, 2));

        let (products, status) = source.load_with_status().await;
        assert_eq!(products.len(), 2);
        assert_eq!(status.summary(), "Using local resources");
    }

    #[tokio::test]
    async fn both_failing_names_both_causes() {
        let source = FallbackSource::new(StubSource::failing(ResourceOrigin::Remote))
            .or_else(StubSource::failing(ResourceOrigin::Local));

        let err = source.load().await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("stub:remote"), "{msg}");
        assert!(msg.contains("stub:local"), "{msg}");

        let (products, status) = source.load_with_status().await;
        assert!(products.is_empty());
        assert!(matches!(status, ResourceStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn single_source_error_is_returned_unchanged() {
        let source = FallbackSource::new(StubSource::failing(ResourceOrigin::Local));
        assert!(matches!(source.load().await, Err(SourceError::Status { status: 503, .. })));
    }
}
