use showcase_catalog::Product;

use super::{parse_document, ProductSource, SourceError};
use crate::resources::{ResourceOrigin, RELATIVE_PRODUCTS_JSON_PATH};

/// Catalog document fetched over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// `<base>/resources/data/products.json` on a remote resource base.
    pub fn from_base(base: &str) -> Self {
        Self::new(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            RELATIVE_PRODUCTS_JSON_PATH
        ))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl ProductSource for HttpProductSource {
    fn origin(&self) -> ResourceOrigin {
        ResourceOrigin::Remote
    }

    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        let http_err = |source| SourceError::Http {
            url: self.url.clone(),
            source,
        };

        let res = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(http_err)?;

        let status = res.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let raw = res.text().await.map_err(http_err)?;
        parse_document(&raw)
    }
}
