use serde::{Deserialize, Serialize};

use showcase_core::{DomainError, DomainResult, ProductId};

/// A catalog product as stored in the catalog document.
///
/// Read-only from the catalog's point of view: stores and renderers never
/// mutate products, they only select and map them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub status: String,
    pub condition: String,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_link: Option<String>,
}

impl Product {
    /// Minimal product used by tests and fixtures; remaining fields are empty.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            status: String::new(),
            condition: String::new(),
            price,
            tags: Vec::new(),
            images: Vec::new(),
            marketplace_link: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_images<I, T>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// First image locator, if any (card preview).
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Marketplace link, treating an empty string like an absent one.
    pub fn marketplace_link(&self) -> Option<&str> {
        self.marketplace_link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// The catalog document exchanged with product sources: `{ "products": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<Product>,
}

impl CatalogDocument {
    /// Parse a catalog document, rejecting documents without a `products` array.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("catalog document is not JSON: {e}")))?;

        if !value.get("products").is_some_and(serde_json::Value::is_array) {
            return Err(DomainError::validation(
                "invalid data structure: products array not found",
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("malformed product record: {e}")))
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
