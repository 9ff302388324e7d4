use serde::{Deserialize, Serialize};
use thiserror::Error;

use showcase_catalog::{FilterPatch, ProductCard};

/// Upper bound on `limit` for a single page.
pub const MAX_PAGE_SIZE: usize = 100;

// -------------------------
// Request DTOs
// -------------------------

/// `GET /products` query string.
///
/// Prices arrive as raw text so that blank inputs mean "no bound" and
/// malformed ones are reported instead of silently dropped.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub condition: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("limit must be at least 1")]
    ZeroLimit,
}

impl ProductListQuery {
    /// Filter patch for the store. Absent text fields mean "no constraint".
    pub fn to_patch(&self) -> Result<FilterPatch, QueryError> {
        let mut patch = FilterPatch::new()
            .search_term(self.search.clone().unwrap_or_default())
            .category(self.category.clone().unwrap_or_default())
            .status(self.status.clone().unwrap_or_default())
            .condition(self.condition.clone().unwrap_or_default());

        patch = patch.price_min(parse_price("price_min", self.price_min.as_deref())?);
        patch = patch.price_max(parse_price("price_max", self.price_max.as_deref())?);
        Ok(patch)
    }

    /// Page window: `limit` defaults to `page_size` and is capped at [`MAX_PAGE_SIZE`].
    pub fn window(&self, page_size: usize) -> Result<(usize, usize), QueryError> {
        let limit = match self.limit {
            Some(0) => return Err(QueryError::ZeroLimit),
            Some(n) => n.min(MAX_PAGE_SIZE),
            None => page_size.clamp(1, MAX_PAGE_SIZE),
        };
        Ok((self.offset.unwrap_or(0), limit))
    }
}

/// Blank → no bound; otherwise the text must parse to a finite number.
pub fn parse_price(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, QueryError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    showcase_catalog::parse_price(raw)
        .map(Some)
        .map_err(|_| QueryError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub total: usize,
    pub offset: usize,
    pub items: Vec<ProductCard>,
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub categories: Vec<String>,
    pub statuses: Vec<String>,
    pub conditions: Vec<String>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_prices_are_no_bound() {
        assert_eq!(parse_price("price_min", None), Ok(None));
        assert_eq!(parse_price("price_min", Some("  ")), Ok(None));
        assert_eq!(parse_price("price_min", Some(" 12.5 ")), Ok(Some(12.5)));
    }

    #[test]
    fn malformed_prices_are_rejected() {
        assert_eq!(
            parse_price("price_max", Some("cheap")),
            Err(QueryError::InvalidNumber {
                field: "price_max",
                value: "cheap".to_string()
            })
        );
        assert!(parse_price("price_max", Some("NaN")).is_err());
        assert!(parse_price("price_max", Some("inf")).is_err());
    }

    #[test]
    fn window_defaults_and_caps() {
        let q = ProductListQuery::default();
        assert_eq!(q.window(12), Ok((0, 12)));

        let q = ProductListQuery {
            offset: Some(24),
            limit: Some(5000),
            ..Default::default()
        };
        assert_eq!(q.window(12), Ok((24, MAX_PAGE_SIZE)));

        let q = ProductListQuery {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(q.window(12), Err(QueryError::ZeroLimit));
    }
}
