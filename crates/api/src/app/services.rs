//! Catalog wiring and the read-side queries used by handlers.

use std::sync::Arc;

use showcase_catalog::{
    CardOptions, CatalogStore, FacetField, FilterPatch, Product, ProductCard, ProductDetail,
};
use showcase_core::{DomainError, DomainResult, ProductId};
use showcase_infra::{bootstrap, AppConfig, ResourceResolver, ResourceStatus};

use crate::app::dto::{FacetsResponse, ProductPage};

/// Shared, immutable state behind every request.
///
/// The catalog is loaded once at startup; each request filters its own copy of
/// the store (the product list itself is shared).
pub struct AppServices {
    catalog: CatalogStore,
    status: ResourceStatus,
    resolver: ResourceResolver,
    card_options: CardOptions,
    page_size: usize,
}

/// Load the catalog and wire the services around it. A failed load still
/// yields services: an empty catalog whose status reports the failure.
pub async fn build_services(config: &AppConfig) -> AppServices {
    let loaded = bootstrap::load(config).await;
    AppServices::new(
        loaded.products,
        loaded.status,
        loaded.resolver,
        loaded.card_options,
        config.batch_size,
    )
}

impl AppServices {
    pub fn new(
        products: impl Into<Arc<[Product]>>,
        status: ResourceStatus,
        resolver: ResourceResolver,
        card_options: CardOptions,
        page_size: usize,
    ) -> Self {
        Self {
            catalog: CatalogStore::new(products),
            status,
            resolver,
            card_options,
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn status(&self) -> &ResourceStatus {
        &self.status
    }

    /// One page of the filtered view, as cards.
    pub fn browse(&self, patch: FilterPatch, offset: usize, limit: usize) -> ProductPage {
        let mut store = self.catalog.clone();
        store.set_filters(patch);
        let view = store.filtered_view();

        let total = view.len();
        let start = offset.min(total);
        let end = start.saturating_add(limit).min(total);

        let items = view[start..end]
            .iter()
            .map(|p| self.card(p))
            .collect::<Vec<_>>();

        ProductPage {
            total,
            offset: start,
            items,
            has_more: end < total,
        }
    }

    pub fn product(&self, id: &str) -> DomainResult<ProductDetail> {
        let id: ProductId = id.parse()?;
        let product = self
            .catalog
            .get(id.as_str())
            .ok_or_else(DomainError::not_found)?;
        Ok(ProductDetail::from_product_with(
            product,
            &self.card_options,
            |locator| self.resolver.resolve(locator),
        ))
    }

    /// Facet values over the whole catalog. With `category`, tags are limited
    /// to products in that category.
    pub fn facets(&self, category: Option<&str>) -> FacetsResponse {
        let tags = match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(category) => self.catalog.tags_by_category(category),
            None => self.catalog.unique_tags(),
        };

        FacetsResponse {
            categories: self.catalog.unique_values(FacetField::Category),
            statuses: self.catalog.unique_values(FacetField::Status),
            conditions: self.catalog.unique_values(FacetField::Condition),
            tags,
        }
    }

    fn card(&self, product: &Product) -> ProductCard {
        ProductCard::from_product_with(product, &self.card_options, |locator| {
            self.resolver.resolve(locator)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_infra::ResourceOrigin;

    fn services(n: usize) -> AppServices {
        let products = (0..n)
            .map(|i| {
                Product::new(format!("p{i}"), format!("Item {i}"), i as f64)
                    .with_category(if i % 2 == 0 { "furniture" } else { "lighting" })
                    .with_images([format!("resources/images/{i}.jpg")])
            })
            .collect::<Vec<_>>();
        AppServices::new(
            products,
            ResourceStatus::ready(ResourceOrigin::Local, n),
            ResourceResolver::new("data/er/v73"),
            CardOptions::default(),
            12,
        )
    }

    #[test]
    fn browse_pages_through_the_view() {
        let s = services(25);

        let first = s.browse(FilterPatch::new(), 0, 12);
        assert_eq!(first.total, 25);
        assert_eq!(first.items.len(), 12);
        assert!(first.has_more);
        assert_eq!(first.items[0].image, "data/er/v73/resources/images/0.jpg");

        let last = s.browse(FilterPatch::new(), 24, 12);
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_more);

        let past_end = s.browse(FilterPatch::new(), 100, 12);
        assert_eq!(past_end.offset, 25);
        assert!(past_end.items.is_empty());
    }

    #[test]
    fn browse_does_not_leak_filters_between_calls() {
        let s = services(10);
        let filtered = s.browse(FilterPatch::new().category("lighting"), 0, 12);
        assert_eq!(filtered.total, 5);

        assert_eq!(s.browse(FilterPatch::new(), 0, 12).total, 10);
    }

    #[test]
    fn product_lookup_errors() {
        let s = services(3);
        assert_eq!(s.product("p1").unwrap().card.id, "p1");
        assert_eq!(s.product("p9").unwrap_err(), DomainError::NotFound);
        assert!(matches!(s.product("  "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn facets_are_sorted_and_optionally_scoped() {
        let s = services(4);
        let f = s.facets(None);
        assert_eq!(f.categories, vec!["furniture", "lighting"]);
        assert!(f.tags.is_empty());
        assert!(s.facets(Some("nope")).tags.is_empty());
    }
}
