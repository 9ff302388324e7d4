use std::collections::BTreeSet;
use std::sync::Arc;

use crate::filter::{FacetField, FilterCriteria, FilterPatch};
use crate::product::Product;

/// In-memory catalog: the full product list plus the active filter.
///
/// Filtering is a stable selection over the original order; it never re-sorts.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<[Product]>,
    criteria: FilterCriteria,
}

impl CatalogStore {
    pub fn new(products: impl Into<Arc<[Product]>>) -> Self {
        Self {
            products: products.into(),
            criteria: FilterCriteria::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Merge `patch` into the current criteria.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.criteria.merge(patch);
    }

    /// Back to "no constraint" on every axis.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Products satisfying the active criteria, in original order.
    pub fn filtered_view(&self) -> Vec<Product> {
        if self.criteria.is_unconstrained() {
            return self.products.to_vec();
        }

        self.products
            .iter()
            .filter(|p| self.criteria.matches(p))
            .cloned()
            .collect()
    }

    /// Sorted distinct values of `field` across all products.
    pub fn unique_values(&self, field: FacetField) -> Vec<String> {
        self.products
            .iter()
            .map(|p| field.value_of(p).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct tags across all products.
    pub fn unique_tags(&self) -> Vec<String> {
        self.products
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct tags of the products in `category`.
    pub fn tags_by_category(&self, category: &str) -> Vec<String> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .flat_map(|p| p.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("p1", "Oak Table", 10.0).with_category("A"),
            Product::new("p2", "Pine Chair", 20.0).with_category("B"),
            Product::new("p3", "Oak Shelf", 30.0).with_category("A"),
        ]
    }

    fn ids(view: &[Product]) -> Vec<&str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn category_filter_keeps_original_order() {
        let mut store = CatalogStore::new(sample());
        store.set_filters(FilterPatch::new().category("A"));
        assert_eq!(ids(&store.filtered_view()), vec!["p1", "p3"]);
    }

    #[test]
    fn price_min_filter() {
        let mut store = CatalogStore::new(sample());
        store.set_filters(FilterPatch::new().price_min(15.0));
        assert_eq!(ids(&store.filtered_view()), vec!["p2", "p3"]);
    }

    #[test]
    fn set_filters_accumulates_and_reset_clears() {
        let mut store = CatalogStore::new(sample());
        store.set_filters(FilterPatch::new().category("A"));
        store.set_filters(FilterPatch::new().search_term("shelf"));
        assert_eq!(ids(&store.filtered_view()), vec!["p3"]);

        store.reset_filters();
        assert!(store.criteria().is_unconstrained());
        assert_eq!(ids(&store.filtered_view()), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn inverted_range_yields_empty_view() {
        let mut store = CatalogStore::new(sample());
        store.set_filters(FilterPatch::new().price_min(25.0).price_max(15.0));
        assert!(store.filtered_view().is_empty());
    }

    #[test]
    fn empty_store_is_total() {
        let mut store = CatalogStore::new(Vec::<Product>::new());
        assert!(store.is_empty());
        assert!(store.filtered_view().is_empty());
        store.set_filters(FilterPatch::new().search_term("anything"));
        assert!(store.filtered_view().is_empty());
        assert!(store.unique_values(FacetField::Category).is_empty());
    }

    #[test]
    fn unique_values_are_sorted_and_distinct() {
        let store = CatalogStore::new(vec![
            Product::new("p1", "a", 1.0).with_status("Sold"),
            Product::new("p2", "b", 1.0).with_status("Available"),
            Product::new("p3", "c", 1.0).with_status("Sold"),
            Product::new("p4", "d", 1.0).with_status("Pending"),
        ]);
        assert_eq!(
            store.unique_values(FacetField::Status),
            vec!["Available", "Pending", "Sold"]
        );
    }

    #[test]
    fn tags_are_collected_globally_and_per_category() {
        let store = CatalogStore::new(vec![
            Product::new("p1", "a", 1.0).with_category("bedding").with_tags(["sheets", "cotton"]),
            Product::new("p2", "b", 1.0).with_category("lighting").with_tags(["lamp", "cotton"]),
        ]);
        assert_eq!(store.unique_tags(), vec!["cotton", "lamp", "sheets"]);
        assert_eq!(store.tags_by_category("bedding"), vec!["cotton", "sheets"]);
        assert!(store.tags_by_category("garden").is_empty());
    }

    #[test]
    fn get_finds_products_by_id() {
        let store = CatalogStore::new(sample());
        assert_eq!(store.get("p2").map(|p| p.title.as_str()), Some("Pine Chair"));
        assert!(store.get("p9").is_none());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                "[a-z]{1,6}",
                "[A-Za-z ]{0,12}",
                "[A-Za-z ]{0,12}",
                prop::sample::select(vec!["A", "B", "C"]),
                prop::sample::select(vec!["Available", "Sold"]),
                prop::sample::select(vec!["New", "Used"]),
                0u32..500,
            )
                .prop_map(|(id, title, description, category, status, condition, price)| {
                    Product::new(id, title, f64::from(price))
                        .with_description(description)
                        .with_category(category)
                        .with_status(status)
                        .with_condition(condition)
                })
        }

        fn arb_patch() -> impl Strategy<Value = FilterPatch> {
            (
                prop::option::of("[a-z]{0,2}"),
                prop::option::of(prop::sample::select(vec!["", "A", "B", "Z"])),
                prop::option::of(prop::sample::select(vec!["", "Available", "Sold"])),
                prop::option::of(prop::sample::select(vec!["", "New", "Used", "Refurbished"])),
                prop::option::of(prop::option::of(0u32..500)),
                prop::option::of(prop::option::of(0u32..500)),
            )
                .prop_map(|(term, category, status, condition, min, max)| FilterPatch {
                    search_term: term,
                    category: category.map(str::to_string),
                    status: status.map(str::to_string),
                    condition: condition.map(str::to_string),
                    price_min: min.map(|m| m.map(f64::from)),
                    price_max: max.map(|m| m.map(f64::from)),
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the filtered view is an order-preserving subsequence of the full list.
            #[test]
            fn filtered_view_is_ordered_subset(
                products in prop::collection::vec(arb_product(), 0..40),
                patch in arb_patch(),
            ) {
                let mut store = CatalogStore::new(products.clone());
                store.set_filters(patch);
                let view = store.filtered_view();

                let mut cursor = products.iter();
                for item in &view {
                    prop_assert!(cursor.any(|p| p == item), "view is not a subsequence");
                    prop_assert!(store.criteria().matches(item));
                }

                let expected = products.iter().filter(|p| store.criteria().matches(p)).count();
                prop_assert_eq!(view.len(), expected);
            }

            /// Property: with no criteria the view is the full list.
            #[test]
            fn unconstrained_view_is_full_list(
                products in prop::collection::vec(arb_product(), 0..40),
                patch in arb_patch(),
            ) {
                let mut store = CatalogStore::new(products.clone());
                store.set_filters(patch);
                store.reset_filters();
                prop_assert_eq!(store.filtered_view(), products);
            }

            /// Property: filtered_view is idempotent for unchanged state.
            #[test]
            fn filtered_view_is_idempotent(
                products in prop::collection::vec(arb_product(), 0..40),
                patch in arb_patch(),
            ) {
                let mut store = CatalogStore::new(products);
                store.set_filters(patch);
                prop_assert_eq!(store.filtered_view(), store.filtered_view());
            }

            /// Property: facet values are strictly ascending (sorted, no duplicates).
            #[test]
            fn unique_values_strictly_ascending(
                products in prop::collection::vec(arb_product(), 0..40),
            ) {
                let store = CatalogStore::new(products);
                for field in [FacetField::Category, FacetField::Status, FacetField::Condition] {
                    let values = store.unique_values(field);
                    prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }
}
