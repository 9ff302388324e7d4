//! Catalog domain module.
//!
//! Product records, filter criteria, the in-memory catalog store and the pure
//! view-model mapping used by renderers. Deterministic logic only (no IO, no
//! HTTP, no storage).

pub mod card;
pub mod filter;
pub mod product;
pub mod store;

pub use card::{CardOptions, ProductCard, ProductDetail};
pub use filter::{parse_price, FacetField, FilterCriteria, FilterPatch};
pub use product::{CatalogDocument, Product};
pub use store::CatalogStore;
