use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/facets", get(facets))
        .route("/:id", get(get_product))
}

#[derive(Debug, Deserialize)]
pub struct FacetsQuery {
    pub category: Option<String>,
}

/// GET /products?search=oak&category=furniture&price_min=10&offset=0&limit=12
///
/// Query parameters:
/// - `search`: case-insensitive substring of title or description
/// - `category`, `status`, `condition`: exact match
/// - `price_min`, `price_max`: inclusive bounds; blank means unbounded
/// - `offset`: start of the page (default: 0)
/// - `limit`: page size (default: the configured batch size, max: 100)
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ProductListQuery>,
) -> axum::response::Response {
    let patch = match query.to_patch() {
        Ok(p) => p,
        Err(e) => return errors::query_error_to_response(e),
    };
    let (offset, limit) = match query.window(services.page_size()) {
        Ok(w) => w,
        Err(e) => return errors::query_error_to_response(e),
    };

    let page = services.browse(patch, offset, limit);
    tracing::debug!(
        total = page.total,
        offset = page.offset,
        returned = page.items.len(),
        "products page"
    );
    (StatusCode::OK, Json(page)).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.product(&id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET /products/facets?category=furniture
pub async fn facets(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<FacetsQuery>,
) -> axum::response::Response {
    let facets = services.facets(query.category.as_deref());
    (StatusCode::OK, Json(facets)).into_response()
}
