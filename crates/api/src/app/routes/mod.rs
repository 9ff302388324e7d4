use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for the read-only catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/status", get(system::status))
        .nest("/products", products::router())
}
