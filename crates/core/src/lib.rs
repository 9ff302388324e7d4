//! `showcase-core`: shared building blocks for the catalog crates.
//!
//! Pure types only (no IO, no async).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
