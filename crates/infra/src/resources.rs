//! Resource layout on disk and locator → URL resolution.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use showcase_catalog::card::PLACEHOLDER_IMAGE;

/// Versioned prefix under which catalog resources live.
pub const RESOURCES_DIR_PREFIX: &str = "data/er/v73";

/// Catalog document path relative to [`RESOURCES_DIR_PREFIX`].
pub const RELATIVE_PRODUCTS_JSON_PATH: &str = "resources/data/products.json";

/// Where a catalog (and therefore its images) was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceOrigin {
    Remote,
    Local,
}

impl ResourceOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceOrigin::Remote => "remote",
            ResourceOrigin::Local => "local",
        }
    }
}

/// Directory convention rooted at the application's data root:
///
/// ```text
/// <root>/data/er/v73/resources/
///     data/products.json
///     images/
///     images/archived/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
    root: PathBuf,
}

impl ResourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prefix_dir(&self) -> PathBuf {
        self.root.join(RESOURCES_DIR_PREFIX)
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.prefix_dir().join("resources")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.resources_dir().join("data")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.resources_dir().join("images")
    }

    /// Images no longer referenced by any product.
    pub fn archived_images_dir(&self) -> PathBuf {
        self.images_dir().join("archived")
    }

    pub fn products_file(&self) -> PathBuf {
        self.data_dir().join("products.json")
    }
}

/// Maps stored image locators onto the base of the origin in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceResolver {
    base: String,
}

impl ResourceResolver {
    /// Resolve against `base` (a remote URL or a local path prefix).
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Pick the base matching `origin`.
    pub fn for_origin(origin: ResourceOrigin, remote_base: Option<&str>, local_base: &str) -> Self {
        match (origin, remote_base) {
            (ResourceOrigin::Remote, Some(remote)) => Self::new(remote),
            _ => Self::new(local_base),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// - empty locator → the placeholder image, as-is
    /// - `resources/…` → `<base>/resources/…`
    /// - anything else (absolute URLs, data URIs) → unchanged
    pub fn resolve(&self, locator: &str) -> String {
        let locator = locator.trim();
        if locator.is_empty() {
            tracing::warn!("empty resource locator; using placeholder");
            return PLACEHOLDER_IMAGE.to_string();
        }

        match locator.strip_prefix("resources/") {
            Some(rest) if self.base.is_empty() => format!("resources/{rest}"),
            Some(rest) => format!("{}/resources/{rest}", self.base),
            None => locator.to_string(),
        }
    }
}

/// Availability of the catalog resources, as reported to the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ResourceStatus {
    Ready {
        origin: ResourceOrigin,
        product_count: usize,
        checked_at: DateTime<Utc>,
    },
    Failed {
        message: String,
        checked_at: DateTime<Utc>,
    },
}

impl ResourceStatus {
    pub fn ready(origin: ResourceOrigin, product_count: usize) -> Self {
        Self::Ready {
            origin,
            product_count,
            checked_at: Utc::now(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            checked_at: Utc::now(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ResourceStatus::Ready { .. })
    }

    /// Human-readable line for a status indicator.
    pub fn summary(&self) -> String {
        match self {
            ResourceStatus::Ready { origin: ResourceOrigin::Remote, .. } => {
                "Using remote resources".to_string()
            }
            ResourceStatus::Ready { origin: ResourceOrigin::Local, .. } => {
                "Using local resources".to_string()
            }
            ResourceStatus::Failed { .. } => "Failed to load resources".to_string(),
        }
    }
}
