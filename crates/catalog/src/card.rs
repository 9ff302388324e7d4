//! Product → view-model mapping.
//!
//! Renderers receive plain records instead of touching markup; attaching them to
//! a display is the caller's business.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Locator used when a product has no images.
pub const PLACEHOLDER_IMAGE: &str = "resources/images/placeholder.jpg";

/// Link used when a product has no marketplace listing of its own.
pub const DEFAULT_MARKETPLACE_LINK: &str = "https://www.facebook.com/marketplace/profile/100071955871730";

/// Fallback text for products without a description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Presentation defaults shared by every card of a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOptions {
    pub placeholder_image: String,
    pub default_marketplace_link: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            default_marketplace_link: DEFAULT_MARKETPLACE_LINK.to_string(),
        }
    }
}

/// Summary card for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: String,
    pub condition: String,
    pub price: f64,
    pub price_label: String,
    pub tags: Vec<String>,
    pub image: String,
    pub marketplace_link: String,
}

impl ProductCard {
    pub fn from_product(product: &Product, options: &CardOptions) -> Self {
        Self::from_product_with(product, options, str::to_string)
    }

    /// Like [`ProductCard::from_product`], resolving the image locator through `resolve`.
    pub fn from_product_with(
        product: &Product,
        options: &CardOptions,
        resolve: impl Fn(&str) -> String,
    ) -> Self {
        let image = product
            .primary_image()
            .unwrap_or(options.placeholder_image.as_str());

        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            category: capitalize_first(&product.category),
            status: product.status.clone(),
            condition: product.condition.clone(),
            price: product.price,
            price_label: format_price(product.price),
            tags: product.tags.iter().map(|t| format_tag(t).to_string()).collect(),
            image: resolve(image),
            marketplace_link: product
                .marketplace_link()
                .unwrap_or(options.default_marketplace_link.as_str())
                .to_string(),
        }
    }
}

/// Full record for a single-product view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub card: ProductCard,
    pub description: String,
    pub images: Vec<String>,
}

impl ProductDetail {
    pub fn from_product(product: &Product, options: &CardOptions) -> Self {
        Self::from_product_with(product, options, str::to_string)
    }

    pub fn from_product_with(
        product: &Product,
        options: &CardOptions,
        resolve: impl Fn(&str) -> String,
    ) -> Self {
        let images = if product.images.is_empty() {
            vec![resolve(options.placeholder_image.as_str())]
        } else {
            product.images.iter().map(|i| resolve(i.as_str())).collect()
        };

        let description = if product.description.trim().is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            product.description.clone()
        };

        Self {
            card: ProductCard::from_product_with(product, options, &resolve),
            description,
            images,
        }
    }
}

/// US-dollar rendering with thousands separators and two decimals (`$1,234.50`).
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Strip a leading bracketed ordering prefix: `"[1] Bedsheet Set"` → `"Bedsheet Set"`.
pub fn format_tag(tag: &str) -> &str {
    if let Some(rest) = tag.strip_prefix('[') {
        if let Some(end) = rest.find(']') {
            return rest[end + 1..].trim_start();
        }
    }
    tag
}

pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
