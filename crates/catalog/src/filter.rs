use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Active catalog constraints.
///
/// Empty strings and `None` bounds mean "no constraint". Price bounds are
/// inclusive at both ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: String,
    pub status: String,
    pub condition: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterCriteria {
    /// True when no field constrains the view.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.category.is_empty()
            && self.status.is_empty()
            && self.condition.is_empty()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }

    /// Whether `product` satisfies every active constraint.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            let in_title = product.title.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }

        if !self.category.is_empty() && product.category != self.category {
            return false;
        }
        if !self.status.is_empty() && product.status != self.status {
            return false;
        }
        if !self.condition.is_empty() && product.condition != self.condition {
            return false;
        }

        // An inverted range (min > max) can never be satisfied: empty view.
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }

        true
    }

    /// Merge present fields of `patch`; absent fields keep their value.
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(term) = patch.search_term {
            self.search_term = term.trim().to_string();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(min) = patch.price_min {
            self.price_min = min;
        }
        if let Some(max) = patch.price_max {
            self.price_max = max;
        }
    }
}

/// Partial update for [`FilterCriteria`].
///
/// Price bounds are doubly optional so a patch can clear a bound
/// (`Some(None)`) as well as leave it untouched (`None`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub condition: Option<String>,
    pub price_min: Option<Option<f64>>,
    pub price_max: Option<Option<f64>>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn price_min(mut self, min: impl Into<Option<f64>>) -> Self {
        self.price_min = Some(min.into());
        self
    }

    pub fn price_max(mut self, max: impl Into<Option<f64>>) -> Self {
        self.price_max = Some(max.into());
        self
    }
}

/// Parse a price bound. Only finite numbers are accepted; a NaN bound would
/// otherwise drop out of every comparison and silently match everything.
pub fn parse_price(raw: &str) -> showcase_core::DomainResult<f64> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(showcase_core::DomainError::validation(format!(
            "price must be a finite number, got {raw:?}"
        ))),
    }
}

/// Discrete attributes usable as filter axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetField {
    Category,
    Status,
    Condition,
}

impl FacetField {
    pub fn value_of<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            FacetField::Category => &product.category,
            FacetField::Status => &product.status,
            FacetField::Condition => &product.condition,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetField::Category => "category",
            FacetField::Status => "status",
            FacetField::Condition => "condition",
        }
    }
}

impl core::str::FromStr for FacetField {
    type Err = showcase_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" => Ok(FacetField::Category),
            "status" => Ok(FacetField::Status),
            "condition" => Ok(FacetField::Condition),
            other => Err(showcase_core::DomainError::validation(format!(
                "unknown facet field: {other} (expected category, status or condition)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new("p1", "Brass Desk Lamp", 20.0)
            .with_description("Warm light, barely used")
            .with_category("lighting")
            .with_status("Available")
            .with_condition("Used")
    }

    #[test]
    fn price_bounds_must_be_finite() {
        assert_eq!(parse_price(" 12.5 "), Ok(12.5));
        assert_eq!(parse_price("0"), Ok(0.0));
        for bad in ["NaN", "nan", "inf", "-inf", "infinity", "cheap", ""] {
            assert!(parse_price(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn default_criteria_are_unconstrained_and_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());
        assert!(criteria.matches(&lamp()));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let mut criteria = FilterCriteria::default();
        criteria.search_term = "BRASS".to_string();
        assert!(criteria.matches(&lamp()));

        criteria.search_term = "warm LIGHT".to_string();
        assert!(criteria.matches(&lamp()));

        criteria.search_term = "sofa".to_string();
        assert!(!criteria.matches(&lamp()));
    }

    #[test]
    fn discrete_axes_require_exact_match() {
        let mut criteria = FilterCriteria::default();
        criteria.category = "Lighting".to_string();
        assert!(!criteria.matches(&lamp()));

        criteria.category = "lighting".to_string();
        criteria.status = "Available".to_string();
        criteria.condition = "Used".to_string();
        assert!(criteria.matches(&lamp()));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut criteria = FilterCriteria::default();
        criteria.price_min = Some(20.0);
        criteria.price_max = Some(20.0);
        assert!(criteria.matches(&lamp()));

        criteria.price_min = Some(20.01);
        assert!(!criteria.matches(&lamp()));
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let mut criteria = FilterCriteria::default();
        criteria.price_min = Some(30.0);
        criteria.price_max = Some(10.0);
        assert!(!criteria.matches(&lamp()));
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut criteria = FilterCriteria::default();
        criteria.merge(FilterPatch::new().category("lighting").price_min(5.0));
        criteria.merge(FilterPatch::new().search_term("  lamp  "));

        assert_eq!(criteria.category, "lighting");
        assert_eq!(criteria.price_min, Some(5.0));
        assert_eq!(criteria.search_term, "lamp");

        criteria.merge(FilterPatch::new().price_min(None));
        assert_eq!(criteria.price_min, None);
        assert_eq!(criteria.category, "lighting");
    }

    #[test]
    fn facet_field_parses_case_insensitively() {
        assert_eq!("Category".parse::<FacetField>().unwrap(), FacetField::Category);
        assert_eq!("status".parse::<FacetField>().unwrap().as_str(), "status");
        assert!("price".parse::<FacetField>().is_err());
    }
}
