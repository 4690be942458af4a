//! Sort and filter transforms over the in-page product list.
//!
//! Transforms never mutate the caller's list; they produce a fresh ordering
//! the rendering collaborator applies to the visible grid.

use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// Sort criteria for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Numeric ascending by price.
    PriceLow,
    /// Numeric descending by price.
    PriceHigh,
    /// Numeric descending by rating.
    Rating,
    /// Case-insensitive lexicographic ascending by name.
    Name,
}

impl SortKey {
    /// Parse the UI-facing label. Unknown labels yield `None`; callers decide
    /// whether that means "leave the grid alone" (see [`sort_by_label`]).
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            "rating" => Some(Self::Rating),
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort the product list by `key`.
///
/// The sort is stable: records comparing equal keep their original relative
/// order, so reapplying the same key is idempotent.
pub fn sort(products: &[ProductRecord], key: SortKey) -> Vec<ProductRecord> {
    let mut out = products.to_vec();
    match key {
        SortKey::PriceLow => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Name => {
            out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }
    out
}

/// Sort by a UI-facing label.
///
/// An unrecognized label returns the input order unchanged rather than
/// signaling an error; the original grid falls through to "no reordering".
pub fn sort_by_label(products: &[ProductRecord], label: &str) -> Vec<ProductRecord> {
    match SortKey::parse(label) {
        Some(key) => sort(products, key),
        None => products.to_vec(),
    }
}

/// Filter by category.
///
/// The literal `"all"` (case-sensitive) keeps every record in order; any other
/// category keeps records whose name contains it as a case-insensitive
/// substring. No match is an empty list, not an error.
pub fn filter(products: &[ProductRecord], category: &str) -> Vec<ProductRecord> {
    if category == "all" {
        return products.to_vec();
    }
    let needle = category.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Keep products priced at or below `max_price` (inclusive boundary).
pub fn filter_by_max_price(products: &[ProductRecord], max_price: f64) -> Vec<ProductRecord> {
    products
        .iter()
        .filter(|p| p.price <= max_price)
        .cloned()
        .collect()
}
