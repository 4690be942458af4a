use serde::{Deserialize, Serialize};

/// A product as displayed on the page.
///
/// The record is a value object owned by the rendering collaborator; trackers
/// reference products by `name` only. `name` is the unique display key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: f64,
    pub rating: f64,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, price: f64, rating: f64) -> Self {
        Self {
            name: name.into(),
            price,
            rating,
        }
    }
}
