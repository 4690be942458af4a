//! Product catalog domain module.
//!
//! This crate contains the product value object and the list transforms
//! (sort, category filter, price filter), implemented purely as deterministic
//! domain logic (no IO, no rendering, no storage).

pub mod product;
pub mod transform;

pub use product::ProductRecord;
pub use transform::{filter, filter_by_max_price, sort, sort_by_label, SortKey};
