//! `furnish-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the storefront error taxonomy and the session identifier.

pub mod error;
pub mod id;

pub use error::{StoreError, StoreResult};
pub use id::SessionId;
