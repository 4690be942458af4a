//! Session-scoped storefront state.
//!
//! This crate contains the state the page owns between reload boundaries:
//! wishlist/cart/compare membership, the single-slot notification surface, and
//! the facade binding abstract UI triggers to both. Everything is synchronous
//! and deterministic; rendering happens behind the [`RenderSink`] seam.

pub mod facade;
pub mod notify;
pub mod tracker;

pub use facade::{BadgeCounts, NullSink, RenderSink, SessionState, StoreAction};
pub use notify::{Notification, NotificationKind, NotificationSlot, DISMISS_AFTER_MS};
pub use tracker::{CartLine, CollectionTracker, CompareList, COMPARE_CAPACITY};
