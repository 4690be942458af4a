//! Wishlist, cart, and compare-list membership tracking.
//!
//! # Invariants
//! - The wishlist never contains duplicates (set semantics).
//! - The cart grows by exactly one line per add; it is never deduplicated.
//! - The compare list holds at most [`COMPARE_CAPACITY`] distinct names;
//!   insertion beyond capacity is rejected, never evicted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use furnish_core::{StoreError, StoreResult};

/// Maximum number of products queued for side-by-side comparison.
pub const COMPARE_CAPACITY: usize = 3;

/// One cart entry. Each add event is a distinct line item, so the same product
/// can appear on several lines (mirroring a real cart rather than merging).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Capacity-bounded, insertion-ordered set of product names.
///
/// Insertion order is observable (the compare summary joins members in the
/// order they were added), so this is a `Vec` with a membership check rather
/// than a hash set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareList {
    members: Vec<String>,
}

impl CompareList {
    /// Insert `name`, returning the new size.
    ///
    /// The capacity gate runs first: once the list is full, every insert is
    /// rejected, member or not. Below capacity, re-inserting an existing
    /// member succeeds without change. The list is left untouched on
    /// rejection.
    pub fn insert(&mut self, name: &str) -> StoreResult<usize> {
        if self.members.len() >= COMPARE_CAPACITY {
            return Err(StoreError::capacity_exceeded(COMPARE_CAPACITY));
        }
        if self.members.iter().any(|m| m == name) {
            return Ok(self.members.len());
        }
        self.members.push(name.to_string());
        Ok(self.members.len())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Session-scoped membership state for wishlist, cart, and compare list.
///
/// All mutations are synchronous; the execution model is single-threaded
/// cooperative (UI-event driven), so no interior locking exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionTracker {
    wishlist: HashSet<String>,
    cart: Vec<CartLine>,
    compare: CompareList,
}

impl CollectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip wishlist membership of `name`. Returns whether the item is now
    /// present. After `n` toggles the item is a member iff `n` is odd.
    pub fn toggle_wishlist(&mut self, name: &str) -> bool {
        if self.wishlist.remove(name) {
            false
        } else {
            self.wishlist.insert(name.to_string());
            true
        }
    }

    pub fn wishlist_contains(&self, name: &str) -> bool {
        self.wishlist.contains(name)
    }

    /// Append a line item and return the new cart length.
    pub fn add_to_cart(&mut self, name: &str, price: f64) -> usize {
        self.cart.push(CartLine {
            name: name.to_string(),
            price,
            quantity: 1,
        });
        self.cart.len()
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        &self.cart
    }

    /// Queue `name` for comparison; see [`CompareList::insert`].
    pub fn add_to_compare(&mut self, name: &str) -> StoreResult<usize> {
        self.compare.insert(name)
    }

    pub fn compare(&self) -> &CompareList {
        &self.compare
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut tracker = CollectionTracker::new();
        assert!(tracker.toggle_wishlist("Chair"));
        assert!(tracker.wishlist_contains("Chair"));
        assert!(!tracker.toggle_wishlist("Chair"));
        assert!(!tracker.wishlist_contains("Chair"));
        assert_eq!(tracker.wishlist_count(), 0);
    }

    #[test]
    fn wishlist_has_set_semantics() {
        let mut tracker = CollectionTracker::new();
        tracker.toggle_wishlist("Chair");
        tracker.toggle_wishlist("Table");
        tracker.toggle_wishlist("Chair");
        tracker.toggle_wishlist("Chair");
        assert_eq!(tracker.wishlist_count(), 2);
    }

    #[test]
    fn cart_never_deduplicates() {
        let mut tracker = CollectionTracker::new();
        for k in 1..=5 {
            assert_eq!(tracker.add_to_cart("Lamp", 45.0), k);
        }
        assert_eq!(tracker.cart_count(), 5);
        assert!(tracker.cart_lines().iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn compare_rejects_fourth_distinct_name_without_mutation() {
        let mut tracker = CollectionTracker::new();
        assert_eq!(tracker.add_to_compare("Chair"), Ok(1));
        assert_eq!(tracker.add_to_compare("Table"), Ok(2));
        assert_eq!(tracker.add_to_compare("Lamp"), Ok(3));

        let before = tracker.compare().clone();
        let err = tracker.add_to_compare("Sofa").unwrap_err();
        assert_eq!(err, StoreError::capacity_exceeded(COMPARE_CAPACITY));
        assert_eq!(tracker.compare(), &before);
    }

    #[test]
    fn compare_reinsert_below_capacity_is_a_no_op_success() {
        let mut tracker = CollectionTracker::new();
        tracker.add_to_compare("Chair").unwrap();
        tracker.add_to_compare("Table").unwrap();
        assert_eq!(tracker.add_to_compare("Table"), Ok(2));
        assert_eq!(tracker.compare().members(), ["Chair", "Table"]);
    }

    #[test]
    fn compare_at_capacity_rejects_even_existing_members() {
        let mut tracker = CollectionTracker::new();
        tracker.add_to_compare("Chair").unwrap();
        tracker.add_to_compare("Table").unwrap();
        tracker.add_to_compare("Lamp").unwrap();
        // The capacity gate runs before the membership check.
        assert_eq!(
            tracker.add_to_compare("Table"),
            Err(StoreError::capacity_exceeded(COMPARE_CAPACITY))
        );
        assert_eq!(tracker.compare().members(), ["Chair", "Table", "Lamp"]);
    }

    #[test]
    fn compare_preserves_insertion_order() {
        let mut list = CompareList::default();
        list.insert("Table").unwrap();
        list.insert("Chair").unwrap();
        assert_eq!(list.members(), ["Table", "Chair"]);
    }

    proptest! {
        #[test]
        fn toggle_parity_determines_membership(n in 0usize..32) {
            let mut tracker = CollectionTracker::new();
            for _ in 0..n {
                tracker.toggle_wishlist("Ottoman");
            }
            prop_assert_eq!(tracker.wishlist_contains("Ottoman"), n % 2 == 1);
        }

        #[test]
        fn cart_length_equals_add_count(names in prop::collection::vec("[a-z]{1,6}", 0..24)) {
            let mut tracker = CollectionTracker::new();
            for (i, name) in names.iter().enumerate() {
                prop_assert_eq!(tracker.add_to_cart(name, 10.0), i + 1);
            }
            prop_assert_eq!(tracker.cart_count(), names.len());
        }

        #[test]
        fn compare_size_never_exceeds_capacity(names in prop::collection::vec("[a-z]{1,6}", 0..24)) {
            let mut tracker = CollectionTracker::new();
            for name in &names {
                let _ = tracker.add_to_compare(name);
                prop_assert!(tracker.compare().len() <= COMPARE_CAPACITY);
            }
        }
    }
}
