//! Session facade: binds abstract UI triggers to the tracker, the transforms,
//! and the notification slot.
//!
//! Call sequence per mutating tracker action: apply the mutation, post exactly
//! one notification describing the outcome, then request one badge refresh
//! from the render sink. List transforms instead push the reordered/filtered
//! list through the sink. Actions naming a product absent from the session's
//! list are dropped silently (the acting UI element necessarily came from an
//! existing card, so an unknown name means a stale trigger).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use furnish_auth::Credentials;
use furnish_catalog::{filter, filter_by_max_price, sort_by_label, ProductRecord};
use furnish_core::SessionId;

use crate::notify::{Notification, NotificationKind, NotificationSlot};
use crate::tracker::CollectionTracker;

/// Counter snapshot pushed to the rendering collaborator after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeCounts {
    pub wishlist: usize,
    pub cart: usize,
    pub compare: usize,
    /// The compare button appears once two products are queued.
    pub compare_ready: bool,
}

/// The external rendering collaborator (observer seam).
///
/// The core only emits: counter snapshots, reordered/filtered lists, and
/// `(message, kind)` pairs. An absent collaborator is modeled by [`NullSink`];
/// nothing is shown and that is tolerated silently.
pub trait RenderSink {
    fn badges(&mut self, counts: &BadgeCounts);
    fn product_list(&mut self, products: &[ProductRecord]);
    fn notification(&mut self, notification: &Notification);
}

/// No-op collaborator: the "rendering surface is absent" failure mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn badges(&mut self, _counts: &BadgeCounts) {}
    fn product_list(&mut self, _products: &[ProductRecord]) {}
    fn notification(&mut self, _notification: &Notification) {}
}

/// Abstract trigger vocabulary raised by the (out of scope) trigger source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreAction {
    ToggleWishlist(String),
    AddToCart { name: String, price: f64 },
    AddToCompare(String),
    CompareNow,
    Sort(String),
    Filter(String),
    FilterByMaxPrice(f64),
    SubmitLogin(Credentials),
    SubscribeNewsletter(String),
    Search(String),
}

/// All state one browsing session owns.
///
/// Created on session start, discarded on session end; there are no ambient
/// globals and nothing survives a reload.
#[derive(Debug, Clone)]
pub struct SessionState {
    id: SessionId,
    products: Vec<ProductRecord>,
    tracker: CollectionTracker,
    notifications: NotificationSlot,
}

impl SessionState {
    /// Start a session over the product records currently visible on the page.
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self {
            id: SessionId::new(),
            products,
            tracker: CollectionTracker::new(),
            notifications: NotificationSlot::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn tracker(&self) -> &CollectionTracker {
        &self.tracker
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// The notification visible at `now`, if any.
    pub fn notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notifications.visible(now)
    }

    fn badge_counts(&self) -> BadgeCounts {
        BadgeCounts {
            wishlist: self.tracker.wishlist_count(),
            cart: self.tracker.cart_count(),
            compare: self.tracker.compare().len(),
            compare_ready: self.tracker.compare().len() >= 2,
        }
    }

    fn knows_product(&self, name: &str) -> bool {
        self.products.iter().any(|p| p.name == name)
    }

    fn notify(
        &mut self,
        sink: &mut dyn RenderSink,
        now: DateTime<Utc>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) {
        let notification = Notification::new(message, kind);
        self.notifications.post(notification.clone(), now);
        sink.notification(&notification);
    }

    /// Handle one trigger. Synchronous and runs to completion; every failure
    /// inside is either surfaced as a notification or dropped as a no-op.
    pub fn dispatch(&mut self, action: StoreAction, now: DateTime<Utc>, sink: &mut dyn RenderSink) {
        debug!(session = %self.id, ?action, "dispatching action");
        match action {
            StoreAction::ToggleWishlist(name) => {
                if !self.knows_product(&name) {
                    debug!(%name, "unknown product, dropping trigger");
                    return;
                }
                let (message, kind) = if self.tracker.toggle_wishlist(&name) {
                    (format!("{name} added to wishlist"), NotificationKind::Success)
                } else {
                    (format!("{name} removed from wishlist"), NotificationKind::Info)
                };
                self.notify(sink, now, message, kind);
                sink.badges(&self.badge_counts());
            }
            StoreAction::AddToCart { name, price } => {
                if !self.knows_product(&name) {
                    debug!(%name, "unknown product, dropping trigger");
                    return;
                }
                self.tracker.add_to_cart(&name, price);
                self.notify(sink, now, format!("{name} added to cart"), NotificationKind::Success);
                sink.badges(&self.badge_counts());
            }
            StoreAction::AddToCompare(name) => {
                if !self.knows_product(&name) {
                    debug!(%name, "unknown product, dropping trigger");
                    return;
                }
                match self.tracker.add_to_compare(&name) {
                    Ok(_) => {
                        self.notify(
                            sink,
                            now,
                            format!("{name} added to comparison"),
                            NotificationKind::Success,
                        );
                        sink.badges(&self.badge_counts());
                    }
                    Err(err) => {
                        warn!(%name, %err, "compare list rejected insertion");
                        self.notify(
                            sink,
                            now,
                            "You can compare maximum 3 products",
                            NotificationKind::Warning,
                        );
                    }
                }
            }
            StoreAction::CompareNow => {
                let compare = self.tracker.compare();
                if compare.len() < 2 {
                    debug!("compare requested with fewer than two products");
                    return;
                }
                let joined = compare.members().join(", ");
                self.notify(sink, now, format!("Comparing: {joined}"), NotificationKind::Info);
            }
            StoreAction::Sort(label) => {
                let sorted = sort_by_label(&self.products, &label);
                sink.product_list(&sorted);
            }
            StoreAction::Filter(category) => {
                let filtered = filter(&self.products, &category);
                sink.product_list(&filtered);
            }
            StoreAction::FilterByMaxPrice(max_price) => {
                let filtered = filter_by_max_price(&self.products, max_price);
                sink.product_list(&filtered);
                self.notify(
                    sink,
                    now,
                    format!("Showing products under ${max_price}"),
                    NotificationKind::Info,
                );
            }
            StoreAction::SubmitLogin(credentials) => match credentials.validate() {
                Ok(()) => {
                    self.notify(
                        sink,
                        now,
                        "Login successful! Redirecting...",
                        NotificationKind::Success,
                    );
                }
                Err(err) => {
                    self.notify(sink, now, err.to_string(), NotificationKind::Error);
                }
            },
            StoreAction::SubscribeNewsletter(email) => {
                if email.trim().is_empty() {
                    return;
                }
                self.notify(
                    sink,
                    now,
                    "Thank you for subscribing to our newsletter!",
                    NotificationKind::Success,
                );
            }
            StoreAction::Search(query) => {
                // Trim only gates the no-op; the banner echoes the raw query.
                if query.trim().is_empty() {
                    return;
                }
                self.notify(sink, now, format!("Searching for \"{query}\"..."), NotificationKind::Info);
            }
        }
    }
}
