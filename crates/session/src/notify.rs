//! Single-slot transient notification surface.
//!
//! At most one notification is visible at a time; posting replaces whatever is
//! showing (last-write-wins, nothing is queued). Each notification dismisses
//! itself [`DISMISS_AFTER_MS`] after posting. The dismissal is modeled as a
//! deadline checked against an explicitly passed clock rather than a timer, so
//! posting a replacement implicitly cancels the pending dismissal.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Auto-dismiss delay in milliseconds.
pub const DISMISS_AFTER_MS: i64 = 3000;

/// Visual flavor of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl core::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Warning => write!(f, "warning"),
        }
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// The single notification slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSlot {
    current: Option<(Notification, DateTime<Utc>)>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notification`, evicting anything currently visible and arming a
    /// fresh dismissal deadline.
    pub fn post(&mut self, notification: Notification, now: DateTime<Utc>) {
        let deadline = now + Duration::milliseconds(DISMISS_AFTER_MS);
        self.current = Some((notification, deadline));
    }

    /// The notification visible at `now`, if its deadline has not passed.
    pub fn visible(&self, now: DateTime<Utc>) -> Option<&Notification> {
        match &self.current {
            Some((n, deadline)) if now < *deadline => Some(n),
            _ => None,
        }
    }
}
