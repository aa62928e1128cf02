//! Notification inbox state shared by the bell and the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bell polls `GET /api/notifications` and folds each answer in through
//! [`NotificationsState::apply_poll`]. A failed poll keeps the last good list,
//! so the UI degrades to stale data rather than an error.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::api::ApiError;
use crate::net::types::Notification;

/// Interval between notification polls.
pub const NOTIFICATION_POLL_MS: u64 = 30_000;

/// Highest unread count shown as a number; anything above reads `"9+"`.
pub const BADGE_CAP: usize = 9;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    /// Set after the first poll answers, successfully or not.
    pub loaded: bool,
    pub last_error: Option<ApiError>,
}

impl NotificationsState {
    pub fn apply_poll(&mut self, result: Result<Vec<Notification>, ApiError>) {
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
    }

    #[must_use]
    pub fn unread(&self) -> usize {
        unread_count(&self.items)
    }

    #[must_use]
    pub fn newest_first(&self) -> Vec<Notification> {
        newest_first(&self.items)
    }
}

#[must_use]
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.is_read).count()
}

/// Text for the bell badge; `None` hides the badge.
#[must_use]
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

/// Copy of `items` ordered by `created_at` descending. ISO-8601 timestamps
/// compare correctly as strings.
#[must_use]
pub fn newest_first(items: &[Notification]) -> Vec<Notification> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}
