use super::*;
use crate::net::types::NotificationKind;

fn notification(id: usize, is_read: bool, created_at: &str) -> Notification {
    Notification {
        id: format!("n-{id}"),
        kind: NotificationKind::ExpiryWarning,
        title: format!("Notice {id}"),
        message: "Certificate expires soon".to_owned(),
        is_read,
        created_at: created_at.to_owned(),
    }
}

fn batch(total: usize, unread: usize) -> Vec<Notification> {
    (0..total).map(|i| notification(i, i >= unread, "2026-01-01T00:00:00Z")).collect()
}

// =============================================================
// Badge
// =============================================================

#[test]
fn twelve_notifications_three_unread_shows_three() {
    let items = batch(12, 3);
    assert_eq!(unread_count(&items), 3);
    assert_eq!(badge_label(unread_count(&items)).as_deref(), Some("3"));
}

#[test]
fn eleven_unread_shows_nine_plus() {
    let items = batch(11, 11);
    assert_eq!(badge_label(unread_count(&items)).as_deref(), Some("9+"));
}

#[test]
fn badge_hidden_when_everything_read() {
    assert_eq!(badge_label(0), None);
    assert_eq!(unread_count(&batch(4, 0)), 0);
}

#[test]
fn badge_boundary_at_nine_and_ten() {
    assert_eq!(badge_label(9).as_deref(), Some("9"));
    assert_eq!(badge_label(10).as_deref(), Some("9+"));
}

// =============================================================
// Polling
// =============================================================

#[test]
fn poll_success_replaces_items() {
    let mut state = NotificationsState::default();
    assert!(!state.loaded);
    state.apply_poll(Ok(batch(2, 1)));
    assert!(state.loaded);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.unread(), 1);
}

#[test]
fn poll_failure_keeps_previous_list() {
    let mut state = NotificationsState::default();
    state.apply_poll(Ok(batch(3, 2)));
    state.apply_poll(Err(ApiError::Status(502)));
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.last_error, Some(ApiError::Status(502)));

    state.apply_poll(Ok(batch(1, 0)));
    assert_eq!(state.items.len(), 1);
    assert!(state.last_error.is_none());
}

#[test]
fn first_poll_failure_still_marks_loaded() {
    let mut state = NotificationsState::default();
    state.apply_poll(Err(ApiError::Network("offline".to_owned())));
    assert!(state.loaded);
    assert!(state.items.is_empty());
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn newest_first_sorts_by_timestamp_descending() {
    let items = vec![
        notification(1, false, "2026-03-01T08:00:00Z"),
        notification(2, false, "2026-03-03T08:00:00Z"),
        notification(3, true, "2026-03-02T08:00:00Z"),
    ];
    let ids: Vec<String> = newest_first(&items).into_iter().map(|n| n.id).collect();
    assert_eq!(ids, vec!["n-2", "n-3", "n-1"]);
}

#[test]
fn poll_interval_is_thirty_seconds() {
    assert_eq!(NOTIFICATION_POLL_MS, 30_000);
}
