use super::*;
use crate::net::types::NotificationKind;

fn notification(n: usize) -> Notification {
    Notification {
        id: format!("n-{n}"),
        kind: NotificationKind::ApprovalNeeded,
        title: "Renewal waiting".to_owned(),
        message: String::new(),
        is_read: false,
        created_at: format!("2026-05-{:02}T08:00:00Z", n + 1),
    }
}

#[test]
fn recent_notifications_are_capped_and_newest_first() {
    let items: Vec<Notification> = (0..8).map(notification).collect();
    let recent = recent_notifications(&items);
    assert_eq!(recent.len(), RECENT_LIMIT);
    assert_eq!(recent[0].id, "n-7");
    assert_eq!(recent[RECENT_LIMIT - 1].id, "n-3");
}

#[test]
fn recent_notifications_short_list_is_kept_whole() {
    let items: Vec<Notification> = (0..2).map(notification).collect();
    assert_eq!(recent_notifications(&items).len(), 2);
}

#[test]
fn notification_row_id_is_notification_id() {
    assert_eq!(notification(4).row_id(), "n-4");
}

#[test]
fn dashboard_tables_define_columns_in_both_languages() {
    use crate::i18n::translations;
    use crate::state::language::Language;

    for lang in Language::ALL {
        let keys: Vec<&str> = attention_columns(translations(lang)).iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["employee", "course", "department", "expiry", "status"]);
        assert_eq!(notification_columns(translations(lang)).len(), 4);
    }
}
