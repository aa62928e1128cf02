use super::*;

#[test]
fn every_status_has_a_badge() {
    for status in Status::ALL {
        let config = badge_config(status);
        assert!(config.tone.class().starts_with("badge--"), "{status:?}");
        assert!(config.icon.path().starts_with('M'), "{status:?}");
    }
}

#[test]
fn terminal_failures_are_danger() {
    for status in [Status::Expired, Status::Rejected, Status::Blocked, Status::Failed] {
        assert_eq!(badge_config(status).tone, BadgeTone::Danger, "{status:?}");
    }
}

#[test]
fn good_outcomes_are_success() {
    for status in [Status::Completed, Status::Success, Status::ManagerApproved] {
        assert_eq!(badge_config(status).tone, BadgeTone::Success, "{status:?}");
    }
}

#[test]
fn waiting_states_are_not_success() {
    assert_eq!(badge_config(Status::Pending).tone, BadgeTone::Warning);
    assert_eq!(badge_config(Status::Running).tone, BadgeTone::Info);
    assert_eq!(badge_config(Status::Inactive).tone, BadgeTone::Neutral);
}
