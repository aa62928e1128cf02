use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user(first: Option<&str>, last: Option<&str>) -> User {
    User {
        id: "u-1".to_owned(),
        email: "foreman1@democorp.local".to_owned(),
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
        role: Role::Foreman,
        tenant_id: "t-1".to_owned(),
        department_id: None,
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_round_trips_through_wire_names() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", role.as_str()));
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("superuser"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn approver_roles_exclude_employee_and_training_officer() {
    assert!(Role::Foreman.is_approver());
    assert!(Role::Manager.is_approver());
    assert!(Role::Administrator.is_approver());
    assert!(!Role::Employee.is_approver());
    assert!(!Role::TrainingOfficer.is_approver());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_me_payload_with_nulls() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-9",
        "email": "manager1@democorp.local",
        "first_name": null,
        "last_name": null,
        "role": "manager",
        "tenant_id": "t-1",
        "department_id": null
    }))
    .unwrap();
    assert_eq!(user.role, Role::Manager);
    assert_eq!(user.department_id, None);
    assert_eq!(user.display_name(), "manager1@democorp.local");
}

#[test]
fn display_name_joins_present_name_parts() {
    assert_eq!(make_user(Some("Foreman"), Some("One")).display_name(), "Foreman One");
    assert_eq!(make_user(Some("Foreman"), None).display_name(), "Foreman");
    assert_eq!(make_user(Some("  "), None).display_name(), "foreman1@democorp.local");
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(make_user(Some("foreman"), Some("one")).initials(), "FO");
    assert_eq!(make_user(None, None).initials(), "F");
}

#[test]
fn login_response_converts_user_id_to_id() {
    let body: LoginResponse = serde_json::from_value(serde_json::json!({
        "user_id": "u-2",
        "email": "admin@democorp.local",
        "first_name": "Admin",
        "last_name": "Demo",
        "role": "administrator",
        "tenant_id": "t-1",
        "department_id": "d-1"
    }))
    .unwrap();
    let user = User::from(body);
    assert_eq!(user.id, "u-2");
    assert_eq!(user.role, Role::Administrator);
    assert_eq!(user.department_id.as_deref(), Some("d-1"));
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_reads_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid email or password"}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Invalid email or password"));
}

#[test]
fn error_body_joins_validation_messages() {
    let body: ErrorBody = serde_json::from_str(
        r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"too short"}]}"#,
    )
    .unwrap();
    assert_eq!(body.message().as_deref(), Some("field required; too short"));
}

#[test]
fn error_body_without_detail_has_no_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message(), None);
    let blank: ErrorBody = serde_json::from_str(r#"{"detail":"   "}"#).unwrap();
    assert_eq!(blank.message(), None);
}

// =============================================================
// Notification
// =============================================================

#[test]
fn notification_kind_decodes_known_and_unknown_values() {
    assert_eq!(NotificationKind::from_wire("expiry_warning"), NotificationKind::ExpiryWarning);
    assert_eq!(NotificationKind::from_wire("ESCALATION"), NotificationKind::Escalation);
    assert_eq!(NotificationKind::from_wire("renewal_request"), NotificationKind::RenewalRequest);
    assert_eq!(NotificationKind::from_wire("approval_needed"), NotificationKind::ApprovalNeeded);
    assert_eq!(NotificationKind::from_wire("course_published"), NotificationKind::Other);
}

#[test]
fn notification_deserializes_type_and_read_alias() {
    let n: Notification = serde_json::from_value(serde_json::json!({
        "id": "n-1",
        "type": "approval_needed",
        "title": "Renewal awaiting approval",
        "message": "Employee One requested renewal",
        "read": true,
        "created_at": "2026-10-01T08:00:00"
    }))
    .unwrap();
    assert_eq!(n.kind, NotificationKind::ApprovalNeeded);
    assert!(n.is_read);
}

#[test]
fn notification_read_flag_defaults_to_false() {
    let n: Notification = serde_json::from_value(serde_json::json!({
        "id": "n-2",
        "type": "mystery",
        "title": "t",
        "message": "m",
        "created_at": "2026-10-01T08:00:00"
    }))
    .unwrap();
    assert_eq!(n.kind, NotificationKind::Other);
    assert!(!n.is_read);
}

// =============================================================
// Status / IntegrationKind
// =============================================================

#[test]
fn status_parse_matches_wire_names() {
    for status in Status::ALL {
        assert_eq!(Status::parse(status.as_str()), Some(status));
        assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", status.as_str()));
    }
    assert_eq!(Status::parse(" Manager_Approved "), Some(Status::ManagerApproved));
    assert_eq!(Status::parse("archived"), None);
}

#[test]
fn integration_kind_defaults_to_api() {
    assert_eq!(IntegrationKind::default(), IntegrationKind::Api);
    assert_eq!(IntegrationKind::parse("database"), Some(IntegrationKind::Database));
    assert_eq!(IntegrationKind::parse("ftp"), None);
}
