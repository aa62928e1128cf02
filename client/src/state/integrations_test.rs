use super::*;
use crate::net::types::Status;

const T0: &str = "2026-05-01T09:00:00Z";
const T1: &str = "2026-05-02T09:00:00Z";

fn draft(name: &str, provider: &str) -> IntegrationDraft {
    IntegrationDraft {
        name: name.to_owned(),
        provider: provider.to_owned(),
        kind: IntegrationKind::Api,
        description: String::new(),
        is_active: true,
        events: String::new(),
    }
}

fn mapping(source: &str, target: &str) -> MappingDraft {
    MappingDraft { source_field: source.to_owned(), target_field: target.to_owned(), ..MappingDraft::default() }
}

fn store_with_one() -> (IntegrationsState, String) {
    let mut state = IntegrationsState::default();
    let id = state.create(&draft("SAP HR", "sap"), T0).unwrap();
    (state, id)
}

fn event(integration_id: &str, event_type: &str, created_at: &str) -> WebhookEvent {
    WebhookEvent {
        id: format!("{event_type}-{created_at}"),
        integration_id: integration_id.to_owned(),
        event_type: event_type.to_owned(),
        data: serde_json::json!({}),
        processed: false,
        created_at: created_at.to_owned(),
    }
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn draft_requires_name_then_provider() {
    assert_eq!(draft("  ", "sap").validate(), Err(DraftError::MissingName));
    assert_eq!(draft("SAP", "").validate(), Err(DraftError::MissingProvider));
    assert_eq!(draft("SAP", "sap").validate(), Ok(()));
}

#[test]
fn parse_events_trims_and_dedupes() {
    assert_eq!(
        parse_events(" employee.created, ,employee.updated,employee.created "),
        vec!["employee.created".to_owned(), "employee.updated".to_owned()]
    );
    assert!(parse_events("  ").is_empty());
}

#[test]
fn draft_round_trips_from_integration() {
    let (state, id) = store_with_one();
    let integration = state.get(&id).unwrap();
    let back = IntegrationDraft::from_integration(integration);
    assert_eq!(back.name, "SAP HR");
    assert_eq!(back.provider, "sap");
    assert!(back.is_active);
}

// =============================================================
// CRUD
// =============================================================

#[test]
fn create_trims_fields_and_stamps_time() {
    let mut state = IntegrationsState::default();
    let mut d = draft("  Moodle  ", " moodle ");
    d.description = "   ".to_owned();
    d.events = "course.completed".to_owned();
    let id = state.create(&d, T0).unwrap();
    let created = state.get(&id).unwrap();
    assert_eq!(created.name, "Moodle");
    assert_eq!(created.provider, "moodle");
    assert_eq!(created.description, None);
    assert_eq!(created.subscribed_events, vec!["course.completed".to_owned()]);
    assert_eq!(created.created_at, T0);
    assert_eq!(created.updated_at, T0);
}

#[test]
fn create_rejects_invalid_draft() {
    let mut state = IntegrationsState::default();
    assert_eq!(state.create(&draft("", "x"), T0), Err(DraftError::MissingName));
    assert!(state.integrations.is_empty());
}

#[test]
fn update_changes_fields_and_keeps_config() {
    let (mut state, id) = store_with_one();
    state.integrations[0].config.insert("base_url".to_owned(), "https://hr".to_owned());
    let mut d = draft("SAP SuccessFactors", "sap");
    d.kind = IntegrationKind::Webhook;
    state.update(&id, &d, T1).unwrap();
    let updated = state.get(&id).unwrap();
    assert_eq!(updated.name, "SAP SuccessFactors");
    assert_eq!(updated.kind, IntegrationKind::Webhook);
    assert_eq!(updated.config.get("base_url").map(String::as_str), Some("https://hr"));
    assert_eq!(updated.updated_at, T1);
    assert_eq!(updated.created_at, T0);
}

#[test]
fn update_unknown_id_is_not_found() {
    let (mut state, _) = store_with_one();
    assert_eq!(state.update("missing", &draft("a", "b"), T1), Err(DraftError::NotFound));
}

#[test]
fn set_active_only_touches_timestamp_on_change() {
    let (mut state, id) = store_with_one();
    state.set_active(&id, true, T1).unwrap();
    assert_eq!(state.get(&id).unwrap().updated_at, T0);
    state.set_active(&id, false, T1).unwrap();
    let integration = state.get(&id).unwrap();
    assert!(!integration.is_active);
    assert_eq!(integration.updated_at, T1);
    assert_eq!(state.set_active("missing", true, T1), Err(DraftError::NotFound));
}

#[test]
fn remove_cascades_to_attached_records() {
    let (mut state, id) = store_with_one();
    state.add_mapping(&id, &mapping("emp_no", "employee_id")).unwrap();
    state.events.push(event(&id, "employee.created", T0));
    state.logs.push(IntegrationLog {
        id: "log-1".to_owned(),
        integration_id: id.clone(),
        status: Status::Success,
        message: None,
        records: 4,
        created_at: T0.to_owned(),
    });
    assert!(state.remove(&id));
    assert!(state.integrations.is_empty());
    assert!(state.mappings_for(&id).is_empty());
    assert!(state.logs.is_empty());
    assert!(state.events.is_empty());
    assert!(!state.remove(&id));
}

// =============================================================
// Mappings
// =============================================================

#[test]
fn add_mapping_stores_optional_transform() {
    let (mut state, id) = store_with_one();
    let mut with_transform = mapping(" email ", " work_email ");
    with_transform.transform = "lower".to_owned();
    state.add_mapping(&id, &with_transform).unwrap();
    state.add_mapping(&id, &mapping("name", "full_name")).unwrap();

    let mappings = state.mappings_for(&id);
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0].source_field, "email");
    assert_eq!(mappings[0].target_field, "work_email");
    assert_eq!(mappings[0].transform_function.as_deref(), Some("lower"));
    assert_eq!(mappings[1].transform_function, None);
}

#[test]
fn add_mapping_rejects_duplicate_target_and_missing_fields() {
    let (mut state, id) = store_with_one();
    state.add_mapping(&id, &mapping("a", "target")).unwrap();
    assert_eq!(state.add_mapping(&id, &mapping("b", "target")), Err(DraftError::DuplicateTarget));
    assert_eq!(state.add_mapping(&id, &mapping("", "x")), Err(DraftError::MissingSourceField));
    assert_eq!(state.add_mapping(&id, &mapping("x", " ")), Err(DraftError::MissingTargetField));
    assert_eq!(state.add_mapping("missing", &mapping("x", "y")), Err(DraftError::NotFound));
}

#[test]
fn remove_mapping_by_id() {
    let (mut state, id) = store_with_one();
    let mapping_id = state.add_mapping(&id, &mapping("a", "b")).unwrap();
    assert!(state.remove_mapping(&id, &mapping_id));
    assert!(!state.remove_mapping(&id, &mapping_id));
    assert!(state.mappings_for(&id).is_empty());
}

// =============================================================
// Logs and events
// =============================================================

#[test]
fn logs_for_filters_and_orders_newest_first() {
    let (mut state, id) = store_with_one();
    for (n, (owner, at)) in [(id.as_str(), T0), ("other", T1), (id.as_str(), T1)].into_iter().enumerate() {
        state.logs.push(IntegrationLog {
            id: format!("log-{n}"),
            integration_id: owner.to_owned(),
            status: Status::Success,
            message: None,
            records: 0,
            created_at: at.to_owned(),
        });
    }
    let ids: Vec<String> = state.logs_for(&id).into_iter().map(|log| log.id).collect();
    assert_eq!(ids, vec!["log-2", "log-0"]);
}

#[test]
fn empty_subscription_accepts_all_events() {
    assert!(accepts_event(&[], "anything"));
    let subscribed = vec!["employee.created".to_owned()];
    assert!(accepts_event(&subscribed, "employee.created"));
    assert!(!accepts_event(&subscribed, "employee.deleted"));
}

#[test]
fn events_for_applies_subscription_filter() {
    let (mut state, id) = store_with_one();
    state.events.push(event(&id, "employee.created", T0));
    state.events.push(event(&id, "employee.deleted", T1));
    assert_eq!(state.events_for(&id).len(), 2);

    state.integrations[0].subscribed_events = vec!["employee.created".to_owned()];
    let events = state.events_for(&id);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, "employee.created");
    assert!(state.events_for("missing").is_empty());
}
