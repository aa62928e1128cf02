use super::*;

const NOW: &str = "2026-06-01T09:00:00Z";

fn draft(name: &str, provider: &str) -> IntegrationDraft {
    IntegrationDraft {
        name: name.to_owned(),
        provider: provider.to_owned(),
        is_active: true,
        ..IntegrationDraft::default()
    }
}

// =============================================================
// save_draft
// =============================================================

#[test]
fn save_without_existing_creates() {
    let mut state = IntegrationsState::seeded();
    let before = state.integrations.len();
    let id = save_draft(&mut state, None, &draft("Payroll", "ADP"), NOW).unwrap();
    assert_eq!(state.integrations.len(), before + 1);
    assert_eq!(state.get(&id).map(|i| i.name.as_str()), Some("Payroll"));
}

#[test]
fn save_with_existing_updates_in_place() {
    let mut state = IntegrationsState::seeded();
    let before = state.integrations.len();
    let id = save_draft(&mut state, Some("int-moodle"), &draft("Moodle LMS", "Moodle"), NOW).unwrap();
    assert_eq!(id, "int-moodle");
    assert_eq!(state.integrations.len(), before);
    let saved = state.get("int-moodle").unwrap();
    assert_eq!(saved.name, "Moodle LMS");
    assert_eq!(saved.updated_at, NOW);
}

#[test]
fn save_reports_validation_error() {
    let mut state = IntegrationsState::seeded();
    let before = state.integrations.len();
    assert_eq!(save_draft(&mut state, None, &draft("  ", "ADP"), NOW), Err(DraftError::MissingName));
    assert_eq!(state.integrations.len(), before);
}

#[test]
fn save_unknown_existing_is_not_found() {
    let mut state = IntegrationsState::seeded();
    assert_eq!(save_draft(&mut state, Some("int-missing"), &draft("X", "Y"), NOW), Err(DraftError::NotFound));
}
