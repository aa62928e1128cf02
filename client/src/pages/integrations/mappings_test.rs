use super::*;
use crate::i18n::translations;
use crate::state::language::Language;

fn draft(source: &str, target: &str, transform: &str) -> MappingDraft {
    MappingDraft {
        source_field: source.to_owned(),
        target_field: target.to_owned(),
        transform: transform.to_owned(),
        required: false,
    }
}

// =============================================================
// transform_is_valid
// =============================================================

#[test]
fn blank_and_known_transforms_are_valid() {
    assert!(transform_is_valid(""));
    assert!(transform_is_valid("   "));
    assert!(transform_is_valid("upper"));
    assert!(transform_is_valid("substring(1, 4)"));
}

#[test]
fn unknown_transform_is_invalid() {
    assert!(!transform_is_valid("capitalize"));
    assert!(!transform_is_valid("substring(1)"));
}

// =============================================================
// submit_mapping
// =============================================================

#[test]
fn submit_adds_mapping() {
    let mut state = IntegrationsState::seeded();
    let before = state.mappings_for("int-moodle").len();
    submit_mapping(&mut state, "int-moodle", &draft("grade", "final_grade", "trim")).unwrap();
    assert_eq!(state.mappings_for("int-moodle").len(), before + 1);
}

#[test]
fn submit_rejects_unknown_transform_before_touching_store() {
    let mut state = IntegrationsState::seeded();
    let before = state.mappings_for("int-moodle").len();
    let err = submit_mapping(&mut state, "int-moodle", &draft("grade", "final_grade", "reverse")).unwrap_err();
    assert_eq!(err, MappingFormError::UnknownTransform);
    assert_eq!(state.mappings_for("int-moodle").len(), before);
}

#[test]
fn submit_surfaces_duplicate_target() {
    let mut state = IntegrationsState::seeded();
    let err = submit_mapping(&mut state, "int-moodle", &draft("shortname", "course_code", "")).unwrap_err();
    assert_eq!(err, MappingFormError::Draft(DraftError::DuplicateTarget));
}

#[test]
fn form_error_messages_come_from_translations() {
    let text = &translations(Language::En).integrations;
    assert_eq!(MappingFormError::UnknownTransform.message(text), text.transform_hint);
    assert_eq!(MappingFormError::Draft(DraftError::MissingSourceField).message(text), text.error_missing_source);
}

// =============================================================
// default_sample
// =============================================================

#[test]
fn default_sample_previews_cleanly() {
    let state = IntegrationsState::seeded();
    let mappings = state.mappings_for("int-sap");
    let sample = default_sample(mappings);
    let output = preview(mappings, &sample).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["email"], "sample email");
    assert_eq!(parsed["department_code"], "sampl");
}

#[test]
fn default_sample_without_mappings_is_empty_object() {
    assert_eq!(default_sample(&[]), "{}");
}
