//! `/integrations/:id/mappings`: field mapping rules with a live preview of
//! how a sample provider record comes out the other side.

#[cfg(test)]
#[path = "mappings_test.rs"]
mod mappings_test;

use leptos::prelude::*;
use serde_json::{Map, Value};

use super::{IntegrationHeader, IntegrationTab, use_integration_id};
use crate::components::data_table::{Column, DataTable};
use crate::components::icon::SvgIcon;
use crate::i18n::{IntegrationText, Translations};
use crate::net::types::FieldMapping;
use crate::state::integrations::{DraftError, IntegrationsState, MappingDraft};
use crate::state::language::use_language;
use crate::util::icons::Icon;
use crate::util::mapping::{Transform, preview};

/// Why the add-mapping form was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingFormError {
    Draft(DraftError),
    UnknownTransform,
}

impl MappingFormError {
    #[must_use]
    pub fn message(self, text: &IntegrationText) -> &'static str {
        match self {
            Self::Draft(err) => text.draft_error(err),
            Self::UnknownTransform => text.transform_hint,
        }
    }
}

/// Blank means no transform; anything else must parse.
#[must_use]
pub fn transform_is_valid(raw: &str) -> bool {
    raw.trim().is_empty() || Transform::parse(raw).is_some()
}

/// Check the transform, then add the mapping to integration `id`.
///
/// # Errors
///
/// Returns [`MappingFormError::UnknownTransform`] or the store's draft error.
pub fn submit_mapping(state: &mut IntegrationsState, id: &str, draft: &MappingDraft) -> Result<String, MappingFormError> {
    if !transform_is_valid(&draft.transform) {
        return Err(MappingFormError::UnknownTransform);
    }
    state.add_mapping(id, draft).map_err(MappingFormError::Draft)
}

/// Pretty-printed sample record with one placeholder per mapped source field.
#[must_use]
pub fn default_sample(mappings: &[FieldMapping]) -> String {
    let record: Map<String, Value> = mappings
        .iter()
        .map(|m| (m.source_field.clone(), Value::String(format!("sample {}", m.source_field))))
        .collect();
    format!("{:#}", Value::Object(record))
}

fn columns(text: &'static Translations, store: RwSignal<IntegrationsState>, id: Memo<String>) -> Vec<Column<FieldMapping>> {
    let t = &text.integrations;
    vec![
        Column::new("source", t.col_source, |row: &FieldMapping| row.source_field.clone())
            .with_class("data-table__cell--mono"),
        Column::new("target", t.col_target, |row: &FieldMapping| row.target_field.clone())
            .with_class("data-table__cell--mono"),
        Column::new("transform", t.col_transform, |row: &FieldMapping| {
            row.transform_function.clone().unwrap_or_else(|| "-".to_owned())
        }),
        Column::new("required", t.col_required, move |row: &FieldMapping| {
            if row.required { text.common.yes } else { text.common.no }
        }),
        Column::new("actions", t.col_actions, move |row: &FieldMapping| {
            let mapping_id = row.id.clone();
            view! {
                <button
                    class="btn btn--sm btn--danger"
                    title=text.common.delete
                    on:click=move |_| {
                        let integration_id = id.get_untracked();
                        store.update(|s| {
                            s.remove_mapping(&integration_id, &mapping_id);
                        });
                    }
                >
                    <SvgIcon icon=Icon::Trash/>
                </button>
            }
        }),
    ]
}

#[component]
pub fn IntegrationMappingsPage() -> impl IntoView {
    let store = expect_context::<RwSignal<IntegrationsState>>();
    let lang = use_language();
    let id = use_integration_id();

    let mappings = Signal::derive(move || store.with(|s| s.mappings_for(&id.get()).to_vec()));
    let sample = RwSignal::new(mappings.with_untracked(|m| default_sample(m)));
    let output = Memo::new(move |_| mappings.with(|m| preview(m, &sample.get())));

    let draft = RwSignal::new(MappingDraft::default());
    let error = RwSignal::new(None::<MappingFormError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = draft.get();
        let current = id.get_untracked();
        let result = store
            .try_update(|s| submit_mapping(s, &current, &submitted))
            .unwrap_or(Err(MappingFormError::Draft(DraftError::NotFound)));
        match result {
            Ok(_) => {
                draft.set(MappingDraft::default());
                error.set(None);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <div class="page integration-mappings-page">
            <IntegrationHeader id=id active=IntegrationTab::Mappings/>
            <section class="panel">
                <DataTable
                    columns=Signal::derive(move || columns(lang.text(), store, id))
                    data=mappings
                    empty_message=Signal::derive(move || lang.text().integrations.mappings_empty.to_owned())
                />
            </section>

            <form class="panel form form--row" on:submit=on_submit>
                <input
                    class="field__input"
                    placeholder=move || lang.text().integrations.col_source
                    prop:value=move || draft.with(|d| d.source_field.clone())
                    on:input=move |ev| draft.update(|d| d.source_field = event_target_value(&ev))
                />
                <input
                    class="field__input"
                    placeholder=move || lang.text().integrations.col_target
                    prop:value=move || draft.with(|d| d.target_field.clone())
                    on:input=move |ev| draft.update(|d| d.target_field = event_target_value(&ev))
                />
                <input
                    class="field__input"
                    placeholder="upper | lower | trim | substring(0, 3)"
                    prop:value=move || draft.with(|d| d.transform.clone())
                    on:input=move |ev| draft.update(|d| d.transform = event_target_value(&ev))
                />
                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.required)
                        on:change=move |ev| draft.update(|d| d.required = event_target_checked(&ev))
                    />
                    <span>{move || lang.text().integrations.col_required}</span>
                </label>
                <button type="submit" class="btn btn--primary">
                    <SvgIcon icon=Icon::Plus/>
                    {move || lang.text().integrations.add_mapping}
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="form__error" role="alert">
                        {move || error.get().map(|err| err.message(&lang.text().integrations))}
                    </p>
                </Show>
            </form>

            <section class="panel preview">
                <h2 class="panel__title">{move || lang.text().integrations.preview_title}</h2>
                <div class="preview__grid">
                    <label class="field">
                        <span class="field__label">{move || lang.text().integrations.preview_sample}</span>
                        <textarea
                            class="field__input preview__input"
                            rows="10"
                            spellcheck="false"
                            prop:value=move || sample.get()
                            on:input=move |ev| sample.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="field">
                        <span class="field__label">{move || lang.text().integrations.preview_output}</span>
                        {move || match output.get() {
                            Ok(json) => view! { <pre class="preview__output">{json}</pre> }.into_any(),
                            Err(err) => view! { <p class="form__error">{err.to_string()}</p> }.into_any(),
                        }}
                    </div>
                </div>
            </section>
        </div>
    }
}
