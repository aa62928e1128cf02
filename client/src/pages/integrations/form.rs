//! Create (`/integrations/new`) and edit (`/integrations/:id/edit`) form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{INTEGRATIONS_PATH, IntegrationHeader, IntegrationTab, LocalOnlyNotice, use_integration_id};
use crate::net::types::IntegrationKind;
use crate::state::integrations::{DraftError, IntegrationDraft, IntegrationsState};
use crate::state::language::use_language;
use crate::util::format::now_iso;
use crate::util::redact::redacted_entries;

/// Apply a submitted draft: update `existing` or create a new integration.
/// Returns the id of the saved integration.
///
/// # Errors
///
/// Returns the draft's validation error or [`DraftError::NotFound`].
pub fn save_draft(
    state: &mut IntegrationsState,
    existing: Option<&str>,
    draft: &IntegrationDraft,
    now: &str,
) -> Result<String, DraftError> {
    match existing {
        Some(id) => state.update(id, draft, now).map(|()| id.to_owned()),
        None => state.create(draft, now),
    }
}

#[component]
pub fn NewIntegrationPage() -> impl IntoView {
    let lang = use_language();
    view! {
        <div class="page integration-form-page">
            <header class="page__header">
                <h1>{move || lang.text().integrations.create_title}</h1>
            </header>
            <LocalOnlyNotice/>
            <IntegrationForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditIntegrationPage() -> impl IntoView {
    let id = use_integration_id();
    view! {
        <div class="page integration-form-page">
            <IntegrationHeader id=id active=IntegrationTab::Edit/>
            {move || view! { <IntegrationForm existing=Some(id.get())/> }}
        </div>
    }
}

#[component]
fn IntegrationForm(existing: Option<String>) -> impl IntoView {
    let store = expect_context::<RwSignal<IntegrationsState>>();
    let lang = use_language();
    let navigate = use_navigate();

    let found = existing.as_deref().map(|id| store.with_untracked(|s| s.get(id).cloned()));
    if matches!(found, Some(None)) {
        return ().into_any();
    }
    let found = found.flatten();
    let editing = found.is_some();
    let config = found.as_ref().map(|integration| redacted_entries(&integration.config)).unwrap_or_default();
    let initial = found
        .as_ref()
        .map(IntegrationDraft::from_integration)
        .unwrap_or_else(|| IntegrationDraft { is_active: true, ..IntegrationDraft::default() });

    let draft = RwSignal::new(initial);
    let error = RwSignal::new(None::<DraftError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = draft.get();
        let now = now_iso();
        let result = store
            .try_update(|s| save_draft(s, existing.as_deref(), &submitted, &now))
            .unwrap_or(Err(DraftError::NotFound));
        match result {
            Ok(_) => navigate(INTEGRATIONS_PATH, NavigateOptions::default()),
            Err(err) => error.set(Some(err)),
        }
    };

    let kind_options = move || {
        let text = &lang.text().integrations;
        IntegrationKind::ALL
            .into_iter()
            .map(|kind| view! { <option value=kind.as_str()>{text.kind_label(kind)}</option> })
            .collect_view()
    };

    let config_rows = config
        .into_iter()
        .map(|(key, value)| {
            view! {
                <dt>{key}</dt>
                <dd class="data-table__cell--mono">{value}</dd>
            }
        })
        .collect_view();

    view! {
        <form class="panel form" on:submit=on_submit>
            <label class="field">
                <span class="field__label">{move || lang.text().integrations.field_name}</span>
                <input
                    class="field__input"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">{move || lang.text().integrations.field_provider}</span>
                <input
                    class="field__input"
                    prop:value=move || draft.with(|d| d.provider.clone())
                    on:input=move |ev| draft.update(|d| d.provider = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">{move || lang.text().integrations.field_type}</span>
                <select
                    class="field__input"
                    prop:value=move || draft.with(|d| d.kind.as_str())
                    on:change=move |ev| {
                        let kind = IntegrationKind::parse(&event_target_value(&ev)).unwrap_or_default();
                        draft.update(|d| d.kind = kind);
                    }
                >
                    {kind_options}
                </select>
            </label>
            <label class="field">
                <span class="field__label">{move || lang.text().integrations.field_description}</span>
                <textarea
                    class="field__input"
                    rows="3"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span class="field__label">{move || lang.text().integrations.field_events}</span>
                <input
                    class="field__input"
                    placeholder="employee.created, employee.updated"
                    prop:value=move || draft.with(|d| d.events.clone())
                    on:input=move |ev| draft.update(|d| d.events = event_target_value(&ev))
                />
                <span class="field__hint">{move || lang.text().integrations.events_hint}</span>
            </label>
            <label class="field field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.is_active)
                    on:change=move |ev| draft.update(|d| d.is_active = event_target_checked(&ev))
                />
                <span>{move || lang.text().integrations.field_active}</span>
            </label>
            <Show when=move || error.get().is_some()>
                <p class="form__error" role="alert">
                    {move || error.get().map(|err| lang.text().integrations.draft_error(err))}
                </p>
            </Show>
            <div class="form__actions">
                <a href=INTEGRATIONS_PATH class="btn btn--ghost">{move || lang.text().common.cancel}</a>
                <button type="submit" class="btn btn--primary">{move || lang.text().common.save}</button>
            </div>
        </form>
        {editing.then(|| view! {
            <section class="panel">
                <h2 class="panel__title">{move || lang.text().integrations.config_title}</h2>
                <dl class="detail-list">{config_rows}</dl>
            </section>
        })}
    }
    .into_any()
}
