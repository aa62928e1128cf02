//! `/integrations/:id/webhooks`: deliveries received from the provider,
//! filtered to the integration's subscribed event types.

#[cfg(test)]
#[path = "webhooks_test.rs"]
mod webhooks_test;

use leptos::prelude::*;

use super::{IntegrationHeader, IntegrationTab, use_integration_id};
use crate::components::data_table::{Column, DataTable};
use crate::components::status_badge::StatusBadge;
use crate::i18n::Translations;
use crate::net::types::{Status, WebhookEvent};
use crate::state::integrations::IntegrationsState;
use crate::state::language::use_language;
use crate::util::format::short_date;

/// Badge shown for an event's processing state.
#[must_use]
pub fn processed_status(event: &WebhookEvent) -> Status {
    if event.processed { Status::Completed } else { Status::Pending }
}

/// Compact single-line rendering of an event payload.
#[must_use]
pub fn payload_preview(event: &WebhookEvent) -> String {
    event.data.to_string()
}

fn columns(text: &'static Translations) -> Vec<Column<WebhookEvent>> {
    let t = &text.integrations;
    vec![
        Column::new("event", t.col_event, |row: &WebhookEvent| row.event_type.clone())
            .with_class("data-table__cell--mono"),
        Column::new("processed", t.col_processed, |row: &WebhookEvent| {
            view! { <StatusBadge status=processed_status(row)/> }
        }),
        Column::new("time", t.col_time, |row: &WebhookEvent| short_date(&row.created_at).to_owned()),
        Column::new("data", t.col_message, |row: &WebhookEvent| view! { <code>{payload_preview(row)}</code> }),
    ]
}

#[component]
pub fn IntegrationWebhooksPage() -> impl IntoView {
    let store = expect_context::<RwSignal<IntegrationsState>>();
    let lang = use_language();
    let id = use_integration_id();

    let events = Signal::derive(move || store.with(|s| s.events_for(&id.get())));
    let subscribed = move || {
        let text = &lang.text().integrations;
        let list = store.with(|s| s.get(&id.get()).map(|i| i.subscribed_events.clone())).unwrap_or_default();
        if list.is_empty() {
            view! { <span class="chip">{text.all_events}</span> }.into_any()
        } else {
            list.into_iter()
                .map(|event| view! { <span class="chip chip--mono">{event}</span> })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="page integration-webhooks-page">
            <IntegrationHeader id=id active=IntegrationTab::Webhooks/>
            <section class="panel">
                <h2 class="panel__title">{move || lang.text().integrations.subscribed}</h2>
                <div class="chip-list">{subscribed}</div>
            </section>
            <section class="panel">
                <DataTable
                    columns=Signal::derive(move || columns(lang.text()))
                    data=events
                    empty_message=Signal::derive(move || lang.text().integrations.events_empty.to_owned())
                />
            </section>
        </div>
    }
}
