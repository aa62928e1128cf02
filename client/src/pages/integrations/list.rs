//! `/integrations`: configured connectors with activate, delete and
//! navigation to their sub-pages.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::{IntegrationTab, LocalOnlyNotice, integration_path};
use crate::components::data_table::{Column, DataTable};
use crate::components::icon::SvgIcon;
use crate::components::status_badge::StatusBadge;
use crate::i18n::Translations;
use crate::net::types::{Integration, Status};
use crate::state::integrations::IntegrationsState;
use crate::state::language::use_language;
use crate::util::format::{now_iso, short_date};
use crate::util::icons::Icon;

#[must_use]
pub fn active_status(integration: &Integration) -> Status {
    if integration.is_active { Status::Active } else { Status::Inactive }
}

fn columns(text: &'static Translations, store: RwSignal<IntegrationsState>) -> Vec<Column<Integration>> {
    let t = &text.integrations;
    vec![
        Column::new("name", t.col_name, |row: &Integration| {
            let href = integration_path(&row.id, IntegrationTab::Edit);
            let name = row.name.clone();
            view! { <A href=href attr:class="data-table__link">{name}</A> }
        }),
        Column::new("provider", t.col_provider, |row: &Integration| row.provider.clone())
            .with_class("data-table__cell--mono"),
        Column::new("type", t.col_type, move |row: &Integration| t.kind_label(row.kind)),
        Column::new("status", t.col_status, |row: &Integration| view! { <StatusBadge status=active_status(row)/> }),
        Column::new("updated", t.col_updated, |row: &Integration| short_date(&row.updated_at).to_owned()),
        Column::new("actions", t.col_actions, move |row: &Integration| {
            let id = row.id.clone();
            let toggle_id = id.clone();
            let delete_id = id.clone();
            let next_active = !row.is_active;
            let toggle_label = if row.is_active { t.deactivate } else { t.activate };
            view! {
                <div class="data-table__actions">
                    <button
                        class="btn btn--sm"
                        on:click=move |_| {
                            let now = now_iso();
                            store.update(|s| {
                                if let Err(err) = s.set_active(&toggle_id, next_active, &now) {
                                    leptos::logging::warn!("toggle integration failed: {err}");
                                }
                            });
                        }
                    >
                        {toggle_label}
                    </button>
                    <A href=integration_path(&id, IntegrationTab::Logs) attr:class="btn btn--sm btn--ghost">
                        {t.tab_logs}
                    </A>
                    <A href=integration_path(&id, IntegrationTab::Mappings) attr:class="btn btn--sm btn--ghost">
                        {t.tab_mappings}
                    </A>
                    <A href=integration_path(&id, IntegrationTab::Webhooks) attr:class="btn btn--sm btn--ghost">
                        {t.tab_webhooks}
                    </A>
                    <button
                        class="btn btn--sm btn--danger"
                        title=text.common.delete
                        on:click=move |_| {
                            store.update(|s| {
                                s.remove(&delete_id);
                            });
                        }
                    >
                        <SvgIcon icon=Icon::Trash/>
                    </button>
                </div>
            }
        }),
    ]
}

#[component]
pub fn IntegrationListPage() -> impl IntoView {
    let store = expect_context::<RwSignal<IntegrationsState>>();
    let lang = use_language();

    view! {
        <div class="page integrations-page">
            <header class="page__header page__header--row">
                <div>
                    <h1>{move || lang.text().integrations.title}</h1>
                    <p>{move || lang.text().integrations.subtitle}</p>
                </div>
                <A href="/integrations/new" attr:class="btn btn--primary">
                    <SvgIcon icon=Icon::Plus/>
                    {move || lang.text().integrations.new_button}
                </A>
            </header>
            <LocalOnlyNotice/>
            <section class="panel">
                <DataTable
                    columns=Signal::derive(move || columns(lang.text(), store))
                    data=Signal::derive(move || store.with(|s| s.integrations.clone()))
                    empty_message=Signal::derive(move || lang.text().integrations.empty.to_owned())
                />
            </section>
        </div>
    }
}
