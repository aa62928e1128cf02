//! `/integrations/:id/logs`: sync history for one integration.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use leptos::prelude::*;

use super::{IntegrationHeader, IntegrationTab, use_integration_id};
use crate::components::data_table::{Column, DataTable};
use crate::components::kpi_card::{KpiCard, KpiVariant};
use crate::components::status_badge::StatusBadge;
use crate::i18n::Translations;
use crate::net::types::{IntegrationLog, Status};
use crate::state::integrations::IntegrationsState;
use crate::state::language::use_language;
use crate::util::format::short_date;
use crate::util::icons::Icon;

/// Totals shown above the log table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogSummary {
    pub runs: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub records: u32,
}

#[must_use]
pub fn log_summary(logs: &[IntegrationLog]) -> LogSummary {
    logs.iter().fold(LogSummary::default(), |mut acc, log| {
        acc.runs += 1;
        match log.status {
            Status::Success => acc.succeeded += 1,
            Status::Failed => acc.failed += 1,
            _ => {}
        }
        acc.records += log.records;
        acc
    })
}

fn columns(text: &'static Translations) -> Vec<Column<IntegrationLog>> {
    let t = &text.integrations;
    vec![
        Column::new("time", t.col_time, |row: &IntegrationLog| {
            format!("{} {}", short_date(&row.created_at), row.created_at.get(11..16).unwrap_or_default())
        })
        .with_class("data-table__cell--mono"),
        Column::new("status", t.col_status, |row: &IntegrationLog| view! { <StatusBadge status=row.status/> }),
        Column::new("records", t.col_records, |row: &IntegrationLog| row.records.to_string()),
        Column::new("message", t.col_message, |row: &IntegrationLog| row.message.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn IntegrationLogsPage() -> impl IntoView {
    let store = expect_context::<RwSignal<IntegrationsState>>();
    let lang = use_language();
    let id = use_integration_id();

    let logs = Signal::derive(move || store.with(|s| s.logs_for(&id.get())));
    let summary = Memo::new(move |_| logs.with(|l| log_summary(l)));
    let failed_variant = if summary.get_untracked().failed > 0 { KpiVariant::Danger } else { KpiVariant::Default };

    view! {
        <div class="page integration-logs-page">
            <IntegrationHeader id=id active=IntegrationTab::Logs/>
            <section class="kpi-grid">
                <KpiCard
                    label=Signal::derive(move || lang.text().integrations.summary_runs.to_owned())
                    value=Signal::derive(move || summary.get().runs.to_string())
                    icon=Icon::Refresh
                />
                <KpiCard
                    label=Signal::derive(move || lang.text().integrations.summary_succeeded.to_owned())
                    value=Signal::derive(move || summary.get().succeeded.to_string())
                    variant=KpiVariant::Success
                    icon=Icon::Check
                />
                <KpiCard
                    label=Signal::derive(move || lang.text().integrations.summary_failed.to_owned())
                    value=Signal::derive(move || summary.get().failed.to_string())
                    variant=failed_variant
                    icon=Icon::Alert
                />
                <KpiCard
                    label=Signal::derive(move || lang.text().integrations.summary_records.to_owned())
                    value=Signal::derive(move || summary.get().records.to_string())
                    icon=Icon::Database
                />
            </section>
            <section class="panel">
                <DataTable
                    columns=Signal::derive(move || columns(lang.text()))
                    data=logs
                    empty_message=Signal::derive(move || lang.text().integrations.logs_empty.to_owned())
                />
            </section>
        </div>
    }
}
