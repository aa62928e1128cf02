//! Department-level compliance report.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;

use crate::components::data_table::{Column, DataTable};
use crate::components::kpi_card::{KpiCard, KpiVariant};
use crate::i18n::Translations;
use crate::mock::{self, DepartmentStat};
use crate::state::language::use_language;
use crate::util::icons::Icon;

/// Variant for a compliance percentage.
#[must_use]
pub fn compliance_variant(percent: u32) -> KpiVariant {
    match percent {
        90.. => KpiVariant::Success,
        75..=89 => KpiVariant::Warning,
        _ => KpiVariant::Danger,
    }
}

fn columns(text: &'static Translations) -> Vec<Column<DepartmentStat>> {
    let r = &text.reports;
    vec![
        Column::new("department", r.col_department, |row: &DepartmentStat| {
            view! {
                <span class="data-table__cell--mono">{row.code}</span>
                " "
                <span>{row.name}</span>
            }
        }),
        Column::new("enrolled", r.col_enrolled, |row: &DepartmentStat| row.enrolled).with_class("data-table__cell--num"),
        Column::new("completed", r.col_completed, |row: &DepartmentStat| row.completed)
            .with_class("data-table__cell--num"),
        Column::new("expired", r.col_expired, |row: &DepartmentStat| row.expired).with_class("data-table__cell--num"),
        Column::new("compliance", r.col_compliance, |row: &DepartmentStat| {
            let pct = row.compliance();
            view! {
                <div class="progress" title=format!("{pct}%")>
                    <div class="progress__bar" style=format!("width: {pct}%")></div>
                </div>
                <span class="progress__label">{format!("{pct}%")}</span>
            }
        }),
    ]
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let lang = use_language();
    let stats = mock::department_stats();
    let overall = mock::overall_compliance(&stats);
    let expired: usize = stats.iter().map(|s| s.expired).sum();
    let department_count = stats.len();
    let expired_variant = if expired > 0 { KpiVariant::Danger } else { KpiVariant::Default };
    let rows = Signal::stored(stats);

    view! {
        <div class="page reports-page">
            <header class="page__header">
                <h1>{move || lang.text().reports.title}</h1>
                <p>{move || lang.text().reports.subtitle}</p>
            </header>
            <section class="kpi-grid">
                <KpiCard
                    label=Signal::derive(move || lang.text().reports.overall.to_owned())
                    value=Signal::stored(format!("{overall}%"))
                    variant=compliance_variant(overall)
                    icon=Icon::Shield
                />
                <KpiCard
                    label=Signal::derive(move || lang.text().reports.departments.to_owned())
                    value=Signal::stored(department_count.to_string())
                    icon=Icon::Building
                />
                <KpiCard
                    label=Signal::derive(move || lang.text().reports.expired_total.to_owned())
                    value=Signal::stored(expired.to_string())
                    variant=expired_variant
                    icon=Icon::Alert
                />
            </section>
            <section class="panel">
                <DataTable columns=Signal::derive(move || columns(lang.text())) data=rows/>
            </section>
        </div>
    }
}
