//! Renewal requests moving through foreman and manager approval.

#[cfg(test)]
#[path = "approvals_test.rs"]
mod approvals_test;

use leptos::prelude::*;

use crate::components::data_table::{Column, DataTable};
use crate::components::kpi_card::{KpiCard, KpiVariant};
use crate::components::status_badge::StatusBadge;
use crate::i18n::Translations;
use crate::mock::{self, RenewalRow};
use crate::net::types::Status;
use crate::state::language::use_language;
use crate::util::icons::Icon;

/// Counts per review stage, in workflow order.
#[must_use]
pub fn stage_counts(rows: &[RenewalRow]) -> [(Status, usize); 4] {
    [Status::Pending, Status::ForemanApproved, Status::ManagerApproved, Status::Rejected]
        .map(|status| (status, rows.iter().filter(|r| r.status == status).count()))
}

/// Open requests first, then by request date descending.
#[must_use]
pub fn review_queue(rows: &[RenewalRow]) -> Vec<RenewalRow> {
    let mut queue = rows.to_vec();
    queue.sort_by(|a, b| b.is_open().cmp(&a.is_open()).then_with(|| b.requested.cmp(a.requested)));
    queue
}

fn columns(text: &'static Translations) -> Vec<Column<RenewalRow>> {
    let a = &text.approvals;
    vec![
        Column::new("employee", a.col_employee, |row: &RenewalRow| row.employee),
        Column::new("course", a.col_course, |row: &RenewalRow| row.course),
        Column::new("requested", a.col_requested, |row: &RenewalRow| row.requested),
        Column::new("reason", a.col_reason, |row: &RenewalRow| row.reason),
        Column::new("status", a.col_status, |row: &RenewalRow| view! { <StatusBadge status=row.status/> }),
    ]
}

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    let lang = use_language();
    let renewals = mock::renewals();
    let open = renewals.iter().filter(|r| r.is_open()).count();
    let stages = stage_counts(&renewals);
    let queue = Signal::stored(review_queue(&renewals));

    let stage_cards = stages
        .into_iter()
        .map(|(status, count)| {
            let variant = match status {
                Status::ManagerApproved => KpiVariant::Success,
                Status::Rejected => KpiVariant::Danger,
                _ => KpiVariant::Default,
            };
            view! {
                <KpiCard
                    label=Signal::derive(move || lang.text().status.label(status).to_owned())
                    value=Signal::stored(count.to_string())
                    variant=variant
                />
            }
        })
        .collect_view();

    view! {
        <div class="page approvals-page">
            <header class="page__header">
                <h1>{move || lang.text().approvals.title}</h1>
                <p>{move || lang.text().approvals.subtitle}</p>
            </header>
            <section class="kpi-grid">
                <KpiCard
                    label=Signal::derive(move || lang.text().approvals.awaiting.to_owned())
                    value=Signal::stored(open.to_string())
                    variant=KpiVariant::Warning
                    icon=Icon::Inbox
                />
                {stage_cards}
            </section>
            <section class="panel">
                <DataTable
                    columns=Signal::derive(move || columns(lang.text()))
                    data=queue
                    empty_message=Signal::derive(move || lang.text().approvals.empty.to_owned())
                />
            </section>
        </div>
    }
}
