//! Authenticated landing route: compliance KPIs, certifications needing
//! attention, and the latest notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Enrollment figures come from the demo data in `mock`; notifications come
//! from the inbox the header bell keeps polling.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::data_table::{Column, DataTable, TableRow};
use crate::components::kpi_card::{KpiCard, KpiVariant, Trend, TrendDirection};
use crate::components::status_badge::StatusBadge;
use crate::i18n::Translations;
use crate::mock::{self, EnrollmentRow};
use crate::net::types::Notification;
use crate::state::auth::AuthState;
use crate::state::language::use_language;
use crate::state::notifications::{NotificationsState, newest_first};
use crate::util::icons::Icon;

/// Notifications listed on the dashboard.
pub const RECENT_LIMIT: usize = 5;

impl TableRow for Notification {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

#[must_use]
pub fn recent_notifications(items: &[Notification]) -> Vec<Notification> {
    let mut recent = newest_first(items);
    recent.truncate(RECENT_LIMIT);
    recent
}

fn attention_columns(text: &'static Translations) -> Vec<Column<EnrollmentRow>> {
    let d = &text.dashboard;
    vec![
        Column::new("employee", d.col_employee, |row: &EnrollmentRow| row.employee),
        Column::new("course", d.col_course, |row: &EnrollmentRow| row.course),
        Column::new("department", d.col_department, |row: &EnrollmentRow| row.department)
            .with_class("data-table__cell--mono"),
        Column::new("expiry", d.col_expiry, |row: &EnrollmentRow| row.expiry_date),
        Column::new("status", d.col_status, |row: &EnrollmentRow| view! { <StatusBadge status=row.status/> }),
    ]
}

fn notification_columns(text: &'static Translations) -> Vec<Column<Notification>> {
    let d = &text.dashboard;
    let n = &text.notifications;
    vec![
        Column::new("title", d.col_title, |row: &Notification| row.title.clone()),
        Column::new("type", d.col_type, move |row: &Notification| n.kind_label(row.kind)),
        Column::new("received", d.col_received, move |row: &Notification| {
            crate::components::notification_bell::age_label(n, &row.created_at)
        }),
        Column::new("read", d.col_read, move |row: &Notification| if row.is_read { text.common.yes } else { text.common.no }),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let inbox = expect_context::<RwSignal<NotificationsState>>();
    let lang = use_language();

    let enrollments = mock::enrollments();
    let kpis = mock::dashboard_kpis(&enrollments, &mock::renewals());
    let attention = Signal::stored(mock::attention_list(&enrollments));
    let selected = RwSignal::new(None::<EnrollmentRow>);

    let greeting = move || {
        let name = auth.with(|a| a.user.as_ref().map(crate::net::types::User::display_name)).unwrap_or_default();
        format!("{}, {name}", lang.text().dashboard.welcome)
    };

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>{greeting}</h1>
                <p>{move || lang.text().dashboard.subtitle}</p>
            </header>

            <section class="kpi-grid">
                <KpiCard
                    label=Signal::derive(move || lang.text().dashboard.compliance_rate.to_owned())
                    value=Signal::stored(format!("{}%", kpis.compliance_rate))
                    hint=Signal::derive(move || lang.text().dashboard.compliance_hint.to_owned())
                    trend=Trend { direction: TrendDirection::Up, value: "+4%".to_owned() }
                    variant=KpiVariant::Success
                    icon=Icon::Shield
                />
                <KpiCard
                    label=Signal::derive(move || lang.text().dashboard.active_enrollments.to_owned())
                    value=Signal::stored(kpis.active_enrollments.to_string())
                    icon=Icon::Book
                />
                <KpiCard
                    label=Signal::derive(move || lang.text().dashboard.expiring_soon.to_owned())
                    value=Signal::stored(kpis.expiring_soon.to_string())
                    hint=Signal::derive(move || lang.text().dashboard.expiring_hint.to_owned())
                    variant=KpiVariant::Warning
                    icon=Icon::Clock
                />
                <KpiCard
                    label=Signal::derive(move || lang.text().dashboard.pending_approvals.to_owned())
                    value=Signal::stored(kpis.pending_approvals.to_string())
                    trend=Trend { direction: TrendDirection::Flat, value: "0".to_owned() }
                    icon=Icon::Inbox
                />
            </section>

            <section class="panel">
                <h2 class="panel__title">{move || lang.text().dashboard.attention_title}</h2>
                <DataTable
                    columns=Signal::derive(move || attention_columns(lang.text()))
                    data=attention
                    empty_message=Signal::derive(move || lang.text().dashboard.attention_empty.to_owned())
                    on_row_click=Callback::new(move |row: EnrollmentRow| selected.set(Some(row)))
                />
                <div class="panel__detail">
                    <h3>{move || lang.text().dashboard.selected_title}</h3>
                    {move || match selected.get() {
                        Some(row) => view! {
                            <dl class="detail-list">
                                <dt>{lang.text().dashboard.col_employee}</dt>
                                <dd>{row.employee}</dd>
                                <dt>{lang.text().dashboard.col_course}</dt>
                                <dd>{row.course}</dd>
                                <dt>{lang.text().dashboard.col_expiry}</dt>
                                <dd>{row.expiry_date}</dd>
                                <dt>{lang.text().dashboard.col_status}</dt>
                                <dd><StatusBadge status=row.status/></dd>
                            </dl>
                        }
                        .into_any(),
                        None => view! { <p class="panel__hint">{lang.text().dashboard.select_hint}</p> }.into_any(),
                    }}
                </div>
            </section>

            <section class="panel">
                <h2 class="panel__title">{move || lang.text().dashboard.recent_notifications}</h2>
                <DataTable
                    columns=Signal::derive(move || notification_columns(lang.text()))
                    data=Signal::derive(move || inbox.with(|s| recent_notifications(&s.items)))
                    is_loading=Signal::derive(move || !inbox.with(|s| s.loaded))
                    empty_message=Signal::derive(move || lang.text().notifications.empty.to_owned())
                />
            </section>
        </div>
    }
}
