//! Demo records behind the dashboard, approvals, reports and integrations
//! screens.
//!
//! The backend only exposes session and notification endpoints to this
//! client so far; everything else renders from the DemoCorp scenario below.
//! Dates are fixed relative to [`DEMO_TODAY`] so derived figures are stable.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::collections::BTreeMap;

use serde_json::json;

use crate::components::data_table::TableRow;
use crate::net::types::{FieldMapping, Integration, IntegrationKind, IntegrationLog, Status, WebhookEvent};
use crate::state::integrations::IntegrationsState;
use crate::util::format::percent;

/// Reference date the demo scenario is built around.
pub const DEMO_TODAY: &str = "2026-06-01";

/// Window, in days, for the "expiring soon" figure.
pub const EXPIRY_WINDOW_DAYS: i32 = 30;

// =============================================================================
// ENROLLMENTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrollmentRow {
    pub id: &'static str,
    pub employee: &'static str,
    pub course: &'static str,
    pub department: &'static str,
    pub expiry_date: &'static str,
    /// Negative once expired.
    pub days_to_expiry: i32,
    pub status: Status,
}

impl EnrollmentRow {
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        matches!(self.status, Status::Active | Status::Completed) && self.days_to_expiry >= 0
    }

    #[must_use]
    pub fn expires_soon(&self) -> bool {
        (0..=EXPIRY_WINDOW_DAYS).contains(&self.days_to_expiry)
    }

    /// Expired, or due inside the warning window.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.days_to_expiry < 0 || self.expires_soon()
    }
}

impl TableRow for EnrollmentRow {
    fn row_id(&self) -> String {
        self.id.to_owned()
    }
}

const fn enrollment(
    id: &'static str,
    employee: &'static str,
    course: &'static str,
    department: &'static str,
    expiry_date: &'static str,
    days_to_expiry: i32,
    status: Status,
) -> EnrollmentRow {
    EnrollmentRow { id, employee, course, department, expiry_date, days_to_expiry, status }
}

static ENROLLMENTS: [EnrollmentRow; 12] = [
    enrollment("enr-01", "Employee One", "Basic Safety Orientation", "TMSD", "2026-05-22", -10, Status::Expired),
    enrollment("enr-02", "Employee One", "Cyber Security Awareness", "TMSD", "2026-11-18", 170, Status::Completed),
    enrollment("enr-03", "Employee Two", "Electrical Safety Level 2", "TMSD", "2026-06-08", 7, Status::Completed),
    enrollment("enr-04", "Employee Two", "First Aid & CPR", "TMSD", "2027-01-12", 225, Status::Completed),
    enrollment("enr-05", "Employee Three", "First Aid & CPR", "JTMD", "2027-03-28", 300, Status::Active),
    enrollment("enr-06", "Employee Three", "Basic Safety Orientation", "JTMD", "2026-06-20", 19, Status::Completed),
    enrollment("enr-07", "Employee Four", "Basic Safety Orientation", "JTMD", "2026-05-27", -5, Status::Expired),
    enrollment("enr-08", "Employee Five", "Electrical Safety Level 2", "TMSD", "2026-06-08", 7, Status::Completed),
    enrollment("enr-09", "Employee Five", "SCADA Fundamentals", "TMSD", "2026-12-04", 186, Status::Completed),
    enrollment("enr-10", "Employee Six", "First Aid & CPR", "TMSD", "2027-03-28", 300, Status::Active),
    enrollment("enr-11", "Employee Seven", "Basic Safety Orientation", "JTMD", "2026-05-22", -10, Status::Expired),
    enrollment("enr-12", "Employee Eight", "Cyber Security Awareness", "JTMD", "2026-09-09", 100, Status::Pending),
];

#[must_use]
pub fn enrollments() -> Vec<EnrollmentRow> {
    ENROLLMENTS.to_vec()
}

/// Enrollments that are expired or expiring soon, most urgent first.
#[must_use]
pub fn attention_list(rows: &[EnrollmentRow]) -> Vec<EnrollmentRow> {
    let mut urgent: Vec<EnrollmentRow> = rows.iter().filter(|r| r.needs_attention()).cloned().collect();
    urgent.sort_by_key(|r| r.days_to_expiry);
    urgent
}

// =============================================================================
// RENEWALS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenewalRow {
    pub id: &'static str,
    pub employee: &'static str,
    pub course: &'static str,
    pub requested: &'static str,
    pub reason: &'static str,
    pub status: Status,
}

impl RenewalRow {
    /// Still waiting on someone in the approval chain.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.status, Status::Pending | Status::ForemanApproved)
    }
}

impl TableRow for RenewalRow {
    fn row_id(&self) -> String {
        self.id.to_owned()
    }
}

const RENEWAL_REASON: &str = "Course expiration renewal";

static RENEWALS: [RenewalRow; 6] = [
    RenewalRow { id: "ren-1", employee: "Employee One", course: "Basic Safety Orientation", requested: "2026-05-27", reason: RENEWAL_REASON, status: Status::Pending },
    RenewalRow { id: "ren-2", employee: "Employee Two", course: "Electrical Safety Level 2", requested: "2026-05-27", reason: RENEWAL_REASON, status: Status::ForemanApproved },
    RenewalRow { id: "ren-3", employee: "Employee Four", course: "Basic Safety Orientation", requested: "2026-05-27", reason: RENEWAL_REASON, status: Status::Pending },
    RenewalRow { id: "ren-4", employee: "Employee Five", course: "Electrical Safety Level 2", requested: "2026-05-26", reason: RENEWAL_REASON, status: Status::ManagerApproved },
    RenewalRow { id: "ren-5", employee: "Employee Seven", course: "Basic Safety Orientation", requested: "2026-05-25", reason: RENEWAL_REASON, status: Status::Pending },
    RenewalRow { id: "ren-6", employee: "Employee Three", course: "Confined Space Entry", requested: "2026-05-20", reason: "Transfer to field crew", status: Status::Rejected },
];

#[must_use]
pub fn renewals() -> Vec<RenewalRow> {
    RENEWALS.to_vec()
}

// =============================================================================
// DEPARTMENTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepartmentStat {
    pub code: &'static str,
    pub name: &'static str,
    pub enrolled: usize,
    pub completed: usize,
    pub expired: usize,
}

impl DepartmentStat {
    #[must_use]
    pub fn compliance(&self) -> u32 {
        percent(self.enrolled.saturating_sub(self.expired), self.enrolled)
    }
}

impl TableRow for DepartmentStat {
    fn row_id(&self) -> String {
        self.code.to_owned()
    }
}

static DEPARTMENTS: [DepartmentStat; 3] = [
    DepartmentStat { code: "ERTMD", name: "Emergency Response Training & Maintenance", enrolled: 0, completed: 0, expired: 0 },
    DepartmentStat { code: "TMSD", name: "Technical Maintenance & Support", enrolled: 20, completed: 17, expired: 1 },
    DepartmentStat { code: "JTMD", name: "Job Training & Development", enrolled: 20, completed: 15, expired: 3 },
];

#[must_use]
pub fn department_stats() -> Vec<DepartmentStat> {
    DEPARTMENTS.to_vec()
}

/// Compliance across all departments, weighted by enrollment.
#[must_use]
pub fn overall_compliance(stats: &[DepartmentStat]) -> u32 {
    let enrolled: usize = stats.iter().map(|s| s.enrolled).sum();
    let expired: usize = stats.iter().map(|s| s.expired).sum();
    percent(enrolled.saturating_sub(expired), enrolled)
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Headline figures for the dashboard cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardKpis {
    pub compliance_rate: u32,
    pub active_enrollments: usize,
    pub expiring_soon: usize,
    pub pending_approvals: usize,
}

#[must_use]
pub fn dashboard_kpis(enrollments: &[EnrollmentRow], renewals: &[RenewalRow]) -> DashboardKpis {
    let compliant = enrollments.iter().filter(|e| e.is_compliant()).count();
    DashboardKpis {
        compliance_rate: percent(compliant, enrollments.len()),
        active_enrollments: enrollments.iter().filter(|e| e.status == Status::Active).count(),
        expiring_soon: enrollments.iter().filter(|e| e.expires_soon()).count(),
        pending_approvals: renewals.iter().filter(|r| r.is_open()).count(),
    }
}

// =============================================================================
// INTEGRATIONS
// =============================================================================

fn config(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn integration(
    id: &str,
    name: &str,
    provider: &str,
    kind: IntegrationKind,
    is_active: bool,
    settings: &[(&str, &str)],
    events: &[&str],
) -> Integration {
    Integration {
        id: id.to_owned(),
        name: name.to_owned(),
        provider: provider.to_owned(),
        kind,
        description: None,
        is_active,
        config: config(settings),
        subscribed_events: events.iter().map(|e| (*e).to_owned()).collect(),
        created_at: "2026-04-01T08:00:00Z".to_owned(),
        updated_at: "2026-05-20T08:00:00Z".to_owned(),
    }
}

fn field(id: &str, source: &str, target: &str, transform: Option<&str>, required: bool) -> FieldMapping {
    FieldMapping {
        id: id.to_owned(),
        source_field: source.to_owned(),
        target_field: target.to_owned(),
        transform_function: transform.map(str::to_owned),
        required,
    }
}

fn sync_log(id: &str, integration_id: &str, status: Status, records: u32, message: Option<&str>, at: &str) -> IntegrationLog {
    IntegrationLog {
        id: id.to_owned(),
        integration_id: integration_id.to_owned(),
        status,
        message: message.map(str::to_owned),
        records,
        created_at: at.to_owned(),
    }
}

/// The integration store the app starts with.
#[must_use]
pub fn integrations_seed() -> IntegrationsState {
    let mut hr = integration(
        "int-sap",
        "SAP SuccessFactors",
        "sap_successfactors",
        IntegrationKind::Api,
        true,
        &[("base_url", "https://api.successfactors.example"), ("api_key", "sf-live-7f3a"), ("company_id", "DEMOCORP")],
        &[],
    );
    hr.description = Some("Employee and department master data".to_owned());

    let integrations = vec![
        hr,
        integration(
            "int-moodle",
            "Moodle LMS",
            "moodle",
            IntegrationKind::Api,
            true,
            &[("base_url", "https://lms.democorp.example"), ("token", "mdl-2b91")],
            &[],
        ),
        integration(
            "int-legacy",
            "Legacy HR database",
            "postgresql",
            IntegrationKind::Database,
            false,
            &[("host", "hr-db.internal"), ("database", "hr"), ("username", "trainflow"), ("password", "changeme")],
            &[],
        ),
        integration(
            "int-workday",
            "Workday events",
            "workday",
            IntegrationKind::Webhook,
            true,
            &[("webhook_secret", "whsec-41c0")],
            &["employee.created", "employee.updated"],
        ),
    ];

    let mut mappings = BTreeMap::new();
    mappings.insert(
        "int-sap".to_owned(),
        vec![
            field("map-1", "personIdExternal", "employee_number", Some("trim"), true),
            field("map-2", "email", "email", Some("lower"), true),
            field("map-3", "firstName", "first_name", None, false),
            field("map-4", "lastName", "last_name", None, false),
            field("map-5", "department", "department_code", Some("substring(0, 5)"), false),
        ],
    );
    mappings.insert(
        "int-moodle".to_owned(),
        vec![field("map-6", "course_shortname", "course_code", Some("upper"), true)],
    );

    let logs = vec![
        sync_log("log-1", "int-sap", Status::Success, 15, None, "2026-05-31T02:00:00Z"),
        sync_log("log-2", "int-sap", Status::Success, 15, None, "2026-05-30T02:00:00Z"),
        sync_log("log-3", "int-sap", Status::Failed, 0, Some("401 Unauthorized from provider"), "2026-05-29T02:00:00Z"),
        sync_log("log-4", "int-moodle", Status::Running, 0, Some("Fetching completions"), "2026-06-01T07:55:00Z"),
        sync_log("log-5", "int-moodle", Status::Success, 42, None, "2026-05-31T03:00:00Z"),
        sync_log("log-6", "int-legacy", Status::Failed, 0, Some("connection refused"), "2026-05-15T01:00:00Z"),
    ];

    let events = vec![
        WebhookEvent {
            id: "evt-1".to_owned(),
            integration_id: "int-workday".to_owned(),
            event_type: "employee.created".to_owned(),
            data: json!({ "employee_id": "E-1009", "department": "JTMD" }),
            processed: true,
            created_at: "2026-05-30T10:12:00Z".to_owned(),
        },
        WebhookEvent {
            id: "evt-2".to_owned(),
            integration_id: "int-workday".to_owned(),
            event_type: "employee.updated".to_owned(),
            data: json!({ "employee_id": "E-1003", "grade": "G6" }),
            processed: false,
            created_at: "2026-05-31T14:40:00Z".to_owned(),
        },
        WebhookEvent {
            id: "evt-3".to_owned(),
            integration_id: "int-workday".to_owned(),
            event_type: "employee.terminated".to_owned(),
            data: json!({ "employee_id": "E-0871" }),
            processed: false,
            created_at: "2026-06-01T06:05:00Z".to_owned(),
        },
    ];

    IntegrationsState { integrations, mappings, logs, events }
}
