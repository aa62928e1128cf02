//! Translated copy for every screen, in English and Arabic.
//!
//! DESIGN
//! ======
//! Copy lives in typed `'static` tables rather than string-keyed lookups so a
//! missing translation is a compile error. List items carry their own
//! [`Icon`], keeping glyphs attached to content regardless of list order.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::net::types::{IntegrationKind, NotificationKind, Role, Status};
use crate::state::integrations::DraftError;
use crate::state::language::Language;
use crate::util::format::RelativeAge;
use crate::util::icons::Icon;

/// Translations for `language`.
#[must_use]
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

pub struct Translations {
    pub brand: BrandText,
    pub common: CommonText,
    pub nav: NavText,
    pub auth: AuthText,
    pub access: AccessText,
    pub table: TableText,
    pub status: StatusText,
    pub roles: RoleText,
    pub notifications: NotificationText,
    pub dashboard: DashboardText,
    pub approvals: ApprovalsText,
    pub reports: ReportsText,
    pub integrations: IntegrationText,
    pub landing: LandingText,
}

pub struct BrandText {
    pub name: &'static str,
    pub page_title: &'static str,
}

pub struct CommonText {
    pub loading: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub edit: &'static str,
    pub back: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub not_found: &'static str,
}

pub struct NavText {
    pub dashboard: &'static str,
    pub approvals: &'static str,
    pub reports: &'static str,
    pub integrations: &'static str,
    pub sign_out: &'static str,
    pub switch_language: &'static str,
}

pub struct AuthText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub missing_email: &'static str,
    pub missing_password: &'static str,
    pub back_home: &'static str,
}

pub struct AccessText {
    pub checking: &'static str,
    pub denied_title: &'static str,
    pub denied_body: &'static str,
    pub go_back: &'static str,
}

pub struct TableText {
    pub empty: &'static str,
}

pub struct StatusText {
    pub active: &'static str,
    pub completed: &'static str,
    pub expired: &'static str,
    pub pending: &'static str,
    pub foreman_approved: &'static str,
    pub manager_approved: &'static str,
    pub rejected: &'static str,
    pub in_progress: &'static str,
    pub blocked: &'static str,
    pub success: &'static str,
    pub failed: &'static str,
    pub running: &'static str,
    pub inactive: &'static str,
}

impl StatusText {
    #[must_use]
    pub fn label(&self, status: Status) -> &'static str {
        match status {
            Status::Active => self.active,
            Status::Completed => self.completed,
            Status::Expired => self.expired,
            Status::Pending => self.pending,
            Status::ForemanApproved => self.foreman_approved,
            Status::ManagerApproved => self.manager_approved,
            Status::Rejected => self.rejected,
            Status::InProgress => self.in_progress,
            Status::Blocked => self.blocked,
            Status::Success => self.success,
            Status::Failed => self.failed,
            Status::Running => self.running,
            Status::Inactive => self.inactive,
        }
    }
}

pub struct RoleText {
    pub employee: &'static str,
    pub foreman: &'static str,
    pub manager: &'static str,
    pub training_officer: &'static str,
    pub administrator: &'static str,
}

impl RoleText {
    #[must_use]
    pub fn label(&self, role: Role) -> &'static str {
        match role {
            Role::Employee => self.employee,
            Role::Foreman => self.foreman,
            Role::Manager => self.manager,
            Role::TrainingOfficer => self.training_officer,
            Role::Administrator => self.administrator,
        }
    }
}

pub struct NotificationText {
    pub title: &'static str,
    pub open: &'static str,
    pub empty: &'static str,
    pub read_only_hint: &'static str,
    pub expiry_warning: &'static str,
    pub escalation: &'static str,
    pub renewal_request: &'static str,
    pub approval_needed: &'static str,
    pub other: &'static str,
    pub just_now: &'static str,
    /// Templates; `{n}` is replaced with the count.
    pub minutes_ago: &'static str,
    pub hours_ago: &'static str,
    pub days_ago: &'static str,
}

impl NotificationText {
    #[must_use]
    pub fn kind_label(&self, kind: NotificationKind) -> &'static str {
        match kind {
            NotificationKind::ExpiryWarning => self.expiry_warning,
            NotificationKind::Escalation => self.escalation,
            NotificationKind::RenewalRequest => self.renewal_request,
            NotificationKind::ApprovalNeeded => self.approval_needed,
            NotificationKind::Other => self.other,
        }
    }

    #[must_use]
    pub fn relative(&self, age: RelativeAge) -> String {
        match age {
            RelativeAge::JustNow => self.just_now.to_owned(),
            RelativeAge::Minutes(n) => self.minutes_ago.replace("{n}", &n.to_string()),
            RelativeAge::Hours(n) => self.hours_ago.replace("{n}", &n.to_string()),
            RelativeAge::Days(n) => self.days_ago.replace("{n}", &n.to_string()),
        }
    }
}

pub struct DashboardText {
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub compliance_rate: &'static str,
    pub compliance_hint: &'static str,
    pub active_enrollments: &'static str,
    pub expiring_soon: &'static str,
    pub expiring_hint: &'static str,
    pub pending_approvals: &'static str,
    pub attention_title: &'static str,
    pub attention_empty: &'static str,
    pub col_employee: &'static str,
    pub col_course: &'static str,
    pub col_department: &'static str,
    pub col_expiry: &'static str,
    pub col_status: &'static str,
    pub selected_title: &'static str,
    pub select_hint: &'static str,
    pub recent_notifications: &'static str,
    pub col_title: &'static str,
    pub col_type: &'static str,
    pub col_received: &'static str,
    pub col_read: &'static str,
}

pub struct ApprovalsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub col_employee: &'static str,
    pub col_course: &'static str,
    pub col_requested: &'static str,
    pub col_reason: &'static str,
    pub col_status: &'static str,
    pub empty: &'static str,
    pub awaiting: &'static str,
}

pub struct ReportsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub overall: &'static str,
    pub departments: &'static str,
    pub expired_total: &'static str,
    pub col_department: &'static str,
    pub col_enrolled: &'static str,
    pub col_completed: &'static str,
    pub col_expired: &'static str,
    pub col_compliance: &'static str,
}

pub struct IntegrationText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub new_button: &'static str,
    pub local_only: &'static str,
    pub empty: &'static str,
    pub col_name: &'static str,
    pub col_provider: &'static str,
    pub col_type: &'static str,
    pub col_status: &'static str,
    pub col_updated: &'static str,
    pub col_actions: &'static str,
    pub activate: &'static str,
    pub deactivate: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub field_name: &'static str,
    pub field_provider: &'static str,
    pub field_type: &'static str,
    pub field_description: &'static str,
    pub field_active: &'static str,
    pub field_events: &'static str,
    pub events_hint: &'static str,
    pub config_title: &'static str,
    pub tab_edit: &'static str,
    pub tab_logs: &'static str,
    pub tab_mappings: &'static str,
    pub tab_webhooks: &'static str,
    pub logs_empty: &'static str,
    pub col_time: &'static str,
    pub col_records: &'static str,
    pub col_message: &'static str,
    pub summary_runs: &'static str,
    pub summary_succeeded: &'static str,
    pub summary_failed: &'static str,
    pub summary_records: &'static str,
    pub mappings_empty: &'static str,
    pub col_source: &'static str,
    pub col_target: &'static str,
    pub col_transform: &'static str,
    pub col_required: &'static str,
    pub add_mapping: &'static str,
    pub transform_hint: &'static str,
    pub preview_title: &'static str,
    pub preview_sample: &'static str,
    pub preview_output: &'static str,
    pub events_empty: &'static str,
    pub col_event: &'static str,
    pub col_processed: &'static str,
    pub subscribed: &'static str,
    pub all_events: &'static str,
    pub kind_api: &'static str,
    pub kind_database: &'static str,
    pub kind_webhook: &'static str,
    pub error_missing_name: &'static str,
    pub error_missing_provider: &'static str,
    pub error_missing_source: &'static str,
    pub error_missing_target: &'static str,
    pub error_duplicate_target: &'static str,
    pub error_not_found: &'static str,
}

impl IntegrationText {
    #[must_use]
    pub fn kind_label(&self, kind: IntegrationKind) -> &'static str {
        match kind {
            IntegrationKind::Api => self.kind_api,
            IntegrationKind::Database => self.kind_database,
            IntegrationKind::Webhook => self.kind_webhook,
        }
    }

    #[must_use]
    pub fn draft_error(&self, err: DraftError) -> &'static str {
        match err {
            DraftError::MissingName => self.error_missing_name,
            DraftError::MissingProvider => self.error_missing_provider,
            DraftError::MissingSourceField => self.error_missing_source,
            DraftError::MissingTargetField => self.error_missing_target,
            DraftError::DuplicateTarget => self.error_duplicate_target,
            DraftError::NotFound => self.error_not_found,
        }
    }
}

// =============================================================================
// LANDING
// =============================================================================

/// A titled card with a glyph.
pub struct IconItem {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

/// A headline metric on the landing page.
pub struct StatItem {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct LandingNavText {
    pub features: &'static str,
    pub workflow: &'static str,
    pub security: &'static str,
    pub faq: &'static str,
    pub sign_in: &'static str,
}

pub struct HeroText {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

pub struct EnterpriseText {
    pub heading: SectionHeading,
    pub points: &'static [IconItem],
    pub cta: &'static str,
}

pub struct FooterText {
    pub tagline: &'static str,
    pub product: &'static str,
    pub company: &'static str,
    pub product_links: &'static [&'static str],
    pub company_links: &'static [&'static str],
    pub rights: &'static str,
}

pub struct LandingText {
    pub nav: LandingNavText,
    pub hero: HeroText,
    pub features: SectionHeading,
    pub feature_items: &'static [IconItem],
    pub workflow: SectionHeading,
    pub workflow_steps: &'static [IconItem],
    pub ai: SectionHeading,
    pub ai_points: &'static [IconItem],
    pub security: SectionHeading,
    pub security_items: &'static [IconItem],
    pub kpis: SectionHeading,
    pub kpi_items: &'static [StatItem],
    pub integrations: SectionHeading,
    pub integration_items: &'static [IconItem],
    pub enterprise: EnterpriseText,
    pub faq: SectionHeading,
    pub faq_items: &'static [FaqItem],
    pub footer: FooterText,
}

// =============================================================================
// ENGLISH
// =============================================================================

static EN: Translations = Translations {
    brand: BrandText { name: "TrainFlow", page_title: "TrainFlow | Training Compliance" },
    common: CommonText {
        loading: "Loading…",
        save: "Save",
        cancel: "Cancel",
        delete: "Delete",
        edit: "Edit",
        back: "Back",
        yes: "Yes",
        no: "No",
        not_found: "Page not found.",
    },
    nav: NavText {
        dashboard: "Dashboard",
        approvals: "Approvals",
        reports: "Reports",
        integrations: "Integrations",
        sign_out: "Sign out",
        switch_language: "Switch language",
    },
    auth: AuthText {
        title: "Sign in to TrainFlow",
        subtitle: "Use your work email and password.",
        email: "Email",
        password: "Password",
        submit: "Sign in",
        submitting: "Signing in…",
        missing_email: "Enter your email address.",
        missing_password: "Enter your password.",
        back_home: "Back to home",
    },
    access: AccessText {
        checking: "Checking your session…",
        denied_title: "Access denied",
        denied_body: "Your role does not have permission to view this page.",
        go_back: "Return to dashboard",
    },
    table: TableText { empty: "No records to show." },
    status: StatusText {
        active: "Active",
        completed: "Completed",
        expired: "Expired",
        pending: "Pending",
        foreman_approved: "Foreman approved",
        manager_approved: "Manager approved",
        rejected: "Rejected",
        in_progress: "In progress",
        blocked: "Blocked",
        success: "Success",
        failed: "Failed",
        running: "Running",
        inactive: "Inactive",
    },
    roles: RoleText {
        employee: "Employee",
        foreman: "Foreman",
        manager: "Manager",
        training_officer: "Training officer",
        administrator: "Administrator",
    },
    notifications: NotificationText {
        title: "Notifications",
        open: "Open notifications",
        empty: "You're all caught up.",
        read_only_hint: "Notifications are marked read from the backend.",
        expiry_warning: "Expiry warning",
        escalation: "Escalation",
        renewal_request: "Renewal request",
        approval_needed: "Approval needed",
        other: "Notice",
        just_now: "just now",
        minutes_ago: "{n} min ago",
        hours_ago: "{n} h ago",
        days_ago: "{n} d ago",
    },
    dashboard: DashboardText {
        welcome: "Welcome back",
        subtitle: "Certification compliance across your organization.",
        compliance_rate: "Compliance rate",
        compliance_hint: "Active or completed enrollments",
        active_enrollments: "Active enrollments",
        expiring_soon: "Expiring in 30 days",
        expiring_hint: "Renew before the deadline",
        pending_approvals: "Pending approvals",
        attention_title: "Certifications needing attention",
        attention_empty: "Every certification is current.",
        col_employee: "Employee",
        col_course: "Course",
        col_department: "Department",
        col_expiry: "Expires",
        col_status: "Status",
        selected_title: "Selected certification",
        select_hint: "Select a row to see details.",
        recent_notifications: "Recent notifications",
        col_title: "Title",
        col_type: "Type",
        col_received: "Received",
        col_read: "Read",
    },
    approvals: ApprovalsText {
        title: "Renewal approvals",
        subtitle: "Renewal requests moving through foreman and manager review.",
        col_employee: "Employee",
        col_course: "Course",
        col_requested: "Requested",
        col_reason: "Reason",
        col_status: "Status",
        empty: "No renewal requests.",
        awaiting: "Awaiting decision",
    },
    reports: ReportsText {
        title: "Compliance reports",
        subtitle: "Department-level certification status.",
        overall: "Overall compliance",
        departments: "Departments",
        expired_total: "Expired certifications",
        col_department: "Department",
        col_enrolled: "Enrolled",
        col_completed: "Completed",
        col_expired: "Expired",
        col_compliance: "Compliance",
    },
    integrations: IntegrationText {
        title: "Integrations",
        subtitle: "Connections to HR and learning systems.",
        new_button: "New integration",
        local_only: "Preview: changes are kept in this browser session only.",
        empty: "No integrations configured yet.",
        col_name: "Name",
        col_provider: "Provider",
        col_type: "Type",
        col_status: "Status",
        col_updated: "Updated",
        col_actions: "Actions",
        activate: "Activate",
        deactivate: "Deactivate",
        create_title: "New integration",
        edit_title: "Edit integration",
        field_name: "Name",
        field_provider: "Provider",
        field_type: "Connector type",
        field_description: "Description",
        field_active: "Active",
        field_events: "Subscribed webhook events",
        events_hint: "Comma separated. Leave empty to accept every event.",
        config_title: "Connection settings",
        tab_edit: "Settings",
        tab_logs: "Sync logs",
        tab_mappings: "Field mappings",
        tab_webhooks: "Webhook events",
        logs_empty: "No sync runs recorded.",
        col_time: "Time",
        col_records: "Records",
        col_message: "Message",
        summary_runs: "Sync runs",
        summary_succeeded: "Succeeded",
        summary_failed: "Failed",
        summary_records: "Records synced",
        mappings_empty: "No field mappings yet.",
        col_source: "Source field",
        col_target: "Target field",
        col_transform: "Transform",
        col_required: "Required",
        add_mapping: "Add mapping",
        transform_hint: "upper, lower, trim or substring(start, length)",
        preview_title: "Mapping preview",
        preview_sample: "Sample record (JSON)",
        preview_output: "Mapped output",
        events_empty: "No webhook events received.",
        col_event: "Event",
        col_processed: "Processed",
        subscribed: "Subscribed",
        all_events: "All events",
        kind_api: "REST API",
        kind_database: "Database",
        kind_webhook: "Webhook",
        error_missing_name: "Name is required.",
        error_missing_provider: "Provider is required.",
        error_missing_source: "Source field is required.",
        error_missing_target: "Target field is required.",
        error_duplicate_target: "That target field is already mapped.",
        error_not_found: "Integration not found.",
    },
    landing: LandingText {
        nav: LandingNavText {
            features: "Features",
            workflow: "Workflow",
            security: "Security",
            faq: "FAQ",
            sign_in: "Sign in",
        },
        hero: HeroText {
            badge: "Training compliance, automated",
            title: "Keep every certification current, across every site.",
            subtitle: "TrainFlow tracks enrollments, warns before certificates expire, and routes renewals through foreman and manager approval.",
            primary_cta: "Open dashboard",
            secondary_cta: "See how it works",
        },
        features: SectionHeading {
            eyebrow: "Features",
            title: "Everything a training office needs",
            subtitle: "One place for courses, enrollments, renewals and audits.",
        },
        feature_items: &[
            IconItem { icon: Icon::Award, title: "Certification tracking", body: "Validity windows per course with automatic expiry dates." },
            IconItem { icon: Icon::Bell, title: "Expiry alerts", body: "Employees and supervisors are warned well before a deadline." },
            IconItem { icon: Icon::Workflow, title: "Renewal workflow", body: "Multi-level approvals from foreman to manager." },
            IconItem { icon: Icon::Chart, title: "Live KPIs", body: "Compliance by department, site and course." },
            IconItem { icon: Icon::Users, title: "Role-based access", body: "Five roles, each seeing exactly what they need." },
            IconItem { icon: Icon::FileText, title: "Audit trail", body: "Every state change is logged with actor and time." },
        ],
        workflow: SectionHeading {
            eyebrow: "Workflow",
            title: "From enrollment to renewal",
            subtitle: "A clear path every certificate follows.",
        },
        workflow_steps: &[
            IconItem { icon: Icon::Book, title: "Enroll", body: "Assign mandatory courses by department." },
            IconItem { icon: Icon::Check, title: "Complete", body: "Record completion and compute the expiry date." },
            IconItem { icon: Icon::Clock, title: "Warn", body: "Notify ahead of expiry and escalate if ignored." },
            IconItem { icon: Icon::Refresh, title: "Renew", body: "Request, approve and re-certify without paperwork." },
        ],
        ai: SectionHeading {
            eyebrow: "Assistant",
            title: "Insights that find risk early",
            subtitle: "Spot departments drifting out of compliance before an audit does.",
        },
        ai_points: &[
            IconItem { icon: Icon::Sparkles, title: "Risk forecasting", body: "Projects upcoming expiries against scheduled sessions." },
            IconItem { icon: Icon::Alert, title: "Anomaly flags", body: "Highlights unusual rejection or escalation rates." },
            IconItem { icon: Icon::Layers, title: "Course suggestions", body: "Recommends progression tasks by grade." },
        ],
        security: SectionHeading {
            eyebrow: "Security",
            title: "Built for regulated operations",
            subtitle: "Tenant isolation and least-privilege access by default.",
        },
        security_items: &[
            IconItem { icon: Icon::Building, title: "Tenant isolation", body: "Every record is partitioned by organization." },
            IconItem { icon: Icon::Lock, title: "HttpOnly sessions", body: "Tokens never touch page scripts." },
            IconItem { icon: Icon::Shield, title: "Role enforcement", body: "Checked on the server for every request." },
            IconItem { icon: Icon::Key, title: "Encrypted credentials", body: "Integration secrets are encrypted at rest." },
        ],
        kpis: SectionHeading {
            eyebrow: "Results",
            title: "Measurable from the first month",
            subtitle: "Typical outcomes reported by training offices.",
        },
        kpi_items: &[
            StatItem { icon: Icon::Chart, value: "98%", label: "Compliance rate" },
            StatItem { icon: Icon::Clock, value: "-70%", label: "Renewal turnaround" },
            StatItem { icon: Icon::Alert, value: "0", label: "Missed expiries" },
            StatItem { icon: Icon::FileText, value: "100%", label: "Audit coverage" },
        ],
        integrations: SectionHeading {
            eyebrow: "Integrations",
            title: "Connects to the systems you run",
            subtitle: "Sync people and training records both ways.",
        },
        integration_items: &[
            IconItem { icon: Icon::Users, title: "HR systems", body: "Import employees, departments and grades." },
            IconItem { icon: Icon::Book, title: "Learning platforms", body: "Pull completions from your LMS." },
            IconItem { icon: Icon::Database, title: "Databases", body: "Read directly from on-premise sources." },
            IconItem { icon: Icon::Link, title: "Webhooks", body: "React to events as they happen." },
        ],
        enterprise: EnterpriseText {
            heading: SectionHeading {
                eyebrow: "Enterprise",
                title: "Ready for large organizations",
                subtitle: "Multiple sites, thousands of employees, one compliance view.",
            },
            points: &[
                IconItem { icon: Icon::Globe, title: "Bilingual", body: "Full English and Arabic interface with RTL layout." },
                IconItem { icon: Icon::Server, title: "Flexible hosting", body: "Cloud or on-premise deployment." },
                IconItem { icon: Icon::Settings, title: "Configurable workflows", body: "Approval steps that match your hierarchy." },
            ],
            cta: "Talk to us",
        },
        faq: SectionHeading {
            eyebrow: "FAQ",
            title: "Common questions",
            subtitle: "",
        },
        faq_items: &[
            FaqItem { question: "Who can approve a renewal?", answer: "Foremen approve first, then managers. Administrators can act at any step." },
            FaqItem { question: "How early are expiry warnings sent?", answer: "Warnings start 30 days before expiry and escalate if no action is taken." },
            FaqItem { question: "Is Arabic supported?", answer: "Yes. Switch language at any time; the layout flips to right-to-left." },
            FaqItem { question: "Can we import existing records?", answer: "Yes, through the HR and LMS integrations." },
        ],
        footer: FooterText {
            tagline: "Training compliance without spreadsheets.",
            product: "Product",
            company: "Company",
            product_links: &["Features", "Integrations", "Security"],
            company_links: &["About", "Contact", "Privacy"],
            rights: "© TrainFlow. All rights reserved.",
        },
    },
};

// =============================================================================
// ARABIC
// =============================================================================

static AR: Translations = Translations {
    brand: BrandText { name: "ترين فلو", page_title: "ترين فلو | الامتثال التدريبي" },
    common: CommonText {
        loading: "جارٍ التحميل…",
        save: "حفظ",
        cancel: "إلغاء",
        delete: "حذف",
        edit: "تعديل",
        back: "رجوع",
        yes: "نعم",
        no: "لا",
        not_found: "الصفحة غير موجودة.",
    },
    nav: NavText {
        dashboard: "لوحة التحكم",
        approvals: "الموافقات",
        reports: "التقارير",
        integrations: "التكاملات",
        sign_out: "تسجيل الخروج",
        switch_language: "تغيير اللغة",
    },
    auth: AuthText {
        title: "تسجيل الدخول إلى ترين فلو",
        subtitle: "استخدم بريد العمل وكلمة المرور.",
        email: "البريد الإلكتروني",
        password: "كلمة المرور",
        submit: "تسجيل الدخول",
        submitting: "جارٍ تسجيل الدخول…",
        missing_email: "أدخل بريدك الإلكتروني.",
        missing_password: "أدخل كلمة المرور.",
        back_home: "العودة إلى الرئيسية",
    },
    access: AccessText {
        checking: "جارٍ التحقق من الجلسة…",
        denied_title: "غير مصرح بالوصول",
        denied_body: "لا يملك دورك صلاحية عرض هذه الصفحة.",
        go_back: "العودة إلى لوحة التحكم",
    },
    table: TableText { empty: "لا توجد سجلات لعرضها." },
    status: StatusText {
        active: "نشط",
        completed: "مكتمل",
        expired: "منتهي",
        pending: "قيد الانتظار",
        foreman_approved: "موافقة المشرف",
        manager_approved: "موافقة المدير",
        rejected: "مرفوض",
        in_progress: "قيد التنفيذ",
        blocked: "متوقف",
        success: "ناجح",
        failed: "فشل",
        running: "قيد التشغيل",
        inactive: "غير نشط",
    },
    roles: RoleText {
        employee: "موظف",
        foreman: "مشرف",
        manager: "مدير",
        training_officer: "مسؤول التدريب",
        administrator: "مسؤول النظام",
    },
    notifications: NotificationText {
        title: "الإشعارات",
        open: "فتح الإشعارات",
        empty: "لا توجد إشعارات جديدة.",
        read_only_hint: "تُعلَّم الإشعارات كمقروءة من الخادم.",
        expiry_warning: "تنبيه انتهاء",
        escalation: "تصعيد",
        renewal_request: "طلب تجديد",
        approval_needed: "بانتظار الموافقة",
        other: "إشعار",
        just_now: "الآن",
        minutes_ago: "منذ {n} دقيقة",
        hours_ago: "منذ {n} ساعة",
        days_ago: "منذ {n} يوم",
    },
    dashboard: DashboardText {
        welcome: "مرحباً بعودتك",
        subtitle: "امتثال الشهادات على مستوى المؤسسة.",
        compliance_rate: "نسبة الامتثال",
        compliance_hint: "التسجيلات النشطة أو المكتملة",
        active_enrollments: "التسجيلات النشطة",
        expiring_soon: "تنتهي خلال 30 يوماً",
        expiring_hint: "جدّد قبل الموعد النهائي",
        pending_approvals: "موافقات معلّقة",
        attention_title: "شهادات تحتاج إلى متابعة",
        attention_empty: "جميع الشهادات سارية.",
        col_employee: "الموظف",
        col_course: "الدورة",
        col_department: "القسم",
        col_expiry: "تاريخ الانتهاء",
        col_status: "الحالة",
        selected_title: "الشهادة المحددة",
        select_hint: "اختر صفاً لعرض التفاصيل.",
        recent_notifications: "أحدث الإشعارات",
        col_title: "العنوان",
        col_type: "النوع",
        col_received: "الاستلام",
        col_read: "مقروء",
    },
    approvals: ApprovalsText {
        title: "موافقات التجديد",
        subtitle: "طلبات التجديد في مراحل مراجعة المشرف والمدير.",
        col_employee: "الموظف",
        col_course: "الدورة",
        col_requested: "تاريخ الطلب",
        col_reason: "السبب",
        col_status: "الحالة",
        empty: "لا توجد طلبات تجديد.",
        awaiting: "بانتظار القرار",
    },
    reports: ReportsText {
        title: "تقارير الامتثال",
        subtitle: "حالة الشهادات على مستوى الأقسام.",
        overall: "الامتثال العام",
        departments: "الأقسام",
        expired_total: "الشهادات المنتهية",
        col_department: "القسم",
        col_enrolled: "المسجلون",
        col_completed: "المكتمل",
        col_expired: "المنتهي",
        col_compliance: "الامتثال",
    },
    integrations: IntegrationText {
        title: "التكاملات",
        subtitle: "الاتصالات مع أنظمة الموارد البشرية والتعلم.",
        new_button: "تكامل جديد",
        local_only: "معاينة: تُحفظ التغييرات في جلسة المتصفح هذه فقط.",
        empty: "لم يتم إعداد أي تكامل بعد.",
        col_name: "الاسم",
        col_provider: "المزوّد",
        col_type: "النوع",
        col_status: "الحالة",
        col_updated: "آخر تحديث",
        col_actions: "الإجراءات",
        activate: "تفعيل",
        deactivate: "إيقاف",
        create_title: "تكامل جديد",
        edit_title: "تعديل التكامل",
        field_name: "الاسم",
        field_provider: "المزوّد",
        field_type: "نوع الموصل",
        field_description: "الوصف",
        field_active: "نشط",
        field_events: "أحداث الويب هوك المشترك بها",
        events_hint: "مفصولة بفواصل. اتركها فارغة لقبول جميع الأحداث.",
        config_title: "إعدادات الاتصال",
        tab_edit: "الإعدادات",
        tab_logs: "سجلات المزامنة",
        tab_mappings: "ربط الحقول",
        tab_webhooks: "أحداث الويب هوك",
        logs_empty: "لا توجد عمليات مزامنة مسجلة.",
        col_time: "الوقت",
        col_records: "السجلات",
        col_message: "الرسالة",
        summary_runs: "عمليات المزامنة",
        summary_succeeded: "ناجحة",
        summary_failed: "فاشلة",
        summary_records: "السجلات المزامنة",
        mappings_empty: "لا يوجد ربط للحقول بعد.",
        col_source: "الحقل المصدر",
        col_target: "الحقل الهدف",
        col_transform: "التحويل",
        col_required: "إلزامي",
        add_mapping: "إضافة ربط",
        transform_hint: "upper أو lower أو trim أو substring(start, length)",
        preview_title: "معاينة الربط",
        preview_sample: "سجل تجريبي (JSON)",
        preview_output: "الناتج بعد الربط",
        events_empty: "لم تُستلم أي أحداث.",
        col_event: "الحدث",
        col_processed: "تمت المعالجة",
        subscribed: "الاشتراكات",
        all_events: "جميع الأحداث",
        kind_api: "واجهة REST",
        kind_database: "قاعدة بيانات",
        kind_webhook: "ويب هوك",
        error_missing_name: "الاسم مطلوب.",
        error_missing_provider: "المزوّد مطلوب.",
        error_missing_source: "الحقل المصدر مطلوب.",
        error_missing_target: "الحقل الهدف مطلوب.",
        error_duplicate_target: "هذا الحقل الهدف مربوط بالفعل.",
        error_not_found: "التكامل غير موجود.",
    },
    landing: LandingText {
        nav: LandingNavText {
            features: "المزايا",
            workflow: "سير العمل",
            security: "الأمان",
            faq: "الأسئلة الشائعة",
            sign_in: "تسجيل الدخول",
        },
        hero: HeroText {
            badge: "امتثال تدريبي مؤتمت",
            title: "حافظ على سريان كل شهادة في كل موقع.",
            subtitle: "يتتبع ترين فلو التسجيلات، وينبّه قبل انتهاء الشهادات، ويوجّه طلبات التجديد عبر موافقة المشرف والمدير.",
            primary_cta: "افتح لوحة التحكم",
            secondary_cta: "تعرّف على آلية العمل",
        },
        features: SectionHeading {
            eyebrow: "المزايا",
            title: "كل ما يحتاجه مكتب التدريب",
            subtitle: "مكان واحد للدورات والتسجيلات والتجديدات والتدقيق.",
        },
        feature_items: &[
            IconItem { icon: Icon::Award, title: "تتبع الشهادات", body: "فترات صلاحية لكل دورة مع تواريخ انتهاء تلقائية." },
            IconItem { icon: Icon::Bell, title: "تنبيهات الانتهاء", body: "يُنبَّه الموظفون والمشرفون قبل الموعد بوقت كافٍ." },
            IconItem { icon: Icon::Workflow, title: "سير عمل التجديد", body: "موافقات متعددة المستويات من المشرف إلى المدير." },
            IconItem { icon: Icon::Chart, title: "مؤشرات مباشرة", body: "الامتثال حسب القسم والموقع والدورة." },
            IconItem { icon: Icon::Users, title: "صلاحيات حسب الدور", body: "خمسة أدوار يرى كل منها ما يحتاجه فقط." },
            IconItem { icon: Icon::FileText, title: "سجل التدقيق", body: "تُسجَّل كل عملية تغيير مع المنفّذ والوقت." },
        ],
        workflow: SectionHeading {
            eyebrow: "سير العمل",
            title: "من التسجيل إلى التجديد",
            subtitle: "مسار واضح تتبعه كل شهادة.",
        },
        workflow_steps: &[
            IconItem { icon: Icon::Book, title: "التسجيل", body: "إسناد الدورات الإلزامية حسب القسم." },
            IconItem { icon: Icon::Check, title: "الإكمال", body: "تسجيل الإكمال واحتساب تاريخ الانتهاء." },
            IconItem { icon: Icon::Clock, title: "التنبيه", body: "إشعار قبل الانتهاء وتصعيد عند التجاهل." },
            IconItem { icon: Icon::Refresh, title: "التجديد", body: "طلب وموافقة وإعادة اعتماد دون أوراق." },
        ],
        ai: SectionHeading {
            eyebrow: "المساعد الذكي",
            title: "رؤى تكشف المخاطر مبكراً",
            subtitle: "اكتشف الأقسام التي تبتعد عن الامتثال قبل أن يكتشفها التدقيق.",
        },
        ai_points: &[
            IconItem { icon: Icon::Sparkles, title: "توقع المخاطر", body: "يقارن حالات الانتهاء القادمة بالجلسات المجدولة." },
            IconItem { icon: Icon::Alert, title: "رصد الحالات الشاذة", body: "يبرز معدلات الرفض أو التصعيد غير المعتادة." },
            IconItem { icon: Icon::Layers, title: "اقتراح الدورات", body: "يوصي بمهام الترقي حسب الدرجة." },
        ],
        security: SectionHeading {
            eyebrow: "الأمان",
            title: "مصمم للعمليات الخاضعة للتنظيم",
            subtitle: "عزل المستأجرين وأقل صلاحيات ممكنة افتراضياً.",
        },
        security_items: &[
            IconItem { icon: Icon::Building, title: "عزل المستأجرين", body: "كل سجل مقسّم حسب المؤسسة." },
            IconItem { icon: Icon::Lock, title: "جلسات HttpOnly", body: "لا تصل الرموز إلى نصوص الصفحة البرمجية." },
            IconItem { icon: Icon::Shield, title: "فرض الأدوار", body: "يُتحقق منه على الخادم في كل طلب." },
            IconItem { icon: Icon::Key, title: "بيانات اعتماد مشفرة", body: "أسرار التكاملات مشفرة أثناء التخزين." },
        ],
        kpis: SectionHeading {
            eyebrow: "النتائج",
            title: "نتائج قابلة للقياس من الشهر الأول",
            subtitle: "نتائج نموذجية أبلغت عنها مكاتب التدريب.",
        },
        kpi_items: &[
            StatItem { icon: Icon::Chart, value: "98%", label: "نسبة الامتثال" },
            StatItem { icon: Icon::Clock, value: "-70%", label: "زمن إنجاز التجديد" },
            StatItem { icon: Icon::Alert, value: "0", label: "شهادات فائتة" },
            StatItem { icon: Icon::FileText, value: "100%", label: "تغطية التدقيق" },
        ],
        integrations: SectionHeading {
            eyebrow: "التكاملات",
            title: "يتصل بالأنظمة التي تستخدمها",
            subtitle: "مزامنة بيانات الموظفين والتدريب في الاتجاهين.",
        },
        integration_items: &[
            IconItem { icon: Icon::Users, title: "أنظمة الموارد البشرية", body: "استيراد الموظفين والأقسام والدرجات." },
            IconItem { icon: Icon::Book, title: "منصات التعلم", body: "جلب حالات الإكمال من نظام إدارة التعلم." },
            IconItem { icon: Icon::Database, title: "قواعد البيانات", body: "القراءة مباشرة من المصادر الداخلية." },
            IconItem { icon: Icon::Link, title: "الويب هوك", body: "الاستجابة للأحداث فور وقوعها." },
        ],
        enterprise: EnterpriseText {
            heading: SectionHeading {
                eyebrow: "المؤسسات",
                title: "جاهز للمؤسسات الكبيرة",
                subtitle: "مواقع متعددة وآلاف الموظفين وعرض واحد للامتثال.",
            },
            points: &[
                IconItem { icon: Icon::Globe, title: "ثنائي اللغة", body: "واجهة كاملة بالعربية والإنجليزية مع تخطيط من اليمين لليسار." },
                IconItem { icon: Icon::Server, title: "استضافة مرنة", body: "نشر سحابي أو داخلي." },
                IconItem { icon: Icon::Settings, title: "سير عمل قابل للتهيئة", body: "خطوات موافقة تطابق هيكلك التنظيمي." },
            ],
            cta: "تواصل معنا",
        },
        faq: SectionHeading {
            eyebrow: "الأسئلة الشائعة",
            title: "أسئلة متكررة",
            subtitle: "",
        },
        faq_items: &[
            FaqItem { question: "من يوافق على التجديد؟", answer: "يوافق المشرف أولاً ثم المدير، ويمكن لمسؤول النظام التدخل في أي مرحلة." },
            FaqItem { question: "متى تُرسل تنبيهات الانتهاء؟", answer: "تبدأ التنبيهات قبل 30 يوماً من الانتهاء وتُصعَّد عند عدم اتخاذ إجراء." },
            FaqItem { question: "هل اللغة العربية مدعومة؟", answer: "نعم. يمكنك تغيير اللغة في أي وقت وسيتحول التخطيط من اليمين إلى اليسار." },
            FaqItem { question: "هل يمكن استيراد السجلات الحالية؟", answer: "نعم، عبر تكاملات الموارد البشرية وأنظمة التعلم." },
        ],
        footer: FooterText {
            tagline: "امتثال تدريبي بلا جداول بيانات.",
            product: "المنتج",
            company: "الشركة",
            product_links: &["المزايا", "التكاملات", "الأمان"],
            company_links: &["من نحن", "اتصل بنا", "الخصوصية"],
            rights: "© ترين فلو. جميع الحقوق محفوظة.",
        },
    },
};
