//! Wire DTOs for the TrainFlow backend API.
//!
//! DESIGN
//! ======
//! Records are server-owned and consumed as-is. Enumerations decode
//! permissively where the backend stores free-form strings so an unexpected
//! value degrades to a neutral variant instead of failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// Permission class attached to every user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Foreman,
    Manager,
    TrainingOfficer,
    Administrator,
}

impl Role {
    pub const ALL: [Self; 5] = [
        Self::Employee,
        Self::Foreman,
        Self::Manager,
        Self::TrainingOfficer,
        Self::Administrator,
    ];

    /// Wire value as stored by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Foreman => "foreman",
            Self::Manager => "manager",
            Self::TrainingOfficer => "training_officer",
            Self::Administrator => "administrator",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw.trim())
    }

    /// Roles that take part in the renewal approval chain.
    #[must_use]
    pub fn is_approver(self) -> bool {
        matches!(self, Self::Foreman | Self::Manager | Self::Administrator)
    }
}

/// The authenticated user as returned by `GET /api/v1/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: Role,
    pub tenant_id: String,
    #[serde(default)]
    pub department_id: Option<String>,
}

impl User {
    /// Full name when known, otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>();
        if parts.is_empty() { self.email.clone() } else { parts.join(" ") }
    }

    /// Up to two uppercase initials for the avatar chip.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Credentials body for `POST /api/v1/users/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success body for `POST /api/v1/users/login`. Differs from [`User`] only in
/// naming the identifier `user_id`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: Role,
    pub tenant_id: String,
    #[serde(default)]
    pub department_id: Option<String>,
}

impl From<LoginResponse> for User {
    fn from(value: LoginResponse) -> Self {
        Self {
            id: value.user_id,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            role: value.role,
            tenant_id: value.tenant_id,
            department_id: value.department_id,
        }
    }
}

/// Error body used by the backend. `detail` is either a message string or a
/// list of validation entries carrying `msg`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable message extracted from `detail`, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
            serde_json::Value::Array(entries) => {
                let messages = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(serde_json::Value::as_str))
                    .collect::<Vec<_>>();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Notification category. Unknown wire values decode to [`NotificationKind::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ExpiryWarning,
    Escalation,
    RenewalRequest,
    ApprovalNeeded,
    Other,
}

impl NotificationKind {
    pub const ALL: [Self; 5] =
        [Self::ExpiryWarning, Self::Escalation, Self::RenewalRequest, Self::ApprovalNeeded, Self::Other];

    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "expiry_warning" => Self::ExpiryWarning,
            "escalation" => Self::Escalation,
            "renewal_request" => Self::RenewalRequest,
            "approval_needed" => Self::ApprovalNeeded,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for NotificationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// A user notification from `GET /api/notifications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default, alias = "read")]
    pub is_read: bool,
    pub created_at: String,
}

// =============================================================================
// STATUSES
// =============================================================================

/// Every status value rendered through a badge: enrollment, renewal, task,
/// and integration sync outcomes share one enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    Completed,
    Expired,
    Pending,
    ForemanApproved,
    ManagerApproved,
    Rejected,
    InProgress,
    Blocked,
    Success,
    Failed,
    Running,
    Inactive,
}

impl Status {
    pub const ALL: [Self; 13] = [
        Self::Active,
        Self::Completed,
        Self::Expired,
        Self::Pending,
        Self::ForemanApproved,
        Self::ManagerApproved,
        Self::Rejected,
        Self::InProgress,
        Self::Blocked,
        Self::Success,
        Self::Failed,
        Self::Running,
        Self::Inactive,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Expired => "expired",
            Self::Pending => "pending",
            Self::ForemanApproved => "foreman_approved",
            Self::ManagerApproved => "manager_approved",
            Self::Rejected => "rejected",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Running => "running",
            Self::Inactive => "inactive",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|status| status.as_str() == normalized)
    }
}

// =============================================================================
// INTEGRATIONS
// =============================================================================

/// Connector family for an integration config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationKind {
    #[default]
    Api,
    Database,
    Webhook,
}

impl IntegrationKind {
    pub const ALL: [Self; 3] = [Self::Api, Self::Database, Self::Webhook];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Database => "database",
            Self::Webhook => "webhook",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw.trim())
    }
}

/// A configured connection to an external HR or training system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub kind: IntegrationKind,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
    /// Event types accepted from the provider's webhooks; empty accepts all.
    #[serde(default)]
    pub subscribed_events: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Source-to-target field rule applied when records are pulled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub id: String,
    pub source_field: String,
    pub target_field: String,
    #[serde(default)]
    pub transform_function: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// One sync attempt for an integration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationLog {
    pub id: String,
    pub integration_id: String,
    pub status: Status,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub records: u32,
    pub created_at: String,
}

/// A webhook delivery received from a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    pub integration_id: String,
    pub event_type: String,
    pub data: serde_json::Value,
    pub processed: bool,
    pub created_at: String,
}
