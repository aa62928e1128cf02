//! Local integration registry: connector configs, field mappings, sync logs
//! and received webhook events.
//!
//! DESIGN
//! ======
//! No backend endpoint exists for integrations yet, so this store is the
//! system of record for the browser session. It starts from the demo seed in
//! [`crate::mock`] and every mutation goes through a validated method here.
//! Removing an integration also removes its mappings, logs and events.

#[cfg(test)]
#[path = "integrations_test.rs"]
mod integrations_test;

use std::collections::BTreeMap;

use crate::net::types::{FieldMapping, Integration, IntegrationKind, IntegrationLog, WebhookEvent};

/// Validation and lookup failures for integration edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("name is required")]
    MissingName,
    #[error("provider is required")]
    MissingProvider,
    #[error("source field is required")]
    MissingSourceField,
    #[error("target field is required")]
    MissingTargetField,
    #[error("target field already mapped")]
    DuplicateTarget,
    #[error("integration not found")]
    NotFound,
}

/// Form contents for creating or editing an integration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntegrationDraft {
    pub name: String,
    pub provider: String,
    pub kind: IntegrationKind,
    pub description: String,
    pub is_active: bool,
    /// Comma-separated event types.
    pub events: String,
}

impl IntegrationDraft {
    #[must_use]
    pub fn from_integration(integration: &Integration) -> Self {
        Self {
            name: integration.name.clone(),
            provider: integration.provider.clone(),
            kind: integration.kind,
            description: integration.description.clone().unwrap_or_default(),
            is_active: integration.is_active,
            events: integration.subscribed_events.join(", "),
        }
    }

    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.provider.trim().is_empty() {
            return Err(DraftError::MissingProvider);
        }
        Ok(())
    }

    fn description(&self) -> Option<String> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
}

/// Split a comma-separated event list, dropping blanks and duplicates.
#[must_use]
pub fn parse_events(raw: &str) -> Vec<String> {
    let mut events: Vec<String> = Vec::new();
    for event in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        if !events.iter().any(|existing| existing == event) {
            events.push(event.to_owned());
        }
    }
    events
}

/// Whether an integration subscribed to `subscribed` receives `event_type`.
/// An empty subscription list accepts everything.
#[must_use]
pub fn accepts_event(subscribed: &[String], event_type: &str) -> bool {
    subscribed.is_empty() || subscribed.iter().any(|s| s == event_type)
}

/// Form contents for a new field mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingDraft {
    pub source_field: String,
    pub target_field: String,
    pub transform: String,
    pub required: bool,
}

impl MappingDraft {
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.source_field.trim().is_empty() {
            return Err(DraftError::MissingSourceField);
        }
        if self.target_field.trim().is_empty() {
            return Err(DraftError::MissingTargetField);
        }
        Ok(())
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntegrationsState {
    pub integrations: Vec<Integration>,
    pub mappings: BTreeMap<String, Vec<FieldMapping>>,
    pub logs: Vec<IntegrationLog>,
    pub events: Vec<WebhookEvent>,
}

impl IntegrationsState {
    /// Store pre-populated with the demo connectors.
    #[must_use]
    pub fn seeded() -> Self {
        crate::mock::integrations_seed()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Integration> {
        self.integrations.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Integration, DraftError> {
        self.integrations.iter_mut().find(|i| i.id == id).ok_or(DraftError::NotFound)
    }

    /// Add a new integration and return its id.
    ///
    /// # Errors
    ///
    /// Returns the draft's validation error.
    pub fn create(&mut self, draft: &IntegrationDraft, now: &str) -> Result<String, DraftError> {
        draft.validate()?;
        let id = new_id();
        self.integrations.push(Integration {
            id: id.clone(),
            name: draft.name.trim().to_owned(),
            provider: draft.provider.trim().to_owned(),
            kind: draft.kind,
            description: draft.description(),
            is_active: draft.is_active,
            config: BTreeMap::new(),
            subscribed_events: parse_events(&draft.events),
            created_at: now.to_owned(),
            updated_at: now.to_owned(),
        });
        Ok(id)
    }

    /// Overwrite the editable fields of an existing integration. Connection
    /// settings are kept.
    ///
    /// # Errors
    ///
    /// Returns the draft's validation error or [`DraftError::NotFound`].
    pub fn update(&mut self, id: &str, draft: &IntegrationDraft, now: &str) -> Result<(), DraftError> {
        draft.validate()?;
        let integration = self.get_mut(id)?;
        integration.name = draft.name.trim().to_owned();
        integration.provider = draft.provider.trim().to_owned();
        integration.kind = draft.kind;
        integration.description = draft.description();
        integration.is_active = draft.is_active;
        integration.subscribed_events = parse_events(&draft.events);
        integration.updated_at = now.to_owned();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`DraftError::NotFound`] for an unknown id.
    pub fn set_active(&mut self, id: &str, active: bool, now: &str) -> Result<(), DraftError> {
        let integration = self.get_mut(id)?;
        if integration.is_active != active {
            integration.is_active = active;
            integration.updated_at = now.to_owned();
        }
        Ok(())
    }

    /// Delete an integration with everything attached to it. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.integrations.len();
        self.integrations.retain(|i| i.id != id);
        if self.integrations.len() == before {
            return false;
        }
        self.mappings.remove(id);
        self.logs.retain(|log| log.integration_id != id);
        self.events.retain(|event| event.integration_id != id);
        true
    }

    #[must_use]
    pub fn mappings_for(&self, id: &str) -> &[FieldMapping] {
        self.mappings.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Append a mapping and return its id.
    ///
    /// # Errors
    ///
    /// Returns the draft's validation error, [`DraftError::DuplicateTarget`]
    /// when the target is already mapped, or [`DraftError::NotFound`].
    pub fn add_mapping(&mut self, id: &str, draft: &MappingDraft) -> Result<String, DraftError> {
        draft.validate()?;
        if self.get(id).is_none() {
            return Err(DraftError::NotFound);
        }
        let target = draft.target_field.trim();
        let mappings = self.mappings.entry(id.to_owned()).or_default();
        if mappings.iter().any(|m| m.target_field == target) {
            return Err(DraftError::DuplicateTarget);
        }
        let transform = draft.transform.trim();
        let mapping_id = new_id();
        mappings.push(FieldMapping {
            id: mapping_id.clone(),
            source_field: draft.source_field.trim().to_owned(),
            target_field: target.to_owned(),
            transform_function: (!transform.is_empty()).then(|| transform.to_owned()),
            required: draft.required,
        });
        Ok(mapping_id)
    }

    pub fn remove_mapping(&mut self, id: &str, mapping_id: &str) -> bool {
        let Some(mappings) = self.mappings.get_mut(id) else {
            return false;
        };
        let before = mappings.len();
        mappings.retain(|m| m.id != mapping_id);
        mappings.len() != before
    }

    /// Sync attempts for `id`, newest first.
    #[must_use]
    pub fn logs_for(&self, id: &str) -> Vec<IntegrationLog> {
        let mut logs: Vec<IntegrationLog> =
            self.logs.iter().filter(|log| log.integration_id == id).cloned().collect();
        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        logs
    }

    /// Received events the integration is subscribed to, newest first.
    #[must_use]
    pub fn events_for(&self, id: &str) -> Vec<WebhookEvent> {
        let Some(integration) = self.get(id) else {
            return Vec::new();
        };
        let mut events: Vec<WebhookEvent> = self
            .events
            .iter()
            .filter(|event| event.integration_id == id)
            .filter(|event| accepts_event(&integration.subscribed_events, &event.event_type))
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        events
    }
}
