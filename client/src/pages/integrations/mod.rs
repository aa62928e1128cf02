//! Integration management pages: list, create/edit, sync logs, field
//! mappings and webhook events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads and writes the `RwSignal<IntegrationsState>` context
//! provided by `App`. Nothing here talks to the backend.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod form;
pub mod list;
pub mod logs;
pub mod mappings;
pub mod webhooks;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::data_table::TableRow;
use crate::components::icon::SvgIcon;
use crate::i18n::IntegrationText;
use crate::net::types::{FieldMapping, Integration, IntegrationLog, WebhookEvent};
use crate::state::integrations::IntegrationsState;
use crate::state::language::use_language;
use crate::util::icons::Icon;

pub const INTEGRATIONS_PATH: &str = "/integrations";

impl TableRow for Integration {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl TableRow for FieldMapping {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl TableRow for IntegrationLog {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl TableRow for WebhookEvent {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

/// Per-integration sub-pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrationTab {
    Edit,
    Logs,
    Mappings,
    Webhooks,
}

impl IntegrationTab {
    pub const ALL: [Self; 4] = [Self::Edit, Self::Logs, Self::Mappings, Self::Webhooks];

    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Logs => "logs",
            Self::Mappings => "mappings",
            Self::Webhooks => "webhooks",
        }
    }

    #[must_use]
    pub fn label(self, text: &IntegrationText) -> &'static str {
        match self {
            Self::Edit => text.tab_edit,
            Self::Logs => text.tab_logs,
            Self::Mappings => text.tab_mappings,
            Self::Webhooks => text.tab_webhooks,
        }
    }
}

#[must_use]
pub fn integration_path(id: &str, tab: IntegrationTab) -> String {
    format!("{INTEGRATIONS_PATH}/{id}/{}", tab.segment())
}

/// The `:id` route parameter.
pub fn use_integration_id() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()))
}

/// Integration name with tab links; shows a not-found notice for unknown ids.
#[component]
pub fn IntegrationHeader(id: Memo<String>, active: IntegrationTab) -> impl IntoView {
    let store = expect_context::<RwSignal<IntegrationsState>>();
    let lang = use_language();

    move || {
        let text = &lang.text().integrations;
        let current = id.get();
        let Some(name) = store.with(|s| s.get(&current).map(|i| i.name.clone())) else {
            return view! {
                <div class="page__header">
                    <p class="notice notice--error">{text.error_not_found}</p>
                    <A href=INTEGRATIONS_PATH attr:class="btn">{lang.text().common.back}</A>
                </div>
            }
            .into_any();
        };
        let tabs = IntegrationTab::ALL
            .into_iter()
            .map(|tab| {
                let class = if tab == active { "tabs__tab tabs__tab--active" } else { "tabs__tab" };
                view! { <A href=integration_path(&current, tab) attr:class=class>{tab.label(text)}</A> }
            })
            .collect_view();
        view! {
            <header class="page__header">
                <A href=INTEGRATIONS_PATH attr:class="page__back">{lang.text().common.back}</A>
                <h1>{name}</h1>
                <nav class="tabs">{tabs}</nav>
            </header>
        }
        .into_any()
    }
}

#[component]
pub fn LocalOnlyNotice() -> impl IntoView {
    let lang = use_language();
    view! {
        <p class="notice notice--info">
            <SvgIcon icon=Icon::Alert/>
            {move || lang.text().integrations.local_only}
        </p>
    }
}
