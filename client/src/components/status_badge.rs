//! Colored status pill for enrollment, renewal, task and sync statuses.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::net::types::Status;
use crate::state::language::use_language;
use crate::util::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Info,
    Warning,
    Danger,
    Neutral,
}

impl BadgeTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "badge--success",
            Self::Info => "badge--info",
            Self::Warning => "badge--warning",
            Self::Danger => "badge--danger",
            Self::Neutral => "badge--neutral",
        }
    }
}

/// Visual treatment for one status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeConfig {
    pub tone: BadgeTone,
    pub icon: Icon,
}

#[must_use]
pub fn badge_config(status: Status) -> BadgeConfig {
    let (tone, icon) = match status {
        Status::Active => (BadgeTone::Info, Icon::Clock),
        Status::Completed | Status::Success => (BadgeTone::Success, Icon::Check),
        Status::ManagerApproved => (BadgeTone::Success, Icon::Shield),
        Status::Expired | Status::Failed => (BadgeTone::Danger, Icon::Alert),
        Status::Rejected => (BadgeTone::Danger, Icon::Close),
        Status::Blocked => (BadgeTone::Danger, Icon::Ban),
        Status::Pending => (BadgeTone::Warning, Icon::Clock),
        Status::ForemanApproved => (BadgeTone::Info, Icon::Check),
        Status::InProgress | Status::Running => (BadgeTone::Info, Icon::Refresh),
        Status::Inactive => (BadgeTone::Neutral, Icon::Minus),
    };
    BadgeConfig { tone, icon }
}

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    let lang = use_language();
    let config = badge_config(status);
    view! {
        <span class=format!("badge {}", config.tone.class()) data-status=status.as_str()>
            <SvgIcon icon=config.icon class="badge__icon"/>
            {move || lang.text().status.label(status)}
        </span>
    }
}
