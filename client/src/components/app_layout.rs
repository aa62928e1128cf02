//! Authenticated application shell: sidebar, header and content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route renders inside this layout. Navigation entries are
//! filtered by the signed-in user's role using the same role sets the router
//! guards with, so a visible link never leads to an access-denied panel.

#[cfg(test)]
#[path = "app_layout_test.rs"]
mod app_layout_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::app::{APPROVER_ROLES, INTEGRATION_ROLES, REPORT_ROLES};
use crate::components::icon::SvgIcon;
use crate::components::language_toggle::LanguageToggle;
use crate::components::notification_bell::NotificationBell;
use crate::i18n::NavText;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::language::use_language;
use crate::util::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Dashboard,
    Approvals,
    Reports,
    Integrations,
}

impl NavKey {
    #[must_use]
    pub fn label(self, text: &NavText) -> &'static str {
        match self {
            Self::Dashboard => text.dashboard,
            Self::Approvals => text.approvals,
            Self::Reports => text.reports,
            Self::Integrations => text.integrations,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub key: NavKey,
    pub path: &'static str,
    pub icon: Icon,
    /// Empty admits every role.
    pub roles: &'static [Role],
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { key: NavKey::Dashboard, path: "/dashboard", icon: Icon::Home, roles: &[] },
    NavItem { key: NavKey::Approvals, path: "/approvals", icon: Icon::Check, roles: APPROVER_ROLES },
    NavItem { key: NavKey::Reports, path: "/reports", icon: Icon::Chart, roles: REPORT_ROLES },
    NavItem { key: NavKey::Integrations, path: "/integrations", icon: Icon::Link, roles: INTEGRATION_ROLES },
];

/// Navigation entries `role` may open, in sidebar order.
#[must_use]
pub fn visible_nav(role: Role) -> Vec<NavItem> {
    NAV_ITEMS.into_iter().filter(|item| item.roles.is_empty() || item.roles.contains(&role)).collect()
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = use_language();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let nav = move || {
        let text = &lang.text().nav;
        auth.with(AuthState::role)
            .map(visible_nav)
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                view! {
                    <A href=item.path attr:class="sidebar__link">
                        <SvgIcon icon=item.icon/>
                        <span>{item.key.label(text)}</span>
                    </A>
                }
            })
            .collect_view()
    };

    let identity = move || {
        auth.with(|a| {
            a.user.as_ref().map(|user| {
                let role = lang.text().roles.label(user.role);
                (user.display_name(), user.initials(), role)
            })
        })
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::auth::sign_out(auth).await;
                navigate("/login", NavigateOptions::default());
            });
        }
    };

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar__brand">
                    <SvgIcon icon=Icon::Award class="sidebar__logo"/>
                    <span>{move || lang.text().brand.name}</span>
                </div>
                <nav class="sidebar__nav">{nav}</nav>
            </aside>
            <div class="app-layout__main">
                <header class="app-header">
                    <span class="app-header__spacer"></span>
                    <LanguageToggle/>
                    <NotificationBell/>
                    {move || {
                        identity()
                            .map(|(name, initials, role)| {
                                view! {
                                    <div class="app-header__user">
                                        <span class="app-header__avatar">{initials}</span>
                                        <span class="app-header__name">{name}</span>
                                        <span class="app-header__role">{role}</span>
                                    </div>
                                }
                            })
                    }}
                    <button class="btn app-header__logout" on:click=on_sign_out>
                        <SvgIcon icon=Icon::Logout/>
                        <span>{move || lang.text().nav.sign_out}</span>
                    </button>
                </header>
                <main class="app-layout__content">{children()}</main>
            </div>
        </div>
    }
}
