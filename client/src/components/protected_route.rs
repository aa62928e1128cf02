//! Route guard gating children on session and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every authenticated route in `app.rs`. The decision is a pure
//! function of `AuthState`, so the guard keeps no cache and never retries.
//!
//! DESIGN
//! ======
//! `Loading` renders a placeholder, `Unauthenticated` remembers the attempted
//! URL in session storage and replaces the history entry with `/login`,
//! `Forbidden` renders an access-denied panel. Children are only built in
//! `Allowed`. `GateView` does the rendering and needs no router, so the
//! guard's markup can be rendered on its own.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::icon::SvgIcon;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::state::language::use_language;
use crate::util::icons::Icon;
use crate::util::storage;

/// Session-storage key holding the URL to return to after login.
pub const REDIRECT_AFTER_LOGIN_KEY: &str = "trainflow_redirect_after_login";
pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGate {
    Loading,
    Unauthenticated,
    Forbidden,
    Allowed,
}

/// Decide what a guarded route shows. An empty `required_roles` admits any
/// signed-in user.
#[must_use]
pub fn gate(loading: bool, user: Option<&User>, required_roles: &[Role]) -> RouteGate {
    if loading {
        return RouteGate::Loading;
    }
    let Some(user) = user else {
        return RouteGate::Unauthenticated;
    };
    if required_roles.is_empty() || required_roles.contains(&user.role) {
        RouteGate::Allowed
    } else {
        RouteGate::Forbidden
    }
}

/// Where to send an unauthenticated visitor, and what to remember.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    pub remember: String,
    pub target: &'static str,
}

#[must_use]
pub fn plan_login_redirect(pathname: &str, search: &str) -> LoginRedirect {
    let query = search.trim_start_matches('?');
    let remember = if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") };
    LoginRedirect { remember, target: LOGIN_PATH }
}

/// Accept only same-origin absolute paths that do not loop back to login.
#[must_use]
pub fn sanitize_redirect(candidate: Option<String>) -> String {
    match candidate {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && path != LOGIN_PATH
                && !path.starts_with("/login?") =>
        {
            path
        }
        _ => DEFAULT_AFTER_LOGIN.to_owned(),
    }
}

/// Consume the remembered post-login destination.
pub fn take_redirect_after_login() -> String {
    sanitize_redirect(storage::take_session(REDIRECT_AFTER_LOGIN_KEY))
}

#[component]
pub fn ProtectedRoute(#[prop(optional)] required_roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    let decision = Memo::new(move |_| auth.with(|a| gate(a.loading, a.user.as_ref(), required_roles)));

    Effect::new(move || {
        if decision.get() != RouteGate::Unauthenticated {
            return;
        }
        let redirect = plan_login_redirect(&location.pathname.get_untracked(), &location.search.get_untracked());
        storage::save_session(REDIRECT_AFTER_LOGIN_KEY, &redirect.remember);
        navigate(redirect.target, NavigateOptions { replace: true, ..Default::default() });
    });

    view! { <GateView decision=Signal::from(decision)>{children()}</GateView> }
}

/// Renders the body for a gate decision. Children are built only when the
/// decision is `Allowed`.
#[component]
pub fn GateView(decision: Signal<RouteGate>, children: ChildrenFn) -> impl IntoView {
    let lang = use_language();
    move || match decision.get() {
        RouteGate::Loading => view! {
            <div class="route-loading" aria-busy="true">
                <span class="route-loading__spinner"></span>
                <p>{move || lang.text().access.checking}</p>
            </div>
        }
        .into_any(),
        RouteGate::Unauthenticated => ().into_any(),
        RouteGate::Forbidden => view! { <AccessDenied/> }.into_any(),
        RouteGate::Allowed => children().into_any(),
    }
}

#[component]
pub fn AccessDenied() -> impl IntoView {
    let lang = use_language();
    view! {
        <div class="access-denied" role="alert">
            <SvgIcon icon=Icon::Ban class="access-denied__icon"/>
            <h2>{move || lang.text().access.denied_title}</h2>
            <p>{move || lang.text().access.denied_body}</p>
            <a href=DEFAULT_AFTER_LOGIN class="btn btn--primary">
                {move || lang.text().access.go_back}
            </a>
        </div>
    }
}
