//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signs in through `state::auth::sign_in`, then sends the user to the URL
//! the route guard remembered, or the dashboard. A visitor who already has a
//! session skips the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::icon::SvgIcon;
use crate::components::language_toggle::LanguageToggle;
use crate::components::protected_route::DEFAULT_AFTER_LOGIN;
use crate::i18n::AuthText;
use crate::state::auth::AuthState;
use crate::state::language::use_language;
use crate::util::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginInputError {
    MissingEmail,
    MissingPassword,
}

impl LoginInputError {
    #[must_use]
    pub fn message(self, text: &AuthText) -> &'static str {
        match self {
            Self::MissingEmail => text.missing_email,
            Self::MissingPassword => text.missing_password,
        }
    }
}

/// Trim the email and require both fields. The password is kept verbatim.
///
/// # Errors
///
/// Returns the first missing field.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), LoginInputError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LoginInputError::MissingEmail);
    }
    if password.is_empty() {
        return Err(LoginInputError::MissingPassword);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = use_language();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the app.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() && !busy.get_untracked() {
            navigate_home(DEFAULT_AFTER_LOGIN, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(err) => {
                error.set(Some(err.message(&lang.text().auth).to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::sign_in(auth, &email_value, &password_value).await {
                    Ok(_) => {
                        let target = crate::components::protected_route::take_redirect_after_login();
                        navigate(&target, NavigateOptions { replace: true, ..Default::default() });
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__toolbar">
                <LanguageToggle/>
            </div>
            <div class="login-card">
                <div class="login-card__brand">
                    <SvgIcon icon=Icon::Award class="login-card__logo"/>
                    <span>{move || lang.text().brand.name}</span>
                </div>
                <h1>{move || lang.text().auth.title}</h1>
                <p class="login-card__subtitle">{move || lang.text().auth.subtitle}</p>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <label class="field">
                        <span class="field__label">{move || lang.text().auth.email}</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="username"
                            placeholder="you@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">{move || lang.text().auth.password}</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary login-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { lang.text().auth.submitting } else { lang.text().auth.submit }}
                    </button>
                </form>
                <A href="/" attr:class="login-card__back">{move || lang.text().auth.back_home}</A>
            </div>
        </div>
    }
}
