//! Inline SVG rendering for [`Icon`].

use leptos::prelude::*;

use crate::util::icons::Icon;

/// Stroke icon sized by CSS through `class`.
#[component]
pub fn SvgIcon(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path()></path>
        </svg>
    }
}
