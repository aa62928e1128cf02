//! Button switching between English and Arabic.

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::state::language::use_language;
use crate::util::icons::Icon;

/// Shows the name of the language a click switches to.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let lang = use_language();
    view! {
        <button
            class="btn language-toggle"
            title=move || lang.text().nav.switch_language
            on:click=move |_| lang.toggle()
        >
            <SvgIcon icon=Icon::Globe/>
            <span lang=move || lang.get().toggled().code()>{move || lang.get().toggled().native_name()}</span>
        </button>
    }
}
