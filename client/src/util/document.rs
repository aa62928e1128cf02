//! Document-level attributes driven by the active language.
//!
//! Sets `dir` and `lang` on the `<html>` element. Requires a browser
//! environment; SSR renders the defaults from the shell instead.

use crate::state::language::Language;

/// Attributes written to `<html>` for `language`.
#[must_use]
pub fn html_attributes(language: Language) -> [(&'static str, &'static str); 2] {
    [("dir", language.dir()), ("lang", language.code())]
}

/// Apply `dir`/`lang` for `language` on the `<html>` element.
pub fn apply_language(language: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            for (name, value) in html_attributes(language) {
                let _ = el.set_attribute(name, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
    }
}
