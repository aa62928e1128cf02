//! Active UI language and its application-wide context.
//!
//! DESIGN
//! ======
//! `App` constructs one [`LanguageContext`] and provides it. Components read
//! it through [`use_language`]; without a provider they get a detached
//! English context whose setters do nothing, so stray components render
//! instead of panicking. Every accepted change persists to `localStorage`
//! and rewrites `<html dir lang>`.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::i18n::{Translations, translations};
use crate::util::{document, storage};

pub const LANGUAGE_STORAGE_KEY: &str = "trainflow_language";

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// BCP-47 code, also the persisted value.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    #[must_use]
    pub fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Name of the language written in itself.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Resolve a stored preference, falling back to the default for missing or
/// unrecognized values.
#[must_use]
pub fn stored_or_default(stored: Option<&str>) -> Language {
    stored.and_then(Language::from_code).unwrap_or_default()
}

/// The change to commit when `requested` is asked for while `current` is
/// active; `None` when nothing changes.
#[must_use]
pub fn transition(current: Language, requested: Language) -> Option<Language> {
    (current != requested).then_some(requested)
}

/// Handle to the current language. `Copy`, so closures capture it freely.
#[derive(Clone, Copy, Debug)]
pub struct LanguageContext {
    current: RwSignal<Language>,
    attached: bool,
}

impl LanguageContext {
    /// Create the application context and provide it to descendants.
    ///
    /// Starts at the default so server and client markup agree; the stored
    /// preference is restored by an effect once the app is live in the browser.
    pub fn provide() -> Self {
        let ctx = Self { current: RwSignal::new(Language::default()), attached: true };
        provide_context(ctx);
        Effect::new(move |_| ctx.restore());
        ctx
    }

    /// A context not wired to storage or the document.
    #[must_use]
    pub fn detached() -> Self {
        Self { current: RwSignal::new(Language::default()), attached: false }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Current language (tracked).
    #[must_use]
    pub fn get(&self) -> Language {
        self.current.get()
    }

    /// Current language without subscribing.
    #[must_use]
    pub fn get_untracked(&self) -> Language {
        self.current.get_untracked()
    }

    /// Translations for the current language (tracked).
    #[must_use]
    pub fn text(&self) -> &'static Translations {
        translations(self.get())
    }

    /// Switch to `next`. Repeating the active language is a no-op.
    pub fn set(&self, next: Language) {
        if !self.attached {
            return;
        }
        let Some(next) = transition(self.current.get_untracked(), next) else {
            return;
        };
        self.current.set(next);
        storage::save_local(LANGUAGE_STORAGE_KEY, next.code());
        document::apply_language(next);
    }

    pub fn toggle(&self) {
        self.set(self.get_untracked().toggled());
    }

    fn restore(&self) {
        let stored = storage::load_local(LANGUAGE_STORAGE_KEY);
        let preferred = stored_or_default(stored.as_deref());
        document::apply_language(self.current.get_untracked());
        self.set(preferred);
    }
}

static FALLBACK_WARNED: AtomicBool = AtomicBool::new(false);

/// True only for the first caller to flip `flag`.
fn first_time(flag: &AtomicBool) -> bool {
    !flag.swap(true, Ordering::Relaxed)
}

/// The provided language context, or a detached English fallback. The
/// fallback is logged once per process.
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| {
        if first_time(&FALLBACK_WARNED) {
            leptos::logging::warn!("no LanguageContext provided; falling back to English");
        }
        LanguageContext::detached()
    })
}
