//! UI locale context

use crate::browser::cookies::cookie_header;
use salesclose_core::{Locale, Text};
use yew::prelude::*;

/// Locale picked at page load from the locale cookie
pub fn initial_locale() -> Locale {
    Locale::resolve(&cookie_header())
}

/// Translator handed out by [`use_text`]
#[derive(Clone, Copy, PartialEq)]
pub struct Translator {
    pub locale: Locale,
}

impl Translator {
    pub fn t(&self, text: Text) -> &'static str {
        self.locale.text(text)
    }
}

#[hook]
pub fn use_locale() -> Locale {
    use_context::<Locale>().unwrap_or_default()
}

#[hook]
pub fn use_text() -> Translator {
    Translator {
        locale: use_locale(),
    }
}
