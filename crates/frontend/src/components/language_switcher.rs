//! English/French switcher persisted in the locale cookie

use crate::browser::{self, cookies};
use crate::i18n::use_text;
use salesclose_core::{Locale, Text};
use yew::prelude::*;

/// Locale shown by the switcher, writing a first-visit guess from the browser
/// language when no cookie exists yet.
fn switcher_locale() -> Locale {
    let header = cookies::cookie_header();
    if let Some(locale) = Locale::from_cookie_header(&header) {
        return locale;
    }
    let guess = Locale::from_browser_language(&browser::browser_language());
    cookies::write_cookie(&guess.cookie());
    guess
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let text = use_text();
    let selected = use_state(switcher_locale);
    let is_open = use_state(|| false);

    let toggle_open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let choose = {
        let selected = selected.clone();
        let is_open = is_open.clone();
        move |locale: Locale| {
            let selected = selected.clone();
            let is_open = is_open.clone();
            Callback::from(move |_: MouseEvent| {
                selected.set(locale);
                is_open.set(false);
                cookies::write_cookie(&locale.cookie());
                // Strings are resolved once per page load
                browser::reload();
            })
        }
    };

    html! {
        <div class="relative">
            <button
                class="w-full flex items-center justify-between px-4 py-3 rounded-xl bg-slate-800/50 hover:bg-slate-700/50 border border-slate-700/50 transition-all duration-300"
                title={text.t(Text::Language)}
                onclick={toggle_open}
            >
                <span class="flex items-center gap-2">
                    <span class="text-lg">{selected.flag()}</span>
                    <span class="text-sm font-medium text-white">{selected.label()}</span>
                </span>
                <span class={classes!("text-slate-400", "transition-transform", (*is_open).then_some("rotate-180"))}>{"▾"}</span>
            </button>

            if *is_open {
                <div class="absolute bottom-full left-0 right-0 mb-2 bg-slate-900 rounded-xl border border-slate-700/50 shadow-2xl z-50 overflow-hidden">
                    <div class="py-2">
                        {Locale::ALL.iter().map(|locale| {
                            let active = *locale == *selected;
                            html! {
                                <button
                                    key={locale.code()}
                                    class={classes!(
                                        "w-full", "flex", "items-center", "gap-3", "px-4", "py-3", "transition-all",
                                        if active { "bg-blue-600/20 text-white" } else { "text-slate-300 hover:bg-slate-700/60 hover:text-white" }
                                    )}
                                    onclick={choose(*locale)}
                                >
                                    <span class="text-lg">{locale.flag()}</span>
                                    <span class="text-sm font-medium">{locale.label()}</span>
                                    if active {
                                        <span class="ml-auto w-2 h-2 bg-blue-400 rounded-full"></span>
                                    }
                                </button>
                            }
                        }).collect::<Html>()}
                    </div>
                </div>
                <div class="fixed inset-0 z-40" onclick={close}></div>
            }
        </div>
    }
}
