//! Browser-side checks, run with `wasm-pack test --headless --firefox`

use salesclose_core::{
    ConsoleConfig, Locale, PersistenceTarget, StorageBackend, Text, TimerDriver, TimerKind,
};
use salesclose_frontend::browser::storage::{remember_last_route, take_last_route, WebStorage};
use salesclose_frontend::browser::timers::{delay_millis, GlooTimers};
use salesclose_frontend::components::{ToastAction, ToastKind, ToastList};
use salesclose_frontend::i18n::Translator;
use salesclose_frontend::Route;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;
use yew::prelude::Reducible;
use yew_router::Routable;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn only_console_routes_need_a_session() {
    assert!(Route::Dashboard.is_protected());
    assert!(Route::Companies.is_protected());
    assert!(!Route::Login.is_protected());
    assert!(!Route::ForgotPassword.is_protected());
    assert!(!Route::NewPassword.is_protected());
    assert_eq!(Route::recognize("/dashboard/companies"), Some(Route::Companies));
}

#[wasm_bindgen_test]
fn deauthorization_paths_map_to_router_routes() {
    assert_eq!(Route::from_path_or_login("/login"), Route::Login);
    assert_eq!(Route::from_path_or_login("/dashboard"), Route::Dashboard);
    assert_eq!(Route::from_path_or_login("/no/such/page"), Route::Login);
}

#[wasm_bindgen_test]
fn toasts_stack_and_dismiss() {
    let list = Rc::new(ToastList::default());
    let list = list.reduce(ToastAction::Push {
        kind: ToastKind::Success,
        title: "Saved".into(),
        description: None,
    });
    let list = list.reduce(ToastAction::Push {
        kind: ToastKind::Error,
        title: "Failed".into(),
        description: Some("Server error".into()),
    });
    assert_eq!(list.toasts().len(), 2);

    let first = list.toasts()[0].id;
    let list = list.reduce(ToastAction::Dismiss(first));
    assert_eq!(list.toasts().len(), 1);
    assert_eq!(list.toasts()[0].title, "Failed");
}

#[wasm_bindgen_test]
fn dismissing_unknown_toast_keeps_state() {
    let list = Rc::new(ToastList::default()).reduce(ToastAction::Push {
        kind: ToastKind::Success,
        title: "Saved".into(),
        description: None,
    });
    let same = list.clone().reduce(ToastAction::Dismiss(999));
    assert!(Rc::ptr_eq(&list, &same));
}

#[wasm_bindgen_test]
fn timer_delays_are_clamped_for_set_timeout() {
    assert_eq!(delay_millis(Duration::from_secs(60)), 60_000);
    assert_eq!(delay_millis(Duration::from_secs(u64::MAX)), i32::MAX as u32);
}

#[wasm_bindgen_test]
fn timers_track_armed_kinds() {
    let mut timers = GlooTimers::new(|_| {});
    timers.arm(TimerKind::Refresh, Duration::from_secs(600));
    assert!(timers.is_armed(TimerKind::Refresh));
    assert!(!timers.is_armed(TimerKind::Inactivity));

    timers.cancel(TimerKind::Refresh);
    assert!(!timers.is_armed(TimerKind::Refresh));
}

#[wasm_bindgen_test]
fn translator_follows_locale() {
    let en = Translator { locale: Locale::En };
    let fr = Translator { locale: Locale::Fr };
    assert_eq!(en.t(Text::SignIn), Locale::En.text(Text::SignIn));
    assert_ne!(en.t(Text::Logout), fr.t(Text::Logout));
}

#[wasm_bindgen_test]
fn web_storage_round_trip() {
    let storage = WebStorage::new(PersistenceTarget::SessionScoped);
    storage.set("probe", "value").unwrap();
    assert_eq!(storage.get("probe").unwrap().as_deref(), Some("value"));
    storage.remove("probe").unwrap();
    assert_eq!(storage.get("probe").unwrap(), None);
}

#[wasm_bindgen_test]
fn last_route_is_read_once() {
    remember_last_route("/dashboard/companies");
    assert_eq!(take_last_route().as_deref(), Some("/dashboard/companies"));
    assert_eq!(take_last_route(), None);

    let durable = WebStorage::new(PersistenceTarget::Durable);
    assert_eq!(durable.get(ConsoleConfig::LAST_ROUTE_KEY).unwrap(), None);
}
