//! Sign-in page

use crate::app::Route;
use crate::auth::use_auth;
use crate::browser::{cookies, storage};
use crate::components::{use_toast, InlineSpinner, TextField};
use crate::i18n::use_text;
use crate::services::AuthService;
use salesclose_core::cookies::cookie_assignment;
use salesclose_core::validation::{validate_login, FieldErrors};
use salesclose_core::{ConsoleConfig, Text};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Where to land after signing in: the protected page the visitor was
/// bounced from, or the dashboard.
fn landing_route() -> Route {
    storage::take_last_route()
        .and_then(|path| Route::recognize(&path))
        .filter(Route::is_protected)
        .unwrap_or(Route::Dashboard)
}

fn write_remember_me(remember: bool) {
    let assignment = if remember {
        cookie_assignment(ConsoleConfig::REMEMBER_ME_COOKIE, "true", None)
    } else {
        cookie_assignment(ConsoleConfig::REMEMBER_ME_COOKIE, "", Some(0))
    };
    cookies::write_cookie(&assignment);
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let text = use_text();
    let toast = use_toast();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| false);
    let errors = use_state(FieldErrors::new);
    let api_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };
    let on_remember = {
        let remember = remember.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            remember.set(input.checked());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let remember = remember.clone();
        let errors = errors.clone();
        let api_error = api_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let found = validate_login(&email, &password);
            let valid = found.is_empty();
            errors.set(found);
            api_error.set(None);
            if !valid {
                return;
            }

            write_remember_me(*remember);
            submitting.set(true);

            let email = (*email).clone();
            let password = (*password).clone();
            let auth = auth.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            let api_error = api_error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match AuthService::new().login(&email, &password).await {
                    Ok(grant) => {
                        auth.login(grant);
                        toast.success(text.t(Text::LoginSuccess));
                        if let Some(navigator) = &navigator {
                            navigator.replace(&landing_route());
                        }
                    }
                    Err(err) => {
                        let message = err.user_message();
                        tracing::info!(error = %err, "sign-in rejected");
                        toast.error(text.t(Text::LoginFailed), message.clone());
                        api_error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field_error = |key: &str| errors.get(key).map(|e| AttrValue::from(e.clone()));

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-900 to-slate-700 px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-2xl p-8">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">{text.t(Text::LoginTitle)}</h1>
                    <p class="mt-2 text-gray-500">{text.t(Text::LoginSubtitle)}</p>
                </div>

                <form class="space-y-5" {onsubmit} novalidate=true>
                    <TextField
                        name="email"
                        label={text.t(Text::Email)}
                        value={(*email).clone()}
                        on_input={on_email}
                        input_type="email"
                        placeholder="name@company.com"
                        error={field_error("email")}
                        required=true
                        disabled={*submitting}
                    />
                    <TextField
                        name="password"
                        label={text.t(Text::Password)}
                        value={(*password).clone()}
                        on_input={on_password}
                        input_type="password"
                        error={field_error("password")}
                        required=true
                        disabled={*submitting}
                    />

                    <div class="flex items-center justify-between text-sm">
                        <label class="flex items-center gap-2 text-gray-600">
                            <input
                                type="checkbox"
                                class="rounded border-gray-300"
                                checked={*remember}
                                onchange={on_remember}
                            />
                            {text.t(Text::RememberMe)}
                        </label>
                        <Link<Route> to={Route::ForgotPassword} classes="text-blue-600 hover:underline">
                            {text.t(Text::ForgotPasswordLink)}
                        </Link<Route>>
                    </div>

                    if let Some(message) = &*api_error {
                        <div class="rounded-lg bg-red-50 border border-red-200 px-4 py-3 text-sm text-red-700">
                            {message}
                        </div>
                    }

                    <button
                        type="submit"
                        class="w-full flex items-center justify-center gap-2 py-3 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:bg-gray-400"
                        disabled={*submitting}
                    >
                        if *submitting {
                            <InlineSpinner />
                            {text.t(Text::SigningIn)}
                        } else {
                            {text.t(Text::SignIn)}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
