//! Choose a new password from a reset link

use crate::app::Route;
use crate::components::{use_toast, InlineSpinner, TextField};
use crate::i18n::use_text;
use crate::services::AuthService;
use salesclose_core::validation::{validate_new_password, FieldErrors};
use salesclose_core::Text;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// `?token=` carried by the reset e-mail
#[derive(Debug, Default, Deserialize)]
struct ResetQuery {
    #[serde(default)]
    token: Option<String>,
}

#[hook]
fn use_reset_token() -> Option<String> {
    use_location()
        .and_then(|location| location.query::<ResetQuery>().ok())
        .and_then(|query| query.token)
        .filter(|token| !token.is_empty())
}

#[function_component(NewPasswordPage)]
pub fn new_password_page() -> Html {
    let text = use_text();
    let toast = use_toast();
    let navigator = use_navigator();
    let token = use_reset_token();

    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let errors = use_state(FieldErrors::new);
    let api_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };
    let on_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |value: String| confirm.set(value))
    };

    let onsubmit = {
        let token = token.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let errors = errors.clone();
        let api_error = api_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let Some(token) = token.clone() else {
                api_error.set(Some(text.t(Text::MissingResetToken).to_string()));
                return;
            };

            let found = validate_new_password(&password, &confirm);
            let valid = found.is_empty();
            errors.set(found);
            api_error.set(None);
            if !valid {
                return;
            }

            submitting.set(true);
            let password = (*password).clone();
            let confirm = (*confirm).clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            let api_error = api_error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match AuthService::new().reset_password(&token, &password, &confirm).await {
                    Ok(()) => {
                        toast.success(text.t(Text::PasswordResetDone));
                        if let Some(navigator) = &navigator {
                            navigator.replace(&Route::Login);
                        }
                    }
                    Err(err) => {
                        let message = err.user_message();
                        toast.error(text.t(Text::RequestFailed), message.clone());
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
                    <h1 class="text-2xl font-bold text-gray-900">{text.t(Text::NewPasswordTitle)}</h1>
                    <p class="mt-2 text-gray-500">{text.t(Text::NewPasswordSubtitle)}</p>
                </div>

                if token.is_none() {
                    <div class="mb-5 rounded-lg bg-yellow-50 border border-yellow-200 px-4 py-3 text-sm text-yellow-800">
                        {text.t(Text::MissingResetToken)}
                    </div>
                }

                <form class="space-y-5" {onsubmit} novalidate=true>
                    <TextField
                        name="password"
                        label={text.t(Text::NewPassword)}
                        value={(*password).clone()}
                        on_input={on_password}
                        input_type="password"
                        error={field_error("password")}
                        required=true
                        disabled={*submitting}
                    />
                    <TextField
                        name="confirmPassword"
                        label={text.t(Text::ConfirmPassword)}
                        value={(*confirm).clone()}
                        on_input={on_confirm}
                        input_type="password"
                        error={field_error("confirmPassword")}
                        required=true
                        disabled={*submitting}
                    />

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
                        }
                        {text.t(Text::ResetPassword)}
                    </button>
                    <Link<Route> to={Route::Login} classes="block text-center text-sm text-blue-600 hover:underline">
                        {text.t(Text::BackToLogin)}
                    </Link<Route>>
                </form>
            </div>
        </div>
    }
}
