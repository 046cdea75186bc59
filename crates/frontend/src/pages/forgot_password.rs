//! Request a password reset link

use crate::app::Route;
use crate::components::{use_toast, InlineSpinner, TextField};
use crate::i18n::use_text;
use crate::services::AuthService;
use salesclose_core::validation::{validate_email_field, FieldErrors};
use salesclose_core::Text;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let text = use_text();
    let toast = use_toast();
    let email = use_state(String::new);
    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let sent = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let onsubmit = {
        let email = email.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let found = validate_email_field(&email);
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }

            submitting.set(true);
            let email = (*email).clone();
            let toast = toast.clone();
            let submitting = submitting.clone();
            let sent = sent.clone();
            spawn_local(async move {
                match AuthService::new().forgot_password(&email).await {
                    Ok(()) => sent.set(true),
                    Err(err) => toast.error(text.t(Text::RequestFailed), err.user_message()),
                }
                submitting.set(false);
            });
        })
    };

    let back_link = html! {
        <Link<Route> to={Route::Login} classes="block text-center text-sm text-blue-600 hover:underline">
            {text.t(Text::BackToLogin)}
        </Link<Route>>
    };

    let body = if *sent {
        html! {
            <div class="space-y-6 text-center">
                <div class="mx-auto w-14 h-14 rounded-full bg-green-100 text-green-600 flex items-center justify-center text-2xl">{"✓"}</div>
                <h1 class="text-2xl font-bold text-gray-900">{text.t(Text::ResetLinkSentTitle)}</h1>
                <p class="text-gray-500">{text.t(Text::ResetLinkSent)}</p>
                {back_link}
            </div>
        }
    } else {
        html! {
            <>
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold text-gray-900">{text.t(Text::ForgotPasswordTitle)}</h1>
                    <p class="mt-2 text-gray-500">{text.t(Text::ForgotPasswordSubtitle)}</p>
                </div>
                <form class="space-y-5" {onsubmit} novalidate=true>
                    <TextField
                        name="email"
                        label={text.t(Text::Email)}
                        value={(*email).clone()}
                        on_input={on_email}
                        input_type="email"
                        error={errors.get("email").map(|e| AttrValue::from(e.clone()))}
                        required=true
                        disabled={*submitting}
                    />
                    <button
                        type="submit"
                        class="w-full flex items-center justify-center gap-2 py-3 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:bg-gray-400"
                        disabled={*submitting}
                    >
                        if *submitting {
                            <InlineSpinner />
                        }
                        {text.t(Text::SendResetLink)}
                    </button>
                    {back_link}
                </form>
            </>
        }
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-900 to-slate-700 px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-2xl p-8">
                {body}
            </div>
        </div>
    }
}
