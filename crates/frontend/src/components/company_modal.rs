//! Three-tab company create/edit dialog

use super::{use_toast, InlineSpinner, LoadingSpinner, TextField};
use crate::i18n::{use_text, Translator};
use crate::services::CompanyService;
use gloo::file::callbacks::{read_as_data_url, FileReader};
use salesclose_core::{CompanyForm, FormField, FormTab, Text};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompanyModalProps {
    pub open: bool,
    /// Company being edited; `None` opens an empty create form
    #[prop_or_default]
    pub company_id: Option<String>,
    pub on_close: Callback<()>,
    /// Fired after a successful save so the list can reload
    pub on_saved: Callback<()>,
}

#[derive(Clone, Default, PartialEq)]
struct FormState {
    form: CompanyForm,
}

enum FormAction {
    Replace(CompanyForm),
    Set(FormField, String),
    Next,
    Back,
    Select(FormTab),
    ApiError(String),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.form.clone();
        match action {
            FormAction::Replace(next) => form = next,
            FormAction::Set(field, value) => form.set(field, value),
            FormAction::Next => {
                form.next();
            }
            FormAction::Back => form.back(),
            FormAction::Select(tab) => form.select_tab(tab),
            FormAction::ApiError(message) => form.set_api_error(message),
        }
        Rc::new(Self { form })
    }
}

fn tab_label(tab: FormTab) -> Text {
    match tab {
        FormTab::BasicInfo => Text::TabBasicInfo,
        FormTab::Details => Text::TabDetails,
        FormTab::LoginCredentials => Text::TabCredentials,
    }
}

fn field_label(field: FormField) -> Text {
    match field {
        FormField::Logo => Text::Logo,
        FormField::Name => Text::CompanyName,
        FormField::ContactPersonName => Text::ContactPerson,
        FormField::ContactPersonPhone => Text::ContactPhone,
        FormField::SirenNumber => Text::SirenNumber,
        FormField::LegalName => Text::LegalName,
        FormField::Address => Text::Address,
        FormField::NafCode => Text::NafCode,
        FormField::LegalStatus => Text::LegalStatus,
        FormField::WorkforceSize => Text::WorkforceSize,
        FormField::Email => Text::Email,
        FormField::Password => Text::Password,
        FormField::ConfirmPassword => Text::ConfirmPassword,
    }
}

#[derive(Properties, PartialEq)]
struct LogoFieldProps {
    value: AttrValue,
    on_change: Callback<String>,
}

#[function_component(LogoField)]
fn logo_field(props: &LogoFieldProps) -> Html {
    let text = use_text();
    // Dropping the reader aborts the read
    let reader = use_mut_ref(|| None::<FileReader>);

    let onchange = {
        let reader = reader.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = gloo::file::File::from(file);
            let on_change = on_change.clone();
            let task = read_as_data_url(&file, move |result| match result {
                Ok(url) => on_change.emit(url),
                Err(err) => tracing::warn!(error = %err, "could not read logo file"),
            });
            *reader.borrow_mut() = Some(task);
        })
    };

    let on_remove = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(String::new()))
    };

    html! {
        <div class="flex items-center gap-4">
            if props.value.is_empty() {
                <label class="flex flex-col items-center justify-center w-24 h-24 border-2 border-dashed border-gray-300 rounded-full cursor-pointer hover:border-blue-500 text-xs text-gray-500 text-center">
                    {text.t(Text::UploadLogo)}
                    <input type="file" accept="image/*" class="hidden" {onchange} />
                </label>
            } else {
                <img src={props.value.clone()} alt="Logo" class="w-24 h-24 rounded-full object-cover shadow-md" />
                <button
                    type="button"
                    class="px-3 py-1.5 text-sm rounded-md border border-red-300 text-red-600 hover:bg-red-50"
                    onclick={on_remove}
                >
                    {text.t(Text::RemoveLogo)}
                </button>
            }
        </div>
    }
}

fn render_field(
    text: Translator,
    form: &CompanyForm,
    field: FormField,
    dispatcher: &UseReducerDispatcher<FormState>,
    disabled: bool,
) -> Html {
    let on_input = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |value: String| dispatcher.dispatch(FormAction::Set(field, value)))
    };

    if field == FormField::Logo {
        return html! {
            <div key={field.key()} class="space-y-1">
                <span class="block text-sm font-medium text-gray-700">{text.t(Text::Logo)}</span>
                <LogoField value={form.value(field).to_string()} on_change={on_input} />
            </div>
        };
    }

    html! {
        <TextField
            key={field.key()}
            name={field.key()}
            label={text.t(field_label(field))}
            value={form.value(field).to_string()}
            {on_input}
            input_type={if field.is_secret() { "password" } else if field == FormField::Email { "email" } else { "text" }}
            error={form.error(field).map(|e| AttrValue::from(e.to_string()))}
            required={form.is_required(field)}
            {disabled}
        />
    }
}

#[function_component(CompanyModal)]
pub fn company_modal(props: &CompanyModalProps) -> Html {
    let text = use_text();
    let toast = use_toast();
    let state = use_reducer(FormState::default);
    let loading = use_state(|| false);
    let saving = use_state(|| false);

    {
        let dispatcher = state.dispatcher();
        let loading = loading.clone();
        let toast = toast.clone();
        let on_close = props.on_close.clone();
        use_effect_with(
            (props.open, props.company_id.clone()),
            move |(open, company_id)| {
                if *open {
                    match company_id.clone() {
                        Some(id) => {
                            loading.set(true);
                            spawn_local(async move {
                                match CompanyService::new().get(&id).await {
                                    Ok(company) => {
                                        dispatcher.dispatch(FormAction::Replace(CompanyForm::edit(&company)))
                                    }
                                    Err(err) => {
                                        toast.error(text.t(Text::FailedToLoadCompany), err.user_message());
                                        on_close.emit(());
                                    }
                                }
                                loading.set(false);
                            });
                        }
                        None => dispatcher.dispatch(FormAction::Replace(CompanyForm::create())),
                    }
                }
            },
        );
    }

    if !props.open {
        return html! {};
    }

    let form = &state.form;
    let busy = *loading || *saving;

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_next = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FormAction::Next))
    };

    let on_back = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FormAction::Back))
    };

    let on_save = {
        let state = state.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |_: MouseEvent| {
            let mut draft = state.form.clone();
            let payload = draft.payload();
            let credentials = draft.credentials_update();
            let is_edit = draft.is_edit();
            state.dispatch(FormAction::Replace(draft));

            let Some(payload) = payload else {
                return;
            };
            saving.set(true);

            let dispatcher = state.dispatcher();
            let saving = saving.clone();
            let toast = toast.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match CompanyService::new().save(&payload, credentials.as_ref()).await {
                    Ok(()) => {
                        let title = if is_edit { Text::CompanyUpdated } else { Text::CompanyCreated };
                        toast.success(text.t(title));
                        on_saved.emit(());
                    }
                    Err(err) => {
                        let message = err.user_message();
                        dispatcher.dispatch(FormAction::ApiError(message.clone()));
                        toast.error(text.t(Text::FailedToSave), message);
                    }
                }
                saving.set(false);
            });
        })
    };

    let tabs = FormTab::ALL
        .iter()
        .map(|tab| {
            let active = *tab == form.tab();
            let onclick = {
                let dispatcher = state.dispatcher();
                let tab = *tab;
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(FormAction::Select(tab)))
            };
            html! {
                <button
                    type="button"
                    class={classes!(
                        "flex-1", "py-3", "text-sm", "font-medium", "border-b-2", "transition-colors",
                        if active { "border-blue-600 text-blue-600" } else { "border-transparent text-gray-500 hover:text-gray-700" }
                    )}
                    disabled={busy}
                    {onclick}
                >
                    {text.t(tab_label(*tab))}
                </button>
            }
        })
        .collect::<Html>();

    let dispatcher = state.dispatcher();
    let fields = form
        .tab()
        .fields()
        .iter()
        .map(|field| render_field(text, form, *field, &dispatcher, busy))
        .collect::<Html>();

    let title = if form.is_edit() { Text::UpdateCompany } else { Text::AddCompany };
    let secondary = "px-4 py-2 text-sm rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50 disabled:opacity-50";
    let primary = "px-4 py-2 text-sm rounded-lg bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50 flex items-center gap-2";

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div class="bg-white rounded-xl shadow-2xl w-full max-w-2xl mx-4">
                <div class="flex items-center justify-between px-6 py-4 border-b">
                    <h2 class="text-xl font-semibold text-gray-900">{text.t(title)}</h2>
                    <button class="text-gray-400 hover:text-gray-600 text-2xl" onclick={on_close.clone()}>{"×"}</button>
                </div>

                <div class="flex border-b px-6">{tabs}</div>

                <div class="px-6 py-6 space-y-4 max-h-[60vh] overflow-y-auto">
                    if *loading {
                        <LoadingSpinner text={text.t(Text::Loading).to_string()} />
                    } else {
                        {fields}
                    }
                    if let Some(message) = form.api_error() {
                        <div class="rounded-lg bg-red-50 border border-red-200 px-4 py-3 text-sm text-red-700">
                            {message}
                        </div>
                    }
                </div>

                <div class="flex justify-between px-6 py-4 border-t bg-gray-50 rounded-b-xl">
                    <button class={secondary} onclick={on_close} disabled={*saving}>{text.t(Text::Cancel)}</button>
                    <div class="flex gap-3">
                        if form.tab().prev().is_some() {
                            <button class={secondary} onclick={on_back} disabled={busy}>{text.t(Text::Back)}</button>
                        }
                        if form.tab().next().is_some() {
                            <button class={primary} onclick={on_next} disabled={busy}>{text.t(Text::Next)}</button>
                        } else {
                            <button class={primary} onclick={on_save} disabled={busy}>
                                if *saving {
                                    <InlineSpinner />
                                    {text.t(Text::Saving)}
                                } else {
                                    {text.t(Text::Save)}
                                }
                            </button>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
