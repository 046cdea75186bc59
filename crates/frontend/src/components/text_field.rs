//! Labelled input with an inline error

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            on_input.emit(input.value());
        })
    };

    let border = if props.error.is_some() {
        "border-red-500 focus:ring-red-500"
    } else {
        "border-gray-300 focus:ring-blue-500"
    };

    html! {
        <div class="space-y-1">
            <label for={props.name.clone()} class="block text-sm font-medium text-gray-700">
                {&props.label}
                if props.required {
                    <span class="text-red-500 ml-0.5">{"*"}</span>
                }
            </label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                class={classes!(
                    "w-full", "px-3", "py-2", "border", "rounded-lg", "bg-white", "text-gray-900",
                    "focus:outline-none", "focus:ring-2", "disabled:bg-gray-100", border
                )}
                {oninput}
            />
            if let Some(error) = &props.error {
                <p class="text-sm text-red-600">{error}</p>
            }
        </div>
    }
}
