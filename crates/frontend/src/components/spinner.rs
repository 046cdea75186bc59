//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="text-center p-10">
            <div class="w-10 h-10 border-4 border-gray-200 border-t-blue-500 rounded-full animate-spin mx-auto mb-5"></div>
            if let Some(text) = &props.text {
                <p class="text-gray-600 text-sm m-0">{text}</p>
            }
        </div>
    }
}

/// Small inline spinner for buttons
#[function_component(InlineSpinner)]
pub fn inline_spinner() -> Html {
    html! {
        <span class="inline-block w-4 h-4 mr-2 border-2 border-white/40 border-t-white rounded-full animate-spin align-middle"></span>
    }
}
