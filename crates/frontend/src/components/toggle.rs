//! On/off switch

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub checked: bool,
    /// Receives the requested new value
    pub on_toggle: Callback<bool>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let onclick = {
        let checked = props.checked;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(!checked);
        })
    };

    let track = if props.checked {
        "bg-green-500"
    } else {
        "bg-gray-300"
    };
    let knob = if props.checked {
        "translate-x-5"
    } else {
        "translate-x-0"
    };

    html! {
        <button
            type="button"
            role="switch"
            aria-checked={props.checked.to_string()}
            aria-label={props.label.clone()}
            disabled={props.disabled}
            class={classes!(
                "relative", "inline-flex", "h-6", "w-11", "flex-shrink-0", "rounded-full",
                "transition-colors", "duration-200", "disabled:opacity-50", "disabled:cursor-not-allowed",
                track
            )}
            {onclick}
        >
            <span class={classes!(
                "inline-block", "h-5", "w-5", "mt-0.5", "ml-0.5", "rounded-full", "bg-white", "shadow",
                "transform", "transition", "duration-200", knob
            )}></span>
        </button>
    }
}
