//! Confirmation dialog for destructive or state-changing actions

use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ModalVariant {
    #[default]
    Danger,
    Warning,
}

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_text: AttrValue,
    pub cancel_text: AttrValue,
    #[prop_or_default]
    pub variant: ModalVariant,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(props: &ConfirmationModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let (icon, title_class, confirm_class) = match props.variant {
        ModalVariant::Danger => (
            "🗑",
            "text-red-600",
            "bg-red-600 hover:bg-red-700 text-white",
        ),
        ModalVariant::Warning => (
            "⚠",
            "text-yellow-600",
            "bg-yellow-500 hover:bg-yellow-600 text-white",
        ),
    };

    let on_confirm = {
        let callback = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };
    let on_cancel = {
        let callback = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50">
            <div class="bg-white rounded-lg p-6 max-w-md w-full mx-4 shadow-xl">
                <div class="flex flex-col items-center text-center space-y-4">
                    <div class="flex items-center justify-center w-16 h-16 bg-gray-100 rounded-full text-3xl">
                        {icon}
                    </div>
                    <div class="space-y-2">
                        <h3 class={classes!("text-lg", "font-semibold", title_class)}>{&props.title}</h3>
                        <p class="text-gray-600 leading-relaxed">{&props.message}</p>
                    </div>
                    <div class="flex items-center gap-3 w-full pt-4">
                        <button
                            class="flex-1 px-4 py-2 border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50"
                            onclick={on_cancel}
                        >
                            {&props.cancel_text}
                        </button>
                        <button
                            class={classes!("flex-1", "px-4", "py-2", "rounded-lg", confirm_class)}
                            onclick={on_confirm}
                        >
                            {&props.confirm_text}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
