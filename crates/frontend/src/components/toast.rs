//! Transient success/error notifications

use gloo::timers::callback::Timeout;
use salesclose_core::ConsoleConfig;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push {
        kind: ToastKind,
        title: String,
        description: Option<String>,
    },
    Dismiss(u64),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push {
                kind,
                title,
                description,
            } => {
                next.next_id += 1;
                next.toasts.push(Toast {
                    id: next.next_id,
                    kind,
                    title,
                    description,
                });
            }
            ToastAction::Dismiss(id) => {
                if !next.toasts.iter().any(|toast| toast.id == id) {
                    return self;
                }
                next.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Handle for raising notifications
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl ToastHandle {
    pub fn success(&self, title: impl Into<String>) {
        self.dispatcher.dispatch(ToastAction::Push {
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
        });
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        let description = description.into();
        self.dispatcher.dispatch(ToastAction::Push {
            kind: ToastKind::Error,
            title: title.into(),
            description: (!description.is_empty()).then_some(description),
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let handle = ToastHandle {
        dispatcher: list.dispatcher(),
    };

    let on_dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2 w-80">
                {list.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }).collect::<Html>()}
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-dismiss; a toast closed by hand turns this into a no-op
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.id, move |id| {
            let id = *id;
            Timeout::new(ConsoleConfig::TOAST_DURATION_MS, move || {
                on_dismiss.emit(id);
            })
            .forget();
        });
    }

    let (container, title) = match props.toast.kind {
        ToastKind::Success => ("bg-green-50 border-green-200", "text-green-800"),
        ToastKind::Error => ("bg-red-50 border-red-200", "text-red-800"),
    };

    let onclick = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("p-4", "border", "rounded-lg", "shadow-lg", "animate-slide-up", container)} role="status">
            <div class="flex items-start justify-between gap-3">
                <div>
                    <p class={classes!("text-sm", "font-semibold", title)}>{&props.toast.title}</p>
                    if let Some(description) = &props.toast.description {
                        <p class="mt-1 text-sm text-gray-600">{description}</p>
                    }
                </div>
                <button class="text-gray-400 hover:text-gray-600" {onclick}>{"×"}</button>
            </div>
        </div>
    }
}

/// Hook to raise notifications
#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
        .expect("ToastHandle not found. Make sure to wrap your app with ToastProvider")
}
