//! Company list with search, pagination and row actions

use crate::components::{
    use_toast, CompaniesTable, CompanyModal, ConfirmationModal, ModalVariant, PaginationBar,
};
use crate::i18n::use_text;
use crate::services::CompanyService;
use gloo::timers::callback::Timeout;
use salesclose_core::{Company, CompanyStatus, ConsoleConfig, PageCursor, RequestGeneration, Text};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Default, PartialEq)]
struct ListState {
    cursor: PageCursor,
    /// Bumped to re-fetch the current page after a mutation
    revision: u32,
}

enum ListAction {
    GoTo(u32),
    Search(String),
    TotalPages(Option<u32>),
    Reload,
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ListAction::GoTo(page) => next.cursor.go_to(page),
            ListAction::Search(term) => next.cursor.set_search(&term),
            ListAction::TotalPages(total) => {
                next.cursor.apply_total_pages(total);
                next.cursor != self.cursor
            }
            ListAction::Reload => {
                next.revision = next.revision.wrapping_add(1);
                true
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
enum PendingAction {
    Delete(Company),
    Status(Company, bool),
}

#[derive(Clone, PartialEq)]
enum EditorState {
    Closed,
    Create,
    Edit(String),
}

#[function_component(CompaniesPage)]
pub fn companies_page() -> Html {
    let text = use_text();
    let toast = use_toast();
    let list = use_reducer(ListState::default);
    let companies = use_state(Vec::<Company>::new);
    let loading = use_state(|| true);
    let generation = use_memo((), |_| RequestGeneration::new());
    let search = use_state(String::new);
    let debounce = use_mut_ref(|| None::<Timeout>);
    let pending = use_state(|| None::<PendingAction>);
    let editor = use_state(|| EditorState::Closed);

    // Re-fetch whenever the page, the search term or the revision moves
    {
        let cursor = list.cursor.clone();
        let dispatcher = list.dispatcher();
        let companies = companies.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        let toast = toast.clone();
        use_effect_with(
            (list.cursor.page(), list.cursor.search_term().to_string(), list.revision),
            move |_| {
                let request = generation.begin();
                loading.set(true);
                spawn_local(async move {
                    let result = CompanyService::new().list(&cursor).await;
                    if !generation.is_current(request) {
                        tracing::debug!(request, "dropping superseded company page");
                        return;
                    }
                    match result {
                        Ok(page) => {
                            dispatcher.dispatch(ListAction::TotalPages(page.total_pages));
                            companies.set(page.data);
                        }
                        Err(err) => {
                            companies.set(Vec::new());
                            toast.error(text.t(Text::FailedToLoadCompanies), err.user_message());
                        }
                    }
                    loading.set(false);
                });
            },
        );
    }

    let on_search = {
        let search = search.clone();
        let debounce = debounce.clone();
        let dispatcher = list.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            search.set(value.clone());
            let dispatcher = dispatcher.clone();
            // Replacing the handle cancels the previous keystroke's timer
            *debounce.borrow_mut() = Some(Timeout::new(ConsoleConfig::SEARCH_DEBOUNCE_MS, move || {
                dispatcher.dispatch(ListAction::Search(value));
            }));
        })
    };

    let on_page = {
        let dispatcher = list.dispatcher();
        Callback::from(move |page: u32| dispatcher.dispatch(ListAction::GoTo(page)))
    };

    let on_add = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| editor.set(EditorState::Create))
    };

    let on_view = {
        let editor = editor.clone();
        Callback::from(move |company: Company| editor.set(EditorState::Edit(company.id)))
    };

    let on_delete = {
        let pending = pending.clone();
        Callback::from(move |company: Company| pending.set(Some(PendingAction::Delete(company))))
    };

    let on_status_change = {
        let pending = pending.clone();
        Callback::from(move |(company, active): (Company, bool)| {
            pending.set(Some(PendingAction::Status(company, active)))
        })
    };

    let on_cancel = {
        let pending = pending.clone();
        Callback::from(move |_: ()| pending.set(None))
    };

    let on_confirm = {
        let pending = pending.clone();
        let dispatcher = list.dispatcher();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let Some(action) = (*pending).clone() else {
                return;
            };
            pending.set(None);

            let dispatcher = dispatcher.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let service = CompanyService::new();
                match action {
                    PendingAction::Delete(company) => match service.delete(&company.id).await {
                        Ok(()) => toast.success(text.t(Text::CompanyDeleted)),
                        Err(err) => toast.error(text.t(Text::FailedToDelete), err.user_message()),
                    },
                    PendingAction::Status(company, active) => {
                        let status = CompanyStatus::from_active(active);
                        match service.set_status(&company.id, status).await {
                            Ok(()) if active => toast.success(text.t(Text::CompanyActivated)),
                            Ok(()) => toast.success(text.t(Text::CompanyDeactivated)),
                            Err(err) => {
                                toast.error(text.t(Text::FailedToUpdateStatus), err.user_message())
                            }
                        }
                    }
                }
                dispatcher.dispatch(ListAction::Reload);
            });
        })
    };

    let on_editor_close = {
        let editor = editor.clone();
        Callback::from(move |_: ()| editor.set(EditorState::Closed))
    };

    let on_saved = {
        let editor = editor.clone();
        let dispatcher = list.dispatcher();
        Callback::from(move |_: ()| {
            editor.set(EditorState::Closed);
            dispatcher.dispatch(ListAction::Reload);
        })
    };

    let (confirm_title, confirm_message, variant) = match &*pending {
        Some(PendingAction::Delete(_)) => {
            (Text::DeleteCompany, Text::DeleteConfirmation, ModalVariant::Danger)
        }
        Some(PendingAction::Status(_, true)) => {
            (Text::ActivateCompany, Text::ActivateConfirmation, ModalVariant::Warning)
        }
        _ => (Text::DeactivateCompany, Text::DeactivateConfirmation, ModalVariant::Warning),
    };
    let confirm_text = match &*pending {
        Some(PendingAction::Delete(_)) => Text::Delete,
        _ => confirm_title,
    };

    let (editor_open, editor_id) = match &*editor {
        EditorState::Closed => (false, None),
        EditorState::Create => (true, None),
        EditorState::Edit(id) => (true, Some(id.clone())),
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <h1 class="text-3xl font-bold text-gray-900">{text.t(Text::CompaniesTitle)}</h1>
                <div class="flex gap-3">
                    <input
                        type="search"
                        class="w-72 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder={text.t(Text::SearchCompanies)}
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <button
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700"
                        onclick={on_add}
                    >
                        {"+ "}{text.t(Text::AddCompany)}
                    </button>
                </div>
            </div>

            <CompaniesTable
                companies={(*companies).clone()}
                loading={*loading}
                cursor={list.cursor.clone()}
                {on_view}
                {on_delete}
                {on_status_change}
            />

            <PaginationBar
                page={list.cursor.page()}
                total_pages={list.cursor.total_pages()}
                {on_page}
            />

            <ConfirmationModal
                open={pending.is_some()}
                title={text.t(confirm_title)}
                message={text.t(confirm_message)}
                confirm_text={text.t(confirm_text)}
                cancel_text={text.t(Text::Cancel)}
                {variant}
                {on_confirm}
                {on_cancel}
            />

            <CompanyModal
                open={editor_open}
                company_id={editor_id}
                on_close={on_editor_close}
                {on_saved}
            />
        </div>
    }
}
