//! Page-number navigation bar

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub page: u32,
    pub total_pages: u32,
    pub on_page: Callback<u32>,
}

#[derive(Properties, PartialEq)]
struct PageButtonProps {
    label: AttrValue,
    target: u32,
    #[prop_or_default]
    active: bool,
    #[prop_or_default]
    disabled: bool,
    on_page: Callback<u32>,
}

#[function_component(PageButton)]
fn page_button(props: &PageButtonProps) -> Html {
    let onclick = {
        let target = props.target;
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(target))
    };

    let class = if props.active {
        "min-w-[2.25rem] px-3 py-1.5 text-sm rounded-md border border-blue-600 bg-blue-600 text-white"
    } else {
        "min-w-[2.25rem] px-3 py-1.5 text-sm rounded-md border border-gray-300 bg-white text-gray-700 hover:bg-gray-50 disabled:opacity-40 disabled:cursor-not-allowed"
    };

    html! {
        <button {class} disabled={props.disabled} {onclick}>{&props.label}</button>
    }
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let total = props.total_pages.max(1);
    let page = props.page.clamp(1, total);
    let at_start = page == 1;
    let at_end = page == total;

    html! {
        <nav class="flex justify-center items-center gap-2 mt-8" aria-label="Pagination">
            <PageButton label="«" target={1} disabled={at_start} on_page={props.on_page.clone()} />
            <PageButton label="‹" target={page.saturating_sub(1).max(1)} disabled={at_start} on_page={props.on_page.clone()} />
            {(1..=total).map(|number| html! {
                <PageButton
                    key={number}
                    label={number.to_string()}
                    target={number}
                    active={number == page}
                    on_page={props.on_page.clone()}
                />
            }).collect::<Html>()}
            <PageButton label="›" target={(page + 1).min(total)} disabled={at_end} on_page={props.on_page.clone()} />
            <PageButton label="»" target={total} disabled={at_end} on_page={props.on_page.clone()} />
        </nav>
    }
}
