//! Company list table

use super::Toggle;
use crate::i18n::use_text;
use salesclose_core::{Company, PageCursor, Text};
use yew::prelude::*;

const SKELETON_ROWS: usize = 10;
const HEADER_CELL: &str =
    "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-gray-700";

#[derive(Properties, PartialEq)]
pub struct CompaniesTableProps {
    pub companies: Vec<Company>,
    pub loading: bool,
    /// Used to number rows across pages
    pub cursor: PageCursor,
    pub on_view: Callback<Company>,
    pub on_delete: Callback<Company>,
    /// Company and requested active flag
    pub on_status_change: Callback<(Company, bool)>,
}

#[derive(Properties, PartialEq)]
struct LogoProps {
    company: Company,
}

#[function_component(CompanyLogo)]
fn company_logo(props: &LogoProps) -> Html {
    match props.company.logo() {
        Some(src) => html! {
            <img src={src.to_string()} alt="Logo" class="w-10 h-10 rounded-full object-cover shadow-md" />
        },
        None if !props.company.company_name.is_empty() => html! {
            <div class="w-10 h-10 bg-slate-700 text-white font-bold rounded-full flex items-center justify-center shadow-md">
                {props.company.initials()}
            </div>
        },
        None => html! {},
    }
}

fn skeleton_row(index: usize) -> Html {
    let bar = |width: &'static str| {
        html! { <div class={classes!("h-4", "bg-gray-200", "rounded", width)}></div> }
    };
    html! {
        <tr key={index} class="animate-pulse">
            <td class={CELL}>{bar("w-6")}</td>
            <td class={CELL}><div class="w-10 h-10 bg-gray-200 rounded-full"></div></td>
            <td class={CELL}>{bar("w-24")}</td>
            <td class={CELL}>{bar("w-32")}</td>
            <td class={classes!(CELL, "hidden", "md:table-cell")}>{bar("w-20")}</td>
            <td class={classes!(CELL, "hidden", "md:table-cell")}>{bar("w-20")}</td>
            <td class={CELL}>{bar("w-10")}</td>
            <td class={CELL}>{bar("w-16")}</td>
        </tr>
    }
}

#[function_component(CompaniesTable)]
pub fn companies_table(props: &CompaniesTableProps) -> Html {
    let text = use_text();

    let body = if props.loading {
        (0..SKELETON_ROWS).map(skeleton_row).collect::<Html>()
    } else if props.companies.is_empty() {
        html! {
            <tr>
                <td colspan="8" class="text-center py-8 text-gray-500">{text.t(Text::NoData)}</td>
            </tr>
        }
    } else {
        props
            .companies
            .iter()
            .enumerate()
            .map(|(index, company)| {
                let on_view = {
                    let company = company.clone();
                    let callback = props.on_view.clone();
                    Callback::from(move |_: MouseEvent| callback.emit(company.clone()))
                };
                let on_delete = {
                    let company = company.clone();
                    let callback = props.on_delete.clone();
                    Callback::from(move |_: MouseEvent| callback.emit(company.clone()))
                };
                let on_toggle = {
                    let company = company.clone();
                    let callback = props.on_status_change.clone();
                    Callback::from(move |active: bool| callback.emit((company.clone(), active)))
                };

                html! {
                    <tr key={company.id.clone()} class="hover:bg-gray-50">
                        <td class={CELL}>{props.cursor.row_number(index)}</td>
                        <td class={CELL}><CompanyLogo company={company.clone()} /></td>
                        <td class={classes!(CELL, "font-medium", "text-gray-900")}>{&company.company_name}</td>
                        <td class={CELL}>{&company.company_email}</td>
                        <td class={classes!(CELL, "hidden", "md:table-cell")}>{&company.contact_person}</td>
                        <td class={classes!(CELL, "hidden", "md:table-cell")}>{&company.contact_phone}</td>
                        <td class={CELL}>
                            <Toggle
                                checked={company.is_active()}
                                on_toggle={on_toggle}
                                label={text.t(Text::ColumnStatus)}
                            />
                        </td>
                        <td class={CELL}>
                            <div class="flex items-center justify-center gap-2">
                                <button
                                    class="px-3 py-1.5 text-sm border border-gray-300 rounded-md text-gray-700 hover:bg-gray-50"
                                    onclick={on_view}
                                >
                                    {text.t(Text::View)}
                                </button>
                                <button
                                    class="px-3 py-1.5 text-sm rounded-md bg-red-600 text-white hover:bg-red-700"
                                    onclick={on_delete}
                                >
                                    {text.t(Text::Delete)}
                                </button>
                            </div>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="overflow-y-auto max-h-[520px] min-h-[400px] w-full bg-white rounded-lg shadow-sm">
            <table class="w-full">
                <thead class="bg-gray-50 sticky top-0">
                    <tr>
                        <th class={HEADER_CELL}>{text.t(Text::ColumnNo)}</th>
                        <th class={HEADER_CELL}>{text.t(Text::ColumnLogo)}</th>
                        <th class={HEADER_CELL}>{text.t(Text::ColumnCompanyName)}</th>
                        <th class={HEADER_CELL}>{text.t(Text::ColumnCompanyEmail)}</th>
                        <th class={classes!(HEADER_CELL, "hidden", "md:table-cell")}>{text.t(Text::ColumnContactPerson)}</th>
                        <th class={classes!(HEADER_CELL, "hidden", "md:table-cell")}>{text.t(Text::ColumnContactPhone)}</th>
                        <th class={HEADER_CELL}>{text.t(Text::ColumnStatus)}</th>
                        <th class={classes!(HEADER_CELL, "text-center")}>{text.t(Text::ColumnActions)}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    {body}
                </tbody>
            </table>
        </div>
    }
}
