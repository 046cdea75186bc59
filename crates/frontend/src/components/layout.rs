//! Sidebar shell around the protected pages

use super::LanguageSwitcher;
use crate::app::Route;
use crate::auth::use_auth;
use crate::i18n::use_text;
use salesclose_core::Text;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: [(Route, Text, &str); 2] = [
    (Route::Dashboard, Text::NavDashboard, "▦"),
    (Route::Companies, Text::NavCompanies, "🏢"),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let auth = use_auth();
    let text = use_text();
    let current = use_route::<Route>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        auth.logout();
        if let Some(navigator) = &navigator {
            navigator.replace(&Route::Login);
        }
    });

    html! {
        <aside class="w-64 bg-slate-900 text-slate-100 flex flex-col py-8 shadow-xl">
            <div class="flex items-center justify-center mb-14">
                <div class="w-16 h-16 bg-blue-500 rounded-full flex items-center justify-center text-white text-2xl font-bold shadow-lg">
                    {"S"}
                </div>
            </div>

            <nav class="flex flex-col flex-1">
                {NAV_ITEMS.iter().map(|(route, label, icon)| {
                    let active = current.as_ref() == Some(route);
                    html! {
                        <Link<Route>
                            to={route.clone()}
                            classes={classes!(
                                "flex", "items-center", "px-6", "py-4", "text-lg", "transition-all", "duration-200",
                                "hover:bg-slate-700", "hover:text-white",
                                if active { "bg-slate-700 text-white" } else { "text-gray-300" }
                            )}
                        >
                            <span class="w-5 mr-3 text-center">{*icon}</span>
                            {text.t(*label)}
                        </Link<Route>>
                    }
                }).collect::<Html>()}

                <button
                    class="flex items-center px-6 py-4 text-lg text-gray-300 hover:bg-slate-700 hover:text-white transition-all duration-200 mt-auto text-left"
                    onclick={on_logout}
                >
                    <span class="w-5 mr-3 text-center">{"⎋"}</span>
                    {text.t(Text::Logout)}
                </button>
            </nav>

            <div class="px-4 pt-4">
                <LanguageSwitcher />
            </div>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    html! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar />
            <main class="flex-1 p-10 overflow-y-auto">
                {props.children.clone()}
            </main>
        </div>
    }
}
