//! Landing page with company counts

use crate::components::use_toast;
use crate::i18n::use_text;
use crate::services::CompanyService;
use salesclose_core::{DashboardData, Text};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: AttrValue,
    value: u64,
    description: AttrValue,
    accent: &'static str,
    loading: bool,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow-sm p-6 border-l-4" style={format!("border-color: {}", props.accent)}>
            <h3 class="text-sm font-medium text-gray-500 uppercase tracking-wide">{&props.title}</h3>
            if props.loading {
                <div class="mt-3 h-9 w-16 bg-gray-200 rounded animate-pulse"></div>
            } else {
                <p class="mt-2 text-4xl font-bold text-gray-900">{props.value}</p>
            }
            <p class="mt-2 text-sm text-gray-500">{&props.description}</p>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let text = use_text();
    let toast = use_toast();
    let data = use_state(DashboardData::default);
    let loading = use_state(|| true);

    {
        let data = data.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match CompanyService::new().dashboard().await {
                    Ok(fetched) => data.set(fetched),
                    Err(err) => {
                        tracing::warn!(error = %err, "dashboard load failed");
                        toast.error(text.t(Text::DashboardLoadFailed), err.user_message());
                    }
                }
                loading.set(false);
            });
        });
    }

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{text.t(Text::DashboardTitle)}</h1>
                <p class="mt-2 text-gray-600">
                    {text.t(Text::Welcome)}{", "}
                    if *loading {
                        <span class="inline-block h-4 w-24 bg-gray-200 rounded animate-pulse align-middle"></span>
                    } else {
                        <span class="font-semibold">{data.display_name()}</span>
                    }
                </p>
                <p class="text-gray-500">{text.t(Text::DashboardSubtitle)}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    title={text.t(Text::TotalCompanies)}
                    value={data.total_companies}
                    description={text.t(Text::TotalCompaniesDesc)}
                    accent="#3b82f6"
                    loading={*loading}
                />
                <StatCard
                    title={text.t(Text::ActiveCompanies)}
                    value={data.active_companies}
                    description={text.t(Text::ActiveCompaniesDesc)}
                    accent="#22c55e"
                    loading={*loading}
                />
                <StatCard
                    title={text.t(Text::InactiveCompanies)}
                    value={data.inactive_companies()}
                    description={text.t(Text::InactiveCompaniesDesc)}
                    accent="#ef4444"
                    loading={*loading}
                />
            </div>
        </div>
    }
}
