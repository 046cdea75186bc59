use crate::auth::{AuthProvider, GuestOnly, RequireAuth};
use crate::components::{DashboardLayout, ToastProvider};
use crate::i18n::initial_locale;
use crate::pages::{
    CompaniesPage, DashboardPage, ForgotPasswordPage, LoginPage, NewPasswordPage,
};
use salesclose_core::Locale;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/new-password")]
    NewPassword,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/companies")]
    Companies,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes that need a session
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Home | Self::Dashboard | Self::Companies)
    }

    /// Route for an in-app path, falling back to the login page for paths
    /// the router does not know.
    pub fn from_path_or_login(path: &str) -> Self {
        match Self::recognize(path) {
            Some(Self::NotFound) | None => Self::Login,
            Some(route) => route,
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <RequireAuth>
                <Redirect<Route> to={Route::Dashboard} />
            </RequireAuth>
        },
        Route::Login => html! {
            <GuestOnly><LoginPage /></GuestOnly>
        },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::NewPassword => html! {
            <GuestOnly><NewPasswordPage /></GuestOnly>
        },
        Route::Dashboard => html! {
            <RequireAuth>
                <DashboardLayout><DashboardPage /></DashboardLayout>
            </RequireAuth>
        },
        Route::Companies => html! {
            <RequireAuth>
                <DashboardLayout><CompaniesPage /></DashboardLayout>
            </RequireAuth>
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let locale = use_state(initial_locale);

    html! {
        <ContextProvider<Locale> context={*locale}>
            <ToastProvider>
                <BrowserRouter>
                    <AuthProvider>
                        <Switch<Route> render={switch} />
                    </AuthProvider>
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<Locale>>
    }
}

