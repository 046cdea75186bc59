//! Route guard for pages that need a session

use super::use_auth;
use crate::app::Route;
use crate::browser::storage::remember_last_route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only while a token is present. Otherwise remembers
/// the current route and redirects to the login page.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();
    let route = use_route::<Route>();
    let authenticated = auth.is_authenticated();

    use_effect_with(authenticated, move |authenticated| {
        if !*authenticated {
            if let Some(route) = route.filter(Route::is_protected) {
                remember_last_route(&route.to_path());
            }
        }
    });

    if authenticated {
        html! { <>{props.children.clone()}</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

/// Pages for signed-out visitors send a signed-in administrator to the
/// dashboard instead.
#[derive(Properties, PartialEq)]
pub struct GuestOnlyProps {
    pub children: Children,
}

#[function_component(GuestOnly)]
pub fn guest_only(props: &GuestOnlyProps) -> Html {
    let auth = use_auth();

    if auth.is_authenticated() {
        html! { <Redirect<Route> to={Route::Dashboard} /> }
    } else {
        html! { <>{props.children.clone()}</> }
    }
}
