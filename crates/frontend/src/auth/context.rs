//! Global authentication context and provider

use super::session::{SessionEvent, SessionManager};
use crate::app::Route;
use crate::browser;
use salesclose_core::{LogoutReason, Session, SessionGrant, User};
use salesclose_http::client::hooks;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Authentication state rendered by the UI
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContextData {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthContextData {
    fn from_session(session: &Session) -> Self {
        Self {
            user: session.user.clone(),
            token: session.token.clone(),
        }
    }
}

/// Authentication context actions
pub enum AuthAction {
    Sync(Session),
    Clear,
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Sync(session) => Rc::new(Self::from_session(&session)),
            AuthAction::Clear => Rc::new(Self::default()),
        }
    }
}

/// Authentication context
#[derive(Clone)]
pub struct AuthContext {
    pub state: UseReducerHandle<AuthContextData>,
    manager: Rc<SessionManager>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.manager, &other.manager)
    }
}

impl AuthContext {
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.token.is_some()
    }

    /// Start a session from a successful login
    pub fn login(&self, grant: SessionGrant) {
        self.manager.start(grant);
    }

    pub fn logout(&self) {
        self.manager.logout(LogoutReason::Manual);
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let manager = (*use_state(SessionManager::new)).clone();
    let navigator = use_navigator();
    let state = {
        let manager = manager.clone();
        use_reducer(move || AuthContextData::from_session(&manager.session()))
    };

    // Wire the session manager and the API hooks on mount
    {
        let manager = manager.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            manager.set_observer(Some(Callback::from(move |event: SessionEvent| match event {
                SessionEvent::Started(session) | SessionEvent::Refreshed(session) => {
                    dispatcher.dispatch(AuthAction::Sync(session))
                }
                SessionEvent::Ended(_) => dispatcher.dispatch(AuthAction::Clear),
            })));

            let weak = Rc::downgrade(&manager);
            hooks::set_logout_callback(Rc::new(move || {
                if let Some(manager) = weak.upgrade() {
                    manager.logout(LogoutReason::Unauthorized);
                }
            }));
            // Stay inside the app so the page keeps its inline error and toasts
            hooks::set_navigate_callback(Rc::new(move |path: &str| match &navigator {
                Some(navigator) => navigator.replace(&Route::from_path_or_login(path)),
                None => browser::hard_navigate(path),
            }));

            manager.resume();

            // Cleanup on unmount
            move || {
                hooks::clear_callbacks();
                manager.set_observer(None);
            }
        });
    }

    let context = AuthContext { state, manager };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your app with AuthProvider")
}
