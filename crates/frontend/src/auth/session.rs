//! Browser side of the session lifecycle
//!
//! Wraps the [`SessionController`] with the gloo timer driver, the activity
//! listeners and the refresh call. Logout of any kind detaches the listeners
//! and drops the bearer token from the shared client.

use crate::browser::{
    self, activity::ActivityListeners, cookies, storage::WebStorage, timers::GlooTimers,
};
use crate::client;
use crate::services::AuthService;
use salesclose_core::{
    AuthStore, ConsoleConfig, LogoutReason, PersistenceTarget, RefreshStep, RefreshTicket,
    Session, SessionConfig, SessionController, SessionGrant, TimerKind, Transition,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::Callback;

pub type BrowserController = SessionController<WebStorage, GlooTimers>;

/// Changes the UI needs to hear about
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Started(Session),
    Refreshed(Session),
    Ended(LogoutReason),
}

pub struct SessionManager {
    this: Weak<Self>,
    controller: RefCell<BrowserController>,
    activity: RefCell<Option<ActivityListeners>>,
    observer: RefCell<Option<Callback<SessionEvent>>>,
}

impl SessionManager {
    /// Build the manager, rehydrating the store from the storage selected by
    /// the remember-me cookie.
    pub fn new() -> Rc<Self> {
        let target = PersistenceTarget::from_cookie_header(&cookies::cookie_header());
        let store = AuthStore::new(WebStorage::new(target), target);

        Rc::new_cyclic(|weak: &Weak<Self>| {
            let timer_owner = weak.clone();
            let timers = GlooTimers::new(move |kind| {
                if let Some(manager) = timer_owner.upgrade() {
                    manager.timer_fired(kind);
                }
            });

            Self {
                this: weak.clone(),
                controller: RefCell::new(SessionController::new(
                    SessionConfig::default(),
                    store,
                    timers,
                )),
                activity: RefCell::new(None),
                observer: RefCell::new(None),
            }
        })
    }

    pub fn session(&self) -> Session {
        self.controller.borrow().session().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.controller.borrow().store().is_authenticated()
    }

    pub fn set_observer(&self, observer: Option<Callback<SessionEvent>>) {
        *self.observer.borrow_mut() = observer;
    }

    /// Arm timers for a session found in storage.
    pub fn resume(&self) -> bool {
        let resumed = self.controller.borrow_mut().resume();
        if resumed {
            self.activate();
        }
        resumed
    }

    /// Begin a session after a successful login.
    pub fn start(&self, grant: SessionGrant) {
        self.controller.borrow_mut().start(grant);
        self.activate();
    }

    pub fn logout(&self, reason: LogoutReason) {
        let transition = self.controller.borrow_mut().logout(reason);
        self.apply(transition);
    }

    fn activate(&self) {
        let session = self.session();
        sync_client(session.token.as_deref());

        let weak = self.this.clone();
        *self.activity.borrow_mut() = Some(ActivityListeners::attach(move || {
            if let Some(manager) = weak.upgrade() {
                manager.record_activity();
            }
        }));

        self.notify(SessionEvent::Started(session));
    }

    fn record_activity(&self) {
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.record_activity();
        }
    }

    fn timer_fired(self: Rc<Self>, kind: TimerKind) {
        match kind {
            TimerKind::Inactivity => {
                let transition = self.controller.borrow_mut().inactivity_elapsed();
                self.apply(transition);
            }
            TimerKind::Refresh => {
                let step = self.controller.borrow_mut().refresh_due();
                match step {
                    RefreshStep::Begin(ticket) => self.spawn_refresh(ticket),
                    RefreshStep::LoggedOut(reason) => self.apply(Transition::LoggedOut(reason)),
                    RefreshStep::Skipped => {}
                }
            }
        }
    }

    fn spawn_refresh(self: Rc<Self>, ticket: RefreshTicket) {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = AuthService::new()
                .refresh(ticket.refresh_token())
                .await
                .map_err(|e| e.user_message());
            let transition = self.controller.borrow_mut().complete_refresh(ticket, outcome);
            self.apply(transition);
        });
    }

    fn apply(&self, transition: Transition) {
        match transition {
            Transition::Refreshed => {
                let session = self.session();
                sync_client(session.token.as_deref());
                self.notify(SessionEvent::Refreshed(session));
            }
            Transition::LoggedOut(reason) => {
                self.activity.borrow_mut().take();
                sync_client(None);
                self.notify(SessionEvent::Ended(reason.clone()));

                // 401/404 navigation is done by the API hooks.
                if matches!(
                    reason,
                    LogoutReason::Inactivity
                        | LogoutReason::MissingRefreshToken
                        | LogoutReason::RefreshFailed(_)
                ) {
                    browser::hard_navigate(ConsoleConfig::LOGIN_ROUTE);
                }
            }
            Transition::Unchanged | Transition::Stale => {}
        }
    }

    fn notify(&self, event: SessionEvent) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer.emit(event);
        }
    }
}

fn sync_client(token: Option<&str>) {
    if let Err(e) = client::set_auth_token(token) {
        tracing::warn!(error = %e, "Failed to update API client token");
    }
}
