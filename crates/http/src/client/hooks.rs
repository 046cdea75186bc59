//! Global deauthorization hooks
//!
//! The UI registers a logout callback and a navigate callback once at
//! startup. Any 401 or 404 response, from any endpoint, fires both so the
//! session is torn down without every call site checking for it.

use salesclose_core::ConsoleConfig;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static LOGOUT_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
    static NAVIGATE_CALLBACK: RefCell<Option<Rc<dyn Fn(&str)>>> = RefCell::new(None);
}

/// Set the callback that clears the session
pub fn set_logout_callback(callback: Rc<dyn Fn()>) {
    LOGOUT_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Set the callback that moves the UI to another route
pub fn set_navigate_callback(callback: Rc<dyn Fn(&str)>) {
    NAVIGATE_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Remove both callbacks
pub fn clear_callbacks() {
    LOGOUT_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
    NAVIGATE_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Log out and navigate to the login route.
///
/// Nothing happens unless both callbacks are registered. Returns whether the
/// callbacks ran.
pub fn trigger_unauthorized(status: u16) -> bool {
    let logout = LOGOUT_CALLBACK.with(|cb| cb.borrow().clone());
    let navigate = NAVIGATE_CALLBACK.with(|cb| cb.borrow().clone());

    match (logout, navigate) {
        (Some(logout), Some(navigate)) => {
            tracing::warn!(status, "Session rejected by the API, logging out");
            logout();
            navigate(ConsoleConfig::LOGIN_ROUTE);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn requires_both_callbacks() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        set_logout_callback(Rc::new(move || counter.set(counter.get() + 1)));

        assert!(!trigger_unauthorized(401));
        assert_eq!(calls.get(), 0);
        clear_callbacks();
    }

    #[test]
    fn fires_logout_then_navigate() {
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        let logout_log = log.clone();
        let navigate_log = log.clone();
        set_logout_callback(Rc::new(move || logout_log.borrow_mut().push("logout".into())));
        set_navigate_callback(Rc::new(move |route: &str| {
            navigate_log.borrow_mut().push(route.to_string())
        }));

        assert!(trigger_unauthorized(404));
        assert_eq!(*log.borrow(), vec!["logout".to_string(), "/login".to_string()]);
        clear_callbacks();
    }

    #[test]
    fn callback_may_clear_hooks() {
        set_logout_callback(Rc::new(clear_callbacks));
        set_navigate_callback(Rc::new(|_: &str| {}));

        assert!(trigger_unauthorized(401));
        assert!(!trigger_unauthorized(401));
    }
}
