//! Session lifecycle controller
//!
//! Two timers run for every authenticated session: a refresh timer that renews
//! the access token on a fixed cadence, and an inactivity timer that is pushed
//! back by every qualifying user input. Either one can end the session.
//!
//! The controller never sleeps or performs I/O itself. Timers are delegated to
//! a [`TimerDriver`] and the refresh call is performed by the caller between
//! [`SessionController::refresh_due`] and
//! [`SessionController::complete_refresh`]. Exactly one controller should
//! exist per page.

use crate::config::SessionConfig;
use crate::session::{AuthStore, Session, SessionGrant, StorageBackend, TokenRenewal};
use std::time::Duration;
use tracing::{debug, info, warn};

/// The two timers owned by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Refresh,
    Inactivity,
}

/// Schedules one pending callback per [`TimerKind`].
///
/// Arming a kind that is already pending replaces it.
pub trait TimerDriver {
    fn arm(&mut self, kind: TimerKind, delay: Duration);
    fn cancel(&mut self, kind: TimerKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Active,
    IdlePendingLogout,
    Refreshing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutReason {
    /// The administrator signed out
    Manual,
    /// No qualifying input within the inactivity window
    Inactivity,
    /// Refresh timer fired but no refresh token was stored
    MissingRefreshToken,
    /// The refresh endpoint failed or returned no token
    RefreshFailed(String),
    /// An API call was rejected with 401/404
    Unauthorized,
}

/// Permission to run one refresh call for the session that issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
    refresh_token: String,
}

impl RefreshTicket {
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What the caller should do after the refresh timer fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshStep {
    /// Call the refresh endpoint with the ticket's token
    Begin(RefreshTicket),
    /// The session ended instead
    LoggedOut(LogoutReason),
    /// No session, or a refresh is already in flight
    Skipped,
}

/// Observable outcome of feeding an event into the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Refreshed,
    /// A refresh result arrived for a session that no longer exists
    Stale,
    /// The session ended; listeners must be detached and the UI sent to login
    LoggedOut(LogoutReason),
}

pub struct SessionController<B: StorageBackend, T: TimerDriver> {
    config: SessionConfig,
    store: AuthStore<B>,
    timers: T,
    state: SessionState,
    generation: u64,
}

impl<B: StorageBackend, T: TimerDriver> SessionController<B, T> {
    pub fn new(config: SessionConfig, store: AuthStore<B>, timers: T) -> Self {
        Self {
            config,
            store,
            timers,
            state: SessionState::Unauthenticated,
            generation: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }

    pub fn store(&self) -> &AuthStore<B> {
        &self.store
    }

    pub fn token(&self) -> Option<&str> {
        self.store.token()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// Identifies the current session; bumped on every login and logout.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            self.state,
            SessionState::Active | SessionState::Refreshing
        )
    }

    /// Begin a session from a successful login.
    pub fn start(&mut self, grant: SessionGrant) {
        if self.state != SessionState::Unauthenticated {
            self.timers.cancel(TimerKind::Refresh);
            self.timers.cancel(TimerKind::Inactivity);
        }
        self.store.login(grant);
        self.activate();
    }

    /// Arm timers for a session rehydrated from storage.
    ///
    /// Returns false when there is nothing to resume.
    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Unauthenticated || !self.store.is_authenticated() {
            return false;
        }
        self.activate();
        true
    }

    fn activate(&mut self) {
        self.generation += 1;
        self.state = SessionState::Active;
        self.arm_refresh();
        self.arm_inactivity();
        info!(generation = self.generation, "Session active");
    }

    fn arm_refresh(&mut self) {
        let delay = self.config.refresh_delay(self.store.session().expire_in());
        debug!(delay_ms = delay.as_millis() as u64, "Scheduling token refresh");
        self.timers.arm(TimerKind::Refresh, delay);
    }

    fn arm_inactivity(&mut self) {
        self.timers
            .arm(TimerKind::Inactivity, self.config.inactivity_timeout);
    }

    /// A qualifying input event happened. Pushes the inactivity deadline a
    /// full window out; the refresh timer is untouched.
    pub fn record_activity(&mut self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.arm_inactivity();
        true
    }

    /// The inactivity timer fired.
    pub fn inactivity_elapsed(&mut self) -> Transition {
        if !self.is_authenticated() {
            return Transition::Unchanged;
        }
        self.state = SessionState::IdlePendingLogout;
        self.logout(LogoutReason::Inactivity)
    }

    /// The refresh timer fired.
    pub fn refresh_due(&mut self) -> RefreshStep {
        if self.state != SessionState::Active {
            return RefreshStep::Skipped;
        }

        match self.store.refresh_token() {
            Some(refresh_token) => {
                let ticket = RefreshTicket {
                    generation: self.generation,
                    refresh_token: refresh_token.to_string(),
                };
                self.state = SessionState::Refreshing;
                RefreshStep::Begin(ticket)
            }
            None => {
                self.logout(LogoutReason::MissingRefreshToken);
                RefreshStep::LoggedOut(LogoutReason::MissingRefreshToken)
            }
        }
    }

    /// Apply the outcome of the refresh call started with `ticket`.
    ///
    /// Results for a session that has since logged out or been replaced are
    /// dropped without touching the store.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<TokenRenewal, String>,
    ) -> Transition {
        if ticket.generation != self.generation || self.state != SessionState::Refreshing {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding refresh result for a finished session"
            );
            return Transition::Stale;
        }

        match outcome {
            Ok(renewal) => {
                if let Err(e) = self.store.renew(renewal) {
                    return self.logout(LogoutReason::RefreshFailed(e.to_string()));
                }
                self.state = SessionState::Active;
                self.arm_refresh();
                info!(generation = self.generation, "Token refreshed");
                Transition::Refreshed
            }
            Err(message) => {
                warn!(error = %message, "Token refresh failed");
                self.logout(LogoutReason::RefreshFailed(message))
            }
        }
    }

    /// End the session: cancel both timers and clear the store.
    pub fn logout(&mut self, reason: LogoutReason) -> Transition {
        if self.state == SessionState::Unauthenticated && !self.store.is_authenticated() {
            return Transition::Unchanged;
        }

        self.timers.cancel(TimerKind::Refresh);
        self.timers.cancel(TimerKind::Inactivity);
        self.store.logout();
        self.state = SessionState::Unauthenticated;
        self.generation += 1;
        info!(?reason, "Session ended");
        Transition::LoggedOut(reason)
    }
}
