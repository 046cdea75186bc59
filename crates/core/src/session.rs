//! Auth state store
//!
//! Holds the credential material of the signed-in administrator and mirrors it
//! into a storage backend. Which backend (durable or tab-scoped) is decided
//! once when the store is built and is not revisited until the page reloads.

use crate::config::{ConsoleConfig, SessionConfig};
use crate::cookies::cookie_value;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

/// Expiry recorded for an empty session, in milliseconds
pub const DEFAULT_EXPIRE_IN_MS: u64 = SessionConfig::DEFAULT_TOKEN_LIFETIME.as_millis() as u64;

/// Signed-in user as reported by the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// The persisted auth slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    /// Token lifetime in milliseconds
    pub expire_in: u64,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn expire_in(&self) -> Duration {
        Duration::from_millis(self.expire_in)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            refresh_token: None,
            expire_in: DEFAULT_EXPIRE_IN_MS,
        }
    }
}

/// Everything a successful login hands over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGrant {
    pub user: User,
    pub token: String,
    pub refresh_token: String,
    pub expire_in: Duration,
}

/// Result of a successful token refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRenewal {
    pub user_name: Option<String>,
    pub token: String,
    pub refresh_token: String,
    pub expire_in: Duration,
}

/// Where the auth slice is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistenceTarget {
    /// Survives browser restarts (`localStorage`)
    Durable,
    /// Dropped with the tab (`sessionStorage`)
    #[default]
    SessionScoped,
}

impl PersistenceTarget {
    /// Resolve the target from the `document.cookie` header.
    pub fn from_cookie_header(header: &str) -> Self {
        match cookie_value(header, ConsoleConfig::REMEMBER_ME_COOKIE) {
            Some("true") => Self::Durable,
            _ => Self::SessionScoped,
        }
    }
}

/// Key/value storage the auth slice is written to
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process backend, used by tests and as a fallback when the browser
/// refuses access to web storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// The auth state store
#[derive(Debug)]
pub struct AuthStore<B: StorageBackend> {
    backend: B,
    target: PersistenceTarget,
    session: Session,
}

impl<B: StorageBackend> AuthStore<B> {
    /// Build the store and rehydrate any persisted session.
    pub fn new(backend: B, target: PersistenceTarget) -> Self {
        let session = match Self::load(&backend) {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable auth state");
                let _ = backend.remove(ConsoleConfig::AUTH_STATE_KEY);
                Session::default()
            }
        };

        Self {
            backend,
            target,
            session,
        }
    }

    fn load(backend: &B) -> Result<Option<Session>> {
        match backend.get(ConsoleConfig::AUTH_STATE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.session.refresh_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn target(&self) -> PersistenceTarget {
        self.target
    }

    /// Replace the whole session with a fresh grant.
    pub fn login(&mut self, grant: SessionGrant) {
        self.session = Session {
            user: Some(grant.user),
            token: Some(grant.token),
            refresh_token: Some(grant.refresh_token),
            expire_in: duration_millis(grant.expire_in),
        };
        self.persist();
    }

    /// Swap in renewed credentials, keeping the user unless the server named one.
    pub fn renew(&mut self, renewal: TokenRenewal) -> Result<()> {
        if !self.is_authenticated() {
            return Err(CoreError::NotAuthenticated);
        }

        if let Some(name) = renewal.user_name {
            if let Some(user) = self.session.user.as_mut() {
                user.name = name;
            }
        }
        self.session.token = Some(renewal.token);
        self.session.refresh_token = Some(renewal.refresh_token);
        self.session.expire_in = duration_millis(renewal.expire_in);
        self.persist();
        Ok(())
    }

    /// Reset every field to its empty default.
    pub fn logout(&mut self) {
        self.session = Session::default();
        if let Err(e) = self.backend.remove(ConsoleConfig::AUTH_STATE_KEY) {
            tracing::warn!(error = %e, "Failed to clear persisted auth state");
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.session)
            .map_err(CoreError::from)
            .and_then(|raw| self.backend.set(ConsoleConfig::AUTH_STATE_KEY, &raw));

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist auth state");
        }
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn empty_session_uses_configured_token_lifetime() {
        assert_eq!(Session::default().expire_in(), SessionConfig::DEFAULT_TOKEN_LIFETIME);
    }

    fn grant() -> SessionGrant {
        SessionGrant {
            user: User {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                user_type: Some("admin".to_string()),
                profile: None,
            },
            token: "jwt-1".to_string(),
            refresh_token: "refresh-1".to_string(),
            expire_in: Duration::from_secs(15 * 60),
        }
    }

    #[test]
    fn login_replaces_every_field_and_persists() {
        let mut store = AuthStore::new(MemoryStorage::new(), PersistenceTarget::Durable);
        store.login(grant());

        let session = store.session();
        assert_eq!(session.token.as_deref(), Some("jwt-1"));
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
        assert_eq!(session.expire_in, 900_000);
        assert_eq!(session.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));

        let raw = store
            .backend
            .get(ConsoleConfig::AUTH_STATE_KEY)
            .unwrap()
            .expect("session should be persisted");
        assert!(raw.contains("\"refreshToken\":\"refresh-1\""));
        assert!(raw.contains("\"expireIn\":900000"));
    }

    #[test]
    fn logout_resets_to_defaults_and_clears_storage() {
        let mut store = AuthStore::new(MemoryStorage::new(), PersistenceTarget::SessionScoped);
        store.login(grant());
        store.logout();

        assert_eq!(store.session(), &Session::default());
        assert!(!store.is_authenticated());
        assert!(store
            .backend
            .get(ConsoleConfig::AUTH_STATE_KEY)
            .unwrap()
            .is_none());
    }

    #[test]
    fn rehydrates_persisted_session() {
        let backend = MemoryStorage::new();
        {
            let mut store = AuthStore::new(&backend, PersistenceTarget::Durable);
            store.login(grant());
        }

        let store = AuthStore::new(&backend, PersistenceTarget::Durable);
        assert_eq!(store.token(), Some("jwt-1"));
    }

    #[test]
    fn renew_keeps_user_when_name_missing() {
        let mut store = AuthStore::new(MemoryStorage::new(), PersistenceTarget::Durable);
        store.login(grant());
        store
            .renew(TokenRenewal {
                user_name: None,
                token: "jwt-2".to_string(),
                refresh_token: "refresh-2".to_string(),
                expire_in: Duration::from_secs(60),
            })
            .unwrap();

        let session = store.session();
        assert_eq!(session.token.as_deref(), Some("jwt-2"));
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-2"));
        assert_eq!(session.expire_in, 60_000);
        assert_eq!(session.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
    }

    #[test]
    fn renew_requires_a_session() {
        let mut store = AuthStore::new(MemoryStorage::new(), PersistenceTarget::Durable);
        let result = store.renew(TokenRenewal {
            user_name: None,
            token: "jwt".to_string(),
            refresh_token: "refresh".to_string(),
            expire_in: Duration::from_secs(60),
        });
        assert!(matches!(result, Err(CoreError::NotAuthenticated)));
    }

    #[test]
    fn corrupt_state_is_discarded() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_get()
            .with(eq(ConsoleConfig::AUTH_STATE_KEY))
            .returning(|_| Ok(Some("{not json".to_string())));
        backend
            .expect_remove()
            .with(eq(ConsoleConfig::AUTH_STATE_KEY))
            .times(1)
            .returning(|_| Ok(()));

        let store = AuthStore::new(backend, PersistenceTarget::Durable);
        assert_eq!(store.session(), &Session::default());
    }

    #[test]
    fn storage_failures_do_not_block_login() {
        let mut backend = MockStorageBackend::new();
        backend.expect_get().returning(|_| Ok(None));
        backend
            .expect_set()
            .times(1)
            .returning(|_, _| Err(CoreError::Storage("quota exceeded".to_string())));

        let mut store = AuthStore::new(backend, PersistenceTarget::Durable);
        store.login(grant());
        assert!(store.is_authenticated());
    }

    #[test]
    fn remember_me_cookie_selects_durable_storage() {
        assert_eq!(
            PersistenceTarget::from_cookie_header("rememberMe=true"),
            PersistenceTarget::Durable
        );
        assert_eq!(
            PersistenceTarget::from_cookie_header("rememberMe=false; a=b"),
            PersistenceTarget::SessionScoped
        );
        assert_eq!(
            PersistenceTarget::from_cookie_header(""),
            PersistenceTarget::SessionScoped
        );
    }
}
