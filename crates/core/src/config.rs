//! Console configuration

use std::time::Duration;

/// Static console settings shared by the HTTP client and the UI
pub struct ConsoleConfig;

impl ConsoleConfig {
    /// Prefix every REST path is resolved against
    pub const API_BASE_PATH: &'static str = "/api";
    /// Storage key holding the serialized auth slice
    pub const AUTH_STATE_KEY: &'static str = "auth";
    /// Storage key remembering the protected route a visitor was bounced from
    pub const LAST_ROUTE_KEY: &'static str = "lastRoute";
    /// Cookie carrying the UI locale
    pub const LOCALE_COOKIE: &'static str = "SALES_CLOSE_MANAGE_LOCALE";
    /// Cookie carrying the remember-me choice
    pub const REMEMBER_ME_COOKIE: &'static str = "rememberMe";
    /// Locale cookie lifetime in seconds (one year)
    pub const LOCALE_COOKIE_MAX_AGE: u32 = 31_536_000;
    /// Rows per company page
    pub const PAGE_SIZE: u32 = 10;
    /// Delay between the last search keystroke and the re-fetch
    pub const SEARCH_DEBOUNCE_MS: u32 = 500;
    /// How long a toast stays on screen
    pub const TOAST_DURATION_MS: u32 = 3_000;
    /// Route used for every forced logout
    pub const LOGIN_ROUTE: &'static str = "/login";
}

/// Timer settings for the session lifecycle controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed cadence of proactive token refresh
    pub refresh_interval: Duration,
    /// Silence after which the session is logged out
    pub inactivity_timeout: Duration,
    /// Refresh at least this long before the token expires
    pub refresh_margin: Duration,
}

impl SessionConfig {
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);
    pub const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(5 * 60);
    /// Token lifetime assumed when the server omits one
    pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(15 * 60);
    pub const REFRESH_MARGIN: Duration = Duration::from_secs(60);

    /// Delay before the next refresh for a token living `expire_in`.
    ///
    /// Never later than the fixed interval, never after the token expires
    /// minus the safety margin.
    pub fn refresh_delay(&self, expire_in: Duration) -> Duration {
        let before_expiry = expire_in.saturating_sub(self.refresh_margin);
        self.refresh_interval.min(before_expiry)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Self::REFRESH_INTERVAL,
            inactivity_timeout: Self::INACTIVITY_TIMEOUT,
            refresh_margin: Self::REFRESH_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_delay_keeps_fixed_interval_for_regular_tokens() {
        let config = SessionConfig::default();
        assert_eq!(
            config.refresh_delay(Duration::from_secs(15 * 60)),
            Duration::from_secs(10 * 60)
        );
    }

    #[test]
    fn refresh_delay_is_capped_by_short_token_lifetime() {
        let config = SessionConfig::default();
        assert_eq!(
            config.refresh_delay(Duration::from_secs(5 * 60)),
            Duration::from_secs(4 * 60)
        );
    }

    #[test]
    fn refresh_delay_saturates_at_zero() {
        let config = SessionConfig::default();
        assert_eq!(config.refresh_delay(Duration::from_secs(30)), Duration::ZERO);
    }
}
