//! Watchdog configuration
//!
//! Timing values must match the server-side session policy. Every section
//! falls back to its defaults, so a page only needs to declare what differs.

use crate::error::CoreResult;
use crate::validation::{ValidateConfig, validators};
use chrono::Duration;
use config::{ConfigError, FileFormat};
use serde::{Deserialize, Serialize};

/// Complete watchdog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    /// Session timing policy
    pub timing: TimingConfig,

    /// Server endpoints and navigation targets
    pub endpoints: EndpointConfig,

    /// Element identifiers of the UI collaborators
    pub markup: MarkupConfig,

    /// Console log level (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,
}

/// Session timing policy, all values in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Idle time allowed before a forced logout
    pub session_lifetime_ms: i64,

    /// How long before expiry the warning is shown
    pub warning_lead_ms: i64,

    /// How often the watchdog re-evaluates its state
    pub poll_interval_ms: i64,

    /// Activity newer than this counts as "recent" for the soft keep-alive
    pub recent_activity_window_ms: i64,

    /// Remaining time under which a recently active user is kept alive
    pub soft_keep_alive_threshold_ms: i64,
}

/// Server endpoints consumed by the watchdog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Path of the keep-alive endpoint (POST)
    pub keep_alive: String,

    /// Navigation target once the server reports the session gone
    pub login: String,

    /// Navigation target once the local timer expires
    pub logout: String,
}

/// Stable identifiers used to find UI collaborators in the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Id of the warning modal container
    pub warning_modal_id: String,

    /// Id of the countdown display element
    pub countdown_id: String,

    /// Id of the "stay logged in" button
    pub stay_logged_in_id: String,

    /// Selector of the sidebar toggle control
    pub sidebar_toggle_selector: String,

    /// Selector of the sidebar itself
    pub sidebar_selector: String,

    /// Selector of the theme toggle control
    pub theme_toggle_selector: String,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            endpoints: EndpointConfig::default(),
            markup: MarkupConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            session_lifetime_ms: 5 * 60 * 1000,
            warning_lead_ms: 30 * 1000,
            poll_interval_ms: 5 * 1000,
            recent_activity_window_ms: 10 * 1000,
            soft_keep_alive_threshold_ms: 60 * 1000,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            keep_alive: "/api/keep-alive".to_string(),
            login: "/login".to_string(),
            logout: "/logout".to_string(),
        }
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            warning_modal_id: "sessionWarningModal".to_string(),
            countdown_id: "sessionCountdown".to_string(),
            stay_logged_in_id: "btnStayLoggedIn".to_string(),
            sidebar_toggle_selector: "[data-toggle-sidebar]".to_string(),
            sidebar_selector: ".sidebar".to_string(),
            theme_toggle_selector: "[data-toggle-theme]".to_string(),
        }
    }
}

impl TimingConfig {
    pub fn session_lifetime(&self) -> Duration {
        Duration::milliseconds(self.session_lifetime_ms)
    }

    pub fn warning_lead(&self) -> Duration {
        Duration::milliseconds(self.warning_lead_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::milliseconds(self.poll_interval_ms)
    }

    pub fn recent_activity_window(&self) -> Duration {
        Duration::milliseconds(self.recent_activity_window_ms)
    }

    pub fn soft_keep_alive_threshold(&self) -> Duration {
        Duration::milliseconds(self.soft_keep_alive_threshold_ms)
    }
}

impl WatchdogConfig {
    /// Load configuration from a JSON document layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or fails validation
    pub fn from_json_str(source: &str) -> CoreResult<Self> {
        Self::load(source, FileFormat::Json)
    }

    /// Load configuration from a TOML document layered over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or fails validation
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        Self::load(source, FileFormat::Toml)
    }

    fn load(source: &str, format: FileFormat) -> CoreResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from_str(source, format))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }
}

/// Longest session lifetime accepted, the range of a browser timer (`u32` ms)
///
/// The poll interval is bounded by the lifetime, so it always fits a timer.
pub const MAX_SESSION_LIFETIME_MS: i64 = 4_294_967_295;

impl ValidateConfig for WatchdogConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let timing = &self.timing;
        validators::validate_positive(timing.session_lifetime_ms, "timing.session_lifetime_ms")?;
        validators::validate_range(
            timing.session_lifetime_ms,
            1,
            MAX_SESSION_LIFETIME_MS,
            "timing.session_lifetime_ms",
        )?;
        validators::validate_range(
            timing.warning_lead_ms,
            1,
            timing.session_lifetime_ms - 1,
            "timing.warning_lead_ms",
        )?;
        // A poll period longer than the lead could skip the warning entirely.
        validators::validate_range(
            timing.poll_interval_ms,
            1,
            timing.warning_lead_ms,
            "timing.poll_interval_ms",
        )?;
        validators::validate_range(
            timing.recent_activity_window_ms,
            0,
            timing.session_lifetime_ms,
            "timing.recent_activity_window_ms",
        )?;
        validators::validate_range(
            timing.soft_keep_alive_threshold_ms,
            0,
            timing.session_lifetime_ms,
            "timing.soft_keep_alive_threshold_ms",
        )?;

        validators::validate_site_path(&self.endpoints.keep_alive, "endpoints.keep_alive")?;
        validators::validate_site_path(&self.endpoints.login, "endpoints.login")?;
        validators::validate_site_path(&self.endpoints.logout, "endpoints.logout")?;

        let markup = &self.markup;
        validators::validate_not_empty(&markup.warning_modal_id, "markup.warning_modal_id")?;
        validators::validate_not_empty(&markup.countdown_id, "markup.countdown_id")?;
        validators::validate_not_empty(&markup.stay_logged_in_id, "markup.stay_logged_in_id")?;
        validators::validate_not_empty(
            &markup.sidebar_toggle_selector,
            "markup.sidebar_toggle_selector",
        )?;
        validators::validate_not_empty(&markup.sidebar_selector, "markup.sidebar_selector")?;
        validators::validate_not_empty(
            &markup.theme_toggle_selector,
            "markup.theme_toggle_selector",
        )?;

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::Message(format!(
                "log_level: unknown level '{other}'"
            ))),
        }
    }
}
