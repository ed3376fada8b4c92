//! Side effects requested by the watchdog
//!
//! The watchdog is a pure reducer: it mutates its own state and returns the
//! effects a host must carry out. Nothing in here touches the page.

use crate::config::EndpointConfig;
use serde::{Deserialize, Serialize};

/// Where a terminal navigation sends the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// The server reported the session gone
    Login,
    /// The local timer ran out
    Logout,
}

impl Destination {
    /// Resolve the destination against the configured endpoints
    pub fn path(self, endpoints: &EndpointConfig) -> &str {
        match self {
            Self::Login => &endpoints.login,
            Self::Logout => &endpoints.logout,
        }
    }
}

/// A single side effect for the host to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Display the non-dismissible warning modal
    ShowWarning,
    /// Hide the warning modal
    HideWarning,
    /// Refresh the countdown display with whole seconds remaining
    UpdateCountdown(u64),
    /// Fire-and-forget keep-alive request
    SendKeepAlive,
    /// Hard navigation, ends the watchdog's lifecycle
    Navigate(Destination),
}
