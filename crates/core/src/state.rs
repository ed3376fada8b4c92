//! Watchdog state and phase classification

use crate::config::TimingConfig;
use crate::effect::Destination;
use chrono::{DateTime, Duration, Utc};

/// Where the session stands at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// More than the warning lead remains
    Active { idle: Duration, remaining: Duration },
    /// Within the warning lead, not yet expired
    Warning { remaining: Duration },
    /// No time remains
    Expired,
}

/// Mutable state owned by one watchdog, re-created on every page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchdogState {
    /// Instant of the most recent user interaction
    pub last_activity_at: DateTime<Utc>,

    /// True exactly while the warning UI is displayed
    pub warning_visible: bool,

    /// Set once a terminal navigation has been requested
    pub terminated: Option<Destination>,
}

impl WatchdogState {
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            last_activity_at: now,
            warning_visible: false,
            terminated: None,
        }
    }

    /// Time since the last interaction
    pub fn idle(&self, now: DateTime<Utc>) -> Duration {
        now - self.last_activity_at
    }

    /// Recomputed from the wall clock on every call, never decremented
    ///
    /// A clock stepping far enough backwards saturates at `Duration::MAX`.
    pub fn time_remaining(&self, now: DateTime<Utc>, timing: &TimingConfig) -> Duration {
        timing
            .session_lifetime()
            .checked_sub(&self.idle(now))
            .unwrap_or(Duration::MAX)
    }

    /// Classify `now`; expiry is checked before the warning window
    pub fn phase(&self, now: DateTime<Utc>, timing: &TimingConfig) -> Phase {
        let idle = self.idle(now);
        let remaining = self.time_remaining(now, timing);

        if remaining <= Duration::zero() {
            Phase::Expired
        } else if remaining <= timing.warning_lead() {
            Phase::Warning { remaining }
        } else {
            Phase::Active { idle, remaining }
        }
    }
}
