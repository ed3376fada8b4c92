//! Inactivity watchdog
//!
//! Tracks the last user interaction and, on every tick, decides whether the
//! session is safe, about to expire, or gone. Two states are visible to the
//! user: `ACTIVE` (no warning) and `WARNING` (modal with countdown). Expiry
//! and a server-side rejection both end in a hard navigation, after which the
//! watchdog ignores every further signal.

use crate::clock::Clock;
use crate::config::TimingConfig;
use crate::effect::{Destination, Effect};
use crate::keep_alive::KeepAliveOutcome;
use crate::signal::Signal;
use crate::state::{Phase, WatchdogState};
use chrono::Duration;
use tracing::{debug, info, trace, warn};

/// Session inactivity watchdog
pub struct Watchdog<C: Clock> {
    timing: TimingConfig,
    clock: C,
    state: WatchdogState,
}

impl<C: Clock> Watchdog<C> {
    /// Create a watchdog whose last activity is "now"
    pub fn new(timing: TimingConfig, clock: C) -> Self {
        let state = WatchdogState::new(clock.now());
        Self {
            timing,
            clock,
            state,
        }
    }

    pub const fn state(&self) -> &WatchdogState {
        &self.state
    }

    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub const fn is_terminated(&self) -> bool {
        self.state.terminated.is_some()
    }

    /// Time left before a local logout, as of now
    pub fn time_remaining(&self) -> Duration {
        self.state.time_remaining(self.clock.now(), &self.timing)
    }

    /// Route a scheduler signal to the matching operation
    pub fn handle(&mut self, signal: Signal) -> Vec<Effect> {
        match signal {
            Signal::Tick => self.tick(),
            Signal::Activity(kind) => {
                trace!(event = kind.event_type(), "User activity");
                self.record_activity()
            }
            Signal::StayLoggedIn => self.stay_logged_in(),
            Signal::KeepAliveSettled(outcome) => self.keep_alive_settled(outcome),
        }
    }

    /// Note a user interaction; dismisses the warning if it is showing
    pub fn record_activity(&mut self) -> Vec<Effect> {
        if self.is_terminated() {
            return Vec::new();
        }

        self.state.last_activity_at = self.clock.now();
        if self.state.warning_visible {
            self.dismiss_warning()
        } else {
            Vec::new()
        }
    }

    /// Periodic re-evaluation against the wall clock
    pub fn tick(&mut self) -> Vec<Effect> {
        if self.is_terminated() {
            return Vec::new();
        }

        match self.state.phase(self.clock.now(), &self.timing) {
            Phase::Expired => {
                info!(
                    lifetime_ms = self.timing.session_lifetime_ms,
                    "Session idle for its full lifetime, logging out"
                );
                self.terminate(Destination::Logout)
            }
            Phase::Warning { remaining } => {
                if self.state.warning_visible {
                    vec![Effect::UpdateCountdown(countdown_seconds(remaining))]
                } else {
                    self.show_warning()
                }
            }
            Phase::Active { idle, remaining } => {
                let mut effects = Vec::new();
                if self.state.warning_visible {
                    effects.extend(self.dismiss_warning());
                }
                if idle < self.timing.recent_activity_window()
                    && remaining < self.timing.soft_keep_alive_threshold()
                {
                    debug!(
                        remaining_ms = remaining.num_milliseconds(),
                        "Recently active user near expiry, sending keep-alive"
                    );
                    effects.push(Effect::SendKeepAlive);
                }
                effects
            }
        }
    }

    /// Enter the warning state and show the countdown
    pub fn show_warning(&mut self) -> Vec<Effect> {
        if self.is_terminated() {
            return Vec::new();
        }

        let remaining = self.time_remaining();
        info!(
            remaining_ms = remaining.num_milliseconds(),
            "Session about to expire, showing warning"
        );
        self.state.warning_visible = true;
        vec![
            Effect::ShowWarning,
            Effect::UpdateCountdown(countdown_seconds(remaining)),
        ]
    }

    /// Leave the warning state and confirm the session with the server
    pub fn dismiss_warning(&mut self) -> Vec<Effect> {
        if self.is_terminated() {
            return Vec::new();
        }

        debug!("Dismissing session warning");
        self.state.warning_visible = false;
        vec![Effect::HideWarning, Effect::SendKeepAlive]
    }

    /// Explicit "stay logged in": refresh activity and dismiss once
    ///
    /// Sends exactly one keep-alive even when the warning was showing, where
    /// `record_activity` followed by `dismiss_warning` would send two.
    pub fn stay_logged_in(&mut self) -> Vec<Effect> {
        if self.is_terminated() {
            return Vec::new();
        }

        info!("User chose to stay logged in");
        self.state.last_activity_at = self.clock.now();
        self.dismiss_warning()
    }

    /// React to the result of a keep-alive request
    ///
    /// Only a rejection acts: it proves the server session is gone, whatever
    /// the local timer says. A request that never completed changes nothing.
    pub fn keep_alive_settled(&mut self, outcome: KeepAliveOutcome) -> Vec<Effect> {
        if self.is_terminated() {
            return Vec::new();
        }

        match outcome {
            KeepAliveOutcome::Confirmed => {
                trace!("Keep-alive confirmed");
                Vec::new()
            }
            KeepAliveOutcome::Rejected { status } => {
                warn!(status, "Keep-alive rejected, server session is gone");
                self.terminate(Destination::Login)
            }
            KeepAliveOutcome::Unreachable => {
                debug!("Keep-alive did not complete, deferring to the next tick");
                Vec::new()
            }
        }
    }

    fn terminate(&mut self, destination: Destination) -> Vec<Effect> {
        self.state.terminated = Some(destination);
        vec![Effect::Navigate(destination)]
    }
}

/// Whole seconds shown to the user, rounded up
pub fn countdown_seconds(remaining: Duration) -> u64 {
    let millis = remaining.num_milliseconds().max(0);
    u64::try_from((millis + 999) / 1000).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::signal::ActivityKind;

    fn watchdog() -> (Watchdog<ManualClock>, ManualClock) {
        let clock = ManualClock::at_epoch();
        (Watchdog::new(TimingConfig::default(), clock.clone()), clock)
    }

    fn ms(value: i64) -> Duration {
        Duration::milliseconds(value)
    }

    #[test]
    fn test_countdown_rounds_up() {
        assert_eq!(countdown_seconds(ms(29_999)), 30);
        assert_eq!(countdown_seconds(ms(30_000)), 30);
        assert_eq!(countdown_seconds(ms(1)), 1);
        assert_eq!(countdown_seconds(ms(1_001)), 2);
        assert_eq!(countdown_seconds(ms(0)), 0);
        assert_eq!(countdown_seconds(ms(-5)), 0);
    }

    #[test]
    fn test_tick_in_safe_zone_is_quiet() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(100_000));

        assert!(dog.tick().is_empty());
        assert!(!dog.state().warning_visible);
    }

    #[test]
    fn test_warning_shows_with_countdown() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(270_001));

        let effects = dog.tick();

        assert_eq!(
            effects,
            vec![Effect::ShowWarning, Effect::UpdateCountdown(30)]
        );
        assert!(dog.state().warning_visible);
    }

    #[test]
    fn test_warning_tick_only_refreshes_countdown() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(275_000));
        dog.tick();

        clock.advance(ms(5_000));
        let effects = dog.tick();

        assert_eq!(effects, vec![Effect::UpdateCountdown(20)]);
        assert!(dog.state().warning_visible);
    }

    #[test]
    fn test_expiry_navigates_to_logout() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(300_000));

        assert_eq!(dog.tick(), vec![Effect::Navigate(Destination::Logout)]);
        assert_eq!(dog.state().terminated, Some(Destination::Logout));
    }

    #[test]
    fn test_expiry_without_prior_warning() {
        // Timers can be throttled; the warning window may be skipped entirely.
        let (mut dog, clock) = watchdog();
        clock.advance(ms(10 * 60 * 1000));

        assert_eq!(dog.tick(), vec![Effect::Navigate(Destination::Logout)]);
    }

    #[test]
    fn test_terminated_watchdog_ignores_signals() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(300_001));
        dog.tick();

        assert!(dog.tick().is_empty());
        assert!(dog.record_activity().is_empty());
        assert!(dog.stay_logged_in().is_empty());
        assert!(
            dog.keep_alive_settled(KeepAliveOutcome::Rejected { status: 401 })
                .is_empty()
        );
        assert_eq!(dog.state().terminated, Some(Destination::Logout));
    }

    #[test]
    fn test_activity_updates_timestamp() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(42_000));

        assert!(dog.record_activity().is_empty());
        assert_eq!(dog.state().last_activity_at, clock.now());
    }

    #[test]
    fn test_activity_during_warning_dismisses_and_pings() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(280_000));
        dog.tick();

        clock.advance(ms(1_000));
        let effects = dog.handle(Signal::Activity(ActivityKind::KeyDown));

        assert_eq!(effects, vec![Effect::HideWarning, Effect::SendKeepAlive]);
        assert!(!dog.state().warning_visible);
        assert_eq!(dog.state().last_activity_at, clock.now());
    }

    #[test]
    fn test_safe_zone_tick_dismisses_stale_warning() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(280_000));
        dog.tick();

        // Activity that bypassed record_activity leaves the flag stale.
        dog.state.last_activity_at = clock.now();
        let effects = dog.tick();

        assert_eq!(effects, vec![Effect::HideWarning, Effect::SendKeepAlive]);
        assert!(!dog.state().warning_visible);
    }

    #[test]
    fn test_soft_keep_alive_for_recent_activity_near_expiry() {
        let timing = TimingConfig {
            session_lifetime_ms: 300_000,
            warning_lead_ms: 30_000,
            poll_interval_ms: 5_000,
            recent_activity_window_ms: 10_000,
            soft_keep_alive_threshold_ms: 295_000,
        };
        let clock = ManualClock::at_epoch();
        let mut dog = Watchdog::new(timing, clock.clone());

        clock.advance(ms(4_000));
        assert!(dog.tick().is_empty(), "296s remaining is above the soft threshold");

        clock.advance(ms(2_000));
        assert_eq!(dog.tick(), vec![Effect::SendKeepAlive]);

        clock.advance(ms(5_000));
        assert!(dog.tick().is_empty(), "activity is no longer recent");
    }

    #[test]
    fn test_soft_keep_alive_never_fires_with_defaults_for_idle_user() {
        let (mut dog, clock) = watchdog();
        for _ in 0..53 {
            clock.advance(ms(5_000));
            let effects = dog.tick();
            assert!(!effects.contains(&Effect::SendKeepAlive));
        }
    }

    #[test]
    fn test_clock_stepping_backwards_does_not_panic() {
        let timing = TimingConfig {
            session_lifetime_ms: i64::MAX,
            ..TimingConfig::default()
        };
        let clock = ManualClock::at_epoch();
        let mut dog = Watchdog::new(timing, clock.clone());

        clock.advance(ms(-1_000));
        assert!(dog.tick().is_empty());
        assert!(!dog.is_terminated());
    }

    #[test]
    fn test_clock_stepping_backwards_extends_session() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(280_000));
        assert_eq!(dog.tick()[0], Effect::ShowWarning);

        // Wall clock corrected by ten minutes: no longer near expiry.
        clock.advance(ms(-600_000));
        assert_eq!(dog.tick(), vec![Effect::HideWarning, Effect::SendKeepAlive]);
        assert!(dog.time_remaining() > ms(300_000));
    }

    #[test]
    fn test_stay_logged_in_sends_one_keep_alive() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(285_000));
        dog.tick();

        clock.advance(ms(2_000));
        let effects = dog.handle(Signal::StayLoggedIn);

        let pings = effects
            .iter()
            .filter(|e| **e == Effect::SendKeepAlive)
            .count();
        assert_eq!(pings, 1);
        assert!(effects.contains(&Effect::HideWarning));
        assert!(!dog.state().warning_visible);
        assert_eq!(dog.state().last_activity_at, clock.now());
    }

    #[test]
    fn test_rejected_keep_alive_navigates_to_login() {
        let (mut dog, _clock) = watchdog();

        let effects = dog.handle(Signal::KeepAliveSettled(KeepAliveOutcome::Rejected {
            status: 401,
        }));

        assert_eq!(effects, vec![Effect::Navigate(Destination::Login)]);
        assert_eq!(dog.state().terminated, Some(Destination::Login));
    }

    #[test]
    fn test_unreachable_keep_alive_changes_nothing() {
        let (mut dog, clock) = watchdog();
        clock.advance(ms(280_000));
        dog.tick();
        let before = dog.state().clone();

        let effects = dog.keep_alive_settled(KeepAliveOutcome::Unreachable);

        assert!(effects.is_empty());
        assert_eq!(dog.state(), &before);
    }

    #[test]
    fn test_confirmed_keep_alive_changes_nothing() {
        let (mut dog, _clock) = watchdog();
        let before = dog.state().clone();

        assert!(dog.keep_alive_settled(KeepAliveOutcome::Confirmed).is_empty());
        assert_eq!(dog.state(), &before);
    }
}
