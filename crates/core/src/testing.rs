//! Deterministic scheduler for driving a watchdog in tests
//!
//! Stands in for the browser event loop: time only moves when the test says
//! so, and periodic ticks fire at exact multiples of the poll interval.

use crate::clock::{Clock, ManualClock};
use crate::config::TimingConfig;
use crate::effect::Effect;
use crate::signal::Signal;
use crate::watchdog::Watchdog;
use chrono::{DateTime, Duration, Utc};

/// Effect observed at a given offset from the scheduler's start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observed {
    pub at: Duration,
    pub effect: Effect,
}

/// Fake scheduler owning a watchdog and a manual clock
pub struct FakeScheduler {
    clock: ManualClock,
    watchdog: Watchdog<ManualClock>,
    started_at: DateTime<Utc>,
    next_tick: DateTime<Utc>,
    observed: Vec<Observed>,
}

impl FakeScheduler {
    /// Start at the Unix epoch with the first tick one poll interval away
    pub fn new(timing: TimingConfig) -> Self {
        let clock = ManualClock::at_epoch();
        let started_at = clock.now();
        Self {
            watchdog: Watchdog::new(timing, clock.clone()),
            next_tick: started_at + timing.poll_interval(),
            clock,
            started_at,
            observed: Vec::new(),
        }
    }

    pub const fn watchdog(&self) -> &Watchdog<ManualClock> {
        &self.watchdog
    }

    pub const fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Time elapsed since the scheduler started
    pub fn elapsed(&self) -> Duration {
        self.clock.now() - self.started_at
    }

    /// Every effect produced so far, in order
    pub fn observed(&self) -> &[Observed] {
        &self.observed
    }

    /// Advance time, firing every periodic tick that falls due on the way
    pub fn advance(&mut self, by: Duration) -> Vec<Effect> {
        let target = self.clock.now() + by;
        let mut effects = Vec::new();

        while self.next_tick <= target {
            self.clock.set(self.next_tick);
            self.next_tick += self.watchdog.timing().poll_interval();
            effects.extend(self.deliver(Signal::Tick));
        }

        self.clock.set(target);
        effects
    }

    /// Move time without firing ticks, as when a background tab is throttled
    ///
    /// The periodic schedule resumes from the new instant.
    pub fn suspend_for(&mut self, by: Duration) {
        self.clock.advance(by);
        self.next_tick = self.clock.now() + self.watchdog.timing().poll_interval();
    }

    /// Deliver a signal at the current instant
    pub fn deliver(&mut self, signal: Signal) -> Vec<Effect> {
        let effects = self.watchdog.handle(signal);
        let at = self.elapsed();
        self.observed
            .extend(effects.iter().map(|&effect| Observed { at, effect }));
        effects
    }
}
