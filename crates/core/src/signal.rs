//! Inputs delivered to the watchdog by its scheduler

use crate::keep_alive::KeepAliveOutcome;

/// User interaction kinds that count as activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    PointerDown,
    KeyDown,
    Scroll,
    TouchStart,
}

impl ActivityKind {
    pub const ALL: [Self; 4] = [
        Self::PointerDown,
        Self::KeyDown,
        Self::Scroll,
        Self::TouchStart,
    ];

    /// DOM event type to listen for
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::PointerDown => "mousedown",
            Self::KeyDown => "keydown",
            Self::Scroll => "scroll",
            Self::TouchStart => "touchstart",
        }
    }
}

/// Everything that can wake the watchdog
///
/// A scheduler delivers `Tick` on a fixed period and the other signals as
/// they happen. All signals run to completion on one thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Tick,
    Activity(ActivityKind),
    StayLoggedIn,
    KeepAliveSettled(KeepAliveOutcome),
}
