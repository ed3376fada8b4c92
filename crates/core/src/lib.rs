//! Warden core: a platform-independent session inactivity watchdog
//!
//! The [`Watchdog`] decides, from an injected [`Clock`], when to warn a user
//! that their session is about to expire and when to log them out. It never
//! touches the page or the network itself; it returns [`Effect`]s that a
//! [`SessionHost`] carries out.

pub mod clock;
pub mod config;
pub mod effect;
pub mod error;
pub mod host;
pub mod keep_alive;
pub mod signal;
pub mod state;
pub mod theme;
pub mod validation;
pub mod watchdog;

#[cfg(any(test, feature = "tests"))]
pub mod testing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{EndpointConfig, MarkupConfig, TimingConfig, WatchdogConfig};
pub use effect::{Destination, Effect};
pub use error::{CoreError, CoreResult};
pub use host::{SessionHost, apply_effects};
pub use keep_alive::{KeepAlive, KeepAliveOutcome};
pub use signal::{ActivityKind, Signal};
pub use state::{Phase, WatchdogState};
pub use theme::Theme;
pub use validation::ValidateConfig;
pub use watchdog::{Watchdog, countdown_seconds};
