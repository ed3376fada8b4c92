//! Keep-alive transport seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Observable result of a keep-alive request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeepAliveOutcome {
    /// 2xx: the server session is still valid
    Confirmed,
    /// Any other status: the server session is gone
    Rejected { status: u16 },
    /// No response at all (network failure, aborted request)
    Unreachable,
}

impl KeepAliveOutcome {
    /// Classify an HTTP status code
    pub const fn from_status(status: u16) -> Self {
        if status >= 200 && status < 300 {
            Self::Confirmed
        } else {
            Self::Rejected { status }
        }
    }
}

/// Transport able to ping the keep-alive endpoint
///
/// Futures are not `Send`: browser fetches live on the UI thread.
#[async_trait(?Send)]
pub trait KeepAlive {
    /// Send one keep-alive request and report what was observed
    async fn ping(&self) -> KeepAliveOutcome;
}
