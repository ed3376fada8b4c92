//! Warden HTTP module
//!
//! Talks to the server's session endpoints on behalf of the watchdog. The
//! server side (session store, keep-alive handler) lives elsewhere.

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{SessionClient, SessionClientBuilder, error::ClientError};
