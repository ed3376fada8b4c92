//! Warden session client

pub mod error;
pub mod session;

use error::ClientError;
use reqwest::{Client, ClientBuilder};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Default path of the keep-alive endpoint
pub const DEFAULT_KEEP_ALIVE_PATH: &str = "/api/keep-alive";

/// Client for the server's session endpoints
#[derive(Clone, Debug)]
pub struct SessionClient {
    client: Client,
    base_url: String,
    keep_alive_path: String,
}

impl SessionClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> SessionClientBuilder {
        SessionClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the keep-alive path
    pub fn keep_alive_path(&self) -> &str {
        &self.keep_alive_path
    }

    /// Create a request builder for a path on the server
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }
}

/// Builder for SessionClient
#[derive(Default)]
pub struct SessionClientBuilder {
    base_url: Option<String>,
    keep_alive_path: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SessionClientBuilder {
    /// Set the base URL (the page origin in a browser)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the keep-alive path
    pub fn keep_alive_path(mut self, path: impl Into<String>) -> Self {
        self.keep_alive_path = Some(path.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SessionClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let keep_alive_path = self
            .keep_alive_path
            .unwrap_or_else(|| DEFAULT_KEEP_ALIVE_PATH.to_string());
        if !keep_alive_path.starts_with('/') {
            return Err(ClientError::Configuration(format!(
                "keep_alive_path must start with '/', got '{keep_alive_path}'"
            )));
        }

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            // An expired session usually answers with a redirect to the login
            // page; following it would turn the rejection into a 200.
            client_builder = client_builder.redirect(reqwest::redirect::Policy::none());
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("warden-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(SessionClient {
            client,
            base_url,
            keep_alive_path,
        })
    }
}
