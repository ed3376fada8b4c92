//! Keep-alive endpoint methods

use crate::client::{ClientError, SessionClient};
use async_trait::async_trait;
use reqwest::{Method, Response};
use tracing::{debug, trace};
use warden_core::{KeepAlive, KeepAliveOutcome};

impl SessionClient {
    async fn post_keep_alive(&self) -> Result<Response, reqwest::Error> {
        self.request(Method::POST, &self.keep_alive_path)
            .send()
            .await
    }

    /// POST to the keep-alive endpoint
    ///
    /// Any 2xx is success; every other status is returned as an error
    /// carrying that status.
    pub async fn keep_alive(&self) -> Result<(), ClientError> {
        let response = self.post_keep_alive().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

#[async_trait(?Send)]
impl KeepAlive for SessionClient {
    async fn ping(&self) -> KeepAliveOutcome {
        match self.post_keep_alive().await {
            Ok(response) => {
                let outcome = KeepAliveOutcome::from_status(response.status().as_u16());
                trace!(path = %self.keep_alive_path, ?outcome, "Keep-alive answered");
                outcome
            }
            Err(error) => {
                debug!(%error, "Keep-alive request did not complete");
                KeepAliveOutcome::Unreachable
            }
        }
    }
}
