//! Frontend error type

use thiserror::Error;
use wasm_bindgen::JsValue;
use warden_core::CoreError;
use warden_http::ClientError;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("No document available")]
    NoDocument,

    #[error("Failed to read page origin")]
    NoOrigin,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<FrontendError> for JsValue {
    fn from(error: FrontendError) -> Self {
        Self::from_str(&error.to_string())
    }
}
