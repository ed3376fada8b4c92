//! Warden browser bindings
//!
//! Loaded as a wasm module by server-rendered pages. On start it reads the
//! page configuration, installs console logging, binds the sidebar and theme
//! toggles, and starts the session watchdog.

pub mod config;
pub mod dom;
pub mod driver;
pub mod error;
pub mod logging;
pub mod sidebar;
pub mod theme;

pub use driver::{SessionDriver, SessionWatch};
pub use error::FrontendError;

use tracing::warn;
use wasm_bindgen::prelude::*;
use warden_core::WatchdogConfig;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = loaded
        .as_ref()
        .map_or_else(|_| WatchdogConfig::default(), Clone::clone);
    logging::init(&config.log_level);
    if let Err(error) = &loaded {
        warn!(%error, "Ignoring invalid page configuration, using defaults");
    }

    theme::restore_theme();
    let markup = &config.markup;
    if let Some(listener) =
        sidebar::bind_toggle(&markup.sidebar_toggle_selector, &markup.sidebar_selector)
    {
        listener.forget();
    }
    if let Some(listener) = theme::bind_toggle(&markup.theme_toggle_selector) {
        listener.forget();
    }

    SessionDriver::for_page(config)?.install()?.forget();
    Ok(())
}
