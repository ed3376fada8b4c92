//! Page-provided configuration
//!
//! A page may embed overrides as JSON:
//!
//! ```html
//! <script type="application/json" id="wardenConfig">
//!   {"timing": {"session_lifetime_ms": 900000}}
//! </script>
//! ```

use crate::dom;
use warden_core::{CoreResult, WatchdogConfig};

/// Id of the script element carrying the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "wardenConfig";

/// Load the configuration embedded in the page
///
/// A page without the element gets the defaults.
pub fn load() -> CoreResult<WatchdogConfig> {
    load_from(CONFIG_ELEMENT_ID)
}

pub fn load_from(element_id: &str) -> CoreResult<WatchdogConfig> {
    match dom::element_by_id(element_id).and_then(|element| element.text_content()) {
        Some(source) if !source.trim().is_empty() => WatchdogConfig::from_json_str(&source),
        _ => Ok(WatchdogConfig::default()),
    }
}
