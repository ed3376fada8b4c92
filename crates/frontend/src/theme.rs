//! Theme toggle
//!
//! The palette lives in CSS custom properties on the root element. The
//! active theme is read back from `--bg`, so a page that starts styled by
//! the server is handled the same as one the toggle has already touched.

use crate::dom;
use gloo::events::EventListener;
use gloo::storage::{LocalStorage, Storage};
use tracing::debug;
use warden_core::theme::{BACKGROUND_PROPERTY, THEME_STORAGE_KEY};
use warden_core::Theme;

/// Theme currently applied to the document root
pub fn current_theme() -> Theme {
    let background = dom::root_element()
        .and_then(|root| root.style().get_property_value(BACKGROUND_PROPERTY).ok())
        .unwrap_or_default();
    Theme::from_background(&background)
}

/// Write a theme's palette onto the document root
pub fn apply_theme(theme: Theme) {
    let Some(root) = dom::root_element() else {
        return;
    };
    let style = root.style();
    for (property, value) in theme.palette() {
        let _ = style.set_property(property, value);
    }
}

/// Flip the theme, persist the choice and return the new theme
pub fn toggle_theme() -> Theme {
    let next = current_theme().toggle();
    apply_theme(next);
    if let Err(error) = LocalStorage::set(THEME_STORAGE_KEY, next) {
        debug!(%error, "Could not persist theme");
    }
    next
}

/// Re-apply a theme saved by an earlier visit, if any
pub fn restore_theme() -> Option<Theme> {
    let saved: Theme = LocalStorage::get(THEME_STORAGE_KEY).ok()?;
    apply_theme(saved);
    Some(saved)
}

/// Bind the toggle control; `None` when the page has no such control
pub fn bind_toggle(selector: &str) -> Option<EventListener> {
    let toggle = dom::query(selector)?;
    Some(EventListener::new(&toggle, "click", move |_| {
        let theme = toggle_theme();
        debug!(?theme, "Theme toggled");
    }))
}
