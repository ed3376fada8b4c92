//! Browser scheduler for the watchdog
//!
//! Ticks come from a gloo `Interval`, activity from document-level listeners
//! registered in the capture phase so no page handler can swallow them.
//! Effects are carried out against the DOM; keep-alives run on
//! `spawn_local` and report back as signals.

use crate::dom;
use crate::error::FrontendError;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;
use wasm_bindgen_futures::spawn_local;
use warden_core::{
    ActivityKind, Clock, CoreError, Destination, KeepAlive, SessionHost, Signal, SystemClock, Watchdog,
    WatchdogConfig, WatchdogState, apply_effects,
};
use warden_http::SessionClient;

struct DriverInner<C: Clock, K: KeepAlive> {
    watchdog: RefCell<Watchdog<C>>,
    keep_alive: K,
    config: WatchdogConfig,
}

/// Watchdog bound to the page
pub struct SessionDriver<C: Clock + 'static = SystemClock, K: KeepAlive + 'static = SessionClient> {
    inner: Rc<DriverInner<C, K>>,
}

impl<C: Clock + 'static, K: KeepAlive + 'static> Clone for SessionDriver<C, K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl SessionDriver {
    /// Driver on the system clock talking to the page's own origin
    pub fn for_page(config: WatchdogConfig) -> Result<Self, FrontendError> {
        let origin = dom::origin().ok_or(FrontendError::NoOrigin)?;
        let client = SessionClient::builder()
            .base_url(origin)
            .keep_alive_path(config.endpoints.keep_alive.clone())
            .build()?;
        Ok(Self::new(config, SystemClock, client))
    }
}

impl<C: Clock + 'static, K: KeepAlive + 'static> SessionDriver<C, K> {
    pub fn new(config: WatchdogConfig, clock: C, keep_alive: K) -> Self {
        let watchdog = Watchdog::new(config.timing, clock);
        Self {
            inner: Rc::new(DriverInner {
                watchdog: RefCell::new(watchdog),
                keep_alive,
                config,
            }),
        }
    }

    pub fn config(&self) -> &WatchdogConfig {
        &self.inner.config
    }

    /// Snapshot of the watchdog state
    pub fn state(&self) -> WatchdogState {
        self.inner.watchdog.borrow().state().clone()
    }

    /// Feed one signal through the watchdog and carry out its effects
    pub fn dispatch(&self, signal: Signal) {
        let effects = self.inner.watchdog.borrow_mut().handle(signal);
        apply_effects(self, effects);
    }

    /// Start ticking and listening; dropping the handle stops both
    pub fn install(&self) -> Result<SessionWatch, FrontendError> {
        let document = dom::document().ok_or(FrontendError::NoDocument)?;
        let timing = &self.inner.config.timing;
        let period = u32::try_from(timing.poll_interval_ms).map_err(|_| {
            CoreError::invalid_config(format!(
                "timing.poll_interval_ms: {} does not fit a browser timer",
                timing.poll_interval_ms
            ))
        })?;
        let mut listeners = Vec::with_capacity(ActivityKind::ALL.len() + 1);

        // Interactions with the stay-logged-in button are left to its click
        // handler, so one press sends one keep-alive.
        let markup = &self.inner.config.markup;
        let button = dom::element_by_id(&markup.stay_logged_in_id);

        for kind in ActivityKind::ALL {
            let driver = self.clone();
            let button = button.clone();
            listeners.push(EventListener::new_with_options(
                &document,
                kind.event_type(),
                EventListenerOptions::run_in_capture_phase(),
                move |event| {
                    if button
                        .as_ref()
                        .is_some_and(|button| dom::event_within(button, event))
                    {
                        return;
                    }
                    driver.dispatch(Signal::Activity(kind));
                },
            ));
        }

        if let Some(button) = button {
            let driver = self.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                driver.dispatch(Signal::StayLoggedIn);
            }));
        }

        let driver = self.clone();
        let interval = Interval::new(period, move || driver.dispatch(Signal::Tick));

        info!(
            lifetime_ms = timing.session_lifetime_ms,
            warning_lead_ms = timing.warning_lead_ms,
            poll_interval_ms = timing.poll_interval_ms,
            "Session watchdog started"
        );

        Ok(SessionWatch {
            interval,
            listeners,
        })
    }
}

impl<C: Clock + 'static, K: KeepAlive + 'static> SessionHost for SessionDriver<C, K> {
    fn show_warning(&self) {
        dom::show_modal(&self.inner.config.markup.warning_modal_id);
    }

    fn hide_warning(&self) {
        dom::hide_modal(&self.inner.config.markup.warning_modal_id);
    }

    fn update_countdown(&self, seconds: u64) {
        dom::set_countdown(&self.inner.config.markup.countdown_id, seconds);
    }

    fn send_keep_alive(&self) {
        let driver = self.clone();
        spawn_local(async move {
            let outcome = driver.inner.keep_alive.ping().await;
            driver.dispatch(Signal::KeepAliveSettled(outcome));
        });
    }

    fn navigate(&self, destination: Destination) {
        let path = destination.path(&self.inner.config.endpoints);
        info!(path, "Leaving page, session ended");
        dom::navigate(path);
    }
}

/// Live timer and listeners of an installed driver
pub struct SessionWatch {
    interval: Interval,
    listeners: Vec<EventListener>,
}

impl SessionWatch {
    /// Keep everything running for the rest of the page's life
    pub fn forget(self) {
        let Self {
            interval,
            listeners,
        } = self;
        let _ = interval.forget();
        for listener in listeners {
            listener.forget();
        }
    }
}
