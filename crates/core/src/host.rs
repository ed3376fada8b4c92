//! Host seam: the platform side that carries out watchdog effects

use crate::effect::{Destination, Effect};

/// Platform operations the watchdog relies on
///
/// Every UI method must degrade to a no-op when its element is missing.
/// `send_keep_alive` must not block; its outcome comes back later as a
/// [`Signal::KeepAliveSettled`](crate::Signal::KeepAliveSettled).
pub trait SessionHost {
    fn show_warning(&self);
    fn hide_warning(&self);
    fn update_countdown(&self, seconds: u64);
    fn send_keep_alive(&self);
    fn navigate(&self, destination: Destination);
}

/// Carry out a batch of effects in order
pub fn apply_effects<H, I>(host: &H, effects: I)
where
    H: SessionHost + ?Sized,
    I: IntoIterator<Item = Effect>,
{
    for effect in effects {
        match effect {
            Effect::ShowWarning => host.show_warning(),
            Effect::HideWarning => host.hide_warning(),
            Effect::UpdateCountdown(seconds) => host.update_countdown(seconds),
            Effect::SendKeepAlive => host.send_keep_alive(),
            Effect::Navigate(destination) => host.navigate(destination),
        }
    }
}
