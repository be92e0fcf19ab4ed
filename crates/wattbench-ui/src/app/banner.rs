//! Notice banner timer.

use crate::core::banner::{BannerDismissal, HIDDEN_DISPLAY, plan_dismissal};
use gloo::console;
use gloo::timers::callback::Timeout;
use web_sys::HtmlElement;

/// Schedule the one-shot hide for `banner`, if there is one.
///
/// The returned timer cancels on drop; the caller decides how long it lives.
pub(crate) fn schedule_banner_dismissal(
    banner: Option<HtmlElement>,
    delay_ms: u32,
) -> Option<Timeout> {
    match (plan_dismissal(banner.is_some(), delay_ms), banner) {
        (BannerDismissal::HideAfter(delay), Some(banner)) => {
            Some(Timeout::new(delay, move || hide(&banner)))
        }
        _ => None,
    }
}

fn hide(banner: &HtmlElement) {
    if let Err(err) = banner.style().set_property("display", HIDDEN_DISPLAY) {
        console::error!("banner hide failed", err);
    }
}
