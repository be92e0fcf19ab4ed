//! Notice banner auto-dismissal rules.

/// Id of the server-rendered notice banner.
pub const BANNER_ELEMENT_ID: &str = "message-banner";

/// Delay before the banner hides itself.
pub const DISMISS_DELAY_MS: u32 = 10_000;

/// Inline `display` value applied when the banner hides.
pub const HIDDEN_DISPLAY: &str = "none";

/// What to do with the banner once the page is ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerDismissal {
    /// No banner on this page; nothing is scheduled.
    Skip,
    /// Hide the banner once, after the given delay in milliseconds.
    HideAfter(u32),
}

/// Decide whether a one-shot hide timer is needed.
#[must_use]
pub const fn plan_dismissal(banner_present: bool, delay_ms: u32) -> BannerDismissal {
    if banner_present {
        BannerDismissal::HideAfter(delay_ms)
    } else {
        BannerDismissal::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_banner_schedules_nothing() {
        assert_eq!(plan_dismissal(false, DISMISS_DELAY_MS), BannerDismissal::Skip);
    }

    #[test]
    fn present_banner_hides_after_full_delay() {
        assert_eq!(
            plan_dismissal(true, DISMISS_DELAY_MS),
            BannerDismissal::HideAfter(10_000)
        );
    }
}
