//! Timers and scrolling. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Both helpers are fire-and-forget: a delayed callback cannot be cancelled,
//! so callers make their callbacks idempotent (see
//! [`crate::state::contact::ContactForm::clear_notice`] and
//! [`crate::state::chat::ChatState::greet`]). Native builds never run them.

use std::time::Duration;

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Run `f` once after `delay`.
///
/// Returns `false` when there is no browser to schedule on.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) -> bool {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(crate::config::Timing::millis(delay), f).forget();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        drop((delay, f));
        false
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport.
///
/// Returns whether the element was found.
pub fn scroll_to_id(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::warn!("scroll target #{id} not found");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("scroll to #{id} skipped outside the browser");
        false
    }
}
