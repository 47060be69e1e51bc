//! Soft glow that follows the mouse.

use leptos::prelude::*;

use crate::state::pointer::PointerTrail;

/// Fixed-position glow translated to the last pointer position. Hidden until
/// the pointer first moves.
#[component]
pub fn PointerGlow() -> impl IntoView {
    let trail = RwSignal::new(PointerTrail::default());

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            trail.update(|t| t.track(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            class="pointer-glow"
            class:pointer-glow--visible=move || trail.with(PointerTrail::visible)
            style:transform=move || trail.with(PointerTrail::transform)
            style:width=format!("{}px", PointerTrail::GLOW_SIZE_PX)
            style:height=format!("{}px", PointerTrail::GLOW_SIZE_PX)
            aria-hidden="true"
        ></div>
    }
}
