//! Page-wide particle canvas behind all content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounts a `<canvas>` and hands it to the `canvas` crate's
//! [`AnimationLoop`](canvas::host::AnimationLoop), observing `<body>` so the
//! field grows with the page as sections are revealed. The loop is owned by a
//! local `StoredValue` and dropped on cleanup, which cancels the pending frame
//! and detaches its observers.

use leptos::prelude::*;

#[component]
pub fn Background() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let running = StoredValue::new_local(None::<canvas::host::AnimationLoop>);

        Effect::new(move || {
            let Some(canvas_el) = canvas_ref.get() else {
                return;
            };
            if running.with_value(Option::is_some) {
                return;
            }
            let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
                log::warn!("background: no document body to observe");
                return;
            };
            match canvas::host::AnimationLoop::start(canvas_el, body.into()) {
                Ok(animation) => {
                    log::debug!("background: {} particles", animation.particle_count());
                    running.set_value(Some(animation));
                }
                Err(err) => log::warn!("background animation unavailable: {err:?}"),
            }
        });

        on_cleanup(move || {
            if let Some(Some(animation)) = running.try_update_value(Option::take) {
                animation.stop();
            }
        });
    }

    view! { <canvas class="background" node_ref=canvas_ref aria-hidden="true"></canvas> }
}
