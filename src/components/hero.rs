//! Full-height hero with the launch call-to-action.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content;
use crate::state::launch::LaunchState;
use crate::util::browser;

/// Logo, headline, and the button that reveals the rest of the page.
///
/// Only the first click does anything: it flips the shared launch flag and,
/// once the revealed sections have had a moment to lay out, scrolls to the
/// first of them.
#[component]
pub fn Hero() -> impl IntoView {
    let launch = expect_context::<RwSignal<LaunchState>>();
    let timing = expect_context::<SiteConfig>().timing;

    let on_launch = move |_| {
        if !launch.try_update(LaunchState::launch).unwrap_or(false) {
            return;
        }
        log::info!("launch: revealing content sections");
        browser::after(timing.scroll, || {
            browser::scroll_to_id(content::FIRST_SECTION_ID);
        });
    };

    view! {
        <section class="hero">
            <img class="hero__logo" src=content::LOGO_URL alt="Spheremedia Logo"/>
            <h1 class="hero__headline">{content::HEADLINE}</h1>
            <p class="hero__tagline">{content::TAGLINE}</p>
            <button
                class="btn btn--primary hero__cta"
                class:hero__cta--launched=move || launch.get().is_launched()
                on:click=on_launch
            >
                {content::LAUNCH_LABEL}
            </button>
        </section>
    }
}
