//! Floating Instagram link, bottom-left.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn SocialLink() -> impl IntoView {
    view! {
        <a
            class="floating floating--left social-link"
            href=content::INSTAGRAM_URL
            target="_blank"
            rel="noopener noreferrer"
            title="Visit our Instagram"
            aria-label="Visit our Instagram"
        >
            <svg class="social-link__icon" viewBox="0 0 24 24" width="24" height="24" aria-hidden="true">
                <rect x="3" y="3" width="18" height="18" rx="5" fill="none" stroke="currentColor" stroke-width="2"/>
                <circle cx="12" cy="12" r="4" fill="none" stroke="currentColor" stroke-width="2"/>
                <circle cx="17.5" cy="6.5" r="1.2" fill="currentColor"/>
            </svg>
        </a>
    }
}
