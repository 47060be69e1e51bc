//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    about::About, assist::Assist, background::Background, chat_widget::ChatWidget, contact::Contact, hero::Hero,
    pointer_trail::PointerGlow, portfolio::Portfolio, services::Services, social::SocialLink,
    testimonials::Testimonials,
};
use crate::config::SiteConfig;
use crate::content;
use crate::state::launch::LaunchState;

/// Root application component.
///
/// Owns the launch flag and provides it, the site config, and the assist
/// client to every component. Before launch only the hero and the floating
/// widgets are mounted; the content sections mount on the first launch and
/// stay mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let launch = RwSignal::new(LaunchState::default());

    provide_context(launch);
    provide_context::<Assist>(Assist::new(&config.genai));
    provide_context(config);

    view! {
        <Title text=content::SITE_TITLE/>

        <Background/>
        <PointerGlow/>

        <main class="page">
            <Hero/>
            <Show when=move || launch.get().is_launched()>
                <About/>
                <Services/>
                <Portfolio/>
                <Testimonials/>
                <Contact/>
            </Show>
        </main>

        <SocialLink/>
        <ChatWidget/>
    }
}
