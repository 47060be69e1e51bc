//! Services grid with on-demand campaign ideas.
//!
//! Each card keeps its own [`ServiceIdea`]; generating on one card never
//! blocks another.

use leptos::prelude::*;

use super::assist::{Assist, spawn_assist};
use crate::content::{self, Service};
use crate::net::assist::Persona;
use crate::state::services::ServiceIdea;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <h2 class="section__title">"Our Services"</h2>
            <div class="services__grid">
                {content::SERVICES.iter().map(|service| view! { <ServiceCard service=*service/> }).collect_view()}
            </div>
        </section>
    }
}

/// One service with a "Generate idea" button.
#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let assist = expect_context::<Assist>();
    let idea = RwSignal::new(ServiceIdea::default());

    let on_generate = move |_| {
        if !idea.try_update(ServiceIdea::begin).unwrap_or(false) {
            return;
        }
        spawn_assist(assist.clone(), Persona::ServiceIdea, service.title.to_owned(), move |reply| {
            idea.update(|s| s.finish(reply.into_text()));
        });
    };

    let pending = move || idea.with(ServiceIdea::is_pending);

    view! {
        <article class="card services__card" class:services__card--pending=pending>
            <h3 class="services__title">{service.title}</h3>
            <p class="services__summary">{service.summary}</p>
            <button class="btn btn--ghost services__generate" on:click=on_generate disabled=pending>
                {move || if pending() { "Thinking…" } else { "✨ Generate idea" }}
            </button>
            {move || {
                idea.with(|s| s.idea().map(str::to_owned))
                    .map(|text| view! { <p class="services__idea">{text}</p> })
            }}
        </article>
    }
}
