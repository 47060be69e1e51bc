//! "About us" section; the scroll target after launch.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=content::FIRST_SECTION_ID class="section about">
            <h2 class="section__title">"About " {content::BRAND}</h2>
            {content::ABOUT_PARAGRAPHS
                .iter()
                .map(|text| view! { <p class="about__text">{*text}</p> })
                .collect_view()}
        </section>
    }
}
