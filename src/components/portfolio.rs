//! Portfolio grid of past projects.

use leptos::prelude::*;

use crate::content::{self, Project};

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="section portfolio">
            <h2 class="section__title">"Selected Work"</h2>
            <div class="portfolio__grid">
                {content::PORTFOLIO.iter().map(|project| view! { <ProjectCard project=*project/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="card portfolio__card">
            <span class="portfolio__category">{project.category}</span>
            <h3 class="portfolio__client">{project.client}</h3>
            <p class="portfolio__outcome">{project.outcome}</p>
        </article>
    }
}
