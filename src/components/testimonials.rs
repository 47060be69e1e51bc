//! Client ratings.

use leptos::prelude::*;

use crate::content::{self, Rating};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="ratings" class="section ratings">
            <h2 class="section__title">"Client Ratings"</h2>
            <div class="ratings__grid">
                {content::RATINGS.iter().map(|rating| view! { <RatingCard rating=*rating/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn RatingCard(rating: Rating) -> impl IntoView {
    view! {
        <div class="card ratings__card">
            <p class="ratings__name">{rating.name}</p>
            <div class="ratings__stars" role="img" aria-label=rating.label()>
                {rating.stars()}
            </div>
        </div>
    }
}
