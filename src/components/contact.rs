//! "Let's Work Together" contact form with the keyword brief generator.

use leptos::prelude::*;

use super::assist::{Assist, spawn_assist};
use crate::config::SiteConfig;
use crate::net::assist::Persona;
use crate::state::contact::{BriefStart, ContactForm, Field, NoticeKind};
use crate::util::browser;

#[component]
pub fn Contact() -> impl IntoView {
    let assist = expect_context::<Assist>();
    let timing = expect_context::<SiteConfig>().timing;
    let form = RwSignal::new(ContactForm::default());

    let clear_later = move |seq: u64| {
        browser::after(timing.notice, move || form.update(|f| f.clear_notice(seq)));
    };

    let on_generate = move |_| match form.try_update(ContactForm::begin_brief) {
        Some(BriefStart::Send { keywords, ticket }) => {
            log::debug!("brief {ticket}: generating from {} keyword chars", keywords.len());
            spawn_assist(assist.clone(), Persona::ProjectBrief, keywords, move |reply| {
                if let Some(Some(seq)) = form.try_update(|f| f.finish_brief(ticket, reply)) {
                    clear_later(seq);
                }
            });
        }
        Some(BriefStart::Rejected { notice }) => clear_later(notice),
        Some(BriefStart::Busy) | None => {}
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Ok(seq) | Err(seq)) = form.try_update(ContactForm::submit) {
            clear_later(seq);
        }
    };

    let bind = move |field: Field| move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let generating = move || form.with(ContactForm::is_generating);

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Let’s Work Together"</h2>
            <form class="contact__form" on:submit=on_submit novalidate=true>
                <input
                    class="contact__input"
                    type="text"
                    placeholder="Your Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=bind(Field::Name)
                />
                <input
                    class="contact__input"
                    type="email"
                    placeholder="Your Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=bind(Field::Email)
                />
                <div class="contact__brief-row">
                    <input
                        class="contact__input contact__keywords"
                        type="text"
                        placeholder="Keywords, e.g. coffee, rebrand, Instagram"
                        prop:value=move || form.with(|f| f.keywords.clone())
                        on:input=bind(Field::Keywords)
                    />
                    <button
                        class="btn btn--ghost contact__generate"
                        type="button"
                        on:click=on_generate
                        disabled=generating
                    >
                        {move || if generating() { "Generating…" } else { "✨ Generate brief" }}
                    </button>
                </div>
                <textarea
                    class="contact__input contact__description"
                    placeholder="Tell us about your project..."
                    rows="5"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=bind(Field::Description)
                ></textarea>
                {move || {
                    form.with(|f| f.notice().cloned())
                        .map(|notice| {
                            let class = match notice.kind {
                                NoticeKind::Error => "contact__notice contact__notice--error",
                                NoticeKind::Success => "contact__notice contact__notice--success",
                            };
                            view! { <p class=class role="status">{notice.text}</p> }
                        })
                }}
                <button class="btn btn--primary contact__submit" type="submit">
                    "Send Message"
                </button>
            </form>
        </section>
    }
}
