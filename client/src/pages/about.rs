//! About page: biography, education, experience, skills.

use leptos::prelude::*;
use leptos_meta::Title;

use content::profile::{BIO, EDUCATION, EXPERIENCE, SKILLS};

use crate::components::reveal::Reveal;
use crate::pages::home::ContactCta;
use crate::pages::page_title;

/// Stagger between consecutive experience entries, in seconds.
const STAGGER_S: f64 = 0.1;

#[component]
pub fn AboutPage() -> impl IntoView {
    let bio = BIO.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view();

    let experience = EXPERIENCE
        .iter()
        .zip(0_u32..)
        .map(|(entry, i)| {
            view! {
                <Reveal delay={f64::from(i) * STAGGER_S}>
                    <div class="timeline__entry">
                        <div class="timeline__head">
                            <h3 class="timeline__title">{entry.company}</h3>
                            <span class="timeline__period">{entry.period}</span>
                        </div>
                        <p class="timeline__role">{entry.role}</p>
                        <p class="timeline__description">{entry.description}</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    let skills = SKILLS
        .iter()
        .map(|group| {
            view! {
                <Reveal class="skills__group">
                    <h3 class="eyebrow eyebrow--accent">{group.category}</h3>
                    <ul class="skills__list">
                        {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <Title text=page_title("About")/>

        <section class="hero">
            <div class="container hero__inner">
                <p class="eyebrow eyebrow--accent">"About"</p>
                <h1 class="display display--page">"I think in sketches and ship in code."</h1>
                <Reveal delay=0.3 class="prose">{bio}</Reveal>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section__title">"Education"</h2>
                    <div class="card education">
                        <div class="timeline__head">
                            <h3 class="timeline__title">{EDUCATION.school}</h3>
                            <span class="timeline__period">{EDUCATION.period}</span>
                        </div>
                        <p class="timeline__role">{EDUCATION.degree}</p>
                        <p class="timeline__description">{EDUCATION.detail}</p>
                    </div>
                </Reveal>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section__title">"Experience"</h2>
                </Reveal>
                <div class="timeline">{experience}</div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section__title">"Skills"</h2>
                </Reveal>
                <div class="skills">{skills}</div>
            </div>
        </section>

        <ContactCta/>
    }
}
