//! Landing page: hero over the dot grid, featured work, about preview, contact.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use content::featured_projects;
use content::profile::{EMAIL, LINKEDIN_URL, OWNER, SITE_DESCRIPTION, SKILL_HIGHLIGHTS, TAGLINE};

use crate::components::dot_grid::DotGrid;
use crate::components::project_showcase::ProjectShowcase;
use crate::components::reveal::Reveal;
use crate::components::tilt_card::TiltCard;
use crate::pages::page_title;
use crate::util::tilt::TiltConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let projects = featured_projects();
    let count = format!("({:02})", projects.len());
    let showcases = projects
        .into_iter()
        .enumerate()
        .map(|(index, project)| view! { <ProjectShowcase project=project index=index/> })
        .collect_view();

    let skill_tilt = TiltConfig { max_rotation: 6.0, glare_opacity: 0.1, ..TiltConfig::default() };
    let skills = SKILL_HIGHLIGHTS
        .iter()
        .map(|&(label, items)| {
            view! {
                <TiltCard config=skill_tilt>
                    <p class="eyebrow eyebrow--accent">{label}</p>
                    <p class="skill-card__items">{items}</p>
                </TiltCard>
            }
        })
        .collect_view();

    view! {
        <Title text=page_title(TAGLINE)/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <section class="hero hero--full">
            <DotGrid class="hero__grid"/>
            <div class="container hero__inner">
                <div class="eyebrow-row">
                    <span class="eyebrow-row__rule"></span>
                    <span class="eyebrow eyebrow--accent">{OWNER}</span>
                </div>
                <div class="display-stack">
                    <Reveal delay=0.3>
                        <h1 class="display">"I design products"</h1>
                    </Reveal>
                    <Reveal delay=0.45>
                        <h1 class="display">"and write the code"</h1>
                    </Reveal>
                    <Reveal delay=0.6>
                        <h1 class="display display--muted">"that powers them."</h1>
                    </Reveal>
                </div>
                <Reveal delay=1.0 class="hero__sub">
                    <p class="lead">
                        "Georgia Tech senior in Industrial Design + Computer Science. Building at the "
                        "intersection of hardware, AI, and spatial computing."
                    </p>
                    <a class="hero__jump" href="#work">"Selected Work ↓"</a>
                </Reveal>
            </div>
        </section>

        <section id="work" class="section">
            <div class="container">
                <Reveal>
                    <div class="section__head">
                        <div>
                            <span class="eyebrow">"Selected Work"</span>
                            <h2 class="section__title">"Projects"</h2>
                        </div>
                        <span class="section__count">{count}</span>
                    </div>
                    <div class="divider"></div>
                </Reveal>
                <div class="showcase-list">{showcases}</div>
            </div>
        </section>

        <section class="section">
            <div class="container about-preview">
                <Reveal class="about-preview__lead">
                    <span class="eyebrow">"About"</span>
                    <h2 class="section__title">"Design-trained engineer."</h2>
                </Reveal>
                <div class="about-preview__body">
                    <Reveal delay=0.15>
                        <p class="lead">
                            "I hold dual degrees in Industrial Design and Computer Science at Georgia Tech. "
                            "I believe the best products come from people who can sketch the form factor and "
                            "write the firmware that drives it."
                        </p>
                    </Reveal>
                    <Reveal delay=0.3>
                        <div class="skill-grid">{skills}</div>
                    </Reveal>
                    <Reveal delay=0.4>
                        <a class="arrow-link" href="/about">"More about me →"</a>
                    </Reveal>
                </div>
            </div>
        </section>

        <ContactCta/>
    }
}

/// Closing call to action, shared with the about page.
#[component]
pub fn ContactCta() -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="divider"></div>
                <div class="cta">
                    <Reveal>
                        <span class="eyebrow">"Get in touch"</span>
                    </Reveal>
                    <Reveal delay=0.1>
                        <h2 class="cta__title">"Let's build something together."</h2>
                    </Reveal>
                    <Reveal delay=0.2>
                        <p class="lead">
                            "Targeting creative technologist, design engineer, and product design engineer "
                            "roles for 2026."
                        </p>
                    </Reveal>
                    <Reveal delay=0.3>
                        <div class="cta__actions">
                            <a class="button button--solid" href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                            <a class="button button--outline" href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                                "LinkedIn"
                            </a>
                        </div>
                    </Reveal>
                </div>
                <div class="divider"></div>
            </div>
        </section>
    }
}
