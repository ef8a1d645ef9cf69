//! Case-study page at `/work/{slug}`.
//!
//! Only visible projects are routable; unknown and hidden slugs fall through
//! to the not-found page with a 404 status.

#[cfg(test)]
#[path = "work_detail_test.rs"]
mod work_detail_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use content::{Project, get_project, next_project};

use crate::components::reveal::Reveal;
use crate::components::section_view::SectionView;
use crate::pages::not_found::NotFoundPage;
use crate::pages::page_title;
use crate::state::lightbox::LightboxState;

/// The routable project for `slug`, if any.
pub fn routable_project(slug: &str) -> Option<&'static Project> {
    get_project(slug).filter(|project| project.visible)
}

#[component]
pub fn WorkDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = Memo::new(move |_| params.with(|p| p.get("slug")).and_then(|slug| routable_project(&slug)));

    move || match project.get() {
        Some(project) => view! { <CaseStudy project=project/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn CaseStudy(project: &'static Project) -> impl IntoView {
    let meta = project
        .meta_rows()
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="case-meta__item">
                    <p class="eyebrow">{label}</p>
                    <p class="case-meta__value">{value}</p>
                </div>
            }
        })
        .collect_view();
    let tags = project.tags.iter().map(|tag| view! { <span class="tag tag--accent">{*tag}</span> }).collect_view();
    let sections = project.sections.iter().map(|section| view! { <SectionView section=section/> }).collect_view();
    let next = next_project(project.slug).filter(|next| next.slug != project.slug).map(|next| {
        view! {
            <a class="next-project" href=format!("/work/{}", next.slug)>
                <span class="eyebrow">"Next Project"</span>
                <span class="next-project__title">{next.title}" →"</span>
            </a>
        }
    });
    let has_hero = !project.hero_image.is_empty();
    let hero = has_hero.then(|| view! { <img class="case-hero__image" src=project.hero_image alt=project.title/> });
    let lightbox = expect_context::<RwSignal<LightboxState>>();
    let expand = has_hero.then(|| {
        view! {
            <button
                class="case-hero__expand"
                on:click=move |_: leptos::ev::MouseEvent| {
                    lightbox.update(|state| state.open_single(project.hero_image, project.title));
                }
            >
                "View full image ↗"
            </button>
        }
    });

    view! {
        <Title text=page_title(project.title)/>
        <Meta name="description" content=project.description/>

        <article>
            <section class="case-hero">
                <div class="case-hero__backdrop">{hero} <div class="case-hero__fade"></div></div>
                <div class="container case-hero__inner">
                    <a class="back-link" href="/work">"← Back to Work"</a>
                    {expand}
                    <Reveal delay=0.1>
                        <h1 class="display display--page">{project.title}</h1>
                    </Reveal>
                    <Reveal delay=0.2>
                        <p class="lead">{project.summary}</p>
                    </Reveal>
                    <Reveal delay=0.3 class="case-meta">{meta}</Reveal>
                    <Reveal delay=0.4 class="tag-row">{tags}</Reveal>
                    {project.link.map(|href| view! {
                        <a class="arrow-link" href=href target="_blank" rel="noopener noreferrer">"View project →"</a>
                    })}
                </div>
            </section>

            <section class="section">
                <div class="container case-sections">{sections}</div>
            </section>

            <section class="section section--bordered">
                <div class="container case-footer">
                    {next}
                    <a class="back-link" href="/work">"← Back to all projects"</a>
                </div>
            </section>
        </article>
    }
}
