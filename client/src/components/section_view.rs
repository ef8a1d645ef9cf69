//! Renders one case-study section by kind.
//!
//! Prose comes first, then the kind-specific body, then any image grid and
//! slide deck attached to the section.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use content::{Iteration, Section, SectionBody};

use crate::components::code_block::CodeBlock;
use crate::components::reveal::Reveal;
use crate::components::slide_viewer::SlideViewer;
use crate::state::gallery::Gallery;
use crate::state::lightbox::LightboxState;

#[component]
pub fn SectionView(section: &'static Section) -> impl IntoView {
    let body = match section.body {
        SectionBody::Standard => None,
        SectionBody::Stack { hardware, software } => Some(
            view! {
                <div class="stack">
                    <StackList title="Hardware" items=hardware/>
                    <StackList title="Software" items=software/>
                </div>
            }
            .into_any(),
        ),
        SectionBody::Code { code, language } => Some(view! { <CodeBlock code=code language=language/> }.into_any()),
        SectionBody::Failure { iterations } => Some(view! { <FailureLog iterations=iterations/> }.into_any()),
    };

    view! {
        <Reveal class="case-section">
            <h2 class="case-section__heading">{section.heading}</h2>
            <div class="case-section__content">{section.content}</div>
            {body}
            <ImageGrid images=section.images alt=section.heading/>
            {(!section.slides.is_empty()).then(|| view! {
                <div class="case-section__slides">
                    <SlideViewer slides=section.slides alt=section.heading/>
                </div>
            })}
        </Reveal>
    }
}

/// One column of a stack breakdown. Empty lists render nothing.
#[component]
fn StackList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="stack__column card">
                <h3 class="eyebrow eyebrow--accent">{title}</h3>
                <ul class="stack__list">{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            </div>
        }
    })
}

/// Numbered issue/fix log.
#[component]
fn FailureLog(iterations: &'static [Iteration]) -> impl IntoView {
    let rows = iterations
        .iter()
        .enumerate()
        .map(|(i, iteration)| {
            view! {
                <li class="failure card">
                    <div class="failure__head">
                        <span class="failure__number">{i + 1}</span>
                        <h4 class="failure__version">{iteration.version}</h4>
                    </div>
                    <p class="failure__line">
                        <span class="failure__issue">"Issue: "</span>
                        {iteration.issue}
                    </p>
                    <p class="failure__line">
                        <span class="failure__fix">"Fix: "</span>
                        {iteration.fix}
                    </p>
                </li>
            }
        })
        .collect_view();
    view! { <ol class="failure-log">{rows}</ol> }
}

/// Section images; clicking one opens the lightbox at that image.
#[component]
fn ImageGrid(images: &'static [&'static str], alt: &'static str) -> impl IntoView {
    let lightbox = expect_context::<RwSignal<LightboxState>>();
    (!images.is_empty()).then(|| {
        let tiles = images
            .iter()
            .enumerate()
            .map(|(i, src)| {
                let open = move |_: leptos::ev::MouseEvent| {
                    if let Some(gallery) = Gallery::from_sources(images, alt, i) {
                        lightbox.update(|state| state.open(gallery));
                    }
                };
                view! {
                    <button class="image-grid__tile" aria-label=format!("Open {alt} {}", i + 1) on:click=open>
                        <img class="image-grid__image" src=*src alt=format!("{alt} {}", i + 1) loading="lazy"/>
                    </button>
                }
            })
            .collect_view();
        view! { <div class="image-grid">{tiles}</div> }
    })
}
