//! Work-grid card for one project.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use content::Project;

/// Tags shown on a card; the detail page lists the rest.
const CARD_TAGS: usize = 4;

/// Links to the case study, or renders a dimmed "Coming Soon" card with no
/// link for hidden projects.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let coming_soon = !project.visible;
    let media = if project.thumbnail.is_empty() {
        view! {
            <span class="project-card__placeholder">{if coming_soon { "Coming Soon" } else { "No Image" }}</span>
        }
        .into_any()
    } else {
        view! { <img class="project-card__image" src=project.thumbnail alt=project.title loading="lazy"/> }.into_any()
    };
    let overlay = if coming_soon {
        view! { <span class="project-card__badge">"Coming Soon"</span> }.into_any()
    } else {
        view! { <span class="project-card__cta">"View Case Study →"</span> }.into_any()
    };
    let tags = project
        .tags
        .iter()
        .take(CARD_TAGS)
        .map(|tag| view! { <span class="tag tag--accent">{*tag}</span> })
        .collect_view();

    let card = view! {
        <article class="project-card" class:project-card--soon=coming_soon>
            <div class="project-card__media">{media} {overlay}</div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="tag-row">{tags}</div>
            </div>
        </article>
    };

    if coming_soon {
        card.into_any()
    } else {
        view! { <a class="project-card__link" href=format!("/work/{}", project.slug)>{card}</a> }.into_any()
    }
}
