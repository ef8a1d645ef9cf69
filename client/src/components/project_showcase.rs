//! Large numbered project feature used on the home page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use content::Project;

use crate::components::reveal::Reveal;

const SHOWCASE_TAGS: usize = 3;

#[component]
pub fn ProjectShowcase(project: &'static Project, index: usize) -> impl IntoView {
    let coming_soon = !project.visible;
    let media = if coming_soon || project.thumbnail.is_empty() {
        view! { <span class="showcase__placeholder">"Coming Soon"</span> }.into_any()
    } else {
        view! { <img class="showcase__image" src=project.thumbnail alt=project.title loading="lazy"/> }.into_any()
    };
    let tags = project
        .tags
        .iter()
        .take(SHOWCASE_TAGS)
        .map(|tag| view! { <span class="tag">{*tag}</span> })
        .collect_view();

    let body = view! {
        <div class="showcase" class:showcase--soon=coming_soon>
            <div class="showcase__media">{media}</div>
            <div class="showcase__info">
                <div class="showcase__text">
                    <div class="showcase__heading">
                        <span class="showcase__index">{format!("{:02}", index + 1)}</span>
                        <h3 class="showcase__title">{project.title}</h3>
                    </div>
                    <p class="showcase__description">{project.description}</p>
                </div>
                <div class="tag-row showcase__tags">{tags}</div>
            </div>
        </div>
    };

    let body = if coming_soon {
        body.into_any()
    } else {
        view! { <a class="showcase__link" href=format!("/work/{}", project.slug)>{body}</a> }.into_any()
    };

    view! { <Reveal>{body}</Reveal> }
}
