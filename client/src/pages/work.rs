//! Work index with category filter pills and a year sort toggle.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use content::{Category, SortOrder, listing, visible_projects};

use crate::components::project_card::ProjectCard;
use crate::components::reveal::Reveal;
use crate::pages::page_title;

const DESCRIPTION: &str = "All projects spanning product design, embedded systems, computer vision, and spatial computing.";

#[component]
pub fn WorkPage() -> impl IntoView {
    let category = RwSignal::new(Category::All);
    let order = RwSignal::new(SortOrder::Newest);
    let all = visible_projects();
    let shown = Memo::new(move |_| listing(&all, category.get(), order.get()));

    let pills = Category::ALL
        .iter()
        .map(|&pill| {
            view! {
                <button
                    class="pill"
                    class:pill--active=move || category.get() == pill
                    on:click=move |_| category.set(pill)
                >
                    {pill.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <Title text=page_title("Work")/>
        <Meta name="description" content=DESCRIPTION/>

        <section class="hero">
            <div class="container hero__inner">
                <div class="eyebrow-row">
                    <span class="eyebrow-row__rule"></span>
                    <span class="eyebrow eyebrow--accent">"Work"</span>
                </div>
                <h1 class="display">"All projects."</h1>
                <p class="lead">"Product design, embedded systems, computer vision, and spatial computing."</p>
            </div>
        </section>

        <section class="section section--tight">
            <div class="container">
                <Reveal class="filter-bar">
                    <div class="filter-bar__pills">{pills}</div>
                    <div class="filter-bar__sort">
                        <span class="eyebrow">"Sort"</span>
                        <button
                            class="sort-toggle"
                            class:sort-toggle--oldest=move || order.get() == SortOrder::Oldest
                            on:click=move |_| order.update(|o| *o = o.toggled())
                        >
                            {move || order.get().label()}
                            <span class="sort-toggle__chevron">"▾"</span>
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="card-grid">
                    {move || {
                        shown.get().into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()
                    }}
                </div>
                <Show when=move || shown.with(Vec::is_empty)>
                    <div class="empty-state">
                        <p class="lead">"No projects match this filter."</p>
                        <button class="empty-state__clear" on:click=move |_| category.set(Category::All)>
                            "Clear filter"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}
