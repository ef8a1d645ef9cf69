//! Not-found page for unknown routes and hidden or missing projects.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::page_title;

/// Renders the not-found message. During SSR it also sets the response
/// status to 404.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=page_title("Not Found")/>
        <section class="hero not-found">
            <div class="container hero__inner">
                <span class="eyebrow eyebrow--accent">"404"</span>
                <h1 class="display display--page">"Page not found."</h1>
                <p class="lead">"The page you are looking for does not exist or is not public yet."</p>
                <a class="arrow-link" href="/work">"← Back to all projects"</a>
            </div>
        </section>
    }
}
