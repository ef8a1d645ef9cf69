//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use content::profile::{OWNER, TAGLINE};

use crate::components::{footer::Footer, lightbox::Lightbox, navigation::Navigation};
use crate::pages::{
    about::AboutPage, home::HomePage, not_found::NotFoundPage, work::WorkPage, work_detail::WorkDetailPage,
};
use crate::state::{lightbox::LightboxState, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The theme bootstrap runs before any stylesheet paints so the stored
/// preference applies on first render.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=dark_mode::bootstrap_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and lightbox contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let lightbox = RwSignal::new(LightboxState::default());
    provide_context(ui);
    provide_context(lightbox);

    // The server cannot see the stored theme; sync the toggle once hydrated.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=format!("{OWNER} | {TAGLINE}")/>

        <Router>
            <Navigation/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("work") view=WorkPage/>
                    <Route path=(StaticSegment("work"), ParamSegment("slug")) view=WorkDetailPage/>
                </Routes>
            </main>
            <Footer/>
            <Lightbox/>
        </Router>
    }
}
