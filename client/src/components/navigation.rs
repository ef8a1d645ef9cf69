//! Fixed site header with route links, theme toggle, and mobile menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use content::profile::{EMAIL, OWNER};

use crate::state::ui::{UiState, is_active_link};
use crate::util::dark_mode;

/// `(href, label)` for each primary route.
const LINKS: &[(&str, &str)] = &[("/work", "Work"), ("/about", "About")];

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    // Any route change closes the mobile menu.
    Effect::new(move || {
        pathname.track();
        if ui.with_untracked(|u| u.mobile_menu_open) {
            ui.update(UiState::close_menu);
        }
    });

    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
                return;
            };
            if ui.with_untracked(|u| u.scrolled) != (y > crate::state::ui::SCROLL_THRESHOLD_PX) {
                ui.update(|u| u.set_scroll(y));
            }
        }
    });
    on_cleanup(move || scroll.remove());

    let on_theme = move |_: leptos::ev::MouseEvent| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    let on_menu = move |_: leptos::ev::MouseEvent| ui.update(UiState::toggle_menu);

    let links = move |class: &'static str| {
        LINKS
            .iter()
            .map(|&(href, label)| {
                view! {
                    <a
                        class=class
                        class:nav__link--active=move || pathname.with(|p| is_active_link(href, p))
                        href=href
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };
    let mailto = format!("mailto:{EMAIL}");
    let mailto_menu = mailto.clone();

    view! {
        <header class="nav" class:nav--scrolled=move || ui.with(|u| u.scrolled)>
            <nav class="nav__inner">
                <a class="nav__brand" href="/">{OWNER}</a>
                <div class="nav__links">
                    {links("nav__link")}
                    <a class="button button--accent" href=mailto>"Get in Touch"</a>
                </div>
                <div class="nav__actions">
                    <button
                        class="nav__theme"
                        aria-label="Toggle dark mode"
                        on:click=on_theme
                    >
                        {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="nav__burger"
                        class:nav__burger--open=move || ui.with(|u| u.mobile_menu_open)
                        aria-label="Toggle menu"
                        on:click=on_menu
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
        </header>
        <Show when=move || ui.with(|u| u.mobile_menu_open)>
            <div class="nav__mobile">
                {links("nav__mobile-link")}
                <a class="button button--accent" href=mailto_menu.clone()>"Get in Touch"</a>
            </div>
        </Show>
    }
}
