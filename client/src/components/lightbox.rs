//! Site-wide image lightbox overlay.
//!
//! DESIGN
//! ======
//! Reads `RwSignal<LightboxState>` from context, so any component can open
//! it by updating the signal. Keyboard input is taken from the window while
//! the overlay is open; clicking the backdrop closes it. Horizontal swipes
//! step through the gallery the same way the inline slide viewer does.

use leptos::prelude::*;

use crate::state::gallery::{Gallery, GalleryInput};
use crate::state::lightbox::LightboxState;
use crate::util::swipe::SwipeTracker;

#[component]
pub fn Lightbox() -> impl IntoView {
    let state = expect_context::<RwSignal<LightboxState>>();

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if !state.with_untracked(LightboxState::is_open) {
            return;
        }
        if let Some(input) = GalleryInput::from_key(&ev.key()) {
            ev.prevent_default();
            state.update(|s| s.apply(input));
        }
    });
    on_cleanup(move || handle.remove());

    let close = move || state.update(LightboxState::close);
    let swipe = StoredValue::new(SwipeTracker::default());

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some((x, y)) = crate::util::swipe::touch_point(&ev, false) {
                swipe.update_value(|s| s.begin(x, y));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some((x, y)) = crate::util::swipe::touch_point(&ev, true) else {
                swipe.update_value(SwipeTracker::cancel);
                return;
            };
            if let Some(input) = swipe.try_update_value(|s| s.end(x, y)).flatten() {
                state.update(|s| s.apply(input));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <Show when=move || state.with(LightboxState::is_open)>
            <div
                class="lightbox"
                role="dialog"
                aria-modal="true"
                on:click=move |_| close()
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
                on:touchcancel=move |_| swipe.update_value(SwipeTracker::cancel)
            >
                <button
                    class="lightbox__close"
                    aria-label="Close"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        close();
                    }
                >
                    "✕"
                </button>
                {move || state.with(|s| s.gallery().cloned()).map(|gallery| view! { <LightboxGallery gallery=gallery state=state/> })}
            </div>
        </Show>
    }
}

#[component]
fn LightboxGallery(gallery: Gallery, state: RwSignal<LightboxState>) -> impl IntoView {
    let image = gallery.current().clone();
    let figure_class = format!("lightbox__figure {}", gallery.direction().css_class());
    let step = move |ev: leptos::ev::MouseEvent, input: GalleryInput| {
        ev.stop_propagation();
        state.update(|s| s.apply(input));
    };
    let controls = gallery.can_navigate().then(|| {
        let current = gallery.index();
        let dots = gallery
            .images()
            .iter()
            .enumerate()
            .map(|(i, image)| {
                view! {
                    <button
                        class="lightbox__dot"
                        class:lightbox__dot--active={i == current}
                        aria-label=format!("Show {}", image.alt)
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            state.update(|s| s.go_to(i));
                        }
                    ></button>
                }
            })
            .collect_view();
        view! {
            <button
                class="lightbox__arrow lightbox__arrow--prev"
                aria-label="Previous image"
                on:click=move |ev| step(ev, GalleryInput::Previous)
            >
                "‹"
            </button>
            <button
                class="lightbox__arrow lightbox__arrow--next"
                aria-label="Next image"
                on:click=move |ev| step(ev, GalleryInput::Next)
            >
                "›"
            </button>
            <div class="lightbox__footer">
                <span class="lightbox__counter">{gallery.position_label()}</span>
                <div class="lightbox__dots">{dots}</div>
            </div>
        }
    });

    view! {
        <figure class=figure_class on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()>
            <img class="lightbox__image" src=image.src alt=image.alt/>
        </figure>
        {controls}
    }
}
