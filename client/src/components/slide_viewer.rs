//! Inline slide deck viewer with keyboard, arrow, dot, and swipe navigation.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::gallery::{Gallery, GalleryInput};
use crate::util::swipe::SwipeTracker;

/// Renders nothing for an empty deck. Escape is ignored; the viewer has no
/// closed state.
#[component]
pub fn SlideViewer(slides: &'static [&'static str], #[prop(default = "Slide")] alt: &'static str) -> impl IntoView {
    let Some(initial) = Gallery::from_sources(slides, alt, 0) else {
        return ().into_any();
    };
    let len = initial.len();
    let gallery = RwSignal::new(initial);
    let swipe = StoredValue::new(SwipeTracker::default());

    let apply = move |input: GalleryInput| {
        gallery.update(|g| {
            g.apply(input);
        });
    };

    let on_key = move |ev: leptos::ev::KeyboardEvent| match GalleryInput::from_key(&ev.key()) {
        Some(GalleryInput::Close) | None => {}
        Some(input) => {
            ev.prevent_default();
            apply(input);
        }
    };

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
                apply(input);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let slide = move || {
        gallery.with(|g| {
            let image = g.current().clone();
            let class = format!("slide-viewer__image {}", g.direction().css_class());
            view! { <img class=class src=image.src alt=image.alt loading="lazy"/> }
        })
    };

    let controls = (len > 1).then(|| {
        let dots = (0..len)
            .map(|i| {
                view! {
                    <button
                        class="slide-viewer__dot"
                        class:slide-viewer__dot--active=move || gallery.with(|g| g.index() == i)
                        aria-label=format!("Go to slide {}", i + 1)
                        on:click=move |_| gallery.update(|g| g.go_to(i))
                    ></button>
                }
            })
            .collect_view();
        view! {
            <button
                class="slide-viewer__arrow slide-viewer__arrow--prev"
                aria-label="Previous slide"
                on:click=move |_| apply(GalleryInput::Previous)
            >
                "‹"
            </button>
            <button
                class="slide-viewer__arrow slide-viewer__arrow--next"
                aria-label="Next slide"
                on:click=move |_| apply(GalleryInput::Next)
            >
                "›"
            </button>
            <div class="slide-viewer__bar">
                <span class="slide-viewer__counter">{move || gallery.with(Gallery::position_label)}</span>
                <div class="slide-viewer__dots">{dots}</div>
            </div>
        }
    });

    view! {
        <div
            class="slide-viewer"
            tabindex="0"
            on:keydown=on_key
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
            on:touchcancel=move |_| swipe.update_value(SwipeTracker::cancel)
        >
            <div class="slide-viewer__stage">{slide}</div>
            {controls}
        </div>
    }
    .into_any()
}
