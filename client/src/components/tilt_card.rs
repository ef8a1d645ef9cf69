//! Card that tilts toward the pointer with a moving glare highlight.

use leptos::prelude::*;

use crate::util::tilt::{Tilt, TiltConfig};
#[cfg(feature = "hydrate")]
use crate::util::tilt::fraction;

/// Flat under reduced motion. The card eases back to centre on leave.
#[component]
pub fn TiltCard(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = TiltConfig::default())] config: TiltConfig,
) -> impl IntoView {
    let tilt = RwSignal::new(Tilt::centered());
    let reduced = RwSignal::new(false);
    let card = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || reduced.set(crate::util::motion::prefers_reduced_motion()));

    let on_move = move |ev: leptos::ev::MouseEvent| {
        if reduced.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = card.get_untracked() {
                let rect = el.get_bounding_client_rect();
                let fx = fraction(f64::from(ev.client_x()), rect.left(), rect.width());
                let fy = fraction(f64::from(ev.client_y()), rect.top(), rect.height());
                tilt.set(Tilt::from_fraction(fx, fy, config.max_rotation));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let card_style = move || {
        if reduced.get() {
            String::new()
        } else {
            format!("transform: {}; transform-style: preserve-3d;", tilt.get().transform())
        }
    };

    view! {
        <div class="tilt" style=format!("perspective: {}px;", config.perspective_px)>
            <div
                class=format!("tilt__card card {class}")
                node_ref=card
                style=card_style
                on:mousemove=on_move
                on:mouseleave=move |_| tilt.set(Tilt::centered())
            >
                <div class="tilt__body">{children()}</div>
                <Show when=move || !reduced.get()>
                    <div
                        class="tilt__glare"
                        style=move || format!("background: {};", tilt.get().glare(config.glare_opacity))
                    ></div>
                </Show>
            </div>
        </div>
    }
}
