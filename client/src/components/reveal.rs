//! Fade-and-rise wrapper revealed once when scrolled into view.

use leptos::prelude::*;

use crate::util::reveal::RevealConfig;

/// Wraps `children` and reveals them the first time they intersect the
/// viewport. Reduced motion shows them immediately and in place.
#[component]
pub fn Reveal(
    children: Children,
    /// Seconds before the transition starts, for staggering lists.
    #[prop(optional)]
    delay: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = RevealConfig::default().delayed(delay);
    let visible = RwSignal::new(false);
    let reduced = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    observe::reveal_once(node, visible, reduced);

    view! {
        <div class=format!("reveal {class}") node_ref=node style=move || config.style(visible.get(), reduced.get())>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod observe {
    use leptos::prelude::*;
    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::util::motion::prefers_reduced_motion;
    use crate::util::reveal::ROOT_MARGIN;

    type Handles = Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)>;

    /// Flip `visible` once `node` intersects the viewport, then stop watching.
    ///
    /// Without `IntersectionObserver` the content is shown at once.
    pub fn reveal_once(node: NodeRef<leptos::html::Div>, visible: RwSignal<bool>, reduced: RwSignal<bool>) {
        let handles = StoredValue::<Handles, LocalStorage>::new_local(None);

        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if visible.get_untracked() || handles.with_value(Option::is_some) {
                return;
            }
            if prefers_reduced_motion() {
                reduced.set(true);
                visible.set(true);
                return;
            }
            let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let entered = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .any(|entry| entry.is_intersecting());
                    if entered {
                        visible.set(true);
                        observer.disconnect();
                    }
                },
            );
            let init = IntersectionObserverInit::new();
            init.set_root_margin(ROOT_MARGIN);
            match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    observer.observe(&el);
                    handles.set_value(Some((observer, cb)));
                }
                Err(_) => visible.set(true),
            }
        });

        on_cleanup(move || {
            handles.try_update_value(|slot| {
                if let Some((observer, _cb)) = slot.take() {
                    observer.disconnect();
                }
            });
        });
    }
}
