//! Bridge component between Leptos and the imperative `canvas::FieldEngine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns layout, physics, and drawing. This host sizes the
//! canvas to its wrapper, forwards pointer movement, re-reads theme colours
//! when `<html data-theme>` changes, and drives one animation-frame loop.
//!
//! LIFECYCLE
//! =========
//! Browser handles (observers, closures, the pending frame id) are not `Send`,
//! so they live in a local `StoredValue` and are released by `on_cleanup`.
//! The frame callback also checks a liveness flag, so a frame already queued
//! when the component unmounts draws nothing.

use leptos::prelude::*;

/// Interactive dot-grid background. Renders an inert canvas during SSR and
/// when no 2D context is available.
#[component]
pub fn DotGrid(#[prop(optional, into)] class: String) -> impl IntoView {
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let host = bridge::Host::new();
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let (Some(wrapper), Some(canvas)) = (wrapper_ref.get(), canvas_ref.get()) else {
                return;
            };
            host.mount(wrapper, canvas);
        });
        on_cleanup(move || host.teardown());
    }

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(wrapper) = wrapper_ref.get_untracked() {
                let rect = wrapper.get_bounding_client_rect();
                host.pointer_move(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_leave = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        host.pointer_leave();
    };

    view! {
        <div class=format!("dot-grid {class}") node_ref=wrapper_ref on:mousemove=on_move on:mouseleave=on_leave>
            <canvas class="dot-grid__canvas" node_ref=canvas_ref aria-hidden="true"></canvas>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod bridge {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use canvas::engine::FieldEngine;
    use leptos::prelude::*;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{HtmlCanvasElement, HtmlDivElement, MutationObserver, MutationObserverInit, ResizeObserver};

    use crate::util::dark_mode::THEME_ATTR;
    use crate::util::motion::prefers_reduced_motion;

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Browser resources released on unmount.
    #[derive(Default)]
    struct Teardown {
        alive: Rc<Cell<bool>>,
        raf_id: Rc<Cell<Option<i32>>>,
        frame: FrameCallback,
        resize: Option<(ResizeObserver, Closure<dyn FnMut()>)>,
        theme: Option<(MutationObserver, Closure<dyn FnMut()>)>,
    }

    impl Teardown {
        fn run(&mut self) {
            self.alive.set(false);
            if let (Some(id), Some(window)) = (self.raf_id.take(), web_sys::window()) {
                let _ = window.cancel_animation_frame(id);
            }
            // Dropping the frame closure breaks its self-reference.
            self.frame.borrow_mut().take();
            if let Some((observer, _cb)) = self.resize.take() {
                observer.disconnect();
            }
            if let Some((observer, _cb)) = self.theme.take() {
                observer.disconnect();
            }
        }
    }

    #[derive(Clone, Copy)]
    pub struct Host {
        engine: StoredValue<Option<FieldEngine>, LocalStorage>,
        teardown: StoredValue<Teardown, LocalStorage>,
    }

    impl Host {
        pub fn new() -> Self {
            Self { engine: StoredValue::new_local(None), teardown: StoredValue::new_local(Teardown::default()) }
        }

        pub fn mount(self, wrapper: HtmlDivElement, canvas: HtmlCanvasElement) {
            if self.engine.with_value(Option::is_some) {
                return;
            }
            let Some(engine) = FieldEngine::attach(canvas) else {
                log::warn!("dot grid: 2d context unavailable");
                return;
            };
            self.engine.set_value(Some(engine));
            let reduced = prefers_reduced_motion();
            self.resize_to(&wrapper, reduced);
            self.observe_resize(&wrapper, reduced);
            self.observe_theme(reduced);
            self.teardown.update_value(|t| t.alive.set(true));
            if !reduced {
                self.start_loop();
            }
        }

        pub fn teardown(self) {
            self.teardown.try_update_value(Teardown::run);
        }

        pub fn pointer_move(self, x: f64, y: f64) {
            self.engine.try_update_value(|slot| {
                if let Some(engine) = slot.as_mut() {
                    engine.pointer_move(x, y);
                }
            });
        }

        pub fn pointer_leave(self) {
            self.engine.try_update_value(|slot| {
                if let Some(engine) = slot.as_mut() {
                    engine.pointer_leave();
                }
            });
        }

        fn with_engine(self, f: impl FnOnce(&mut FieldEngine) -> Result<(), JsValue>) {
            self.engine.try_update_value(|slot| {
                if let Some(engine) = slot.as_mut() {
                    if let Err(err) = f(engine) {
                        log::warn!("dot grid: {err:?}");
                    }
                }
            });
        }

        fn resize_to(self, wrapper: &HtmlDivElement, reduced: bool) {
            let rect = wrapper.get_bounding_client_rect();
            let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            self.with_engine(|engine| {
                engine.resize(rect.width(), rect.height(), dpr)?;
                if reduced { engine.draw_static() } else { Ok(()) }
            });
        }

        fn observe_resize(self, wrapper: &HtmlDivElement, reduced: bool) {
            let target = wrapper.clone();
            let cb = Closure::<dyn FnMut()>::new(move || self.resize_to(&target, reduced));
            let Ok(observer) = ResizeObserver::new(cb.as_ref().unchecked_ref()) else {
                return;
            };
            observer.observe(wrapper);
            self.teardown.update_value(|t| t.resize = Some((observer, cb)));
        }

        fn observe_theme(self, reduced: bool) {
            let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
                return;
            };
            let cb = Closure::<dyn FnMut()>::new(move || {
                self.with_engine(|engine| {
                    engine.refresh_palette();
                    if reduced { engine.draw_static() } else { Ok(()) }
                });
            });
            let Ok(observer) = MutationObserver::new(cb.as_ref().unchecked_ref()) else {
                return;
            };
            let init = MutationObserverInit::new();
            init.set_attributes(true);
            init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str(THEME_ATTR)));
            if observer.observe_with_options(&root, &init).is_err() {
                return;
            }
            self.teardown.update_value(|t| t.theme = Some((observer, cb)));
        }

        fn start_loop(self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (alive, raf_id, frame) =
                self.teardown.with_value(|t| (Rc::clone(&t.alive), Rc::clone(&t.raf_id), Rc::clone(&t.frame)));
            let frame_next = Rc::clone(&frame);
            let raf_next = Rc::clone(&raf_id);
            let window_next = window.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
                raf_next.set(None);
                if !alive.get() {
                    return;
                }
                self.with_engine(FieldEngine::frame);
                if let Some(cb) = frame_next.borrow().as_ref() {
                    raf_next.set(window_next.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut(f64)>));
            if let Some(cb) = frame.borrow().as_ref() {
                raf_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }
    }
}
