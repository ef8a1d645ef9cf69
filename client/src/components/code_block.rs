//! Code sample with language badge and copy-to-clipboard button.

#[cfg(test)]
#[path = "code_block_test.rs"]
mod code_block_test;

use leptos::prelude::*;

/// How long the "Copied" label stays up.
#[cfg(feature = "hydrate")]
const COPIED_RESET: std::time::Duration = std::time::Duration::from_secs(2);

/// Copy indicator. Each copy bumps the generation; a reset timer only clears
/// the label if no newer copy happened while it slept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    generation: u32,
    copied: bool,
}

impl CopyFeedback {
    #[must_use]
    pub fn copied(self) -> bool {
        self.copied
    }

    /// Mark a successful copy and return the generation to reset against.
    pub fn mark_copied(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Clear the label if `generation` is still the latest copy.
    pub fn expire(&mut self, generation: u32) {
        if self.generation == generation {
            self.copied = false;
        }
    }
}

#[component]
pub fn CodeBlock(code: &'static str, language: &'static str) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());

    let on_copy = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(code);
            leptos::task::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("clipboard write failed: {err:?}");
                    return;
                }
                let Some(generation) = feedback.try_update(CopyFeedback::mark_copied) else {
                    return;
                };
                gloo_timers::future::sleep(COPIED_RESET).await;
                feedback.try_update(|f| f.expire(generation));
            });
        }
    };

    view! {
        <div class="code-block">
            <div class="code-block__header">
                <span class="code-block__language">{language}</span>
                <button class="code-block__copy" on:click=on_copy>
                    {move || if feedback.get().copied() { "Copied" } else { "Copy" }}
                </button>
            </div>
            <pre class="code-block__pre">
                <code>{code}</code>
            </pre>
        </div>
    }
}
