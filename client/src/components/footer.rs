//! Site footer: identity, social links, availability, and New York clock.

use leptos::prelude::*;

use content::profile::{OWNER, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    let links = SOCIAL_LINKS
        .iter()
        .map(|link| {
            let external = link.is_external();
            view! {
                <a
                    class="footer__link"
                    href=link.href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="divider"></div>
                <div class="footer__grid">
                    <div>
                        <p class="footer__owner">{OWNER}</p>
                        <p class="footer__note">"Design + Code"</p>
                        <p class="footer__note">"Georgia Tech, 2026"</p>
                    </div>
                    <div class="footer__links">{links}</div>
                    <div class="footer__status">
                        <p class="footer__note">
                            <span class="footer__dot"></span>
                            "Available for opportunities"
                        </p>
                        <p class="footer__clock">
                            <LiveClock/>
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// Current New York time, hidden until the first browser tick.
#[component]
fn LiveClock() -> impl IntoView {
    let label = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use crate::util::clock;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            while alive_task.load(Ordering::Relaxed) {
                label.set(clock::now_label());
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(clock::REFRESH_MS))).await;
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <Show when=move || label.with(Option::is_some)>
            <span class="tabular">{move || label.get().unwrap_or_default()}</span>
        </Show>
    }
}
