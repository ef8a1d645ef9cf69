//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic. The first paint is
//! handled by [`bootstrap_script`], which runs inline in `<head>` before any
//! WASM loads so the page never flashes the wrong theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// `localStorage` key holding `"true"` or `"false"`.
pub const STORAGE_KEY: &str = "folio_theme_dark";

/// Attribute on `<html>` carrying `"dark"` or `"light"`.
pub const THEME_ATTR: &str = "data-theme";

/// Attribute value for a theme flag.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Value persisted under [`STORAGE_KEY`] for a theme flag.
pub fn stored_value(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Inline script that applies the stored (or system) theme before first paint.
///
/// Storage failures fall through to the system preference, and any other
/// failure leaves the default light theme in place.
pub fn bootstrap_script() -> String {
    format!(
        "(function(){{try{{var s=localStorage.getItem('{STORAGE_KEY}');\
         var d=s===null?window.matchMedia('(prefers-color-scheme: dark)').matches:s==='true';\
         document.documentElement.setAttribute('{THEME_ATTR}',d?'dark':'light');}}catch(e){{}}}})();"
    )
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == stored_value(true);
            }
        }

        // Fall back to system preference.
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                if el.set_attribute(THEME_ATTR, theme_name(enabled)).is_err() {
                    log::warn!("could not set {THEME_ATTR}");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Err(err) = storage.set_item(STORAGE_KEY, stored_value(next)) {
                    log::warn!("could not persist {STORAGE_KEY}: {err:?}");
                }
            }
        }
    }
    next
}
