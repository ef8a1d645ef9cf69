//! New York wall clock for the footer.
//!
//! The browser's `Intl.DateTimeFormat` does the timezone work, so daylight
//! saving follows whatever tz data the browser ships. This module only builds
//! the formatter options and tidies its output.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Footer refresh interval.
pub const REFRESH_MS: u32 = 10_000;

pub const LOCALE: &str = "en-US";
pub const TIME_ZONE: &str = "America/New_York";

/// `Intl.DateTimeFormat` options as `(key, value)` pairs: `h:mm AM`.
pub const FORMAT_OPTIONS: &[(&str, &str)] = &[("timeZone", TIME_ZONE), ("hour", "numeric"), ("minute", "2-digit")];

/// Turn formatter output into the footer label, `h:mm AM ET`.
///
/// Newer engines separate the time and day period with a narrow no-break
/// space; it is folded to a plain space. Blank output yields `None`.
pub fn zone_label(formatted: &str) -> Option<String> {
    let time = formatted.replace(['\u{202f}', '\u{a0}'], " ");
    let time = time.trim();
    (!time.is_empty()).then(|| format!("{time} ET"))
}

/// The current New York time, or `None` outside the browser.
pub fn now_label() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        intl::format_now().as_deref().and_then(zone_label)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
mod intl {
    use js_sys::{Array, Date, Intl, Object, Reflect};
    use wasm_bindgen::JsValue;

    use super::{FORMAT_OPTIONS, LOCALE};

    pub fn format_now() -> Option<String> {
        let options = Object::new();
        for &(key, value) in FORMAT_OPTIONS {
            if let Err(err) = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value)) {
                log::warn!("clock: option {key}: {err:?}");
                return None;
            }
        }
        let formatter = Intl::DateTimeFormat::new(&Array::of1(&JsValue::from_str(LOCALE)), &options);
        match formatter.format().call1(&JsValue::UNDEFINED, &Date::new_0()) {
            Ok(value) => value.as_string(),
            Err(err) => {
                log::warn!("clock: format failed: {err:?}");
                None
            }
        }
    }
}
