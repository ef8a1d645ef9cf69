//! Reduced-motion preference.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Media query matched when the user asks for less animation.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether the user prefers reduced motion. Always `false` outside the browser.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
