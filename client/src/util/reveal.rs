//! Reveal-on-scroll styling policy.
//!
//! The `Reveal` component owns the observer; this module only decides what
//! the wrapped content looks like before and after it enters the viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Observer margin so content reveals slightly after crossing the fold.
pub const ROOT_MARGIN: &str = "0px 0px -80px 0px";

/// Entry animation for one revealed block.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Upward travel in CSS pixels.
    pub distance_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { distance_px: 40.0, duration_s: 0.8, delay_s: 0.0, easing: "cubic-bezier(0.25, 0.1, 0.25, 1)" }
    }
}

impl RevealConfig {
    /// Same animation, starting `delay_s` later. Used to stagger lists.
    #[must_use]
    pub fn delayed(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    /// Inline style for the wrapper.
    ///
    /// Reduced motion shows the content in place with no transition.
    pub fn style(&self, visible: bool, reduced_motion: bool) -> String {
        if reduced_motion {
            return "opacity: 1; transform: none;".to_string();
        }
        let (opacity, offset) = if visible { (1, 0.0) } else { (0, self.distance_px) };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); \
             transition: opacity {d}s {e} {l}s, transform {d}s {e} {l}s;",
            d = self.duration_s,
            e = self.easing,
            l = self.delay_s,
        )
    }
}
