//! Touch swipe classification for galleries.
//!
//! A swipe counts only when it is long enough and clearly horizontal; short
//! or diagonal drags are scroll gestures and must not move the gallery.

#[cfg(test)]
#[path = "swipe_test.rs"]
mod swipe_test;

use crate::state::gallery::GalleryInput;

/// Minimum horizontal travel in CSS pixels.
pub const SWIPE_MIN_PX: f64 = 50.0;

/// Horizontal travel must exceed vertical travel by this factor.
pub const SWIPE_DOMINANCE: f64 = 1.5;

/// Map a drag delta (end minus start) to a gallery input.
///
/// Leftward swipes advance, rightward swipes go back.
pub fn classify(dx: f64, dy: f64) -> Option<GalleryInput> {
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    if dx.abs() < SWIPE_MIN_PX || dx.abs() < SWIPE_DOMINANCE * dy.abs() {
        return None;
    }
    Some(if dx < 0.0 { GalleryInput::Next } else { GalleryInput::Previous })
}

/// Remembers where the current touch began.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Finish the touch at `(x, y)`. Consumes the start point either way.
    pub fn end(&mut self, x: f64, y: f64) -> Option<GalleryInput> {
        let (sx, sy) = self.start.take()?;
        classify(x - sx, y - sy)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Client coordinates of the first touch in `ev`.
///
/// `touchend` has no active touches, so callers pass `changed = true` to read
/// the lifted finger instead.
#[cfg(feature = "hydrate")]
pub fn touch_point(ev: &web_sys::TouchEvent, changed: bool) -> Option<(f64, f64)> {
    let list = if changed { ev.changed_touches() } else { ev.touches() };
    list.get(0).map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
}
