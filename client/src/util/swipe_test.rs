use super::*;
use crate::state::gallery::{Direction, Gallery};

#[test]
fn short_drag_is_ignored() {
    assert_eq!(classify(-49.9, 0.0), None);
    assert_eq!(classify(49.9, 0.0), None);
}

#[test]
fn threshold_drag_counts() {
    assert_eq!(classify(-SWIPE_MIN_PX, 0.0), Some(GalleryInput::Next));
    assert_eq!(classify(SWIPE_MIN_PX, 0.0), Some(GalleryInput::Previous));
}

#[test]
fn diagonal_drag_is_ignored() {
    // 60 px across, 41 px down: 60 < 1.5 * 41.
    assert_eq!(classify(-60.0, 41.0), None);
    assert_eq!(classify(-60.0, 40.0), Some(GalleryInput::Next));
}

#[test]
fn vertical_scroll_is_ignored() {
    assert_eq!(classify(5.0, -300.0), None);
}

#[test]
fn non_finite_delta_is_ignored() {
    assert_eq!(classify(f64::NAN, 0.0), None);
    assert_eq!(classify(-100.0, f64::INFINITY), None);
}

#[test]
fn left_swipe_on_five_slides_advances_once() {
    let mut gallery = Gallery::from_sources(&["/1", "/2", "/3", "/4", "/5"], "Slide", 0).expect("non-empty gallery");
    let mut tracker = SwipeTracker::default();
    tracker.begin(200.0, 100.0);
    let input = tracker.end(140.0, 102.0).expect("swipe");
    gallery.apply(input);
    assert_eq!(gallery.index(), 1);
    assert_eq!(gallery.direction(), Direction::Forward);
}

#[test]
fn end_without_begin_is_ignored() {
    let mut tracker = SwipeTracker::default();
    assert_eq!(tracker.end(0.0, 0.0), None);
}

#[test]
fn start_point_is_consumed() {
    let mut tracker = SwipeTracker::default();
    tracker.begin(300.0, 0.0);
    assert_eq!(tracker.end(200.0, 0.0), Some(GalleryInput::Next));
    assert_eq!(tracker.end(100.0, 0.0), None);
}

#[test]
fn cancel_drops_start_point() {
    let mut tracker = SwipeTracker::default();
    tracker.begin(0.0, 0.0);
    tracker.cancel();
    assert_eq!(tracker.end(100.0, 0.0), None);
}
