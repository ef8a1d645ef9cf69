#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::MAX_DOTS;
use crate::point::Point;

// =============================================================
// FieldCore
// =============================================================

#[test]
fn new_core_is_empty_and_idle() {
    let core = FieldCore::new();
    assert!(core.field.is_empty());
    assert_eq!(core.pointer, Pointer::Idle);
    assert_eq!(core.palette, Palette::default());
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn resize_lays_out_field() {
    let mut core = FieldCore::new();
    core.resize(100.0, 100.0, 1.0);
    assert_eq!(core.field.len(), 25);
    assert_eq!(core.field.width(), 100.0);
    assert_eq!(core.field.height(), 100.0);
}

#[test]
fn resize_discards_motion() {
    let mut core = FieldCore::new();
    core.resize(200.0, 200.0, 1.0);
    core.pointer_move(100.0, 100.0);
    for _ in 0..10 {
        core.tick();
    }
    assert!(core.field.dots().iter().any(|d| d.pos != d.anchor));

    core.resize(200.0, 200.0, 1.0);
    assert!(core.field.dots().iter().all(|d| d.pos == d.anchor));
}

#[test]
fn resize_to_zero_empties_field() {
    let mut core = FieldCore::new();
    core.resize(640.0, 480.0, 2.0);
    assert!(!core.field.is_empty());
    core.resize(0.0, 480.0, 2.0);
    assert!(core.field.is_empty());
    core.tick();
}

#[test]
fn pointer_enter_and_leave() {
    let mut core = FieldCore::new();
    core.pointer_move(4.0, 5.0);
    assert_eq!(core.pointer.position(), Some(Point::new(4.0, 5.0)));
    core.pointer_leave();
    assert_eq!(core.pointer, Pointer::Idle);
}

#[test]
fn tick_uses_current_pointer() {
    let mut with_pointer = FieldCore::new();
    with_pointer.resize(300.0, 300.0, 1.0);
    let mut without = with_pointer.clone();

    with_pointer.pointer_move(150.0, 150.0);
    with_pointer.tick();
    without.tick();

    assert!(with_pointer.field.dots().iter().any(|d| d.pos != d.anchor));
    assert!(without.field.dots().iter().all(|d| d.pos == d.anchor));
}

#[test]
fn set_palette_replaces_colours() {
    let mut core = FieldCore::new();
    core.set_palette(Palette::from_values("#000", "#f00", "#eee"));
    assert_eq!(core.palette.accent, "#f00");
}

#[test]
fn huge_viewport_respects_cap() {
    let mut core = FieldCore::new();
    core.resize(7680.0, 4320.0, 1.0);
    assert_eq!(core.field.len(), MAX_DOTS);
}

// =============================================================
// Device pixel ratio
// =============================================================

#[test]
fn dpr_is_capped_at_two() {
    assert_eq!(clamp_dpr(3.0), 2.0);
    assert_eq!(clamp_dpr(2.0), 2.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
}

#[test]
fn dpr_never_drops_below_one() {
    assert_eq!(clamp_dpr(0.5), 1.0);
    assert_eq!(clamp_dpr(0.0), 1.0);
    assert_eq!(clamp_dpr(f64::NAN), 1.0);
}

#[test]
fn resize_stores_clamped_dpr() {
    let mut core = FieldCore::new();
    core.resize(10.0, 10.0, 3.0);
    assert_eq!(core.dpr, 2.0);
}

#[test]
fn backing_size_scales_and_rounds() {
    assert_eq!(backing_size(100.0, 2.0), 200);
    assert_eq!(backing_size(100.4, 1.5), 151);
    assert_eq!(backing_size(-5.0, 2.0), 0);
}
