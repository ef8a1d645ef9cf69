#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn server_render_assumes_full_motion() {
    assert!(!prefers_reduced_motion());
}

#[test]
fn query_targets_reduce() {
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    assert!(REDUCED_MOTION_QUERY.contains("reduce"));
}
