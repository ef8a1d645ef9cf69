//! Shared numeric constants for the canvas crate.

// ── Layout ──────────────────────────────────────────────────────

/// Nominal distance between neighbouring dots, in CSS pixels.
pub const SPACING_PX: f64 = 28.0;

/// Hard cap on the number of dots in a field.
pub const MAX_DOTS: usize = 600;

/// Resting dot radius in CSS pixels.
pub const DOT_RADIUS_PX: f64 = 1.2;

/// Backing-store scale is never taken above this device pixel ratio.
pub const MAX_DPR: f64 = 2.0;

// ── Physics ─────────────────────────────────────────────────────

/// Pointer influence radius in CSS pixels.
pub const FALLOFF_RADIUS_PX: f64 = 160.0;

/// Peak repulsive force at the pointer centre.
pub const FORCE_SCALE: f64 = 12.0;

/// Fraction of the force applied as a velocity impulse per frame.
pub const IMPULSE_SCALE: f64 = 0.08;

/// Spring constant pulling a dot back to its anchor.
pub const SPRING_K: f64 = 0.035;

/// Per-frame velocity multiplier.
pub const DAMPING: f64 = 0.82;

// ── Appearance ──────────────────────────────────────────────────

/// Dots closer than this are joined by a line.
pub const CONNECTION_DIST_PX: f64 = 100.0;

/// Line opacity for two coincident dots; fades linearly to zero at the threshold.
pub const CONNECTION_MAX_OPACITY: f64 = 0.12;

pub const CONNECTION_LINE_WIDTH_PX: f64 = 0.5;

/// Alpha of a dot outside the pointer radius.
pub const BASE_ALPHA: f64 = 0.35;

/// Extra alpha added at full pointer proximity.
pub const PROXIMITY_ALPHA: f64 = 0.55;

/// Extra radius added at full pointer proximity.
pub const PROXIMITY_GROWTH_PX: f64 = 1.0;

/// Alpha of the radial glow drawn under the pointer.
pub const GLOW_ALPHA: f64 = 0.04;

/// Alpha of every dot in the reduced-motion frame.
pub const STATIC_ALPHA: f64 = 0.3;
