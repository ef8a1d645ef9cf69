//! Pointer-driven 3D tilt for cards.
//!
//! The pointer position is reduced to a fraction of the card's box, with
//! `(0.5, 0.5)` at the centre. Rotation is linear in that fraction and the
//! glare highlight follows the pointer. Smoothing is left to a CSS transition.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// Tunables for one tilt card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Rotation in degrees at the card edges.
    pub max_rotation: f64,
    pub glare_opacity: f64,
    pub perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self { max_rotation: 8.0, glare_opacity: 0.12, perspective_px: 800.0 }
    }
}

/// Current rotation and glare position of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Pointer fraction across the card, 0..=1.
    pub fx: f64,
    pub fy: f64,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::centered()
    }
}

impl Tilt {
    /// Flat card with the glare in the middle.
    pub fn centered() -> Self {
        Self { rotate_x: 0.0, rotate_y: 0.0, fx: 0.5, fy: 0.5 }
    }

    /// Tilt for a pointer at fraction `(fx, fy)` of the card.
    ///
    /// The top edge tips toward the viewer (`+max` about X) and the right
    /// edge away (`+max` about Y). Fractions are clamped to the card.
    pub fn from_fraction(fx: f64, fy: f64, max_rotation: f64) -> Self {
        let fx = clamp_unit(fx);
        let fy = clamp_unit(fy);
        Self {
            rotate_x: max_rotation * (1.0 - 2.0 * fy),
            rotate_y: max_rotation * (2.0 * fx - 1.0),
            fx,
            fy,
        }
    }

    /// `transform` value for the card body.
    pub fn transform(&self) -> String {
        format!("rotateX({:.2}deg) rotateY({:.2}deg)", self.rotate_x, self.rotate_y)
    }

    /// `background` value for the glare overlay.
    pub fn glare(&self, opacity: f64) -> String {
        format!(
            "radial-gradient(circle at {:.1}% {:.1}%, rgba(255,255,255,{opacity}), transparent 50%)",
            self.fx * 100.0,
            self.fy * 100.0
        )
    }
}

/// Position of `client` within `[origin, origin + extent]` as a fraction.
///
/// Degenerate boxes report the centre.
pub fn fraction(client: f64, origin: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() {
        return 0.5;
    }
    clamp_unit((client - origin) / extent)
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.5 } else { v.clamp(0.0, 1.0) }
}
