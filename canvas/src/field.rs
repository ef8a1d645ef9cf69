//! Spring-anchored dot field.
//!
//! DESIGN
//! ======
//! Each dot has a fixed anchor on a near-uniform grid. Per frame the pointer
//! pushes nearby dots outward, a spring pulls every dot back toward its
//! anchor, and damping bleeds off velocity so the field comes to rest once
//! the pointer leaves. The field is rebuilt from scratch whenever the host
//! resizes; dots never migrate between layouts.
//!
//! Everything here is plain arithmetic so it can be tested natively.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use crate::consts::{
    BASE_ALPHA, CONNECTION_DIST_PX, CONNECTION_MAX_OPACITY, DAMPING, DOT_RADIUS_PX, FALLOFF_RADIUS_PX, FORCE_SCALE,
    IMPULSE_SCALE, MAX_DOTS, PROXIMITY_ALPHA, PROXIMITY_GROWTH_PX, SPACING_PX, SPRING_K,
};
use crate::point::Point;
use crate::pointer::Pointer;

/// One particle. `vel` is in CSS pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub anchor: Point,
    pub pos: Point,
    pub vel: Point,
}

impl Dot {
    /// A dot resting on its anchor.
    #[must_use]
    pub fn at(anchor: Point) -> Self {
        Self { anchor, pos: anchor, vel: Point::default() }
    }

    fn repel(&mut self, from: Point) {
        let dx = self.pos.x - from.x;
        let dy = self.pos.y - from.y;
        let dist = dx.hypot(dy);
        if dist <= 0.0 || dist >= FALLOFF_RADIUS_PX {
            return;
        }
        let force = ((FALLOFF_RADIUS_PX - dist) / FALLOFF_RADIUS_PX) * FORCE_SCALE;
        self.vel.x += (dx / dist) * force * IMPULSE_SCALE;
        self.vel.y += (dy / dist) * force * IMPULSE_SCALE;
    }

    fn settle(&mut self) {
        self.vel.x += (self.anchor.x - self.pos.x) * SPRING_K;
        self.vel.y += (self.anchor.y - self.pos.y) * SPRING_K;
        self.vel.x *= DAMPING;
        self.vel.y *= DAMPING;
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;
    }
}

/// A line between two nearby dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Point,
    pub to: Point,
    pub opacity: f64,
}

/// How a single dot should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub alpha: f64,
    pub radius: f64,
    /// Drawn in the accent colour rather than the base dot colour.
    pub accent: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self { alpha: BASE_ALPHA, radius: DOT_RADIUS_PX, accent: false }
    }
}

/// Grid dimensions chosen for a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    pub cell_w: f64,
    pub cell_h: f64,
}

impl Grid {
    /// Fit at most [`MAX_DOTS`] cells to a `width` x `height` viewport.
    ///
    /// The nominal spacing decides the dot budget; the budget is then
    /// redistributed so columns and rows follow the viewport's aspect ratio.
    /// Returns `None` for empty or non-finite sizes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn fit(width: f64, height: f64) -> Option<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let cols = (width / SPACING_PX).ceil() as usize + 1;
        let rows = (height / SPACING_PX).ceil() as usize + 1;
        let total = cols.saturating_mul(rows).min(MAX_DOTS);
        let actual_cols = ((total as f64 * (width / height)).sqrt().ceil() as usize).max(1);
        let actual_rows = total.div_ceil(actual_cols).max(1);
        Some(Self {
            cols: actual_cols,
            rows: actual_rows,
            cell_w: width / actual_cols as f64,
            cell_h: height / actual_rows as f64,
        })
    }

    /// Cell-centre anchors in row-major order, truncated at [`MAX_DOTS`].
    #[allow(clippy::cast_precision_loss)]
    fn anchors(self) -> impl Iterator<Item = Point> {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .take(MAX_DOTS)
            .map(move |(r, c)| {
                Point::new(c as f64 * self.cell_w + self.cell_w * 0.5, r as f64 * self.cell_h + self.cell_h * 0.5)
            })
    }
}

/// The dot field for one viewport size.
#[derive(Debug, Clone, Default)]
pub struct Field {
    width: f64,
    height: f64,
    dots: Vec<Dot>,
}

impl Field {
    /// Lay out a fresh field at rest. Empty when the size is degenerate.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let dots = Grid::fit(width, height)
            .map(|grid| grid.anchors().map(Dot::at).collect())
            .unwrap_or_default();
        Self { width: width.max(0.0), height: height.max(0.0), dots }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Advance one frame: pointer repulsion, spring, damping, integration.
    pub fn step(&mut self, pointer: Pointer) {
        let target = pointer.position();
        for dot in &mut self.dots {
            if let Some(from) = target {
                dot.repel(from);
            }
            dot.settle();
        }
    }

    /// Every pair of dots closer than [`CONNECTION_DIST_PX`], with its line opacity.
    #[must_use]
    pub fn connections(&self) -> Vec<Connection> {
        let mut out = Vec::new();
        for (i, a) in self.dots.iter().enumerate() {
            for b in &self.dots[i + 1..] {
                let dx = b.pos.x - a.pos.x;
                let dy = b.pos.y - a.pos.y;
                if dx.abs() > CONNECTION_DIST_PX || dy.abs() > CONNECTION_DIST_PX {
                    continue;
                }
                let dist = dx.hypot(dy);
                if dist < CONNECTION_DIST_PX {
                    out.push(Connection {
                        from: a.pos,
                        to: b.pos,
                        opacity: (1.0 - dist / CONNECTION_DIST_PX) * CONNECTION_MAX_OPACITY,
                    });
                }
            }
        }
        out
    }

    /// Alpha, radius, and colour choice for `dot` given the pointer.
    ///
    /// Dots inside the pointer radius brighten, grow, and switch to the
    /// accent colour in proportion to their proximity.
    #[must_use]
    pub fn appearance(dot: &Dot, pointer: Pointer) -> Appearance {
        let Some(at) = pointer.position() else {
            return Appearance::default();
        };
        let dist = dot.pos.distance(at);
        if dist >= FALLOFF_RADIUS_PX {
            return Appearance::default();
        }
        let proximity = 1.0 - dist / FALLOFF_RADIUS_PX;
        Appearance {
            alpha: BASE_ALPHA + proximity * PROXIMITY_ALPHA,
            radius: DOT_RADIUS_PX + proximity * PROXIMITY_GROWTH_PX,
            accent: true,
        }
    }
}
