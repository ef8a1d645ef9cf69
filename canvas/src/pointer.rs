//! Pointer tracking for the field.
//!
//! The pointer is either absent (`Idle`) or hovering at a canvas-relative
//! position (`Active`). Any move activates it; leaving the host returns it to
//! idle. There are no other transitions.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pointer {
    #[default]
    Idle,
    Active {
        x: f64,
        y: f64,
    },
}

impl Pointer {
    /// Pointer moved to `(x, y)`, relative to the canvas origin.
    pub fn move_to(&mut self, x: f64, y: f64) {
        *self = Self::Active { x, y };
    }

    /// Pointer left the host element.
    pub fn leave(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn position(self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Active { x, y } => Some(Point::new(x, y)),
        }
    }
}
