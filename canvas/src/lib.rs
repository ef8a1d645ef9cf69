//! Interactive dot-grid background for the portfolio hero.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! field of spring-anchored dots that scatter away from the pointer and settle
//! back when it leaves. The host component is responsible only for wiring DOM
//! events, resize/theme observers, and the animation-frame loop to the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-bound [`engine::FieldEngine`] and testable [`engine::FieldCore`] |
//! | [`field`] | Grid layout, spring physics, connection and appearance queries |
//! | [`pointer`] | Idle/active pointer state machine |
//! | [`point`] | 2D point in CSS pixels |
//! | [`palette`] | Theme colours read from CSS custom properties |
//! | [`render`] | Draws a field to a 2D context |
//! | [`consts`] | Shared numeric constants (spacing, radii, spring tuning) |

pub mod consts;
pub mod engine;
pub mod field;
pub mod palette;
pub mod point;
pub mod pointer;
pub mod render;
