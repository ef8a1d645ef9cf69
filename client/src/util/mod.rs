//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Each one exposes pure helpers that
//! run natively and, where it needs the browser, a `hydrate`-gated wrapper that
//! no-ops during SSR.

pub mod clock;
pub mod dark_mode;
pub mod motion;
pub mod reveal;
pub mod swipe;
pub mod tilt;
