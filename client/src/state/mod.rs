//! Application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types live here so transitions can be tested natively. `App`
//! wraps the shared ones in `RwSignal`s and provides them as context; nothing
//! in this module touches the browser.

pub mod gallery;
pub mod lightbox;
pub mod ui;
