//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (`navigation`, `footer`, `lightbox`) is mounted once by
//! `App`. The rest are building blocks for pages: content renderers,
//! gallery views, and motion wrappers. Components with browser-only
//! behaviour keep it behind `hydrate` so SSR renders their resting state.

pub mod code_block;
pub mod dot_grid;
pub mod footer;
pub mod lightbox;
pub mod navigation;
pub mod project_card;
pub mod project_showcase;
pub mod reveal;
pub mod section_view;
pub mod slide_viewer;
pub mod tilt_card;
