//! Local UI chrome state (theme, navigation menu, scroll).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page content so layout
//! components can react to them without threading props through every page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset past which the navigation bar gains its backdrop.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// UI state provided as an `RwSignal<UiState>` context by `App`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl UiState {
    /// Update `scrolled` from the window's vertical offset.
    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

/// Whether a navigation link to `href` should be highlighted at `pathname`.
///
/// Exact matches and nested paths count, so `/work` stays active on
/// `/work/some-project` but not on `/workshop`. The root link only matches
/// the root.
pub fn is_active_link(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    match pathname.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
