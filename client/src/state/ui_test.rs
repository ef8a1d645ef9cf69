use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_light_closed_unscrolled() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.mobile_menu_open);
    assert!(!state.scrolled);
}

#[test]
fn scrolled_only_past_threshold() {
    let mut state = UiState::default();
    state.set_scroll(SCROLL_THRESHOLD_PX);
    assert!(!state.scrolled);
    state.set_scroll(SCROLL_THRESHOLD_PX + 1.0);
    assert!(state.scrolled);
    state.set_scroll(0.0);
    assert!(!state.scrolled);
}

#[test]
fn menu_toggle_and_close() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.mobile_menu_open);
    state.toggle_menu();
    assert!(!state.mobile_menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Active links
// =============================================================

#[test]
fn exact_path_is_active() {
    assert!(is_active_link("/work", "/work"));
    assert!(is_active_link("/about", "/about"));
}

#[test]
fn nested_path_keeps_parent_active() {
    assert!(is_active_link("/work", "/work/robot-arm"));
}

#[test]
fn prefix_without_boundary_is_not_active() {
    assert!(!is_active_link("/work", "/workshop"));
    assert!(!is_active_link("/about", "/"));
}

#[test]
fn root_link_matches_only_root() {
    assert!(is_active_link("/", "/"));
    assert!(!is_active_link("/", "/work"));
}
