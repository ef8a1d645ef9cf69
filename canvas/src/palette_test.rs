use super::*;

#[test]
fn values_are_trimmed() {
    let palette = Palette::from_values("  #111 ", "\n#222", "rgb(1, 2, 3) ");
    assert_eq!(palette.dot, "#111");
    assert_eq!(palette.accent, "#222");
    assert_eq!(palette.line, "rgb(1, 2, 3)");
}

#[test]
fn empty_values_fall_back_individually() {
    let palette = Palette::from_values("", "#abc", "   ");
    let defaults = Palette::default();
    assert_eq!(palette.dot, defaults.dot);
    assert_eq!(palette.accent, "#abc");
    assert_eq!(palette.line, defaults.line);
}

#[test]
fn all_empty_is_default() {
    assert_eq!(Palette::from_values("", "", ""), Palette::default());
}

#[test]
fn property_names_match_theme_variables() {
    assert_eq!(DOT_VAR, "--text-subtle");
    assert_eq!(ACCENT_VAR, "--accent");
    assert_eq!(LINE_VAR, "--border-color");
}
