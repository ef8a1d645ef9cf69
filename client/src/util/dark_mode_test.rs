#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

#[test]
fn theme_names_match_stylesheet_selectors() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn bootstrap_script_reads_storage_key_and_sets_attribute() {
    let script = bootstrap_script();
    assert!(script.contains("localStorage.getItem('folio_theme_dark')"));
    assert!(script.contains("setAttribute('data-theme'"));
    assert!(script.contains("prefers-color-scheme: dark"));
}

#[test]
fn bootstrap_script_has_balanced_braces() {
    let script = bootstrap_script();
    let open = script.matches('{').count();
    let close = script.matches('}').count();
    assert_eq!(open, close);
    assert!(script.starts_with("(function(){"));
    assert!(script.ends_with("})();"));
}

#[test]
fn stored_values_match_bootstrap_comparison() {
    assert_eq!(stored_value(true), "true");
    assert_eq!(stored_value(false), "false");
    assert!(bootstrap_script().contains(&format!("s==='{}'", stored_value(true))));
}
