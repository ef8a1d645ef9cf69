use super::*;

#[test]
fn appends_zone_suffix() {
    assert_eq!(zone_label("12:30 PM").as_deref(), Some("12:30 PM ET"));
}

#[test]
fn folds_narrow_no_break_space() {
    assert_eq!(zone_label("9:05\u{202f}AM").as_deref(), Some("9:05 AM ET"));
    assert_eq!(zone_label("9:05\u{a0}PM").as_deref(), Some("9:05 PM ET"));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(zone_label("  1:00 AM \n").as_deref(), Some("1:00 AM ET"));
}

#[test]
fn blank_output_is_none() {
    assert_eq!(zone_label(""), None);
    assert_eq!(zone_label(" \u{202f} "), None);
}

#[test]
fn formats_new_york_hour_and_minute() {
    assert!(FORMAT_OPTIONS.contains(&("timeZone", "America/New_York")));
    assert!(FORMAT_OPTIONS.contains(&("hour", "numeric")));
    assert!(FORMAT_OPTIONS.contains(&("minute", "2-digit")));
    assert_eq!(LOCALE, "en-US");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_has_no_clock() {
    assert_eq!(now_label(), None);
}
