use super::*;
use crate::model::Tier;

fn project(slug: &'static str, timeline: &'static str, tags: &'static [&'static str]) -> Project {
    Project {
        slug,
        title: slug,
        description: "",
        summary: "",
        thumbnail: "",
        hero_image: "",
        tags,
        timeline,
        role: "",
        duration: "",
        tools: &[],
        team: None,
        link: None,
        sections: &[],
        tier: Tier::Primary,
        featured: false,
        visible: true,
    }
}

fn table() -> Vec<Project> {
    vec![
        project("bottle", "2025", &["IoT", "Swift", "CAD"]),
        project("scanner", "2024-2025", &["iOS", "LiDAR"]),
        project("vision", "2024", &["Python", "Computer Vision"]),
        project("strategy", "Summer 2024", &["Product Strategy", "Figma"]),
        project("undated", "ongoing", &["Writing"]),
    ]
}

fn slugs(list: &[&Project]) -> Vec<&'static str> {
    list.iter().map(|p| p.slug).collect()
}

// =============================================================
// parse_year
// =============================================================

#[test]
fn parse_year_reads_first_four_digit_run() {
    assert_eq!(parse_year("2025"), 2025);
    assert_eq!(parse_year("2024-2025"), 2024);
    assert_eq!(parse_year("Summer 2023"), 2023);
}

#[test]
fn parse_year_defaults_to_zero() {
    assert_eq!(parse_year(""), 0);
    assert_eq!(parse_year("ongoing"), 0);
    assert_eq!(parse_year("v12"), 0);
}

// =============================================================
// Categories
// =============================================================

#[test]
fn all_category_matches_everything() {
    assert!(Category::All.matches(&[]));
    assert!(Category::All.matches(&["anything"]));
}

#[test]
fn keyword_match_is_exact_tag_equality() {
    assert!(Category::Hardware.matches(&["BLE"]));
    assert!(!Category::Hardware.matches(&["ble"]));
    assert!(Category::MlCv.matches(&["x", "PyTorch"]));
}

#[test]
fn a_project_may_fall_in_several_categories() {
    let tags: &[&str] = &["IoT", "Swift", "CAD"];
    assert!(Category::Hardware.matches(tags));
    assert!(Category::Software.matches(tags));
    assert!(Category::Design.matches(tags));
    assert!(!Category::MlCv.matches(tags));
}

#[test]
fn category_labels_are_in_pill_order() {
    let labels = Category::ALL.iter().map(|c| c.label()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["All", "Hardware", "Software", "ML / CV", "Design"]);
}

// =============================================================
// Listing
// =============================================================

#[test]
fn newest_first_is_default_and_stable() {
    let rows = table();
    let refs = rows.iter().collect::<Vec<_>>();
    let list = listing(&refs, Category::default(), SortOrder::default());
    assert_eq!(slugs(&list), vec!["bottle", "scanner", "vision", "strategy", "undated"]);
}

#[test]
fn oldest_first_keeps_ties_in_table_order() {
    let rows = table();
    let refs = rows.iter().collect::<Vec<_>>();
    let list = listing(&refs, Category::All, SortOrder::Oldest);
    assert_eq!(slugs(&list), vec!["undated", "scanner", "vision", "strategy", "bottle"]);
}

#[test]
fn toggling_sort_twice_restores_order() {
    let rows = table();
    let refs = rows.iter().collect::<Vec<_>>();
    let order = SortOrder::Newest;
    let before = listing(&refs, Category::All, order);
    let _flipped = listing(&refs, Category::All, order.toggled());
    let after = listing(&refs, Category::All, order.toggled().toggled());
    assert_eq!(slugs(&before), slugs(&after));
}

#[test]
fn filter_with_no_matches_is_empty_and_all_restores() {
    let rows = vec![project("bottle", "2025", &["IoT"]), project("app", "2024", &["Swift"])];
    let refs = rows.iter().collect::<Vec<_>>();
    assert!(listing(&refs, Category::MlCv, SortOrder::Newest).is_empty());
    assert_eq!(listing(&refs, Category::All, SortOrder::Newest).len(), refs.len());
}

#[test]
fn filter_then_sort() {
    let rows = table();
    let refs = rows.iter().collect::<Vec<_>>();
    let list = listing(&refs, Category::Software, SortOrder::Oldest);
    assert_eq!(slugs(&list), vec!["scanner", "vision", "bottle"]);
}
