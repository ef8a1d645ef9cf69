use super::*;
use crate::model::Tier;

fn project(slug: &'static str, visible: bool, featured: bool) -> Project {
    Project {
        slug,
        title: slug,
        description: "",
        summary: "",
        thumbnail: "",
        hero_image: "",
        tags: &[],
        timeline: "2024",
        role: "",
        duration: "",
        tools: &[],
        team: None,
        link: None,
        sections: &[],
        tier: Tier::Primary,
        featured,
        visible,
    }
}

fn abcd() -> Vec<Project> {
    vec![
        project("a", true, true),
        project("hidden", false, true),
        project("b", true, false),
        project("c", true, false),
        project("d", true, true),
    ]
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn get_project_finds_every_table_slug() {
    for p in PROJECTS {
        let found = get_project(p.slug).expect("slug should resolve");
        assert_eq!(found.slug, p.slug);
    }
}

#[test]
fn get_project_misses_unknown_slug() {
    assert!(get_project("does-not-exist").is_none());
    assert!(get_project("").is_none());
}

#[test]
fn get_project_returns_hidden_projects_too() {
    let table = abcd();
    assert!(find_in(&table, "hidden").is_some_and(|p| !p.visible));
}

// =============================================================
// Filters
// =============================================================

#[test]
fn featured_preserves_table_order() {
    let table = abcd();
    let slugs = featured_in(&table).iter().map(|p| p.slug).collect::<Vec<_>>();
    assert_eq!(slugs, vec!["a", "hidden", "d"]);
}

#[test]
fn visible_preserves_table_order() {
    let table = abcd();
    let slugs = visible_in(&table).iter().map(|p| p.slug).collect::<Vec<_>>();
    assert_eq!(slugs, vec!["a", "b", "c", "d"]);
}

#[test]
fn static_table_filters_are_consistent() {
    assert!(visible_projects().iter().all(|p| p.visible));
    assert!(featured_projects().iter().all(|p| p.featured));
}

// =============================================================
// Next project
// =============================================================

#[test]
fn next_advances_within_visible_list() {
    let table = abcd();
    assert_eq!(next_in(&table, "c"), Some(NextProject { slug: "d", title: "d" }));
    assert_eq!(next_in(&table, "a").map(|n| n.slug), Some("b"));
}

#[test]
fn next_wraps_from_last_to_first() {
    let table = abcd();
    assert_eq!(next_in(&table, "d").map(|n| n.slug), Some("a"));
}

#[test]
fn next_is_none_for_hidden_or_unknown_slug() {
    let table = abcd();
    assert_eq!(next_in(&table, "hidden"), None);
    assert_eq!(next_in(&table, "zzz"), None);
}

#[test]
fn next_cycles_back_after_len_steps() {
    let table = abcd();
    let len = visible_in(&table).len();
    for start in ["a", "b", "c", "d"] {
        let mut slug = start;
        for _ in 0..len {
            slug = next_in(&table, slug).expect("visible slug has a successor").slug;
        }
        assert_eq!(slug, start);
    }
}

#[test]
fn next_of_single_visible_project_is_itself() {
    let table = vec![project("only", true, false), project("gone", false, false)];
    assert_eq!(next_in(&table, "only").map(|n| n.slug), Some("only"));
}

#[test]
fn static_table_next_project_is_total_over_visible_slugs() {
    for p in visible_projects() {
        assert!(next_project(p.slug).is_some());
    }
    for p in PROJECTS.iter().filter(|p| !p.visible) {
        assert!(next_project(p.slug).is_none());
    }
}
