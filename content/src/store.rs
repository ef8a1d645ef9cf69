//! Read-only queries over the project table.
//!
//! Each public query has a slice-generic twin (`*_in`) so behavior can be
//! exercised against synthetic tables.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::model::Project;
use crate::projects::PROJECTS;

/// Link target for the "next project" footer of a case study.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextProject {
    pub slug: &'static str,
    pub title: &'static str,
}

/// Look up a project by slug, visible or not.
#[must_use]
pub fn get_project(slug: &str) -> Option<&'static Project> {
    find_in(PROJECTS, slug)
}

/// Projects flagged for the home page, in table order.
#[must_use]
pub fn featured_projects() -> Vec<&'static Project> {
    featured_in(PROJECTS)
}

/// Projects listed publicly, in table order.
#[must_use]
pub fn visible_projects() -> Vec<&'static Project> {
    visible_in(PROJECTS)
}

/// Cyclic successor of `slug` among visible projects.
///
/// Returns `None` when `slug` is not a visible project, so hidden or removed
/// entries never link onward.
#[must_use]
pub fn next_project(slug: &str) -> Option<NextProject> {
    next_in(PROJECTS, slug)
}

#[must_use]
pub fn find_in<'a>(table: &'a [Project], slug: &str) -> Option<&'a Project> {
    table.iter().find(|p| p.slug == slug)
}

#[must_use]
pub fn featured_in(table: &[Project]) -> Vec<&Project> {
    table.iter().filter(|p| p.featured).collect()
}

#[must_use]
pub fn visible_in(table: &[Project]) -> Vec<&Project> {
    table.iter().filter(|p| p.visible).collect()
}

#[must_use]
pub fn next_in(table: &[Project], slug: &str) -> Option<NextProject> {
    let visible = visible_in(table);
    let index = visible.iter().position(|p| p.slug == slug)?;
    let next = visible[(index + 1) % visible.len()];
    Some(NextProject { slug: next.slug, title: next.title })
}
