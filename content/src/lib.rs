//! Static portfolio content and read-only queries.
//!
//! This crate owns the project table rendered by both the SSR server and the
//! hydrated client. The table is `'static` and never mutated; every query is a
//! pure function over it. "Not found" is an ordinary `None`, never an error.
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | `Project`, `Section`, and section body variants |
//! | [`projects`] | The hard-coded project table |
//! | [`profile`] | Owner identity, links, about-page copy |
//! | [`store`] | Lookup, featured/visible filters, cyclic next-project |
//! | [`listing`] | Work-page category filter and year sort |
//! | [`validate`] | Table invariants (unique URL-safe slugs, etc.) |

pub mod listing;
pub mod model;
pub mod profile;
pub mod projects;
pub mod store;
pub mod validate;

pub use listing::{Category, SortOrder, listing, parse_year};
pub use model::{Iteration, Project, Section, SectionBody, SectionKind, Tier};
pub use store::{NextProject, featured_projects, get_project, next_project, visible_projects};
pub use validate::{ContentError, validate};
