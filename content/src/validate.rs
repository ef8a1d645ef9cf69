//! Project table invariants.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::HashSet;

use crate::model::{Project, SectionBody};

/// A violated content invariant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate project slug: {0}")]
    DuplicateSlug(String),
    #[error("project slug is empty")]
    EmptySlug,
    #[error("project slug is not URL-safe: {0}")]
    UnsafeSlug(String),
    #[error("code section '{heading}' in '{slug}' has no code")]
    EmptyCode { slug: String, heading: String },
    #[error("tier ordinal out of range: {0}")]
    InvalidTier(u8),
    #[error("unknown section kind: {0}")]
    UnknownSectionKind(String),
}

/// Check slug uniqueness and URL safety, and that code sections carry code.
///
/// # Errors
///
/// Returns the first violation found, in table order.
pub fn validate(table: &[Project]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for project in table {
        if project.slug.is_empty() {
            return Err(ContentError::EmptySlug);
        }
        if !is_url_safe(project.slug) {
            return Err(ContentError::UnsafeSlug(project.slug.to_owned()));
        }
        if !seen.insert(project.slug) {
            return Err(ContentError::DuplicateSlug(project.slug.to_owned()));
        }
        for section in project.sections {
            if let SectionBody::Code { code, .. } = &section.body
                && code.trim().is_empty()
            {
                return Err(ContentError::EmptyCode {
                    slug: project.slug.to_owned(),
                    heading: section.heading.to_owned(),
                });
            }
        }
    }
    Ok(())
}

fn is_url_safe(slug: &str) -> bool {
    slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
