use super::*;
use crate::model::{Section, Tier};
use crate::projects::PROJECTS;

fn project(slug: &'static str) -> Project {
    Project {
        slug,
        title: "t",
        description: "",
        summary: "",
        thumbnail: "",
        hero_image: "",
        tags: &[],
        timeline: "",
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

static EMPTY_CODE: &[Section] = &[Section {
    heading: "Snippet",
    content: "",
    body: SectionBody::Code { code: "  \n", language: "Rust" },
    images: &[],
    slides: &[],
}];

#[test]
fn shipped_table_is_valid() {
    assert_eq!(validate(PROJECTS), Ok(()));
}

#[test]
fn duplicate_slug_is_rejected() {
    let table = vec![project("a"), project("b"), project("a")];
    assert_eq!(validate(&table), Err(ContentError::DuplicateSlug("a".to_owned())));
}

#[test]
fn empty_slug_is_rejected() {
    assert_eq!(validate(&[project("")]), Err(ContentError::EmptySlug));
}

#[test]
fn slug_must_be_url_safe() {
    assert_eq!(validate(&[project("Has Space")]), Err(ContentError::UnsafeSlug("Has Space".to_owned())));
    assert_eq!(validate(&[project("ok-slug-2")]), Ok(()));
}

#[test]
fn code_section_needs_code() {
    let mut p = project("snippet");
    p.sections = EMPTY_CODE;
    let err = validate(&[p]).expect_err("blank code should fail");
    assert_eq!(err.to_string(), "code section 'Snippet' in 'snippet' has no code");
}
