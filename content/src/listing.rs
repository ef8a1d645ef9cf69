//! Work-page filtering and sorting.
//!
//! Categories are keyword sets matched against the free-form tag list. No
//! taxonomy guarantees a tag lands in exactly one category, so a project can
//! appear under several filters or none.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::model::Project;

/// Filter pill shown above the work grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Hardware,
    Software,
    MlCv,
    Design,
}

impl Category {
    /// All categories in pill order.
    pub const ALL: [Self; 5] = [Self::All, Self::Hardware, Self::Software, Self::MlCv, Self::Design];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::MlCv => "ML / CV",
            Self::Design => "Design",
        }
    }

    /// Tags that place a project in this category. Empty for `All`.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::All => &[],
            Self::Hardware => &["IoT", "Arduino", "BLE", "Embedded Systems", "LiDAR", "Sensor Fusion"],
            Self::Software => &["Swift", "iOS", "Python", "React", "TypeScript", "ARKit"],
            Self::MlCv => &["Computer Vision", "ML Engineering", "PyTorch", "YOLOv11", "Medical AI", "TensorFlow"],
            Self::Design => &["CAD", "Prototyping", "UX Design", "Figma", "Product Strategy"],
        }
    }

    #[must_use]
    pub fn matches(self, tags: &[&str]) -> bool {
        match self {
            Self::All => true,
            other => tags.iter().any(|tag| other.keywords().contains(tag)),
        }
    }
}

/// Year ordering for the work grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
        }
    }
}

/// First run of four ASCII digits in `timeline`, or 0.
#[must_use]
pub fn parse_year(timeline: &str) -> u16 {
    timeline
        .as_bytes()
        .windows(4)
        .find(|w| w.iter().all(u8::is_ascii_digit))
        .map_or(0, |w| w.iter().fold(0_u16, |acc, d| acc * 10 + u16::from(d - b'0')))
}

/// Filter by category, then stable-sort by year.
///
/// Ties keep their input order in both directions, so toggling the order twice
/// reproduces the original listing.
#[must_use]
pub fn listing<'a>(projects: &[&'a Project], category: Category, order: SortOrder) -> Vec<&'a Project> {
    let mut out = projects
        .iter()
        .copied()
        .filter(|p| category.matches(p.tags))
        .collect::<Vec<_>>();
    match order {
        SortOrder::Newest => out.sort_by_key(|p| std::cmp::Reverse(parse_year(p.timeline))),
        SortOrder::Oldest => out.sort_by_key(|p| parse_year(p.timeline)),
    }
    out
}
