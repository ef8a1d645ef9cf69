//! Project and section records.
//!
//! DESIGN
//! ======
//! Section kinds are a sum type so each variant carries exactly its own
//! fields. Images and slides hang off the section itself and may accompany
//! any kind.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use crate::validate::ContentError;

/// One portfolio case study.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    /// Unique, URL-safe key used in `/work/{slug}`.
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub summary: &'static str,
    pub thumbnail: &'static str,
    pub hero_image: &'static str,
    pub tags: &'static [&'static str],
    /// Free text; the first four-digit run is used as the sort year.
    pub timeline: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub tools: &'static [&'static str],
    pub team: Option<&'static str>,
    pub link: Option<&'static str>,
    pub sections: &'static [Section],
    /// Reserved. No view reads it.
    pub tier: Tier,
    /// Highlighted on the home page.
    pub featured: bool,
    /// Listed on `/work` and routable at `/work/{slug}`.
    pub visible: bool,
}

impl Project {
    /// Metadata rows shown under the detail hero, in display order.
    ///
    /// The team row is only present when the project names one.
    #[must_use]
    pub fn meta_rows(&self) -> Vec<(&'static str, &'static str)> {
        let mut rows = vec![("Role", self.role), ("Duration", self.duration), ("Timeline", self.timeline)];
        if let Some(team) = self.team {
            rows.push(("Team", team));
        }
        rows
    }
}

/// Project ranking ordinal (1-3).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl Tier {
    /// Parse the 1-based ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidTier`] outside `1..=3`.
    pub fn from_ordinal(value: u8) -> Result<Self, ContentError> {
        match value {
            1 => Ok(Self::Primary),
            2 => Ok(Self::Secondary),
            3 => Ok(Self::Tertiary),
            other => Err(ContentError::InvalidTier(other)),
        }
    }

    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Tertiary => 3,
        }
    }
}

/// One content block within a project body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub content: &'static str,
    pub body: SectionBody,
    pub images: &'static [&'static str],
    pub slides: &'static [&'static str],
}

impl Section {
    /// A plain prose section with no attachments.
    #[must_use]
    pub const fn standard(heading: &'static str, content: &'static str) -> Self {
        Self { heading, content, body: SectionBody::Standard, images: &[], slides: &[] }
    }

    #[must_use]
    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }
}

/// Kind-specific section payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SectionBody {
    /// Prose only. Sections without an explicit kind land here.
    #[default]
    Standard,
    /// Hardware/software tooling breakdown.
    Stack { hardware: &'static [&'static str], software: &'static [&'static str] },
    /// A code sample with its language label.
    Code { code: &'static str, language: &'static str },
    /// Ordered attempted-and-resolved problems.
    Failure { iterations: &'static [Iteration] },
}

impl SectionBody {
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Standard => SectionKind::Standard,
            Self::Stack { .. } => SectionKind::Stack,
            Self::Code { .. } => SectionKind::Code,
            Self::Failure { .. } => SectionKind::Failure,
        }
    }
}

/// One step of a failure log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Iteration {
    pub version: &'static str,
    pub issue: &'static str,
    pub fix: &'static str,
}

/// Discriminator for [`SectionBody`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionKind {
    #[default]
    Standard,
    Stack,
    Code,
    Failure,
}

impl SectionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Stack => "stack",
            Self::Code => "code",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "stack" => Ok(Self::Stack),
            "code" => Ok(Self::Code),
            "failure" => Ok(Self::Failure),
            other => Err(ContentError::UnknownSectionKind(other.to_owned())),
        }
    }
}
