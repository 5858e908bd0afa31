//! Content Schema - Typed records for the portfolio snapshot.
//!
//! The content collaborator supplies one immutable [`ContentSnapshot`] per
//! render pass; the crate only reads it. Every top-level section is optional:
//! an absent key means the section renders nothing, which is a contract, not
//! an error.
//!
//! Field names follow the upstream JSON shape (`keyAchievements`,
//! `associated_with`); serde renames bridge the difference where Rust
//! naming diverges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Records
// =============================================================================

/// An opaque technology reference: a display name plus an icon reference
/// resolved by the rendering surface (e.g. fetched as an image). The crate
/// never validates the icon's reachability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub icon: String,
}

/// Contact affordances. Each field is independently optional: a missing
/// email suppresses only the email affordance, never the whole block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A named outbound link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// Identity record backing the hero, about and contact sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl Person {
    /// Initials monogram for the avatar badge ("Jane Doe" -> "JD").
    /// Falls back to "IE" when the name yields no initials.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        if initials.is_empty() {
            "IE".to_string()
        } else {
            initials
        }
    }

    /// Find a link whose name contains `needle` (case-insensitive).
    pub fn find_link(&self, needle: &str) -> Option<&Link> {
        let needle = needle.to_lowercase();
        self.links
            .as_deref()?
            .iter()
            .find(|link| link.name.to_lowercase().contains(&needle))
    }
}

/// One professional engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    /// Date range as free text, optionally open-ended with a literal
    /// "Present" marker (e.g. "Jan 2022 - Present"). Never parsed as a
    /// calendar date; see the derivation rules.
    pub duration: String,
    pub description: String,
    #[serde(
        default,
        rename = "keyAchievements",
        skip_serializing_if = "Option::is_none"
    )]
    pub key_achievements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<Technology>>,
}

/// Project links: either a single URL or an ordered list. Only the first
/// URL drives the primary call-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectLinks {
    One(String),
    Many(Vec<String>),
}

impl ProjectLinks {
    /// The primary call-to-action URL, if any.
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::One(url) => Some(url.as_str()),
            Self::Many(urls) => urls.first().map(String::as_str),
        }
    }
}

/// One featured project, described as challenge / solution / outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_with: Option<String>,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<Technology>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
}

/// A labeled group of technologies ("Backend", "Cloud & DevOps", ...).
/// `technologies` is non-empty by contract with the content collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub technologies: Vec<Technology>,
}

// =============================================================================
// Snapshot
// =============================================================================

/// The full content snapshot, supplied once per render pass.
///
/// Every section key is optional. Unknown keys are ignored so the schema
/// stays forward-tolerant with whatever the content source grows next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default, rename = "aboutMe", skip_serializing_if = "Option::is_none")]
    pub about_me: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectItem>>,
}

impl ContentSnapshot {
    /// Load a snapshot from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let snapshot = serde_json::from_str(json)?;
        Ok(snapshot)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failures at the content-loading boundary. Everything past this point
/// is total: absent sections and fields degrade silently by contract.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// Tests
// =============================================================================
