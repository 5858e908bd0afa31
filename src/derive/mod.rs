//! Derivation Rules - Pure display metadata from content text.
//!
//! Every function in this module is a total function over arbitrary input
//! strings: one input, exactly one output token, a documented default when
//! nothing matches, never a panic. Rules are explicit ordered
//! `(keyword, token)` tables rather than conditional chains so the match
//! priority is visible and independently testable.
//!
//! # Modules
//!
//! - [`icon`] - keyword -> icon glyph tables (company, category, project)
//! - [`theme`] - keyword -> gradient/accent theme tokens
//! - [`status`] - duration string -> current/completed classification
//! - [`ordering`] - start-year extraction and recency sort
//! - [`level`] - deterministic skill-level bar width

pub mod icon;
pub mod level;
pub mod ordering;
pub mod status;
pub mod theme;

pub use icon::{category_icon, company_icon, project_icon};
pub use level::skill_level;
pub use ordering::{sorted_by_recency, start_year};
pub use status::{status_of, Status};
pub use theme::{company_accent, company_gradient, AccentToken, GradientToken};

/// Case-insensitive first-match lookup over an ordered keyword table.
///
/// Table order is load-bearing: keywords are substrings and not mutually
/// exclusive, so an input containing two keywords resolves to whichever
/// rule is listed first.
pub(crate) fn first_match<T: Copy>(input: &str, table: &[(&str, T)], default: T) -> T {
    let lower = input.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, token)| *token)
        .unwrap_or(default)
}
