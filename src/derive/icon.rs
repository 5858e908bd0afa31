//! Icon glyph derivation.
//!
//! Maps a company name, skill-category label or project name to an emoji
//! glyph through ordered keyword tables. First match wins; unmatched
//! inputs get the table's default glyph.

use super::first_match;

// =============================================================================
// Tables
// =============================================================================

/// Company name -> glyph. Order matters; do not sort.
const COMPANY_ICONS: &[(&str, &str)] = &[
    ("freelancer", "💼"),
    ("zerofiltre", "🌐"),
    ("om1", "🏢"),
    ("prestigia", "🏨"),
    ("innovx", "🚀"),
    ("upwork", "💼"),
];

const COMPANY_DEFAULT: &str = "🏭";

/// Skill-category label -> glyph. Alternatives ("cloud"/"devops") are
/// separate adjacent rows mapping to the same glyph.
const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("backend", "🏗️"),
    ("cloud", "☁️"),
    ("devops", "☁️"),
    ("ai", "🤖"),
    ("machine", "🤖"),
    ("database", "🗄️"),
    ("programming", "💻"),
    ("test", "🧪"),
    ("tools", "🔧"),
];

const CATEGORY_DEFAULT: &str = "📚";

/// Project name -> glyph.
const PROJECT_ICONS: &[(&str, &str)] = &[
    ("hotel", "🏨"),
    ("ai", "🏨"),
    ("tourba", "🚀"),
    ("performance", "🚀"),
    ("accident", "⚕️"),
    ("management", "⚕️"),
];

const PROJECT_DEFAULT: &str = "💼";

// =============================================================================
// Lookups
// =============================================================================

/// Glyph for an experience card header.
pub fn company_icon(company: &str) -> &'static str {
    first_match(company, COMPANY_ICONS, COMPANY_DEFAULT)
}

/// Glyph for a skill-category header.
pub fn category_icon(category: &str) -> &'static str {
    first_match(category, CATEGORY_ICONS, CATEGORY_DEFAULT)
}

/// Glyph for a project title header.
pub fn project_icon(name: &str) -> &'static str {
    first_match(name, PROJECT_ICONS, PROJECT_DEFAULT)
}

// =============================================================================
// Tests
// =============================================================================
