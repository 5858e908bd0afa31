//! Theme token derivation.
//!
//! A company name resolves to a gradient token (card header background) and
//! an accent token (achievement markers). Tokens are small enums rather
//! than raw color values so the tables stay independent of the presenter;
//! each token knows how to resolve itself to RGB for terminals that want it.

use super::first_match;
use crate::types::Rgba;

// =============================================================================
// Tokens
// =============================================================================

/// Two-stop gradient themes for experience card headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientToken {
    GreenEmerald,
    BlueCyan,
    PurpleViolet,
    BluePurple,
    GreenBlue,
    GreenTeal,
    /// Default for unmatched companies.
    #[default]
    Slate,
}

impl GradientToken {
    /// Resolve to (start, end) RGB stops.
    pub const fn stops(&self) -> (Rgba, Rgba) {
        match self {
            Self::GreenEmerald => (Rgba::rgb(34, 197, 94), Rgba::rgb(5, 150, 105)),
            Self::BlueCyan => (Rgba::rgb(59, 130, 246), Rgba::rgb(8, 145, 178)),
            Self::PurpleViolet => (Rgba::rgb(168, 85, 247), Rgba::rgb(124, 58, 237)),
            Self::BluePurple => (Rgba::rgb(59, 130, 246), Rgba::rgb(147, 51, 234)),
            Self::GreenBlue => (Rgba::rgb(34, 197, 94), Rgba::rgb(37, 99, 235)),
            Self::GreenTeal => (Rgba::rgb(74, 222, 128), Rgba::rgb(13, 148, 136)),
            Self::Slate => (Rgba::SLATE, Rgba::SLATE_DARK),
        }
    }
}

/// Flat accent colors for inline markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentToken {
    Green,
    Blue,
    Purple,
    #[default]
    Slate,
}

impl AccentToken {
    pub const fn color(&self) -> Rgba {
        match self {
            Self::Green => Rgba::rgb(34, 197, 94),
            Self::Blue => Rgba::rgb(59, 130, 246),
            Self::Purple => Rgba::rgb(168, 85, 247),
            Self::Slate => Rgba::SLATE,
        }
    }
}

// =============================================================================
// Tables
// =============================================================================

// Same keyword order as the icon tables; the pairing of keyword to token
// differs per concern, which is why these are separate tables rather than
// one merged row type.

const COMPANY_GRADIENTS: &[(&str, GradientToken)] = &[
    ("freelancer", GradientToken::GreenEmerald),
    ("zerofiltre", GradientToken::BlueCyan),
    ("om1", GradientToken::PurpleViolet),
    ("prestigia", GradientToken::BluePurple),
    ("innovx", GradientToken::GreenBlue),
    ("upwork", GradientToken::GreenTeal),
];

const COMPANY_ACCENTS: &[(&str, AccentToken)] = &[
    ("freelancer", AccentToken::Green),
    ("zerofiltre", AccentToken::Blue),
    ("om1", AccentToken::Purple),
    ("prestigia", AccentToken::Blue),
    ("innovx", AccentToken::Green),
    ("upwork", AccentToken::Green),
];

// =============================================================================
// Lookups
// =============================================================================

/// Gradient token for an experience card header.
pub fn company_gradient(company: &str) -> GradientToken {
    first_match(company, COMPANY_GRADIENTS, GradientToken::Slate)
}

/// Accent token for a company's inline markers.
pub fn company_accent(company: &str) -> AccentToken {
    first_match(company, COMPANY_ACCENTS, AccentToken::Slate)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_lookup() {
        assert_eq!(company_gradient("Freelancer"), GradientToken::GreenEmerald);
        assert_eq!(company_gradient("zerofiltre"), GradientToken::BlueCyan);
        assert_eq!(company_gradient("Unknown Corp"), GradientToken::Slate);
    }

    #[test]
    fn test_accent_lookup() {
        assert_eq!(company_accent("Prestigia"), AccentToken::Blue);
        assert_eq!(company_accent("Upwork"), AccentToken::Green);
        assert_eq!(company_accent(""), AccentToken::Slate);
    }

    #[test]
    fn test_gradient_and_accent_share_priority() {
        // A name matching two keywords resolves both concerns by the same
        // first rule.
        let name = "Upwork Freelancer";
        assert_eq!(company_gradient(name), GradientToken::GreenEmerald);
        assert_eq!(company_accent(name), AccentToken::Green);
    }

    #[test]
    fn test_tokens_resolve_to_opaque_colors() {
        for token in [
            GradientToken::GreenEmerald,
            GradientToken::BlueCyan,
            GradientToken::Slate,
        ] {
            let (start, end) = token.stops();
            assert!(start.is_opaque());
            assert!(end.is_opaque());
        }
        assert!(AccentToken::Purple.color().is_opaque());
    }
}
