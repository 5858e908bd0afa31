//! Core types for folio-tui.
//!
//! These types define the foundation that everything builds on: section
//! identity, color values for the presenter, and time units for the
//! cooperative animation clock.

// =============================================================================
// Section Identity
// =============================================================================

/// The sections of the page, in document order.
///
/// Each section owns its own visibility trigger and stagger animator
/// instance. `Hero` is the landing section and carries the navigation
/// bar; it has no scroll anchor of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const fn all() -> &'static [SectionId] {
        &[
            Self::Hero,
            Self::About,
            Self::Skills,
            Self::Experience,
            Self::Projects,
            Self::Contact,
        ]
    }

    /// The anchor name used as a scroll target, if the section has one.
    pub const fn anchor(&self) -> Option<&'static str> {
        match self {
            Self::Hero => None,
            Self::About => Some("about"),
            Self::Skills => Some("skills"),
            Self::Experience => Some("experience"),
            Self::Projects => Some("projects"),
            Self::Contact => Some("contact"),
        }
    }

    /// Parse from an anchor name (case-insensitive).
    pub fn from_anchor(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "about" => Some(Self::About),
            "skills" => Some(Self::Skills),
            "experience" => Some(Self::Experience),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Theme tokens resolve to pairs of these in the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const SLATE: Self = Self::rgb(100, 116, 139);
    pub const SLATE_DARK: Self = Self::rgb(71, 85, 105);

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

// =============================================================================
// Time
// =============================================================================

/// Animation time in milliseconds since an arbitrary epoch.
///
/// The host loop supplies monotonically non-decreasing instants to
/// `tick(now)`; the crate never reads a wall clock itself.
pub type TimeMs = u64;

/// Convert fractional seconds to `TimeMs`.
#[inline]
pub const fn millis(units: f32) -> TimeMs {
    (units * 1000.0) as TimeMs
}

// =============================================================================
// Tests
// =============================================================================
