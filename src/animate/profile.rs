//! Animation profiles - named motion presets per section.
//!
//! Each section owns its profile instance; nothing here is shared mutable
//! state. A profile pins down the hidden pose, the container and item
//! durations, and the three stagger clocks:
//!
//! - `stagger_interval` - direct children of the section container
//! - `nested_interval` - first-level nested lists (achievements, skill
//!   rows), scoped to their parent's reveal
//! - `fine_interval` - technology chips, the finest clock
//!
//! Delay arithmetic is deterministic: the delay for child `i` is exactly
//! `i x interval`, independent of what siblings cost to render.

use crate::types::{millis, SectionId, TimeMs};

// =============================================================================
// Reveal Kinds
// =============================================================================

/// The hidden pose an element starts in before its reveal plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealKind {
    /// Start `offset` rows below the final position at zero opacity.
    SlideUp { offset: u16 },
    /// Start scaled down to `from` at zero opacity.
    ScaleIn { from: f32 },
}

// =============================================================================
// Profile
// =============================================================================

/// One section's motion preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationProfile {
    pub reveal: RevealKind,
    pub container_duration: TimeMs,
    pub item_duration: TimeMs,
    pub stagger_interval: TimeMs,
    pub nested_interval: TimeMs,
    pub fine_interval: TimeMs,
}

impl AnimationProfile {
    /// Delay of direct child `i` relative to the container's reveal.
    pub const fn child_delay(&self, index: usize) -> TimeMs {
        index as TimeMs * self.stagger_interval
    }

    /// Delay of nested item `i` relative to its parent child's reveal.
    pub const fn nested_delay(&self, index: usize) -> TimeMs {
        index as TimeMs * self.nested_interval
    }

    /// Delay of chip `i` relative to its parent child's reveal.
    pub const fn fine_delay(&self, index: usize) -> TimeMs {
        index as TimeMs * self.fine_interval
    }
}

/// The per-section presets, matching the page's original motion design.
pub const fn section_profile(section: SectionId) -> AnimationProfile {
    match section {
        SectionId::Hero => AnimationProfile {
            reveal: RevealKind::SlideUp { offset: 3 },
            container_duration: millis(0.6),
            item_duration: millis(0.6),
            stagger_interval: millis(0.2),
            nested_interval: millis(0.1),
            fine_interval: millis(0.05),
        },
        SectionId::About => AnimationProfile {
            reveal: RevealKind::SlideUp { offset: 3 },
            container_duration: millis(0.8),
            item_duration: millis(0.6),
            stagger_interval: millis(0.2),
            nested_interval: millis(0.1),
            fine_interval: millis(0.05),
        },
        SectionId::Skills => AnimationProfile {
            reveal: RevealKind::ScaleIn { from: 0.8 },
            container_duration: millis(0.8),
            item_duration: millis(0.6),
            stagger_interval: millis(0.1),
            nested_interval: millis(0.05),
            fine_interval: millis(0.05),
        },
        SectionId::Experience => AnimationProfile {
            reveal: RevealKind::SlideUp { offset: 4 },
            container_duration: millis(0.5),
            item_duration: millis(0.5),
            stagger_interval: millis(0.15),
            nested_interval: millis(0.1),
            fine_interval: millis(0.03),
        },
        SectionId::Projects => AnimationProfile {
            reveal: RevealKind::SlideUp { offset: 5 },
            container_duration: millis(0.8),
            item_duration: millis(0.6),
            stagger_interval: millis(0.2),
            nested_interval: millis(0.1),
            fine_interval: millis(0.05),
        },
        SectionId::Contact => AnimationProfile {
            reveal: RevealKind::SlideUp { offset: 3 },
            container_duration: millis(0.8),
            item_duration: millis(0.6),
            stagger_interval: millis(0.2),
            nested_interval: millis(0.1),
            fine_interval: millis(0.05),
        },
    }
}

// =============================================================================
// Hover Micro-Animations
// =============================================================================

/// A reversible pointer-over transform. Identity at rest; no state is
/// kept anywhere, so hovers cannot interact with the reveal machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub dx: i16,
    pub dy: i16,
    pub rotate_deg: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        dx: 0,
        dy: 0,
        rotate_deg: 0.0,
    };
}

/// The hoverable element kinds on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverKind {
    /// Company icon badge: grow and tip.
    IconBadge,
    /// Technology chip: grow and lift slightly.
    Chip,
    /// Card surface: lift.
    Card,
    /// Skill row: nudge right.
    Row,
}

/// Pointer-over transform for an element kind. Pure and stateless: call
/// with the same kind, get the same transform, before, during or after
/// any entrance sequence.
pub const fn hover_transform(kind: HoverKind) -> Transform {
    match kind {
        HoverKind::IconBadge => Transform {
            scale: 1.1,
            dx: 0,
            dy: 0,
            rotate_deg: 5.0,
        },
        HoverKind::Chip => Transform {
            scale: 1.05,
            dx: 0,
            dy: -1,
            rotate_deg: 0.0,
        },
        HoverKind::Card => Transform {
            scale: 1.02,
            dx: 0,
            dy: -1,
            rotate_deg: 0.0,
        },
        HoverKind::Row => Transform {
            scale: 1.0,
            dx: 2,
            dy: 0,
            rotate_deg: 0.0,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
