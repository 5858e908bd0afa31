//! Navigation - named anchors and smooth scrolling.
//!
//! The anchored sections register their row offsets as scroll targets;
//! `scroll_to` is the page's only cross-section affordance. Smooth
//! behavior is an eased offset path the host applies one step per frame,
//! so nothing here blocks or owns a timer.

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{signal, Signal};

use crate::types::SectionId;

/// Frames in a smooth scroll path.
const SCROLL_STEPS: u16 = 12;

// =============================================================================
// Registry
// =============================================================================

thread_local! {
    static ANCHORS: RefCell<HashMap<SectionId, u16>> = RefCell::new(HashMap::new());
    static SCROLL_OFFSET: Signal<u16> = signal(0);
}

/// Register (or move) a section's anchor at a row offset. Sections
/// without an anchor name are not scroll targets and are ignored.
pub fn register_anchor(section: SectionId, row: u16) {
    if section.anchor().is_none() {
        return;
    }
    ANCHORS.with(|anchors| {
        anchors.borrow_mut().insert(section, row);
    });
}

/// Row offset registered for an anchor name, if any.
pub fn anchor_target(name: &str) -> Option<u16> {
    let section = SectionId::from_anchor(name)?;
    ANCHORS.with(|anchors| anchors.borrow().get(&section).copied())
}

/// The current scroll offset signal (the presenter's viewport top row).
pub fn scroll_offset() -> Signal<u16> {
    SCROLL_OFFSET.with(|sig| sig.clone())
}

/// Clear anchors and reset the offset (for tests).
pub fn reset_nav_state() {
    ANCHORS.with(|anchors| anchors.borrow_mut().clear());
    SCROLL_OFFSET.with(|sig| sig.set(0));
}

// =============================================================================
// Smooth Scroll
// =============================================================================

/// Eased offsets from `from` to `to`, ending exactly at `to`.
///
/// Ease-out cubic: fast start, gentle landing. Returns an empty path
/// when already there.
pub fn smooth_path(from: u16, to: u16) -> Vec<u16> {
    if from == to {
        return Vec::new();
    }
    let delta = to as f32 - from as f32;
    (1..=SCROLL_STEPS)
        .map(|step| {
            let t = step as f32 / SCROLL_STEPS as f32;
            let eased = 1.0 - (1.0 - t).powi(3);
            (from as f32 + delta * eased).round() as u16
        })
        .collect()
}

/// Begin a smooth scroll to a named anchor.
///
/// Returns the eased offset path from the current offset; the host
/// applies one entry per frame, writing each into the offset signal.
/// Unknown or unregistered anchors scroll nowhere.
pub fn scroll_to(name: &str) -> Vec<u16> {
    let Some(target) = anchor_target(name) else {
        return Vec::new();
    };
    smooth_path(scroll_offset().get(), target)
}

// =============================================================================
// Tests
// =============================================================================
