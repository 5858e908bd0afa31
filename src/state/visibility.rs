//! Visibility Trigger - One-way per-section reveal state.
//!
//! Each section owns an independent `unseen -> seen` state machine. The
//! transition fires the first time the section's on-screen intersection
//! ratio crosses its threshold and never reverts: scrolling a section back
//! out of view does not re-hide it, so the entrance animation plays at
//! most once per page lifetime.
//!
//! If the host environment has no visibility primitive at all, call
//! [`mark_all_seen`]: content must never stay permanently hidden for lack
//! of a capability.
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::state::visibility;
//! use folio_tui::types::SectionId;
//!
//! visibility::observe(SectionId::Skills, None);
//! visibility::report_intersection(SectionId::Skills, 0.25);
//! assert!(visibility::is_seen(SectionId::Skills));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{signal, Signal};

use crate::types::SectionId;

// =============================================================================
// Registry
// =============================================================================

struct TriggerEntry {
    /// Flips to true exactly once.
    seen: Signal<bool>,
    /// Fraction of the section box that must be visible to fire.
    threshold: f32,
}

thread_local! {
    static TRIGGERS: RefCell<HashMap<SectionId, TriggerEntry>> = RefCell::new(HashMap::new());
}

/// Section-specific default thresholds, matching how much of each box
/// must scroll into view before it reveals. Hero reveals on mount.
pub const fn default_threshold(section: SectionId) -> f32 {
    match section {
        SectionId::Hero => 0.0,
        SectionId::About => 0.3,
        SectionId::Skills => 0.2,
        SectionId::Experience => 0.1,
        SectionId::Projects => 0.1,
        SectionId::Contact => 0.3,
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Register a trigger for a section. Idempotent: re-observing keeps the
/// existing state (a seen section stays seen) and only updates the
/// threshold. `threshold` of `None` uses the section default.
pub fn observe(section: SectionId, threshold: Option<f32>) {
    let threshold = threshold.unwrap_or(default_threshold(section));
    TRIGGERS.with(|triggers| {
        let mut triggers = triggers.borrow_mut();
        triggers
            .entry(section)
            .and_modify(|entry| entry.threshold = threshold)
            .or_insert_with(|| TriggerEntry {
                seen: signal(false),
                threshold,
            });
    });
}

/// Feed an intersection ratio (0.0 - 1.0) for a section.
///
/// Fires the `unseen -> seen` transition the first time
/// `ratio >= threshold`. Returns `true` only on the firing call; later
/// calls (including ratios below the threshold) change nothing.
pub fn report_intersection(section: SectionId, ratio: f32) -> bool {
    TRIGGERS.with(|triggers| {
        let triggers = triggers.borrow();
        let Some(entry) = triggers.get(&section) else {
            return false;
        };
        if entry.seen.get() || ratio < entry.threshold {
            return false;
        }
        entry.seen.set(true);
        true
    })
}

/// Whether the section has been seen. Unobserved sections report false.
pub fn is_seen(section: SectionId) -> bool {
    TRIGGERS.with(|triggers| {
        triggers
            .borrow()
            .get(&section)
            .map(|entry| entry.seen.get())
            .unwrap_or(false)
    })
}

/// The reactive seen signal for a section, for derived state and effects.
pub fn seen_signal(section: SectionId) -> Option<Signal<bool>> {
    TRIGGERS.with(|triggers| triggers.borrow().get(&section).map(|e| e.seen.clone()))
}

/// Force a single section to seen (e.g. the hero on mount).
pub fn mark_seen(section: SectionId) {
    TRIGGERS.with(|triggers| {
        if let Some(entry) = triggers.borrow().get(&section) {
            if !entry.seen.get() {
                entry.seen.set(true);
            }
        }
    });
}

/// Capability fallback: treat every observed section as immediately seen.
pub fn mark_all_seen() {
    TRIGGERS.with(|triggers| {
        for entry in triggers.borrow().values() {
            if !entry.seen.get() {
                entry.seen.set(true);
            }
        }
    });
}

/// Clear all triggers (for tests).
pub fn reset_visibility_state() {
    TRIGGERS.with(|triggers| triggers.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================
