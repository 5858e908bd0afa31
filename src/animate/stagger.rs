//! Reveal scheduler - cooperative timers for staggered entrances.
//!
//! When a section flips to seen, [`schedule_section`] records one deadline
//! per animated element: the container at the trigger instant, direct
//! child `i` at `i x stagger_interval` after it, and each nested item on
//! its parent child's own finer clock. The host loop drains due reveals
//! with [`tick`], which returns them in deadline order.
//!
//! Within a section the container's deadline is never later than any
//! child's; across sections nothing is ordered - each section schedules
//! independently off its own trigger instant.
//!
//! [`teardown`] discards every pending deadline for a section, so a
//! section removed mid-entrance leaves no callback behind to fire after
//! its tree is gone. A section whose content is absent is simply never
//! scheduled: no timers, nothing to cancel.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::profile::AnimationProfile;
use crate::types::{SectionId, TimeMs};

// =============================================================================
// Targets and Events
// =============================================================================

/// One animated element inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    /// The section container itself.
    Container,
    /// Direct child `index` of the container.
    Child(usize),
    /// Item `index` of child `child`'s nested list.
    Nested { child: usize, index: usize },
    /// Chip `index` of child `child`'s technology list.
    Fine { child: usize, index: usize },
}

/// A reveal that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    pub section: SectionId,
    pub target: RevealTarget,
    pub at: TimeMs,
}

/// Per-child nested list sizes, in child order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildSpec {
    /// First-level nested items (achievements, skill rows).
    pub nested: usize,
    /// Technology chips.
    pub fine: usize,
}

// =============================================================================
// Registry
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Pending {
    target: RevealTarget,
    /// Deadline instant.
    at: TimeMs,
    /// Monotone insertion rank; ties on `at` drain in schedule order.
    rank: usize,
}

#[derive(Default)]
struct SectionSchedule {
    pending: Vec<Pending>,
    revealed: HashSet<RevealTarget>,
}

thread_local! {
    static SCHEDULES: RefCell<HashMap<SectionId, SectionSchedule>> = RefCell::new(HashMap::new());
}

// =============================================================================
// Public API
// =============================================================================

/// Schedule a section's entrance at trigger instant `now`.
///
/// `children` carries one spec per direct child; childless sections pass
/// an empty slice. Re-scheduling an already scheduled section is a no-op:
/// the entrance plays at most once.
pub fn schedule_section(
    section: SectionId,
    profile: &AnimationProfile,
    children: &[ChildSpec],
    now: TimeMs,
) {
    SCHEDULES.with(|schedules| {
        let mut schedules = schedules.borrow_mut();
        if schedules.contains_key(&section) {
            return;
        }

        let mut pending = Vec::new();
        let mut rank = 0;
        let mut push = |target: RevealTarget, at: TimeMs| {
            pending.push(Pending { target, at, rank });
            rank += 1;
        };

        // Container reveals at the trigger instant, so its deadline is
        // <= every child's (all extra delays are >= 0).
        push(RevealTarget::Container, now);

        for (child, spec) in children.iter().enumerate() {
            let child_at = now + profile.child_delay(child);
            push(RevealTarget::Child(child), child_at);

            // Nested staggers are scoped to the parent child's reveal,
            // not the section container's.
            for index in 0..spec.nested {
                push(
                    RevealTarget::Nested { child, index },
                    child_at + profile.nested_delay(index),
                );
            }
            for index in 0..spec.fine {
                push(
                    RevealTarget::Fine { child, index },
                    child_at + profile.fine_delay(index),
                );
            }
        }

        schedules.insert(
            section,
            SectionSchedule {
                pending,
                revealed: HashSet::new(),
            },
        );
    });
}

/// Drain reveals due at or before `now`, in deadline order.
pub fn tick(now: TimeMs) -> Vec<RevealEvent> {
    SCHEDULES.with(|schedules| {
        let mut schedules = schedules.borrow_mut();
        let mut due: Vec<(Pending, SectionId)> = Vec::new();

        for (&section, schedule) in schedules.iter_mut() {
            let mut i = 0;
            while i < schedule.pending.len() {
                if schedule.pending[i].at <= now {
                    let pending = schedule.pending.swap_remove(i);
                    schedule.revealed.insert(pending.target);
                    due.push((pending, section));
                } else {
                    i += 1;
                }
            }
        }

        due.sort_by_key(|(pending, _)| (pending.at, pending.rank));
        due.into_iter()
            .map(|(pending, section)| RevealEvent {
                section,
                target: pending.target,
                at: pending.at,
            })
            .collect()
    })
}

/// Whether an element's reveal has played.
pub fn is_revealed(section: SectionId, target: RevealTarget) -> bool {
    SCHEDULES.with(|schedules| {
        schedules
            .borrow()
            .get(&section)
            .map(|s| s.revealed.contains(&target))
            .unwrap_or(false)
    })
}

/// Number of reveals still waiting for a section.
pub fn pending_count(section: SectionId) -> usize {
    SCHEDULES.with(|schedules| {
        schedules
            .borrow()
            .get(&section)
            .map(|s| s.pending.len())
            .unwrap_or(0)
    })
}

/// Discard everything for a section: pending deadlines and reveal record.
/// Call when the section leaves the tree; later ticks yield nothing for it.
pub fn teardown(section: SectionId) {
    SCHEDULES.with(|schedules| {
        schedules.borrow_mut().remove(&section);
    });
}

/// Clear all schedules (for tests).
pub fn reset_stagger_state() {
    SCHEDULES.with(|schedules| schedules.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================
