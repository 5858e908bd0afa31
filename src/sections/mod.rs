//! Section Renderers - content + entered flag in, visual tree out.
//!
//! Each renderer is a pure function `(Option<&T>, entered) -> Option<Node>`:
//! no I/O, no persistence, no global writes. Absent content renders
//! nothing - that is the empty-state contract, not an error. The entered
//! flag comes from the section's visibility trigger; before it fires,
//! every animated node is emitted in its hidden pose.
//!
//! Renderers also expose `child_specs(data)` so the host can hand the
//! stagger scheduler the exact child/nested shape the tree will have.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::animate::{section_profile, AnimationProfile, ChildSpec, RevealTarget};
use crate::content::ContentSnapshot;
use crate::render::{Node, Pose};
use crate::state::{visibility, ContactForm};
use crate::types::{SectionId, TimeMs};

// =============================================================================
// Pose Helpers
// =============================================================================

/// Pose for the section container: reveals at the trigger instant.
pub(crate) fn container_pose(profile: &AnimationProfile, entered: bool) -> Pose {
    if entered {
        Pose::Reveal {
            kind: profile.reveal,
            delay: 0,
            duration: profile.container_duration,
        }
    } else {
        Pose::Hidden(profile.reveal)
    }
}

fn reveal_at(profile: &AnimationProfile, delay: TimeMs, entered: bool) -> Pose {
    if entered {
        Pose::Reveal {
            kind: profile.reveal,
            delay,
            duration: profile.item_duration,
        }
    } else {
        Pose::Hidden(profile.reveal)
    }
}

/// Pose for direct child `index`: `index x stagger_interval`.
pub(crate) fn child_pose(profile: &AnimationProfile, index: usize, entered: bool) -> Pose {
    reveal_at(profile, profile.child_delay(index), entered)
}

/// Pose for nested item `index`, scoped to its parent child's reveal.
pub(crate) fn nested_pose(profile: &AnimationProfile, index: usize, entered: bool) -> Pose {
    reveal_at(profile, profile.nested_delay(index), entered)
}

/// Pose for chip `index`, the finest clock.
pub(crate) fn fine_pose(profile: &AnimationProfile, index: usize, entered: bool) -> Pose {
    reveal_at(profile, profile.fine_delay(index), entered)
}

/// Apply the direct-child stagger to a list of children, in list order.
pub(crate) fn staggered(
    profile: &AnimationProfile,
    entered: bool,
    children: Vec<Node>,
) -> Vec<Node> {
    children
        .into_iter()
        .enumerate()
        .map(|(index, child)| child.with_pose(child_pose(profile, index, entered)))
        .collect()
}

// =============================================================================
// Snapshot Entry Points
// =============================================================================

/// Render one section from the snapshot, reading the section's own
/// visibility trigger. Absent content yields `None` and performs no work.
pub fn render_section(
    section: SectionId,
    snapshot: &ContentSnapshot,
    form: &ContactForm,
) -> Option<Node> {
    let entered = visibility::is_seen(section);
    match section {
        SectionId::Hero => hero::render(snapshot.about_me.as_ref(), entered),
        SectionId::About => about::render(snapshot.about_me.as_ref(), entered),
        SectionId::Skills => skills::render(snapshot.skills.as_deref(), entered),
        SectionId::Experience => experience::render(snapshot.experience.as_deref(), entered),
        SectionId::Projects => projects::render(snapshot.projects.as_deref(), entered),
        SectionId::Contact => contact::render(snapshot.about_me.as_ref(), form, entered),
    }
}

/// Child/nested shape for the stagger scheduler, matching exactly what
/// the section's renderer will emit. `None` when the section's content
/// is absent - the animator must never initialize for it.
pub fn child_specs(section: SectionId, snapshot: &ContentSnapshot) -> Option<Vec<ChildSpec>> {
    match section {
        SectionId::Hero => snapshot.about_me.as_ref().map(hero::child_specs),
        SectionId::About => snapshot.about_me.as_ref().map(about::child_specs),
        SectionId::Skills => snapshot.skills.as_deref().map(skills::child_specs),
        SectionId::Experience => snapshot.experience.as_deref().map(experience::child_specs),
        SectionId::Projects => snapshot.projects.as_deref().map(projects::child_specs),
        SectionId::Contact => snapshot.about_me.as_ref().map(contact::child_specs),
    }
}

/// Section profile re-export point for hosts wiring renderer + scheduler.
pub fn profile_for(section: SectionId) -> AnimationProfile {
    section_profile(section)
}

/// Map a scheduler reveal event back onto the section's tree shape.
/// Convenience for presenters that re-render on each drained event.
pub fn applies_to(target: RevealTarget, child_count: usize) -> bool {
    match target {
        RevealTarget::Container => true,
        RevealTarget::Child(i) => i < child_count,
        RevealTarget::Nested { child, .. } | RevealTarget::Fine { child, .. } => {
            child < child_count
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
