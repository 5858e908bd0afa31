//! Stagger Animator - profiles and the cooperative reveal scheduler.
//!
//! Animation behavior is carried by explicit, named profile records - one
//! per section, passed in by the section rather than read from ambient
//! shared constants. The scheduler turns a section's `unseen -> seen`
//! transition into a deterministic set of reveal deadlines (container
//! first, children at `index x interval`, nested lists on their own finer
//! clock) that the host loop drains with `tick(now)`.
//!
//! Hover micro-animations live here too but share no state with the
//! reveal machine: they are stateless pure transforms that may run before,
//! during or after the entrance sequence.

pub mod profile;
pub mod stagger;

pub use profile::{
    hover_transform, section_profile, AnimationProfile, HoverKind, RevealKind, Transform,
};
pub use stagger::{
    is_revealed, pending_count, reset_stagger_state, schedule_section, teardown, tick, ChildSpec,
    RevealEvent, RevealTarget,
};
