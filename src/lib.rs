//! # folio-tui
//!
//! Scroll-reactive portfolio renderer for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Content flows one way through pure layers:
//!
//! ```text
//! ContentSnapshot → Derivation Rules → Section Renderers → Node tree → presenter
//!                        ↑ entered                ↑ poses
//!            Visibility Trigger          Stagger Animator
//! ```
//!
//! A content snapshot is supplied once per render pass; derivation rules
//! turn its text fields into display tokens; each section renderer builds
//! a visual tree whose animation poses are controlled by that section's
//! visibility trigger (one-way `unseen -> seen`) and stagger scheduler
//! (deterministic `index x interval` delays, nested lists on finer
//! clocks). Everything is single-threaded and cooperative: time only
//! advances when the host loop ticks.
//!
//! ## Modules
//!
//! - [`types`] - Section identity, colors, the cooperative time unit
//! - [`content`] - Typed content records and snapshot loading
//! - [`derive`] - Pure derivation rules (icons, themes, status, ordering)
//! - [`state`] - Visibility triggers and the contact form machine
//! - [`animate`] - Animation profiles and the reveal scheduler
//! - [`sections`] - The six section renderers
//! - [`render`] - The visual tree and the ANSI presenter
//! - [`nav`] - Named anchors and smooth scrolling

pub mod animate;
pub mod content;
pub mod derive;
pub mod nav;
pub mod render;
pub mod sections;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use content::{
    Contact, ContentError, ContentSnapshot, ExperienceItem, Link, Person, ProjectItem,
    ProjectLinks, SkillCategory, Technology,
};

pub use derive::{
    category_icon, company_accent, company_gradient, company_icon, project_icon, skill_level,
    sorted_by_recency, start_year, status_of, AccentToken, GradientToken, Status,
};

pub use state::{
    // Visibility
    default_threshold, is_seen, mark_all_seen, mark_seen, observe, report_intersection,
    reset_visibility_state, seen_signal,
    // Form
    ContactForm, FormField, FormPhase, SUBMIT_DELAY_MS,
};

pub use animate::{
    hover_transform, is_revealed, pending_count, reset_stagger_state, schedule_section,
    section_profile, teardown, tick, AnimationProfile, ChildSpec, HoverKind, RevealEvent,
    RevealKind, RevealTarget, Transform,
};

pub use sections::{child_specs, render_section};

pub use render::{ansi::Presenter, Node, NodeKind, Pose, Style};

pub use nav::{anchor_target, register_anchor, reset_nav_state, scroll_offset, scroll_to, smooth_path};
