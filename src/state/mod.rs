//! Per-section reactive state.
//!
//! - [`visibility`] - one-way `unseen -> seen` triggers per section
//! - [`form`] - the contact form's private `Idle -> Submitting -> Idle`
//!   machine
//!
//! Everything here is single-threaded and cooperative: registries live in
//! `thread_local!` storage, time only advances when the host loop calls a
//! `tick(now)`.

pub mod form;
pub mod visibility;

pub use form::{ContactForm, FormField, FormPhase, SUBMIT_DELAY_MS};
pub use visibility::{
    default_threshold, is_seen, mark_all_seen, mark_seen, observe, report_intersection,
    reset_visibility_state, seen_signal,
};
