//! Contact form state - `Idle -> Submitting -> Idle`.
//!
//! The form is UI-local and ephemeral: four field values plus a submitting
//! flag, private to the contact section. Submission is simulated - no
//! network call happens anywhere in this crate. `submit(now)` arms a
//! deadline; once the host loop ticks past it the fields clear and the
//! submit affordance re-enables. While submitting, inputs are disabled
//! (writes are ignored).
//!
//! The simulated path has no failure branch. That mirrors the upstream
//! behavior deliberately; see DESIGN.md before "fixing" it.

use std::cell::Cell;

use spark_signals::{signal, Signal};

use crate::types::TimeMs;

/// Simulated submission latency.
pub const SUBMIT_DELAY_MS: TimeMs = 2000;

// =============================================================================
// Types
// =============================================================================

/// The form's lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// The four input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const fn all() -> &'static [FormField] {
        &[Self::Name, Self::Email, Self::Subject, Self::Message]
    }
}

// =============================================================================
// ContactForm
// =============================================================================

/// Private input state for the contact section.
pub struct ContactForm {
    name: Signal<String>,
    email: Signal<String>,
    subject: Signal<String>,
    message: Signal<String>,
    phase: Signal<FormPhase>,
    deadline: Cell<Option<TimeMs>>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: signal(String::new()),
            email: signal(String::new()),
            subject: signal(String::new()),
            message: signal(String::new()),
            phase: signal(FormPhase::Idle),
            deadline: Cell::new(None),
        }
    }

    fn field_signal(&self, field: FormField) -> &Signal<String> {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Current value of a field.
    pub fn field(&self, field: FormField) -> String {
        self.field_signal(field).get()
    }

    /// Write a field value. Ignored while submitting: inputs are disabled
    /// for the duration of the simulated request.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        self.field_signal(field).set(value.into());
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.get() == FormPhase::Submitting
    }

    /// Reactive phase signal for the submit affordance.
    pub fn phase_signal(&self) -> Signal<FormPhase> {
        self.phase.clone()
    }

    /// Whether every field has a value (all four inputs are required).
    pub fn is_complete(&self) -> bool {
        FormField::all()
            .iter()
            .all(|field| !self.field(*field).trim().is_empty())
    }

    /// Begin a simulated submission at `now`.
    ///
    /// Accepted only from `Idle` with all four fields filled. Returns
    /// whether the transition happened.
    pub fn submit(&self, now: TimeMs) -> bool {
        if self.is_submitting() || !self.is_complete() {
            return false;
        }
        self.deadline.set(Some(now + SUBMIT_DELAY_MS));
        self.phase.set(FormPhase::Submitting);
        true
    }

    /// Advance the cooperative clock. When the submission deadline passes,
    /// all four fields clear and the form returns to `Idle`.
    pub fn tick(&self, now: TimeMs) {
        let Some(deadline) = self.deadline.get() else {
            return;
        };
        if now < deadline {
            return;
        }
        self.deadline.set(None);
        for field in FormField::all() {
            self.field_signal(*field).set(String::new());
        }
        self.phase.set(FormPhase::Idle);
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let form = ContactForm::new();
        form.set_field(FormField::Name, "Jane");
        form.set_field(FormField::Email, "jane@example.com");
        form.set_field(FormField::Subject, "Project collaboration");
        form.set_field(FormField::Message, "Let's talk.");
        form
    }

    #[test]
    fn test_submit_disables_then_clears_then_reenables() {
        let form = filled_form();

        assert!(form.submit(1_000));
        assert!(form.is_submitting());

        // Before the deadline nothing changes.
        form.tick(1_000 + SUBMIT_DELAY_MS - 1);
        assert!(form.is_submitting());
        assert_eq!(form.field(FormField::Name), "Jane");

        // At the deadline: all four fields clear, affordance re-enables.
        form.tick(1_000 + SUBMIT_DELAY_MS);
        assert_eq!(form.phase(), FormPhase::Idle);
        for field in FormField::all() {
            assert_eq!(form.field(*field), "");
        }
    }

    #[test]
    fn test_inputs_disabled_while_submitting() {
        let form = filled_form();
        form.submit(0);

        form.set_field(FormField::Subject, "overwritten?");
        assert_eq!(form.field(FormField::Subject), "Project collaboration");
    }

    #[test]
    fn test_incomplete_form_refuses_submit() {
        let form = ContactForm::new();
        form.set_field(FormField::Name, "Jane");
        assert!(!form.submit(0));
        assert_eq!(form.phase(), FormPhase::Idle);

        // Whitespace does not count as filled.
        let form = filled_form();
        form.set_field(FormField::Message, "   ");
        assert!(!form.submit(0));
    }

    #[test]
    fn test_double_submit_rejected() {
        let form = filled_form();
        assert!(form.submit(0));
        assert!(!form.submit(1));
    }

    #[test]
    fn test_tick_without_submit_is_noop() {
        let form = filled_form();
        form.tick(u64::MAX);
        assert_eq!(form.field(FormField::Name), "Jane");
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_can_resubmit_after_completion() {
        let form = filled_form();
        form.submit(0);
        form.tick(SUBMIT_DELAY_MS);

        form.set_field(FormField::Name, "Jane");
        form.set_field(FormField::Email, "jane@example.com");
        form.set_field(FormField::Subject, "Again");
        form.set_field(FormField::Message, "Second message");
        assert!(form.submit(10_000));
    }
}
