//! Wizard state machine — step index, answers, errors, transition direction.
//!
//! Progresses linearly: BusinessType → Revenue → ProjectType → Timeline →
//! Budget → Contact → completed. `advance()` is gated by the current step's
//! validation; `retreat()` is always permitted and never re-validates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::registry::{self, FieldId, STEP_COUNT, StepDefinition, StepId};
use super::validate;

/// Answers accumulated during one wizard session. Unset fields read as empty.
pub type AnswerSet = BTreeMap<FieldId, String>;

/// Field-level messages for the most recently validated step. Recomputed
/// wholesale on each validation attempt, never merged across steps.
pub type ErrorMap = BTreeMap<FieldId, String>;

/// Direction of the most recent step transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

/// Whether a completed lead is currently being handed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Submitting,
}

/// Outcome of an `advance()` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Validation failed; the step did not change and `errors()` is populated.
    Blocked,
    /// Moved forward one step.
    Moved(StepId),
    /// The final step validated. The session's answers are handed to the
    /// caller — this is the machine's sole exit point.
    Completed(AnswerSet),
}

/// The multi-step qualification wizard.
///
/// One instance per session. After `Advance::Completed` the machine is
/// spent; a fresh session constructs a new instance.
#[derive(Debug, Clone)]
pub struct QualificationWizard {
    index: usize,
    direction: Direction,
    answers: AnswerSet,
    errors: ErrorMap,
    show_step_notice: bool,
    submission: SubmissionPhase,
}

impl Default for QualificationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl QualificationWizard {
    /// Start a fresh session at the first step with empty answers.
    pub fn new() -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
            answers: AnswerSet::new(),
            errors: ErrorMap::new(),
            show_step_notice: false,
            submission: SubmissionPhase::Idle,
        }
    }

    /// Definition of the step currently shown.
    pub fn current_step(&self) -> &'static StepDefinition {
        &registry::steps()[self.index]
    }

    /// Id of the step currently shown.
    pub fn step_id(&self) -> StepId {
        self.current_step().id
    }

    /// 1-based step number for display ("Step 2 of 6").
    pub fn step_number(&self) -> usize {
        self.index + 1
    }

    /// Progress through the wizard: `round(100 * (index + 1) / 6)`.
    ///
    /// Monotone non-decreasing across a forward traversal; decreases on
    /// `retreat()`.
    pub fn progress_percent(&self) -> u8 {
        (((self.index + 1) * 100 + STEP_COUNT / 2) / STEP_COUNT) as u8
    }

    /// Direction of the most recent transition.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Errors from the most recent validation attempt.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Whether the step-level "please select/complete" notice is raised.
    pub fn show_step_notice(&self) -> bool {
        self.show_step_notice
    }

    /// Current submission phase (flips to `Submitting` on completion).
    pub fn submission_phase(&self) -> SubmissionPhase {
        self.submission
    }

    /// The stored answer for a field, empty if unset.
    pub fn answer(&self, field: FieldId) -> &str {
        self.answers.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Record an answer (selection or free text).
    ///
    /// Clears that field's error immediately; never advances, no other side
    /// effect. Picking a selection also drops the step-level notice.
    pub fn set_answer(&mut self, field: FieldId, value: impl Into<String>) {
        self.answers.insert(field, value.into());
        self.errors.remove(&field);
        if field.is_selection() {
            self.show_step_notice = false;
        }
    }

    /// Validate the current step and move forward.
    ///
    /// On failure the index is unchanged and the error map describes the
    /// current step only. On success from the last step, ownership of the
    /// answers passes to the caller and the machine is spent.
    pub fn advance(&mut self) -> Advance {
        let step = self.step_id();
        let errors = validate::validate_step(step, &self.answers);
        if !errors.is_empty() {
            self.errors = errors;
            self.show_step_notice = true;
            return Advance::Blocked;
        }

        self.errors.clear();
        self.show_step_notice = false;

        match step.next() {
            Some(next) => {
                self.index += 1;
                self.direction = Direction::Forward;
                Advance::Moved(next)
            }
            None => {
                self.submission = SubmissionPhase::Submitting;
                Advance::Completed(std::mem::take(&mut self.answers))
            }
        }
    }

    /// Move back one step. No-op at the first step; never re-validates —
    /// moving backward is always permitted regardless of field state.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.direction = Direction::Backward;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_selection(wizard: &mut QualificationWizard) {
        let step = wizard.step_id();
        let field = registry::selection_field(step).unwrap();
        let value = registry::options_for(step).unwrap()[0].value;
        wizard.set_answer(field, value);
    }

    fn fill_contact(wizard: &mut QualificationWizard) {
        wizard.set_answer(FieldId::FirstName, "Jane");
        wizard.set_answer(FieldId::LastName, "Doe");
        wizard.set_answer(FieldId::Email, "jane@co.com");
        wizard.set_answer(FieldId::Phone, "555-1234");
    }

    #[test]
    fn starts_at_first_step_with_no_errors() {
        let wizard = QualificationWizard::new();
        assert_eq!(wizard.step_id(), StepId::BusinessType);
        assert_eq!(wizard.step_number(), 1);
        assert!(wizard.errors().is_empty());
        assert!(!wizard.show_step_notice());
        assert_eq!(wizard.submission_phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn advance_with_empty_required_field_blocks() {
        let mut wizard = QualificationWizard::new();
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.step_id(), StepId::BusinessType);
        assert!(!wizard.errors().is_empty());
        assert!(wizard.show_step_notice());
    }

    #[test]
    fn advance_with_valid_answer_moves_one_step() {
        let mut wizard = QualificationWizard::new();
        wizard.set_answer(FieldId::BusinessType, "saas");
        assert_eq!(wizard.advance(), Advance::Moved(StepId::Revenue));
        assert_eq!(wizard.step_number(), 2);
        assert_eq!(wizard.direction(), Direction::Forward);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut wizard = QualificationWizard::new();
        wizard.advance();
        assert!(wizard.errors().contains_key(&FieldId::BusinessType));
        wizard.set_answer(FieldId::BusinessType, "agency");
        assert!(!wizard.errors().contains_key(&FieldId::BusinessType));
        assert!(!wizard.show_step_notice());
    }

    #[test]
    fn text_edit_keeps_step_notice_selection_drops_it() {
        let mut wizard = QualificationWizard::new();
        for _ in 0..5 {
            fill_selection(&mut wizard);
            wizard.advance();
        }
        assert_eq!(wizard.step_id(), StepId::Contact);
        wizard.advance();
        assert!(wizard.show_step_notice());
        wizard.set_answer(FieldId::FirstName, "Jane");
        assert!(wizard.show_step_notice());
        assert!(!wizard.errors().contains_key(&FieldId::FirstName));
    }

    #[test]
    fn retreat_at_first_step_is_a_noop() {
        let mut wizard = QualificationWizard::new();
        assert!(!wizard.retreat());
        assert_eq!(wizard.step_number(), 1);
    }

    #[test]
    fn retreat_ignores_field_validity() {
        let mut wizard = QualificationWizard::new();
        wizard.set_answer(FieldId::BusinessType, "saas");
        wizard.advance();
        // Revenue is unanswered, going back is still permitted.
        assert!(wizard.retreat());
        assert_eq!(wizard.step_id(), StepId::BusinessType);
        assert_eq!(wizard.direction(), Direction::Backward);
    }

    #[test]
    fn progress_matches_rounded_fraction() {
        let mut wizard = QualificationWizard::new();
        let expected = [17, 33, 50, 67, 83, 100];
        for (i, pct) in expected.iter().enumerate() {
            assert_eq!(wizard.progress_percent(), *pct, "at step {}", i + 1);
            if wizard.step_id() != StepId::Contact {
                fill_selection(&mut wizard);
                wizard.advance();
            }
        }
        // And back down again.
        wizard.retreat();
        assert_eq!(wizard.progress_percent(), 83);
    }

    #[test]
    fn full_walk_completes_with_answer_ownership() {
        let mut wizard = QualificationWizard::new();
        wizard.set_answer(FieldId::BusinessType, "saas");
        wizard.advance();
        wizard.set_answer(FieldId::Revenue, "1m-5m");
        wizard.advance();
        wizard.set_answer(FieldId::ProjectType, "automation");
        wizard.advance();
        wizard.set_answer(FieldId::Timeline, "asap");
        wizard.advance();
        wizard.set_answer(FieldId::Budget, "10k-25k");
        wizard.advance();
        fill_contact(&mut wizard);

        match wizard.advance() {
            Advance::Completed(answers) => {
                assert_eq!(answers.get(&FieldId::Revenue).unwrap(), "1m-5m");
                assert_eq!(answers.get(&FieldId::Email).unwrap(), "jane@co.com");
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(wizard.submission_phase(), SubmissionPhase::Submitting);
        // The machine is spent — its answers moved out.
        assert_eq!(wizard.answer(FieldId::Email), "");
    }

    #[test]
    fn blocked_advance_reports_only_the_current_step() {
        let mut wizard = QualificationWizard::new();
        wizard.set_answer(FieldId::BusinessType, "saas");
        wizard.advance();
        // Blocked at revenue: the error map must not mention business type.
        wizard.advance();
        assert_eq!(wizard.errors().len(), 1);
        assert!(wizard.errors().contains_key(&FieldId::Revenue));
    }

    #[test]
    fn unselected_revenue_scenario() {
        let mut wizard = QualificationWizard::new();
        wizard.set_answer(FieldId::BusinessType, "saas");
        wizard.advance();
        assert_eq!(wizard.step_id(), StepId::Revenue);
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.step_id(), StepId::Revenue);
        assert_eq!(
            wizard.errors().get(&FieldId::Revenue).map(String::as_str),
            Some("Please select an option")
        );
    }
}
