//! Registration form controller
//!
//! Holds everything the trainer form shows: the entered values, the live
//! validation errors, the submitting flag and the summary dialog contents.
//! It never performs I/O; the view spawns the detail fetch between
//! [`RegistrationForm::begin_submit`] and [`RegistrationForm::complete_submit`].
//!
//! Every submission is numbered. A completion carrying an older number than
//! the latest submission is discarded, so a slow batch can never overwrite
//! the result of a newer one.

use pokeform_domain::{validate, FormField, FormState, SelectionSet, ValidationResult};

use crate::application::dto::CreatureDetail;
use crate::ports::outbound::CatalogError;

/// Contents of the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub trainer_name: String,
    pub members: Vec<CreatureDetail>,
}

/// Handle for one in-flight submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    team: SelectionSet,
    trainer_name: String,
}

impl SubmitTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn team(&self) -> &SelectionSet {
        &self.team
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationForm {
    form: FormState,
    errors: ValidationResult,
    /// Errors are only shown (and then kept live) after the first submit attempt
    submitted_once: bool,
    is_submitting: bool,
    generation: u64,
    summary: Option<TeamSummary>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn team(&self) -> &SelectionSet {
        &self.form.team
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.error(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn summary(&self) -> Option<&TeamSummary> {
        self.summary.as_ref()
    }

    pub fn is_summary_open(&self) -> bool {
        self.summary.is_some()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
        self.revalidate();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
        self.revalidate();
    }

    /// Replace the whole team (controlled multi-select `on_change`)
    pub fn set_team(&mut self, team: SelectionSet) {
        self.form.team = team;
        self.revalidate();
    }

    /// Authoritative validation gate.
    ///
    /// On success the form enters the submitting state and returns the ticket
    /// for the detail fetch; on failure every field error becomes visible.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, ValidationResult> {
        self.submitted_once = true;
        self.errors = validate(&self.form);
        if !self.errors.is_valid() {
            tracing::debug!(failing = self.errors.len(), "Submit blocked by validation");
            return Err(self.errors.clone());
        }

        self.generation += 1;
        self.is_submitting = true;
        Ok(SubmitTicket {
            generation: self.generation,
            team: self.form.team.clone(),
            trainer_name: self.form.trainer_name(),
        })
    }

    /// Apply the outcome of a detail fetch.
    ///
    /// Returns `false` (and changes nothing) for a stale ticket. A failed
    /// batch still opens the summary, without any member cards.
    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        details: Result<Vec<CreatureDetail>, CatalogError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding stale submission"
            );
            return false;
        }

        let members = details.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Team details unavailable");
            Vec::new()
        });
        self.is_submitting = false;
        self.summary = Some(TeamSummary {
            trainer_name: ticket.trainer_name,
            members,
        });
        true
    }

    pub fn close_summary(&mut self) {
        self.summary = None;
    }

    fn revalidate(&mut self) {
        if self.submitted_once {
            self.errors = validate(&self.form);
        }
    }
}
