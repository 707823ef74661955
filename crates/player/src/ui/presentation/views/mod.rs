//! Page-level views

pub mod team_summary;
pub mod trainer_form;

pub use team_summary::TeamSummaryDialog;
pub use trainer_form::TrainerForm;
