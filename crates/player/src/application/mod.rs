//! Application layer - typed API access, catalog services and the
//! registration form controller

pub mod api;
pub mod dto;
pub mod registration;
pub mod services;

pub use registration::{RegistrationForm, SubmitTicket, TeamSummary};
