//! Test support shared by unit tests across layers

pub mod fixtures;
