//! Submission validation engine.
//!
//! Provides the typed submission and rule configuration, the per-field rule
//! chains, and the validator that runs them in declaration order. The
//! optional address-consistency group is the only part that touches
//! reference data.

pub mod config;
pub mod result;
pub mod rules;
pub mod submission;
pub mod validator;
