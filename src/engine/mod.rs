//! Validation engine module.
//!
//! Captures the build tree, runs the check pipeline and aggregates findings.

pub mod result;
pub mod snapshot;
pub mod validator;
