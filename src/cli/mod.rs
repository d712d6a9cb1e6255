//! CLI module for argument parsing and output formatting.

pub mod args;
pub mod output;

use crate::engine::result::ValidationReport;

/// Process exit code for a finished report.
///
/// `0` clean, `1` errors, `2` warnings only. `3` is reserved for runtime
/// errors and is never returned here.
pub fn exit_code(report: &ValidationReport) -> u8 {
    if !report.is_valid() {
        1
    } else if report.warnings().next().is_some() {
        2
    } else {
        0
    }
}
