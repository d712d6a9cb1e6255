//! Check execution.
//!
//! Runs the registered checks in order over one snapshot of the build tree.
//!
//! # Graceful Degradation
//!
//! - Missing build folder: WEB-001 fails and the remaining checks are skipped
//! - Unreadable folders: Reported as findings by the checks that need them
//! - Skipped check IDs: Recorded as skipped, WEB-001 cannot be skipped
//!
//! No function in this module will panic.

use crate::checks::{folders, payload, root, CheckFn};
use crate::engine::result::{ResultAggregator, ValidationReport};
use crate::engine::snapshot::TreeSnapshot;
use crate::platform::FileSystem;
use crate::{Check, PreflightConfig};
use std::path::Path;
use std::time::Instant;

/// A check with its execution function
#[derive(Debug, Clone)]
pub struct RegisteredCheck {
    pub check: Check,
    pub run: CheckFn,
}

/// Validator for one filesystem and configuration.
///
/// Holds no state between runs; the same validator can check any number of
/// build folders.
pub struct BuildValidator<F> {
    fs: F,
    config: PreflightConfig,
    checks: Vec<RegisteredCheck>,
}

impl<F: FileSystem> BuildValidator<F> {
    pub fn new(fs: F, config: PreflightConfig) -> Self {
        BuildValidator {
            fs,
            config,
            checks: create_all_checks(),
        }
    }

    /// Validate the build folder at `build_folder`
    pub fn validate(&self, build_folder: &Path) -> ValidationReport {
        let start = Instant::now();
        let snapshot = TreeSnapshot::capture(&self.fs, build_folder);
        let mut aggregator = ResultAggregator::new();
        let mut root_missing = false;

        for registered in &self.checks {
            let check = &registered.check;

            if root_missing {
                aggregator.add_skipped(check, "Build folder does not exist");
                continue;
            }

            if check.id != root::BUILD_FOLDER_EXISTS && self.is_skipped(check.id) {
                tracing::debug!(check = check.id, "skipped by configuration");
                aggregator.add_skipped(check, "Skipped by configuration");
                continue;
            }

            let check_start = Instant::now();
            let findings = (registered.run)(&snapshot, &self.config);
            let duration_ms = check_start.elapsed().as_millis() as u64;

            tracing::debug!(check = check.id, findings = findings.len(), "check completed");

            if check.id == root::BUILD_FOLDER_EXISTS && !findings.is_empty() {
                root_missing = true;
            }
            aggregator.add_result(check, findings, duration_ms);
        }

        let report =
            aggregator.into_report(build_folder.to_path_buf(), start.elapsed().as_millis() as u64);

        let summary = report.summary();
        tracing::info!(
            build_folder = %build_folder.display(),
            valid = report.is_valid(),
            errors = summary.errors,
            warnings = summary.warnings,
            "validation finished"
        );

        report
    }

    fn is_skipped(&self, id: &str) -> bool {
        self.config
            .skip_checks
            .iter()
            .any(|s| s.eq_ignore_ascii_case(id))
    }
}

/// Create all registered checks with their execution functions
pub fn create_all_checks() -> Vec<RegisteredCheck> {
    let runners: [(&str, CheckFn); 5] = [
        (root::BUILD_FOLDER_EXISTS, root::check_build_folder_exists),
        (root::ENTRY_POINT_PRESENT, root::check_entry_point),
        (folders::EXPECTED_FOLDERS_PRESENT, folders::check_expected_folders),
        (payload::BUILD_PAYLOAD, payload::check_build_payload),
        (folders::NO_EXTRA_FOLDERS, folders::check_extra_folders),
    ];

    crate::checks::get_all_checks()
        .into_iter()
        .filter_map(|check| {
            runners
                .iter()
                .find(|(id, _)| *id == check.id)
                .map(|(_, run)| RegisteredCheck { check, run: *run })
        })
        .collect()
}
