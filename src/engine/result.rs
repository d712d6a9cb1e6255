//! Result aggregation and reporting.
//!
//! Collects findings per check and flattens them into the plain
//! errors/warnings record callers gate on.

use crate::{Check, CheckCategory, Finding, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of a validation run.
///
/// `valid` is true exactly when `errors` is empty. Entries appear in the
/// order the checks produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Split findings into errors and warnings, keeping their order
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for finding in findings {
            match finding.severity {
                Severity::Error => errors.push(finding.message.clone()),
                Severity::Warning => warnings.push(finding.message.clone()),
            }
        }

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Status of a single check after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Skip,
}

impl CheckStatus {
    fn from_findings(findings: &[Finding]) -> Self {
        if findings.iter().any(Finding::is_error) {
            CheckStatus::Fail
        } else if findings.is_empty() {
            CheckStatus::Pass
        } else {
            CheckStatus::Warn
        }
    }
}

/// A check as it ran (or did not run) in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub id: String,
    pub name: String,
    pub category: CheckCategory,
    pub status: CheckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
    pub duration_ms: u64,
}

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub passed: u32,
    pub warned: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total: u32,
    pub errors: u32,
    pub warnings: u32,
}

/// Full report of a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub build_folder: PathBuf,
    pub checks: Vec<CheckOutcome>,
    pub findings: Vec<Finding>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Whether the build has no errors
    pub fn is_valid(&self) -> bool {
        !self.findings.iter().any(Finding::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }

    /// Findings produced by one check
    pub fn findings_for<'a>(&'a self, check_id: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings.iter().filter(move |f| f.check_id == check_id)
    }

    /// Flatten into the plain errors/warnings record
    pub fn to_result(&self) -> ValidationResult {
        ValidationResult::from_findings(&self.findings)
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for check in &self.checks {
            summary.total += 1;
            match check.status {
                CheckStatus::Pass => summary.passed += 1,
                CheckStatus::Warn => summary.warned += 1,
                CheckStatus::Fail => summary.failed += 1,
                CheckStatus::Skip => summary.skipped += 1,
            }
        }

        for finding in &self.findings {
            match finding.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
        }

        summary
    }
}

/// Result aggregator for collecting check results
#[derive(Debug, Default)]
pub struct ResultAggregator {
    checks: Vec<CheckOutcome>,
    findings: Vec<Finding>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the findings of a completed check
    pub fn add_result(&mut self, check: &Check, findings: Vec<Finding>, duration_ms: u64) {
        self.checks.push(CheckOutcome {
            id: check.id.to_string(),
            name: check.name.to_string(),
            category: check.category,
            status: CheckStatus::from_findings(&findings),
            skip_reason: None,
            duration_ms,
        });
        self.findings.extend(findings);
    }

    /// Record a check that did not run
    pub fn add_skipped(&mut self, check: &Check, reason: impl Into<String>) {
        self.checks.push(CheckOutcome {
            id: check.id.to_string(),
            name: check.name.to_string(),
            category: check.category,
            status: CheckStatus::Skip,
            skip_reason: Some(reason.into()),
            duration_ms: 0,
        });
    }

    /// Create final validation report
    pub fn into_report(self, build_folder: PathBuf, total_duration_ms: u64) -> ValidationReport {
        ValidationReport {
            build_folder,
            checks: self.checks,
            findings: self.findings,
            total_duration_ms,
        }
    }
}
