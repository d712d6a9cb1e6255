//! Top-level folder checks (WEB-003, WEB-005).

use super::EXPECTED_FOLDERS;
use crate::engine::snapshot::TreeSnapshot;
use crate::{Check, CheckCategory, Finding, PreflightConfig};

pub const EXPECTED_FOLDERS_PRESENT: &str = "WEB-003";
pub const NO_EXTRA_FOLDERS: &str = "WEB-005";

/// Get folder checks
pub fn get_folder_checks() -> Vec<Check> {
    vec![
        Check {
            id: EXPECTED_FOLDERS_PRESENT,
            name: "Expected Folders",
            category: CheckCategory::Layout,
            description: "Verify Build, TemplateData and StreamingAssets are present with exact casing",
        },
        Check {
            id: NO_EXTRA_FOLDERS,
            name: "Extra Folders",
            category: CheckCategory::Layout,
            description: "Report top-level folders that are not part of a WebGL export",
        },
    ]
}

/// Run WEB-003: Expected Folders
///
/// Missing `Build` is an error, missing `TemplateData` or `StreamingAssets`
/// a warning. A folder found only by ignoring case gets a casing warning.
pub fn check_expected_folders(snapshot: &TreeSnapshot, _config: &PreflightConfig) -> Vec<Finding> {
    let folders = match &snapshot.folders {
        Ok(folders) => folders,
        Err(e) => {
            return vec![Finding::error(
                EXPECTED_FOLDERS_PRESENT,
                format!("Unable to read build folder: {}", e),
            )]
        }
    };

    let mut findings = Vec::new();

    for expected in EXPECTED_FOLDERS.iter() {
        let wanted = expected.name.to_lowercase();
        match folders.iter().find(|f| f.to_lowercase() == wanted) {
            None if expected.required => {
                findings.push(Finding::error(
                    EXPECTED_FOLDERS_PRESENT,
                    format!("{} folder missing.", expected.name),
                ));
            }
            None => {
                findings.push(Finding::warning(
                    EXPECTED_FOLDERS_PRESENT,
                    format!("{} folder missing (optional).", expected.name),
                ));
            }
            Some(actual) if actual != expected.name => {
                findings.push(Finding::warning(
                    EXPECTED_FOLDERS_PRESENT,
                    format!(
                        "Folder \"{}\" should be exactly \"{}\" (case-sensitive systems may fail).",
                        actual, expected.name
                    ),
                ));
            }
            Some(_) => {}
        }
    }

    findings
}

/// Run WEB-005: Extra Folders
///
/// Compares names exactly, so a mis-cased expected folder is listed here too.
pub fn check_extra_folders(snapshot: &TreeSnapshot, _config: &PreflightConfig) -> Vec<Finding> {
    // WEB-003 already reported the listing failure
    let Ok(folders) = &snapshot.folders else {
        return Vec::new();
    };

    let extras: Vec<&str> = folders
        .iter()
        .map(String::as_str)
        .filter(|f| !EXPECTED_FOLDERS.iter().any(|e| e.name == *f))
        .collect();

    if extras.is_empty() {
        Vec::new()
    } else {
        vec![Finding::warning(
            NO_EXTRA_FOLDERS,
            format!("Extra folders detected: {}", extras.join(", ")),
        )]
    }
}
