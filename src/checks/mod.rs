//! Validation check modules.
//!
//! Checks run in a fixed order, each over the same [`TreeSnapshot`]:
//! - WEB-001: Build folder exists (stops the run when it fails)
//! - WEB-002: `index.html` entry point
//! - WEB-003: Expected top-level folders, case-insensitive with a casing warning
//! - WEB-004: Payload files inside the exact-case `Build` folder
//! - WEB-005: Top-level folders that are not exactly one of the expected names
//!
//! # Matching Modes
//!
//! WEB-003 finds folders ignoring case, while WEB-004 and WEB-005 only accept
//! the exact name. A folder called `build` therefore satisfies WEB-003 (with a
//! casing warning), is listed again by WEB-005 as an extra folder, and its
//! contents are never inspected by WEB-004.
//!
//! Checks never panic and never touch the filesystem. Read failures captured
//! in the snapshot are reported as findings by the check that needed the data.

pub mod folders;
pub mod payload;
pub mod root;

use crate::engine::snapshot::TreeSnapshot;
use crate::{Check, CheckCategory, Finding, PreflightConfig};

/// Entry point file expected directly under the build folder
pub const ENTRY_POINT: &str = "index.html";

/// Folder holding the payload files
pub const BUILD_DIR: &str = "Build";

/// A top-level folder of a WebGL export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedFolder {
    pub name: &'static str,
    /// Missing required folders are errors, missing optional ones warnings
    pub required: bool,
}

/// Top-level folders in report order
pub const EXPECTED_FOLDERS: [ExpectedFolder; 3] = [
    ExpectedFolder {
        name: BUILD_DIR,
        required: true,
    },
    ExpectedFolder {
        name: "TemplateData",
        required: false,
    },
    ExpectedFolder {
        name: "StreamingAssets",
        required: false,
    },
];

/// Signature shared by all checks
pub type CheckFn = fn(&TreeSnapshot, &PreflightConfig) -> Vec<Finding>;

/// Get all registered checks in execution order
pub fn get_all_checks() -> Vec<Check> {
    let mut checks = Vec::new();
    checks.extend(root::get_root_checks());
    checks.extend(folders::get_folder_checks());
    checks.extend(payload::get_payload_checks());
    checks.sort_by_key(|c| c.id);
    checks
}

/// Get checks for a specific category
pub fn get_checks_by_category(category: CheckCategory) -> Vec<Check> {
    get_all_checks()
        .into_iter()
        .filter(|c| c.category == category)
        .collect()
}

/// Look up a check by ID (case-insensitive)
pub fn find_check(id: &str) -> Option<Check> {
    get_all_checks()
        .into_iter()
        .find(|c| c.id.eq_ignore_ascii_case(id))
}
