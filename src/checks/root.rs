//! Root checks (WEB-001, WEB-002).

use super::ENTRY_POINT;
use crate::engine::snapshot::TreeSnapshot;
use crate::{Check, CheckCategory, Finding, PreflightConfig};

pub const BUILD_FOLDER_EXISTS: &str = "WEB-001";
pub const ENTRY_POINT_PRESENT: &str = "WEB-002";

/// Get root checks
pub fn get_root_checks() -> Vec<Check> {
    vec![
        Check {
            id: BUILD_FOLDER_EXISTS,
            name: "Build Folder Exists",
            category: CheckCategory::Layout,
            description: "Verify the build folder exists",
        },
        Check {
            id: ENTRY_POINT_PRESENT,
            name: "Entry Point Present",
            category: CheckCategory::Layout,
            description: "Verify index.html is present in the build folder",
        },
    ]
}

/// Run WEB-001: Build Folder Exists
pub fn check_build_folder_exists(snapshot: &TreeSnapshot, _config: &PreflightConfig) -> Vec<Finding> {
    if snapshot.root_exists {
        Vec::new()
    } else {
        vec![Finding::error(BUILD_FOLDER_EXISTS, "Build folder does not exist!")]
    }
}

/// Run WEB-002: Entry Point Present
///
/// The name must match exactly; `Index.html` does not count.
pub fn check_entry_point(snapshot: &TreeSnapshot, _config: &PreflightConfig) -> Vec<Finding> {
    if snapshot.entry_point {
        Vec::new()
    } else {
        vec![Finding::error(
            ENTRY_POINT_PRESENT,
            format!("{} missing in root folder.", ENTRY_POINT),
        )]
    }
}
