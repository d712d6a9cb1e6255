//! Build payload check (WEB-004).
//!
//! Inspects the exact-case `Build` folder:
//! - The four payload files must be present, plain or with a compressed suffix
//! - Empty files are flagged as possibly corrupted
//! - Files whose name does not start with a payload name are flagged
//!
//! Hashed or size-suffixed names Unity produces (`web.data.unityweb`,
//! `web.wasm.br`) start with a payload name and pass the prefix test.

use crate::engine::snapshot::{EntrySize, TreeSnapshot};
use crate::{Check, CheckCategory, Finding, PreflightConfig};

pub const BUILD_PAYLOAD: &str = "WEB-004";

/// Get payload checks
pub fn get_payload_checks() -> Vec<Check> {
    vec![Check {
        id: BUILD_PAYLOAD,
        name: "Build Payload",
        category: CheckCategory::Payload,
        description: "Verify data, framework, wasm and loader files in the Build folder",
    }]
}

/// Run WEB-004: Build Payload
///
/// Produces nothing when there is no folder named exactly `Build`.
pub fn check_build_payload(snapshot: &TreeSnapshot, config: &PreflightConfig) -> Vec<Finding> {
    let entries = match &snapshot.build {
        None => return Vec::new(),
        Some(Err(e)) => {
            return vec![Finding::error(
                BUILD_PAYLOAD,
                format!("Unable to read Build folder: {}", e),
            )]
        }
        Some(Ok(entries)) => entries,
    };

    let mut findings = Vec::new();
    let required = config.required_files();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

    let missing: Vec<&str> = required
        .iter()
        .filter(|file| !is_present(file, &names, &config.compressed_suffixes))
        .map(String::as_str)
        .collect();

    if !missing.is_empty() {
        findings.push(Finding::error(
            BUILD_PAYLOAD,
            format!("Missing Unity build files: {}", missing.join(", ")),
        ));
    }

    let prefixes: Vec<String> = required.iter().map(|f| f.to_lowercase()).collect();

    for entry in entries {
        match &entry.size {
            EntrySize::Bytes(0) => findings.push(Finding::warning(
                BUILD_PAYLOAD,
                format!("File {} is 0 bytes (possibly corrupted).", entry.name),
            )),
            EntrySize::Unreadable(cause) => findings.push(Finding::warning(
                BUILD_PAYLOAD,
                format!("Unable to read size of {}: {}", entry.name, cause),
            )),
            EntrySize::Bytes(_) | EntrySize::Directory => {}
        }

        let lowered = entry.name.to_lowercase();
        if !prefixes.iter().any(|p| lowered.starts_with(p.as_str())) {
            findings.push(Finding::warning(
                BUILD_PAYLOAD,
                format!("Unexpected file found in Build folder: {}", entry.name),
            ));
        }
    }

    findings
}

/// A payload file counts as present under its own name or any compressed suffix
fn is_present(file: &str, names: &[&str], compressed_suffixes: &[String]) -> bool {
    names.contains(&file)
        || compressed_suffixes
            .iter()
            .any(|suffix| names.contains(&format!("{}{}", file, suffix).as_str()))
}
