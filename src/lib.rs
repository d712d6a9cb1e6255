//! webgl-preflight library
//!
//! Structure validation for Unity WebGL build exports.
//!
//! The validator walks a build folder once and reports whether it has the
//! layout a web host expects:
//! - `index.html` entry point in the root
//! - `Build`, `TemplateData` and `StreamingAssets` folders (exact casing)
//! - The four payload files inside `Build`, plain or `.gz`/`.br` compressed
//! - No empty, stray or unexpected files and folders
//!
//! Findings are split into errors (the build should not be published) and
//! warnings (publishable, but worth a look). Nothing is written to disk.
//!
//! # Example
//!
//! ```no_run
//! use webgl_preflight::validate;
//!
//! let result = validate("dist/webgl");
//! if !result.valid {
//!     for error in &result.errors {
//!         eprintln!("error: {}", error);
//!     }
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod engine;
pub mod platform;
pub mod version;

use engine::result::{ValidationReport, ValidationResult};
use engine::validator::BuildValidator;
use platform::{FileSystem, LocalFileSystem};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Re-exports for public API
pub use engine::result::{ResultSummary, ValidationReport as Report};
pub use engine::validator::BuildValidator as Validator;

/// Severity of a finding.
///
/// Only errors make a build invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single message produced by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Id of the check that produced it (e.g., "WEB-003")
    pub check_id: String,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn error(check_id: &str, message: impl Into<String>) -> Self {
        Finding {
            check_id: check_id.to_string(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(check_id: &str, message: impl Into<String>) -> Self {
        Finding {
            check_id: check_id.to_string(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Check category for grouping related checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckCategory {
    /// Root folder, entry point and top-level folders
    Layout,
    /// Files inside the `Build` folder
    Payload,
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::Layout => write!(f, "Layout"),
            CheckCategory::Payload => write!(f, "Payload"),
        }
    }
}

/// Static description of a registered check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Unique identifier (e.g., "WEB-001")
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    pub category: CheckCategory,
    /// Description of what this check validates
    pub description: &'static str,
}

/// Error types for webgl-preflight operations.
///
/// The validator never returns these to its caller; they are raised by the
/// filesystem layer and turned into findings.
#[derive(Error, Debug)]
pub enum PreflightError {
    /// I/O failure while reading the tree
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path exists but is not a directory
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Path does not exist
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },
}

impl PreflightError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PreflightError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Configuration for a validation run.
///
/// The defaults match the file names Unity emits for a build named `web`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightConfig {
    /// Base name of the payload files (`<name>.data`, `<name>.wasm`, ...)
    pub build_name: String,
    /// Suffixes under which a compressed payload file is accepted
    pub compressed_suffixes: Vec<String>,
    /// Checks to skip (by ID). WEB-001 always runs.
    pub skip_checks: Vec<String>,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        PreflightConfig {
            build_name: "web".to_string(),
            compressed_suffixes: vec![".gz".to_string(), ".br".to_string()],
            skip_checks: Vec::new(),
        }
    }
}

impl PreflightConfig {
    /// Payload file names that must be present in `Build`, in report order.
    pub fn required_files(&self) -> Vec<String> {
        ["data", "framework.js", "wasm", "loader.js"]
            .iter()
            .map(|ext| format!("{}.{}", self.build_name, ext))
            .collect()
    }

    /// Create configuration from parsed `check` arguments
    pub fn from_args(args: &cli::args::CheckArgs) -> Self {
        PreflightConfig {
            build_name: args.build_name.clone(),
            skip_checks: args.skip.clone(),
            ..Default::default()
        }
    }
}

/// Validate a build folder on the local filesystem with default settings.
///
/// Relative paths resolve against the current working directory. This never
/// fails: every problem, including unreadable directories, is reported in
/// the returned result.
pub fn validate(build_folder: impl AsRef<Path>) -> ValidationResult {
    validate_with(&LocalFileSystem, build_folder, &PreflightConfig::default()).to_result()
}

/// Validate a build folder through any [`FileSystem`] implementation.
///
/// Returns the full report, which keeps check ids and timing alongside the
/// findings.
///
/// # Example
///
/// ```
/// use webgl_preflight::platform::MemoryFileSystem;
/// use webgl_preflight::{validate_with, PreflightConfig};
///
/// let fs = MemoryFileSystem::new()
///     .with_file("site/index.html", 120)
///     .with_dir("site/Build");
///
/// let report = validate_with(&fs, "site", &PreflightConfig::default());
/// assert!(!report.is_valid());
/// ```
pub fn validate_with<F: FileSystem>(
    fs: F,
    build_folder: impl AsRef<Path>,
    config: &PreflightConfig,
) -> ValidationReport {
    BuildValidator::new(fs, config.clone()).validate(build_folder.as_ref())
}
