//! Full validation runs against in-memory build trees.

use crate::mocks::{MockBuildTree, PAYLOAD};
use webgl_preflight::engine::result::{CheckStatus, ValidationResult};
use webgl_preflight::platform::MemoryFileSystem;
use webgl_preflight::{validate_with, PreflightConfig, Severity};

const ROOT: &str = "dist/webgl";

fn run(tree: &MockBuildTree) -> ValidationResult {
    run_fs(&tree.to_memory(ROOT))
}

fn run_fs(fs: &MemoryFileSystem) -> ValidationResult {
    validate_with(fs, ROOT, &PreflightConfig::default()).to_result()
}

#[test]
fn test_missing_build_folder_short_circuits() {
    let fs = MemoryFileSystem::new().with_file("other/index.html", 10);
    let result = run_fs(&fs);

    assert_eq!(
        result,
        ValidationResult {
            valid: false,
            errors: vec!["Build folder does not exist!".to_string()],
            warnings: vec![],
        }
    );
}

#[test]
fn test_healthy_build_is_clean() {
    let result = run(&MockBuildTree::healthy());
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_each_payload_file_accepted_compressed() {
    for suffix in [".gz", ".br"] {
        for file in PAYLOAD {
            let tree = MockBuildTree::healthy()
                .without_build_file(file)
                .with_build_file(&format!("{}{}", file, suffix), 1024);

            let result = run(&tree);
            assert!(result.valid, "{}{} rejected: {:?}", file, suffix, result);
            assert!(result.warnings.is_empty());
        }
    }
}

#[test]
fn test_fully_compressed_build() {
    assert!(run(&MockBuildTree::compressed(".br")).valid);
    assert!(run(&MockBuildTree::compressed(".gz")).warnings.is_empty());
}

#[test]
fn test_missing_template_data_is_warning() {
    let result = run(&MockBuildTree::healthy().without_folder("TemplateData"));
    assert!(result.valid);
    assert_eq!(result.warnings, vec!["TemplateData folder missing (optional)."]);
}

#[test]
fn test_lowercase_build_folder() {
    let result = run(&MockBuildTree::lowercase_build());

    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec![
            "Folder \"build\" should be exactly \"Build\" (case-sensitive systems may fail).",
            "Extra folders detected: build",
        ]
    );
}

#[test]
fn test_lowercase_build_folder_contents_unchecked() {
    let tree = MockBuildTree::lowercase_build()
        .without_build_file("web.wasm")
        .with_build_file("readme.txt", 0);

    let report = validate_with(&tree.to_memory(ROOT), ROOT, &PreflightConfig::default());
    assert!(report.is_valid());
    assert_eq!(report.findings_for("WEB-004").count(), 0);
}

#[test]
fn test_zero_byte_wasm() {
    let result = run(&MockBuildTree::zero_byte_wasm());

    assert!(result.valid);
    assert_eq!(result.warnings, vec!["File web.wasm is 0 bytes (possibly corrupted)."]);
}

#[test]
fn test_unexpected_file_in_build() {
    let result = run(&MockBuildTree::healthy().with_build_file("readme.txt", 42));

    assert!(result.valid);
    assert_eq!(
        result.warnings,
        vec!["Unexpected file found in Build folder: readme.txt"]
    );
}

#[test]
fn test_entry_point_name_is_case_sensitive() {
    let tree = MockBuildTree::healthy()
        .without_root_file("index.html")
        .with_root_file("Index.html", 1200);

    let result = run(&tree);
    assert!(!result.valid);
    assert_eq!(result.errors, vec!["index.html missing in root folder."]);
}

#[test]
fn test_missing_build_folder_entirely() {
    let result = run(&MockBuildTree::healthy().without_folder("Build"));

    assert!(!result.valid);
    assert_eq!(result.errors, vec!["Build folder missing."]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_missing_payload_files() {
    let tree = MockBuildTree::healthy()
        .without_build_file("web.data")
        .without_build_file("web.loader.js");

    let result = run(&tree);
    assert!(!result.valid);
    assert_eq!(
        result.errors,
        vec!["Missing Unity build files: web.data, web.loader.js"]
    );
}

#[test]
fn test_findings_follow_check_order() {
    let tree = MockBuildTree {
        root_files: vec![("Index.html".to_string(), 100)],
        folders: vec![
            "Build".to_string(),
            "templatedata".to_string(),
            "docs".to_string(),
        ],
        build_dir: "Build".to_string(),
        build_files: vec![
            ("web.data".to_string(), 100),
            ("web.wasm".to_string(), 0),
            ("notes.txt".to_string(), 5),
        ],
    };

    let result = run(&tree);
    assert_eq!(
        result.errors,
        vec![
            "index.html missing in root folder.",
            "Missing Unity build files: web.framework.js, web.loader.js",
        ]
    );
    assert_eq!(
        result.warnings,
        vec![
            "Folder \"templatedata\" should be exactly \"TemplateData\" (case-sensitive systems may fail).",
            "StreamingAssets folder missing (optional).",
            "Unexpected file found in Build folder: notes.txt",
            "File web.wasm is 0 bytes (possibly corrupted).",
            "Extra folders detected: docs, templatedata",
        ]
    );
}

#[test]
fn test_validation_is_idempotent() {
    let fs = MockBuildTree::zero_byte_wasm()
        .with_folder("Extras")
        .to_memory(ROOT);

    assert_eq!(run_fs(&fs), run_fs(&fs));
}

#[test]
fn test_unreadable_build_folder_reported() {
    let fs = MockBuildTree::healthy()
        .to_memory(ROOT)
        .with_unreadable("dist/webgl/Build");

    let report = validate_with(&fs, ROOT, &PreflightConfig::default());
    let errors: Vec<_> = report.errors().collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].check_id, "WEB-004");
    assert!(errors[0].message.starts_with("Unable to read Build folder:"));
}

#[test]
fn test_root_is_a_file() {
    let fs = MemoryFileSystem::new().with_file(ROOT, 10);
    let result = run_fs(&fs);

    assert!(!result.valid);
    assert_eq!(result.errors[0], "index.html missing in root folder.");
    assert!(result.errors[1].starts_with("Unable to read build folder:"));
}

#[test]
fn test_report_statuses() {
    let tree = MockBuildTree::healthy().without_folder("StreamingAssets");
    let report = validate_with(&tree.to_memory(ROOT), ROOT, &PreflightConfig::default());

    let statuses: Vec<_> = report.checks.iter().map(|c| (c.id.as_str(), c.status)).collect();
    assert_eq!(
        statuses,
        vec![
            ("WEB-001", CheckStatus::Pass),
            ("WEB-002", CheckStatus::Pass),
            ("WEB-003", CheckStatus::Warn),
            ("WEB-004", CheckStatus::Pass),
            ("WEB-005", CheckStatus::Pass),
        ]
    );
    assert!(report.findings.iter().all(|f| f.severity == Severity::Warning));
}

#[test]
fn test_custom_build_name() {
    let tree = MockBuildTree {
        build_files: vec![
            ("Game.data.br".to_string(), 10),
            ("Game.framework.js.br".to_string(), 10),
            ("Game.wasm.br".to_string(), 10),
            ("Game.loader.js".to_string(), 10),
        ],
        ..MockBuildTree::healthy()
    };
    let config = PreflightConfig {
        build_name: "Game".to_string(),
        ..Default::default()
    };

    let report = validate_with(&tree.to_memory(ROOT), ROOT, &config);
    assert!(report.is_valid());
    assert!(report.findings.is_empty());
}
