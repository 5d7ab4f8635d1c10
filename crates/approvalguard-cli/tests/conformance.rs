//! Conformance tests for approvalguard.
//!
//! These tests validate:
//! 1. JSON output validates against the schema generated from the report types
//! 2. Every audited fixture produces paths relative to the audit root

use approvalguard_types::{AuditReport, SCHEMA_REPORT_V1};
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("approvalguard-cli should have parent")
        .parent()
        .expect("crates should have parent")
        .join("tests")
        .join("fixtures")
}

fn report_schema() -> Value {
    serde_json::to_value(schemars::schema_for!(AuditReport)).expect("schema to json")
}

#[allow(deprecated)]
fn audit_json(root: &Path) -> Value {
    let output = Command::cargo_bin("approvalguard")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root)
        .args(["audit", "--json", "--no-user-settings"])
        .output()
        .expect("run approvalguard");
    assert!(
        output.status.success(),
        "approvalguard failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

fn fixture_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = std::fs::read_dir(fixtures_dir())
        .expect("read fixtures")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    roots.sort();
    roots
}

#[test]
fn fixtures_exist() {
    assert!(
        fixture_roots().len() >= 3,
        "expected fixture directories under tests/fixtures"
    );
}

#[test]
fn json_reports_validate_against_generated_schema() {
    let schema = report_schema();
    let validator = jsonschema::validator_for(&schema).expect("schema compiles");

    for root in fixture_roots() {
        let report = audit_json(&root);
        let errors: Vec<String> = validator
            .iter_errors(&report)
            .map(|e| e.to_string())
            .collect();
        assert!(
            errors.is_empty(),
            "{}: schema errors: {:?}",
            root.display(),
            errors
        );
        assert_eq!(report["schema"], SCHEMA_REPORT_V1);
        assert_eq!(report["tool"]["name"], "approvalguard");
    }
}

#[test]
fn json_reports_round_trip_into_types() {
    for root in fixture_roots() {
        let report = audit_json(&root);
        let typed: AuditReport = serde_json::from_value(report).expect("deserialize report");
        for finding in &typed.findings {
            let path = finding.file.as_str();
            assert!(
                !path.starts_with('/') && !path.contains('\\') && !path.contains(".."),
                "{}: finding path {path} is not relative",
                root.display()
            );
        }
    }
}

#[test]
fn mixed_fixture_reports_expected_findings() {
    let report = audit_json(&fixtures_dir().join("mixed"));
    let files: Vec<&str> = report["findings"]
        .as_array()
        .expect("findings array")
        .iter()
        .map(|f| f["file"].as_str().expect("file"))
        .collect();
    assert_eq!(
        files,
        vec![".vscode/settings.json", "packages/api/.vscode/settings.json"]
    );
    assert_eq!(report["prefixHealth"]["deploy"]["riskyPatterns"], 1);
}
