//! Integration tests for the railgraph CLI
//!
//! Global flags, configuration discovery, input validation and the error
//! envelope. Query output is covered in query_tests.rs.

mod support;

use predicates::prelude::*;
use serde_json::Value;
use support::{railgraph, tgv_dir, write_file};
use tempfile::TempDir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    railgraph(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: railgraph"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("traverse"))
        .stdout(predicate::str::contains("distances"))
        .stdout(predicate::str::contains("adjacency"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    railgraph(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("railgraph"));
}

#[test]
fn test_no_subcommand() {
    let dir = TempDir::new().unwrap();
    railgraph(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("railgraph --help"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    let dir = tgv_dir();
    railgraph(dir.path())
        .args(["--format", "yaml", "route", "Metz", "Lyon", "--edges", "tgv.csv"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_edges_argument() {
    let dir = TempDir::new().unwrap();
    railgraph(dir.path())
        .args(["route", "Metz", "Lyon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--edges"));
}

#[test]
fn test_edges_from_env() {
    let dir = tgv_dir();
    railgraph(dir.path())
        .env("RAILGRAPH_EDGES", "tgv.csv")
        .args(["route", "Metz", "Strasbourg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 129"));
}

// ============================================================================
// Error envelope and exit codes
// ============================================================================

#[test]
fn test_json_error_envelope() {
    let dir = tgv_dir();
    let output = railgraph(dir.path())
        .args(["--format", "json", "route", "Metz", "Nice", "--edges", "tgv.csv"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "unknown_station");
    assert_eq!(json["error"]["message"], "unknown station: Nice");
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let dir = TempDir::new().unwrap();
    let output = railgraph(dir.path())
        .args(["--format", "json", "route", "--bogus"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tgv_dir();
    railgraph(dir.path())
        .args(["--quiet", "route", "Metz", "Nice", "--edges", "tgv.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_negative_weight_rejected() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bad.csv", "name1;name2;distance\nA;B;-5\n");
    railgraph(dir.path())
        .args(["route", "A", "B", "--edges", "bad.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weight: -5"));
}

#[test]
fn test_malformed_row_reports_line() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bad.csv", "name1;name2;distance\nA;B;1\nB;C\n");
    railgraph(dir.path())
        .args(["adjacency", "--edges", "bad.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed record at line 3"));
}

#[test]
fn test_missing_edges_file() {
    let dir = TempDir::new().unwrap();
    railgraph(dir.path())
        .args(["adjacency", "--edges", "nowhere.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read edges"));
}

#[test]
fn test_empty_weight_uses_default() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "unit.csv", "name1;name2;distance\nA;B;\nB;C;\n");
    railgraph(dir.path())
        .args(["route", "A", "C", "--edges", "unit.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 2"));
}

// ============================================================================
// Configuration
// ============================================================================

const COMMA_EDGES: &str = "from,to,minutes\nParis,Metz,82\nMetz,Strasbourg,40\n";

const COMMA_CONFIG: &str = r#"
[edges]
delimiter = ","
from = "from"
to = "to"
weight = "minutes"

[graph]
symmetric = true
"#;

#[test]
fn test_local_config_discovered() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "times.csv", COMMA_EDGES);
    write_file(&dir, "railgraph.toml", COMMA_CONFIG);

    railgraph(dir.path())
        .args(["route", "Strasbourg", "Paris", "--edges", "times.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strasbourg -> Metz -> Paris"))
        .stdout(predicate::str::contains("distance: 122"));
}

#[test]
fn test_explicit_config_flag() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "times.csv", COMMA_EDGES);
    let config = write_file(&dir, "custom.toml", COMMA_CONFIG);

    railgraph(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["route", "Paris", "Strasbourg", "--edges", "times.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 122"));
}

#[test]
fn test_config_from_env() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "times.csv", COMMA_EDGES);
    let config = write_file(&dir, "env.toml", COMMA_CONFIG);

    railgraph(dir.path())
        .env("RAILGRAPH_CONFIG", &config)
        .args(["route", "Paris", "Strasbourg", "--edges", "times.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 122"));
}

#[test]
fn test_explicit_config_missing() {
    let dir = tgv_dir();
    railgraph(dir.path())
        .args(["--config", "missing.toml", "adjacency", "--edges", "tgv.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_invalid_delimiter_config() {
    let dir = tgv_dir();
    write_file(&dir, "railgraph.toml", "[edges]\ndelimiter = \"::\"\n");
    railgraph(dir.path())
        .args(["adjacency", "--edges", "tgv.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edges.delimiter"));
}

#[test]
fn test_symmetric_flag_overrides_config() {
    let dir = tgv_dir();
    write_file(&dir, "railgraph.toml", "[graph]\nsymmetric = false\n");
    railgraph(dir.path())
        .args(["route", "Lyon", "Metz", "--edges", "tgv.csv", "--symmetric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 511"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_level_debug_goes_to_stderr() {
    let dir = tgv_dir();
    railgraph(dir.path())
        .args(["--log-level", "debug", "adjacency", "--edges", "tgv.csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("network built"))
        .stdout(predicate::str::contains("network built").not());
}

#[test]
fn test_default_level_is_quiet() {
    let dir = tgv_dir();
    railgraph(dir.path())
        .args(["adjacency", "--edges", "tgv.csv"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_lines() {
    let dir = tgv_dir();
    let output = railgraph(dir.path())
        .args(["--log-level", "debug", "--log-json", "adjacency", "--edges", "tgv.csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let event: Value = serde_json::from_str(first).unwrap();
    assert!(event.get("level").is_some());
}
