//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool,
//! following behavior-driven testing principles.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a command for the revisit CLI, run inside `dir`
fn revisit_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_revisit"));
    cmd.current_dir(dir.path());
    cmd
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod run_command {
    use super::*;

    #[test]
    fn runs_default_sequence_through_both_operations() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir)
            .arg("run")
            .assert()
            .success()
            .stdout("V1:\n  A + V1\n  B + V1\n\nV2:\n  A + V2\n  B + V2\n");
    }

    #[test]
    fn runs_given_elements_and_operation() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir)
            .args(["run", "B", "a", "-o", "v2"])
            .assert()
            .success()
            .stdout("V2:\n  B + V2\n  A + V2\n");
    }

    #[test]
    fn counts_and_collects() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir)
            .args(["run", "A", "B", "B", "-o", "Count", "-o", "Collect"])
            .assert()
            .success()
            .stdout("Count:\n  A: 1\n  B: 2\n\nCollect:\n  A B B\n");
    }

    #[test]
    fn parallel_run_matches_sequential_output() {
        let dir = TempDir::new().unwrap();
        let args = ["run", "A", "B", "A", "B", "-o", "V1", "-o", "Collect"];

        let sequential = revisit_cmd(&dir).args(args).assert().success();
        let expected = String::from_utf8(sequential.get_output().stdout.clone()).unwrap();

        revisit_cmd(&dir)
            .args(args)
            .arg("--parallel")
            .assert()
            .success()
            .stdout(expected.into_bytes());
    }

    #[test]
    fn prints_json_reports() {
        let dir = TempDir::new().unwrap();

        let assert = revisit_cmd(&dir)
            .args(["run", "A", "-o", "V1", "-o", "Count", "--format", "json"])
            .assert()
            .success();

        let reports: serde_json::Value =
            serde_json::from_slice(&assert.get_output().stdout).unwrap();
        assert_eq!(
            reports,
            serde_json::json!([
                { "operation": "V1", "output": { "lines": ["A + V1"] } },
                { "operation": "Count", "output": { "counts": { "A": 1, "B": 0 } } }
            ])
        );
    }

    #[test]
    fn rejects_unsupported_variant() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir)
            .args(["run", "A", "C"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsupported variant: C"));
    }

    #[test]
    fn rejects_unknown_operation() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir)
            .args(["run", "-o", "V3"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown operation: V3"));
    }
}

mod config_file {
    use super::*;

    #[test]
    fn uses_discovered_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".revisit.json"),
            r#"{ "elements": ["B"], "operations": ["V1"] }"#,
        )
        .unwrap();

        revisit_cmd(&dir)
            .arg("run")
            .assert()
            .success()
            .stdout("V1:\n  B + V1\n");
    }

    #[test]
    fn command_line_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.json");
        std::fs::write(&config, r#"{ "elements": ["B"], "operations": ["V1"] }"#).unwrap();

        revisit_cmd(&dir)
            .arg("--config")
            .arg(&config)
            .args(["run", "A", "-o", "V2"])
            .assert()
            .success()
            .stdout("V2:\n  A + V2\n");
    }

    #[test]
    fn reports_invalid_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("bad.json");
        std::fs::write(&config, r#"{ "elements": ["C"] }"#).unwrap();

        revisit_cmd(&dir)
            .arg("--config")
            .arg(&config)
            .arg("run")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Config validation failed"));
    }
}

mod list_command {
    use super::*;

    #[test]
    fn lists_variants_and_operations() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout(
                "Variants:\n  A\n  B\n\nOperations:\n  V1\n  V2\n  Count\n  Collect\n",
            );
    }
}

mod init_command {
    use super::*;

    #[test]
    fn creates_loadable_config() {
        let dir = TempDir::new().unwrap();

        revisit_cmd(&dir).arg("init").assert().success();

        let content = std::fs::read_to_string(dir.path().join(".revisit.json")).unwrap();
        let config = revisit_core::PassConfig::from_json(&content).unwrap();
        assert_eq!(config, revisit_core::PassConfig::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".revisit.json"), "{}").unwrap();

        revisit_cmd(&dir)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        revisit_cmd(&dir).args(["init", "--force"]).assert().success();
        let content = std::fs::read_to_string(dir.path().join(".revisit.json")).unwrap();
        assert!(content.contains("\"operations\""));
    }
}
