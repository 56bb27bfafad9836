//! Integration tests for CLI behavior
//!
//! These tests drive the `relint` binary and check what it prints and how it
//! exits.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Helper to create a command for the relint CLI
fn relint_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_relint"))
}

/// `a.go`, `b.go`, `c.txt` and `pkg/d.go`.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("a.go").write_str("package a\n").unwrap();
    temp.child("b.go").write_str("package b\n").unwrap();
    temp.child("c.txt").write_str("notes\n").unwrap();
    temp.child("pkg/d.go").write_str("package pkg\n").unwrap();
    temp
}

fn plan_json(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = relint_cmd()
        .current_dir(temp.path())
        .arg("--print-plan")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "relint failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        relint_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("--exclude"));
    }

    #[test]
    fn shows_version_with_flag() {
        relint_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod file_selection {
    use super::*;

    #[test]
    fn expands_include_patterns() {
        let temp = project();
        let plan = plan_json(&temp, &["*.go"]);
        assert_eq!(plan["files"], serde_json::json!(["a.go", "b.go"]));
    }

    #[test]
    fn removes_excluded_files() {
        let temp = project();
        let plan = plan_json(&temp, &["--exclude", "b.go", "*.go"]);
        assert_eq!(plan["files"], serde_json::json!(["a.go"]));
    }

    #[test]
    fn splits_exclude_on_spaces() {
        let temp = project();
        let plan = plan_json(&temp, &["--exclude", "a.go pkg/*.go", "**/*.go"]);
        assert_eq!(plan["files"], serde_json::json!(["b.go"]));
    }

    #[test]
    fn keeps_duplicates_from_overlapping_patterns() {
        let temp = project();
        let plan = plan_json(&temp, &["*.go", "a.go"]);
        assert_eq!(plan["files"], serde_json::json!(["a.go", "b.go", "a.go"]));
    }

    #[test]
    fn fails_without_patterns() {
        relint_cmd()
            .assert()
            .code(2)
            .stderr(predicate::str::contains("no input files specified"));
    }

    #[test]
    fn fails_on_invalid_pattern() {
        let temp = project();
        relint_cmd()
            .current_dir(temp.path())
            .args(["--exclude", "[oops", "*.go"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("[oops"));
    }
}

mod configuration {
    use super::*;

    #[test]
    fn uses_default_rules_without_config() {
        let temp = project();
        let plan = plan_json(&temp, &["*.go"]);

        let rules = plan["rules"].as_array().unwrap();
        assert!(rules.contains(&serde_json::json!("exported")));
        assert!(!rules.contains(&serde_json::json!("cyclomatic")));
        assert_eq!(plan["config"]["severity"], "warning");
        assert_eq!(plan["config"]["rules"]["exported"]["severity"], "warning");
    }

    #[test]
    fn normalizes_configured_rules() {
        let temp = project();
        temp.child("relint.toml")
            .write_str(
                r#"
confidence = 0.8
severity = "error"

[rule.cyclomatic]
arguments = [10]

[rule.exported]
severity = "warning"
"#,
            )
            .unwrap();

        let plan = plan_json(&temp, &["--config", "relint.toml", "*.go"]);
        assert_eq!(plan["rules"], serde_json::json!(["cyclomatic", "exported"]));
        assert_eq!(plan["config"]["rules"]["cyclomatic"]["severity"], "error");
        assert_eq!(plan["config"]["rules"]["exported"]["severity"], "warning");
    }

    #[test]
    fn fails_on_unknown_rule() {
        let temp = project();
        temp.child("relint.toml")
            .write_str("[rules.no-such-rule]\n")
            .unwrap();

        relint_cmd()
            .current_dir(temp.path())
            .args(["--print-plan", "--config", "relint.toml", "*.go"])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("no-such-rule"));
    }

    #[test]
    fn fails_on_malformed_config() {
        let temp = project();
        temp.child("relint.toml")
            .write_str("severity = \"fatal\"\n")
            .unwrap();

        relint_cmd()
            .current_dir(temp.path())
            .args(["--config", "relint.toml", "*.go"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("cannot parse the config file"));
    }

    #[test]
    fn fails_on_missing_config() {
        let temp = project();
        relint_cmd()
            .current_dir(temp.path())
            .args(["--config", "missing.toml", "*.go"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("cannot read the config file"));
    }
}

mod formatter_selection {
    use super::*;

    #[test]
    fn defaults_to_cli_formatter() {
        let temp = project();
        relint_cmd()
            .current_dir(temp.path())
            .arg("*.go")
            .assert()
            .success()
            .stdout(predicate::str::contains("No problems found"));
    }

    #[test]
    fn uses_requested_formatter() {
        let temp = project();
        relint_cmd()
            .current_dir(temp.path())
            .args(["--formatter", "json", "*.go"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("[]"));
    }

    #[test]
    fn fails_on_unknown_formatter() {
        let temp = project();
        relint_cmd()
            .current_dir(temp.path())
            .args(["--formatter", "bogus", "*.go"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unknown formatter bogus"));
    }
}
