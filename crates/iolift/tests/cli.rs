//! End-to-end tests driving the `iolift` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn iolift(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iolift"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const HELLO: &str = "class Hello {\n    void run() {\n        System.out.println(\"hi\");\n    }\n}\n";

#[test]
fn rewrite_in_place_and_summarize() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/Hello.java"), HELLO).unwrap();

    let output = iolift(&["rewrite", "src"], dir.path());
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("src/Hello.java")).unwrap(),
        HELLO.replace("System.out.println", "IO.println")
    );
    assert!(dir.path().join("src/IO.java").exists());

    let text = stdout(&output);
    assert!(text.starts_with("Target: src\nScanned 1 .java file(s)\n1 file(s) modified.\n"));
    assert!(text.contains("Created IO.java in 1 directory:\n"));
    assert!(text.contains("Changed:\n"));
}

#[test]
fn check_mode_writes_nothing_and_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Hello.java"), HELLO).unwrap();

    let output = iolift(&["rewrite", "--check"], dir.path());
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("Hello.java")).unwrap(), HELLO);
    assert!(!dir.path().join("IO.java").exists());

    let text = stdout(&output);
    assert!(text.starts_with("Target: .\n"));
    assert!(text.contains("1 file(s) would be modified (dry-run).\n"));
    assert!(text.contains("(would create)\n"));
    assert!(text.contains("Would change:\n"));
}

#[test]
fn diff_mode_prints_changed_lines() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Hello.java"), HELLO).unwrap();

    let output = iolift(&["rewrite", "--diff", "Hello.java"], dir.path());
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("-        System.out.println(\"hi\");\n+        IO.println(\"hi\");\n"));
    assert_eq!(fs::read_to_string(dir.path().join("Hello.java")).unwrap(), HELLO);
}

#[test]
fn missing_target_fails_but_others_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Hello.java"), HELLO).unwrap();

    let output = iolift(&["rewrite", "missing", "Hello.java"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("Errors (1):\n- missing: path does not exist\n"));
    assert_eq!(
        fs::read_to_string(dir.path().join("Hello.java")).unwrap(),
        HELLO.replace("System.out.println", "IO.println")
    );
}

#[test]
fn notebook_and_normalize_commands() {
    let dir = TempDir::new().unwrap();
    let notebook = r#"{"cells": [{"cell_type": "code", "source": "System.out.println(1);"}]}"#;
    fs::write(dir.path().join("Demo.ijnb"), notebook).unwrap();

    let output = iolift(&["notebook"], dir.path());
    assert!(output.status.success());
    assert!(stdout(&output).contains("Scanned 1 .ijnb file(s)\n1 file(s) modified.\n"));
    let text = fs::read_to_string(dir.path().join("Demo.ijnb")).unwrap();
    assert!(text.contains("\"source\": \"IO.println(1);\""));
    assert!(!dir.path().join("IO.java").exists());

    let output = iolift(&["normalize", "Demo.ijnb"], dir.path());
    assert!(output.status.success());
    let text = fs::read_to_string(dir.path().join("Demo.ijnb")).unwrap();
    assert!(text.contains("\"execution_count\": 0"));
    assert!(text.contains("\"outputs\": []"));
}

#[test]
fn regions_command_lists_tokens() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("A.java"), "int x; // note\n").unwrap();

    let output = iolift(&["regions", "A.java"], dir.path());
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("0..7 code"));
    assert!(text.contains("7..15 line-comment"));
}

#[test]
fn unknown_option_and_command() {
    let dir = TempDir::new().unwrap();

    let output = iolift(&["rewrite", "--bogus"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown option: --bogus"));

    let output = iolift(&["frobnicate"], dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_and_version() {
    let dir = TempDir::new().unwrap();

    let output = iolift(&[], dir.path());
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: iolift <command>"));

    let output = iolift(&["rewrite", "--help"], dir.path());
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: iolift rewrite"));

    let output = iolift(&["version"], dir.path());
    assert_eq!(stdout(&output), format!("iolift {}\n", env!("CARGO_PKG_VERSION")));
}
