//! CLI tests for the `reencode` binary.
//!
//! Spawns the binary in a temporary working directory and checks the status
//! lines, file contents and exit codes.

use std::process::{Command, Output};

use reencode::exit_codes;
use reencode::io::config::{ReencodeConfig, load_config};
use reencode::test_support::{TestDir, paths};

fn reencode(dir: &TestDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reencode"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("spawn reencode")
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn run_reports_each_path_in_order() {
    let dir = TestDir::new().expect("dir");
    dir.write_text("a.txt", "café").expect("a");
    dir.write_text("b.txt", "naïve").expect("b");

    let output = reencode(&dir, &["run", "a.txt", "missing.txt", "b.txt"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        lines(&output.stdout),
        vec![
            "fixing a.txt",
            "fixed a.txt",
            "fixing b.txt",
            "fixed b.txt",
            "encoding fix complete: 2 fixed, 1 not found, 0 failed",
        ]
    );
    assert_eq!(lines(&output.stderr), vec!["missing.txt not found"]);
    assert_eq!(dir.read_text("a.txt").expect("a"), "café");
    assert_eq!(dir.read_text("b.txt").expect("b"), "naïve");
    assert!(!dir.path().join("missing.txt").exists());
}

#[test]
fn per_file_errors_keep_exit_code_ok() {
    let dir = TestDir::new().expect("dir");
    dir.write_bytes("latin1.txt", &[b'c', b'a', b'f', 0xe9])
        .expect("latin1");
    dir.write_text("after.txt", "after").expect("after");

    let output = reencode(&dir, &["run", "latin1.txt", "after.txt"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stderr = lines(&output.stderr);
    assert_eq!(stderr.len(), 1);
    assert!(stderr[0].starts_with("error: latin1.txt: decode as utf-8"));
    assert!(
        lines(&output.stdout)
            .iter()
            .any(|line| line == "fixed after.txt")
    );
}

#[test]
fn run_uses_config_file_list() {
    let dir = TestDir::new().expect("dir");
    dir.write_text("reencode.toml", "paths = [\"docs/one.md\", \"two.md\"]\n")
        .expect("config");
    dir.write_text("docs/one.md", "# one").expect("one");

    let output = reencode(&dir, &["run"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        lines(&output.stdout),
        vec![
            "fixing docs/one.md",
            "fixed docs/one.md",
            "encoding fix complete: 1 fixed, 1 not found, 0 failed",
        ]
    );
    assert_eq!(lines(&output.stderr), vec!["two.md not found"]);
}

#[test]
fn run_json_prints_report() {
    let dir = TestDir::new().expect("dir");
    dir.write_text("a.txt", "a").expect("a");

    let output = reencode(&dir, &["run", "--json", "a.txt", "nope.txt"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["fixed"], 1);
    assert_eq!(value["data"]["not_found"], 1);
    assert_eq!(value["data"]["outcomes"][0]["status"], "fixed");
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let dir = TestDir::new().expect("dir");
    dir.write_text("reencode.toml", "paths = []\n").expect("config");

    let output = reencode(&dir, &["run"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("paths must be a non-empty array"));
}

#[test]
fn init_writes_default_config_once() {
    let dir = TestDir::new().expect("dir");

    let first = reencode(&dir, &["init"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    let cfg = load_config(&dir.path().join("reencode.toml")).expect("load");
    assert_eq!(cfg, ReencodeConfig::default());

    dir.write_text("reencode.toml", "paths = [\"keep.txt\"]\n")
        .expect("edit");
    let second = reencode(&dir, &["init"]);
    assert_eq!(second.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&second.stdout).contains("exists"));
    let cfg = load_config(&dir.path().join("reencode.toml")).expect("load");
    assert_eq!(cfg.paths, paths(&["keep.txt"]));
}

#[test]
fn list_prints_configured_paths() {
    let dir = TestDir::new().expect("dir");
    dir.write_text("custom.toml", "paths = [\"x.txt\", \"y/z.txt\"]\n")
        .expect("config");

    let output = reencode(&dir, &["list", "--config", "custom.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(lines(&output.stdout), vec!["x.txt", "y/z.txt"]);
}
