//! End-to-end tests that drive the compiled `algomate` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

fn algomate_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("algomate");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    fs::write(
        root.join("curriculum.txt"),
        "Arrays are fast. Linked lists are flexible. Trees are hierarchical. \
         Stacks are last in, first out. Queues are first in, first out.",
    )
    .unwrap();

    // completion.api_url points at a closed local port so `ask` exercises
    // the fallback path without touching the network.
    let config_content = format!(
        r#"[document]
path = "{}/curriculum.txt"

[chunking]
max_chars = 60

[completion]
api_url = "http://127.0.0.1:9/v1/chat/completions"
timeout_secs = 2

[server]
bind = "127.0.0.1:7332"
"#,
        root.display()
    );

    let config_path = root.join("algomate.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_algomate(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = algomate_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .env("GROQ_API_KEY", "test-key-unused")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run algomate binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_inspect_prints_chunk_stats() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_algomate(&config_path, &["inspect"]);
    assert!(success, "inspect failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Document processed successfully."));
    assert!(stdout.contains("chunk length:"));
    assert!(stdout.contains("[0]"));
}

#[test]
fn test_inspect_missing_document_fails() {
    let (_tmp, config_path) = setup_test_env();
    let bad_config = config_path.parent().unwrap().join("bad.toml");
    fs::write(
        &bad_config,
        r#"[document]
path = "/nonexistent/curriculum.pdf"
"#,
    )
    .unwrap();

    let (_, stderr, success) = run_algomate(&bad_config, &["inspect"]);
    assert!(!success);
    assert!(stderr.contains("Error processing document"));
}

#[test]
fn test_ask_falls_back_when_service_unreachable() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_algomate(&config_path, &["ask", "hello"]);
    assert!(success, "ask failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Hello! I'm here to help you learn"));
    assert!(stdout.contains("source: Local Knowledge Base"));
    assert!(stdout.contains("relevant chunks:"));
}

#[test]
fn test_ask_direct_omits_chunk_count() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_algomate(&config_path, &["ask", "hello", "--direct"]);
    assert!(success);
    assert!(stdout.contains("source: Local Knowledge Base"));
    assert!(!stdout.contains("relevant chunks:"));
}

#[test]
fn test_missing_config_is_error() {
    let (tmp, _) = setup_test_env();
    let missing = tmp.path().join("nope.toml");

    let binary = algomate_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(missing.to_str().unwrap())
        .arg("inspect")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}
