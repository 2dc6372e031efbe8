/*!
 * Integration tests driving the copy-docs and determine-tier binaries
 */

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[allow(deprecated)]
fn copy_docs_cmd() -> Command {
    Command::cargo_bin("copy-docs").unwrap()
}

#[allow(deprecated)]
fn determine_tier_cmd() -> Command {
    Command::cargo_bin("determine-tier").unwrap()
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be a JSON document")
}

#[test]
fn test_copy_docs_requires_argument() {
    copy_docs_cmd().assert().failure();
}

#[test]
fn test_determine_tier_requires_argument() {
    determine_tier_cmd().assert().failure();
}

#[test]
fn test_copy_docs_prints_summary() {
    let temp = tempdir().unwrap();
    write(&temp.path().join("docs/a.md"), "# A\n");
    write(&temp.path().join("docs/nested/b.mdx"), "# B\n");
    write(&temp.path().join("docs/nested/skip.txt"), "skip");
    let config = temp.path().join("olore.config.json");
    write(
        &config,
        r#"{"name": "t", "version": "1", "description": "d", "contentPath": "docs"}"#,
    );

    let output = copy_docs_cmd()
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"files\": 2,"))
        .get_output()
        .stdout
        .clone();

    let summary = stdout_json(&output);
    assert_eq!(summary["files"], 2);
    assert_eq!(summary["size_bytes"], 8);
    assert_eq!(summary["size_kb"], 0);
    let contents = summary["contents_path"].as_str().unwrap();
    assert!(contents.ends_with("olore-package/contents"));
    assert!(Path::new(contents).join("nested/b.mdx").exists());
}

#[test]
fn test_copy_docs_names_every_missing_field() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("olore.config.json");
    write(&config, r#"{"name": "t", "version": "1"}"#);

    copy_docs_cmd()
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("description"))
        .stdout(predicate::str::contains("contentPath"));
}

#[test]
fn test_copy_docs_rejects_malformed_config() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("olore.config.json");
    write(&config, "{ not json");

    copy_docs_cmd()
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Error:"));
    assert!(!temp.path().join("olore-package").exists());
}

#[test]
fn test_copy_docs_missing_content_path() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("olore.config.json");
    write(
        &config,
        r#"{"name": "t", "version": "1", "description": "d", "contentPath": "gone"}"#,
    );

    copy_docs_cmd()
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Content path does not exist"));
    assert!(!temp.path().join("olore-package").exists());
}

#[test]
fn test_determine_tier_prints_tier() {
    let temp = tempdir().unwrap();
    write(&temp.path().join("a.md"), &"x".repeat(3000));
    write(&temp.path().join(".hidden/b.md"), "x");

    let output = determine_tier_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = stdout_json(&output);
    assert_eq!(summary["tier"], 1);
    assert_eq!(summary["file_count"], 2);
    assert_eq!(summary["size_bytes"], 3001);
    assert_eq!(summary["size_kb"], 2);
}

#[test]
fn test_determine_tier_missing_path() {
    let temp = tempdir().unwrap();

    determine_tier_cmd()
        .arg(temp.path().join("nope"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Path does not exist"));
}

#[test]
fn test_collector_output_feeds_classifier() {
    let temp = tempdir().unwrap();
    for i in 0..30 {
        write(&temp.path().join(format!("docs/p{}.md", i)), "# page\n");
    }
    let config = temp.path().join("olore.config.json");
    write(
        &config,
        r#"{"name": "t", "version": "1", "description": "d", "contentPath": "docs"}"#,
    );

    let copied = copy_docs_cmd().arg(&config).output().unwrap();
    assert!(copied.status.success());
    let contents = stdout_json(&copied.stdout)["contents_path"]
        .as_str()
        .unwrap()
        .to_string();

    let output = determine_tier_cmd()
        .arg(&contents)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = stdout_json(&output);
    assert_eq!(summary["file_count"], 30);
    assert_eq!(summary["tier"], 2);
}
