//! Integration tests for the `parse` and `format` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_parse_json_default() {
    let env = TestEnv::new();
    let output = env.run(&["parse", "/my/name/is/kang.jpg"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["dir"], "/my/name/is");
    assert_eq!(value["base"], "kang.jpg");
    assert_eq!(value["filename"], "kang");
    assert_eq!(value["extension"], "jpg");
}

#[test]
fn test_parse_assoc_omits_empty_extension() {
    let env = TestEnv::new();
    let output = env.run(&["parse", "--assoc", "foo/bar"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["dir"], "foo");
    assert_eq!(value["base"], "bar");
    assert!(value.get("extension").is_none());
}

#[test]
fn test_parse_yaml() {
    let env = TestEnv::new();
    let output = env.run(&["parse", "--format", "yaml", "/etc/nginx/nginx.conf"]);
    let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();

    assert_eq!(value["dir"].as_str(), Some("/etc/nginx"));
    assert_eq!(value["extension"].as_str(), Some("conf"));
}

#[test]
fn test_parse_plain() {
    let env = TestEnv::new();
    assert_eq!(
        env.run(&["parse", "--format", "plain", "src/lib.rs"]),
        "dir=src\nbase=lib.rs\nfilename=lib\nextension=rs"
    );
}

#[test]
fn test_parse_cleans_first() {
    let env = TestEnv::new();
    assert_eq!(
        env.run(&["parse", "--format", "plain", "a/./b/../c.txt"]),
        "dir=a\nbase=c.txt\nfilename=c\nextension=txt"
    );
}

#[test]
fn test_parse_root_dir() {
    let env = TestEnv::new();
    assert_eq!(
        env.run(&["parse", "--format", "plain", "/vmlinuz"]),
        "dir=/\nbase=vmlinuz\nfilename=vmlinuz"
    );
}

#[test]
fn test_format_dir_and_base() {
    let env = TestEnv::new();
    assert_eq!(
        env.run(&["format", "--dir", "/home/user", "--base", "notes.txt"]),
        "/home/user/notes.txt"
    );
}

#[test]
fn test_format_filename_and_extension() {
    let env = TestEnv::new();
    assert_eq!(
        env.run(&["format", "--dir", "docs", "--filename", "readme", "--extension", ".md"]),
        "docs/readme.md"
    );
    assert_eq!(
        env.run(&["format", "--dir", "docs", "--filename", "LICENSE"]),
        "docs/LICENSE"
    );
}

#[test]
fn test_format_windows() {
    let env = TestEnv::new();
    env.windows_command()
        .args(["format", "--dir", "C:\\temp", "--base", "x.log"])
        .assert()
        .success()
        .stdout("C:\\temp\\x.log\n");
}

#[test]
fn test_format_missing_dir() {
    let env = TestEnv::new();
    env.command()
        .args(["format", "--base", "x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("dir"));
}

#[test]
fn test_format_missing_base() {
    let env = TestEnv::new();
    env.command()
        .args(["format", "--dir", "x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("base"));
}
