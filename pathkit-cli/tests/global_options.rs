//! Integration tests for global options and configuration layering.
//!
//! Precedence, highest first: flags, `PATHKIT_*` variables, the `--config`
//! file, `~/.pathkit/config.yaml`, built-in defaults.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_user_config_supplies_platform_and_cwd() {
    let env = TestEnv::new();
    env.write_user_config("platform: windows\ncwd: 'C:\\base'\n");

    env.command_bare()
        .args(["resolve", "foo"])
        .assert()
        .success()
        .stdout("C:\\base\\foo\n");
}

#[test]
fn test_explicit_config_overrides_user_config() {
    let env = TestEnv::new();
    env.write_user_config("platform: posix\ncwd: /from/user\n");
    let explicit = env.write_config("pathkit.yaml", "cwd: /from/explicit\n");

    env.command_bare()
        .arg("--config")
        .arg(&explicit)
        .args(["resolve", "x"])
        .assert()
        .success()
        .stdout("/from/explicit/x\n");
}

#[test]
fn test_config_env_variable_selects_file() {
    let env = TestEnv::new();
    let explicit = env.write_config("pathkit.yaml", "platform: posix\ncwd: /srv\n");

    env.command_bare()
        .env("PATHKIT_CONFIG", &explicit)
        .args(["resolve", "app"])
        .assert()
        .success()
        .stdout("/srv/app\n");
}

#[test]
fn test_env_overrides_config_file() {
    let env = TestEnv::new();
    env.write_user_config("platform: posix\ncwd: /from/file\n");

    env.command_bare()
        .env("PATHKIT_CWD", "/from/env")
        .args(["resolve", "x"])
        .assert()
        .success()
        .stdout("/from/env/x\n");
}

#[test]
fn test_flags_override_env() {
    let env = TestEnv::new();

    env.command_bare()
        .env("PATHKIT_CWD", "/from/env")
        .args(["--platform", "posix", "--cwd", "/from/flag", "resolve", "x"])
        .assert()
        .success()
        .stdout("/from/flag/x\n");
}

#[test]
fn test_configured_output_format() {
    let env = TestEnv::new();
    env.write_user_config("output_format: plain\n");

    env.command()
        .args(["parse", "a/b.c"])
        .assert()
        .success()
        .stdout("dir=a\nbase=b.c\nfilename=b\nextension=c\n");

    // Flag beats configuration
    env.command()
        .args(["parse", "--format", "json", "a/b.c"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_show_config() {
    let env = TestEnv::new();
    env.command()
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("platform: posix"))
        .stdout(predicate::str::contains("separator: /"))
        .stdout(predicate::str::contains("delimiter: :"))
        .stdout(predicate::str::contains("cwd: /work/project"))
        .stdout(predicate::str::contains("output_format: json"));

    env.windows_command()
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("separator: \\"))
        .stdout(predicate::str::contains("delimiter: ;"));
}

#[test]
fn test_verbose_shows_library_trace() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "normalize", "/../etc"])
        .assert()
        .success()
        .stdout("/etc\n")
        .stderr(predicate::str::contains("clamping"));
}

#[test]
fn test_quiet_suppresses_trace() {
    let env = TestEnv::new();
    env.command()
        .args(["--quiet", "normalize", "/../etc"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_mode_from_config() {
    let env = TestEnv::new();
    env.write_user_config("log_mode: verbose\n");

    env.command()
        .args(["normalize", "/../etc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("clamping"));
}

#[test]
fn test_completions() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pathkit"));
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("relative"))
        .stdout(predicate::str::contains("is-absolute"));
}
