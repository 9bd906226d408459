//! Integration tests for the `validate` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_validate_clean_document() {
    let env = TestEnv::new();
    let config = env.write_file(
        "ondemand.yml",
        "dashboard_title: Portal\nprofiles:\n  team1:\n    pinned_apps: [sys/*]\n  team2: ~\n",
    );

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout("Configuration is valid (2 profile(s))\n");
}

#[test]
fn test_validate_reports_warnings() {
    let env = TestEnv::new();
    let config = env.ondemand_yml();

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: profiles.team2.public_url",
        ))
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    let env = TestEnv::new();
    let config = env.write_file("ondemand.yml", "navbar_type: purple\n");

    env.command()
        .arg("validate")
        .arg("--strict")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("warning: navbar_type"))
        .stderr(predicate::str::contains("1 warning(s)"));
}

#[test]
fn test_validate_rejects_non_mapping_profiles() {
    let env = TestEnv::new();
    let config = env.write_file("ondemand.yml", "profiles: [team1, team2]\n");

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"))
        .stderr(predicate::str::contains("profiles"));
}

#[test]
fn test_validate_rejects_non_mapping_profile_entry() {
    let env = TestEnv::new();
    let config = env.write_file("ondemand.yml", "profiles:\n  team1: 42\n");

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("profiles.team1"));
}

#[test]
fn test_validate_parse_error() {
    let env = TestEnv::new();
    let config = env.write_file("ondemand.yml", "dashboard_title: [unclosed\n");

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();

    env.command()
        .arg("validate")
        .arg(env.path().join("absent.yml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}
