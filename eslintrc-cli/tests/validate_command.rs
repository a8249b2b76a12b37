//! Integration tests for the `validate` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_validate_valid_config() {
    let env = TestEnv::new();
    env.write("base.json", r#"{ "rules": { "semi": ["error", "always"] } }"#);
    env.write(".eslintrc.json", r#"{ "extends": "./base.json", "env": { "node": true } }"#);

    env.command()
        .args(["validate", ".eslintrc.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid (2 fragments)"));
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();

    env.command()
        .args(["validate", "nope.json"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_validate_invalid_severity() {
    let env = TestEnv::new();
    env.write(".eslintrc.yml", "rules:\n  semi: 5\n");

    env.command()
        .args(["validate", ".eslintrc.yml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Validation error"))
        .stderr(predicate::str::contains("rules.semi"));
}

#[test]
fn test_validate_unknown_key() {
    let env = TestEnv::new();
    env.write(".eslintrc.json", r#"{ "rulez": {} }"#);

    env.command()
        .args(["validate", ".eslintrc.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("rulez"));
}

#[test]
fn test_validate_reports_broken_extends() {
    let env = TestEnv::new();
    env.write(".eslintrc.json", r#"{ "extends": "eslint:doesNotExist" }"#);

    env.command()
        .args(["validate", ".eslintrc.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("eslint:doesNotExist"));
}

#[test]
fn test_validate_missing_plugin_is_warning() {
    let env = TestEnv::new();
    env.write(".eslintrc.json", r#"{ "plugins": ["ghost"] }"#);

    env.command()
        .args(["validate", ".eslintrc.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: plugin"))
        .stderr(predicate::str::contains("eslint-plugin-ghost"));

    env.command()
        .args(["validate", ".eslintrc.json", "--strict"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("1 reference(s) failed to load"));
}

#[test]
fn test_validate_quiet() {
    let env = TestEnv::new();
    env.write(".eslintrc.json", "{}");

    env.command()
        .args(["--quiet", "validate", ".eslintrc.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
