//! Behavioral specs for matchfiles.toml handling.
//!
//! Covers discovery, version validation, unknown key warnings and the
//! precedence of command-line flags over config values.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn config_selects_files() {
    let temp = Project::with_files(&["src/a.ts", "src/a.spec.ts", "docs/readme.md"]);
    temp.config(
        r#"
[project]
include = ["src"]
exclude = ["**/*.spec.ts"]
extensions = [".ts"]
"#,
    );
    run().pwd(temp.path()).passes().stdout_eq("src/a.ts\n");
}

#[test]
fn config_is_found_in_parent_directory() {
    let temp = Project::with_files(&["src/a.ts", "src/deep/b.ts"]);
    temp.config("[project]\ninclude = [\"src/*.ts\"]\n");
    run()
        .pwd(temp.path().join("src/deep"))
        .passes()
        .stdout_has("/src/a.ts")
        .stdout_lacks("b.ts");
}

#[test]
fn flags_override_config() {
    let temp = Project::with_files(&["src/a.ts", "lib/b.ts"]);
    temp.config("[project]\ninclude = [\"src\"]\n");
    run()
        .pwd(temp.path())
        .args(&["-i", "lib"])
        .passes()
        .stdout_eq("lib/b.ts\n");
}

#[test]
fn config_depth_applies() {
    let temp = Project::with_files(&["a.ts", "src/b.ts"]);
    temp.config("[project]\ninclude = [\"**/*.ts\"]\ndepth = 1\n");
    run().pwd(temp.path()).passes().stdout_eq("a.ts\n");
}

#[test]
fn explicit_config_flag() {
    let temp = Project::with_files(&["src/a.ts", "lib/b.ts"]);
    temp.file("conf/custom.toml", "version = 1\n[project]\ninclude = [\"lib\"]\n");
    run()
        .pwd(temp.path())
        .args(&[".", "-C", "conf/custom.toml"])
        .passes()
        .stdout_eq("lib/b.ts\n");
}

#[test]
fn hidden_config_is_discovered() {
    let temp = Project::with_files(&["src/a.ts", "lib/b.ts"]);
    temp.file(".matchfiles.toml", "version = 1\n[project]\ninclude = [\"lib\"]\n");
    run().pwd(temp.path()).passes().stdout_eq("lib/b.ts\n");
}

#[test]
fn config_flag_accepts_directory() {
    let temp = Project::with_files(&["src/a.ts", "lib/b.ts"]);
    temp.file("conf/matchfiles.toml", "version = 1\n[project]\ninclude = [\"src\"]\n");
    run()
        .pwd(temp.path())
        .args(&[".", "-C", "conf"])
        .passes()
        .stdout_eq("src/a.ts\n");
}

#[test]
fn config_env_var() {
    let temp = Project::with_files(&["src/a.ts", "lib/b.ts"]);
    temp.file("conf/custom.toml", "version = 1\n[project]\ninclude = [\"src\"]\n");
    let config = temp.path().join("conf/custom.toml");
    run()
        .pwd(temp.path())
        .env("MATCHFILES_CONFIG", config.to_str().unwrap())
        .args(&["."])
        .passes()
        .stdout_eq("src/a.ts\n");
}

#[test]
fn missing_explicit_config_is_config_error() {
    let temp = Project::with_files(&["src/a.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-C", "missing.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_is_config_error() {
    let temp = Project::with_files(&["src/a.ts"]);
    temp.config("version = 2\n");
    run()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn invalid_toml_is_config_error() {
    let temp = Project::with_files(&["src/a.ts"]);
    temp.config("version = 1\n[project\n");
    run().pwd(temp.path()).exits(2).stderr_has("config error");
}

#[test]
fn unknown_keys_warn_but_run() {
    let temp = Project::with_files(&["src/a.ts"]);
    temp.config("[project]\ninclude = [\"src\"]\nsource = [\"lib\"]\n");
    run()
        .pwd(temp.path())
        .passes()
        .stdout_eq("src/a.ts\n")
        .stderr_has("unrecognized field `project.source`");
}
