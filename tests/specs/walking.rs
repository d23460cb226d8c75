//! Behavioral specs for include/exclude matching during the walk.
//!
//! Tests that matchfiles selects files the way compiler project configs do:
//! - Implicit directory globs and `**` spans
//! - Dotted names, package folders and `.min.js` files
//! - Include order, depth limits and symlink cycles

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Includes
// =============================================================================

#[test]
fn no_includes_lists_everything() {
    let temp = Project::with_files(&["a.ts", "src/b.ts", "node_modules/dep/c.ts"]);
    run()
        .pwd(temp.path())
        .passes()
        .lines_eq(&["a.ts", "src/b.ts", "node_modules/dep/c.ts"]);
}

#[test]
fn directory_include_is_implicit_glob() {
    let temp = Project::with_files(&["src/a.ts", "src/nested/b.ts", "lib/c.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src"])
        .passes()
        .lines_eq(&["src/a.ts", "src/nested/b.ts"]);
}

#[test]
fn single_star_stays_in_one_directory() {
    let temp = Project::with_files(&["src/a.ts", "src/nested/b.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src/*.ts"])
        .passes()
        .stdout_eq("src/a.ts\n");
}

#[test]
fn question_mark_matches_one_character() {
    let temp = Project::with_files(&["src/a1.ts", "src/a12.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src/a?.ts"])
        .passes()
        .stdout_eq("src/a1.ts\n");
}

#[test]
fn trailing_double_star_include_matches_nothing() {
    let temp = Project::with_files(&["src/a.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src/**"])
        .matches_nothing();
}

#[test]
fn results_are_grouped_by_include_order() {
    let temp = Project::with_files(&["a/x.ts", "b/y.ts", "c/z.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "c", "-i", "a", "-i", "b"])
        .passes()
        .stdout_eq("c/z.ts\na/x.ts\nb/y.ts\n");
}

#[test]
fn includes_may_reach_outside_the_root() {
    let temp = Project::with_files(&["app/main.ts", "shared/util.ts", "other/x.ts"]);
    run()
        .pwd(temp.path())
        .args(&["app", "-i", "**/*", "-i", "../shared/**/*"])
        .passes()
        .stdout_eq("app/main.ts\nshared/util.ts\n");
}

// =============================================================================
// Implicit exclusions
// =============================================================================

#[test]
fn wildcards_skip_dotted_names_and_package_folders() {
    let temp = Project::with_files(&[
        "src/a.ts",
        "src/.hidden.ts",
        "src/.cache/b.ts",
        "src/node_modules/dep/c.ts",
        "src/bower_components/d.ts",
    ]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src/**/*"])
        .passes()
        .stdout_eq("src/a.ts\n");
}

#[test]
fn literal_package_folder_is_walked() {
    let temp = Project::with_files(&["node_modules/dep/index.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "node_modules/dep/*.ts"])
        .passes()
        .stdout_eq("node_modules/dep/index.ts\n");
}

#[test]
fn min_js_needs_explicit_include() {
    let temp = Project::with_files(&["lib/app.js", "lib/app.min.js"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "lib"])
        .passes()
        .stdout_eq("lib/app.js\n");
    run()
        .pwd(temp.path())
        .args(&["-i", "lib/*.min.js"])
        .passes()
        .stdout_eq("lib/app.min.js\n");
}

// =============================================================================
// Excludes and extensions
// =============================================================================

#[test]
fn excludes_prune_directories() {
    let temp = Project::with_files(&["src/a.ts", "src/generated/b.ts", "src/a.spec.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src", "-x", "src/generated", "-x", "**/*.spec.ts"])
        .passes()
        .stdout_eq("src/a.ts\n");
}

#[test]
fn excludes_without_includes() {
    let temp = Project::with_files(&["a.ts", "dist/a.js"]);
    run()
        .pwd(temp.path())
        .args(&["-x", "dist", "-x", ".git"])
        .passes()
        .stdout_eq("a.ts\n");
}

#[test]
fn extensions_filter_files() {
    let temp = Project::with_files(&["src/a.ts", "src/b.tsx", "src/c.js"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src", "-e", ".ts", "-e", "tsx"])
        .passes()
        .lines_eq(&["src/a.ts", "src/b.tsx"]);
}

// =============================================================================
// Depth, case and symlinks
// =============================================================================

#[test]
fn depth_limits_listed_levels() {
    let temp = Project::with_files(&["index.ts", "src/util.ts", "src/deep/nested/file.ts"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "**/*", "--depth", "2"])
        .passes()
        .lines_eq(&["index.ts", "src/util.ts"]);
}

#[test]
fn ignore_case_matches_mixed_case_names() {
    let temp = Project::with_files(&["SRC/Index.TS"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src/*.ts", "--ignore-case"])
        .passes()
        .stdout_eq("SRC/Index.TS\n");
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
#[test]
fn case_sensitive_rejects_mixed_case_names() {
    let temp = Project::with_files(&["SRC/Index.TS"]);
    run()
        .pwd(temp.path())
        .args(&["-i", "src/*.ts", "--case-sensitive"])
        .matches_nothing();
}

#[cfg(unix)]
#[test]
fn symlink_cycle_terminates() {
    let temp = Project::with_files(&["src/a.ts"]);
    std::os::unix::fs::symlink(temp.path(), temp.path().join("src/loop")).unwrap();
    run()
        .pwd(temp.path())
        .args(&["-i", "src"])
        .passes()
        .stdout_eq("src/a.ts\n");
}
