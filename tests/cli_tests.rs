//! CLI integration tests using the REAL modpack binary

mod common;

use common::{TestWorkspace, modpack_cmd};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    let workspace = TestWorkspace::new();
    modpack_cmd(&workspace.path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tar archive"))
        .stdout(predicate::str::contains("pack"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    let workspace = TestWorkspace::new();
    modpack_cmd(&workspace.path)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modpack"))
        .stdout(predicate::str::contains("Build info"))
        .stdout(predicate::str::contains("tar.gz"));
}

#[test]
fn test_completions_output() {
    let workspace = TestWorkspace::new();
    modpack_cmd(&workspace.path)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modpack"));
}

#[test]
fn test_unknown_shell_rejected() {
    let workspace = TestWorkspace::new();
    modpack_cmd(&workspace.path)
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

#[test]
fn test_pack_without_output_rejected() {
    let workspace = TestWorkspace::new();
    modpack_cmd(&workspace.path)
        .args(["pack", "src"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_list_shows_modules_and_entries() {
    let workspace = TestWorkspace::new();
    workspace.create_shop_root("src");

    modpack_cmd(&workspace.path)
        .args(["list", "src", "--entries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop"))
        .stdout(predicate::str::contains("catalog (shop.catalog)"))
        .stdout(predicate::str::contains("Bundles: 1"))
        .stdout(predicate::str::contains("shop.catalog/classes/Listing.js"));

    assert!(!workspace.file_exists("app.tar.gz"));
}

#[test]
fn test_list_empty_root() {
    let workspace = TestWorkspace::new();
    workspace.write_file("src/readme.txt", "nothing here");

    modpack_cmd(&workspace.path)
        .args(["list", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No modules found."));
}

#[test]
fn test_list_reports_duplicates() {
    let workspace = TestWorkspace::new();
    workspace.write_file("a/shop/module.json", "{}");
    workspace.write_file("b/shop/module.json", "{}");

    modpack_cmd(&workspace.path)
        .args(["list", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate module"));
}

#[test]
fn test_verbose_enables_debug_logging() {
    let workspace = TestWorkspace::new();
    workspace.write_file("src/shop/module.json", "{}");

    modpack_cmd(&workspace.path)
        .env_remove("MODPACK_LOG")
        .args(["list", "src", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("registered module"));
}
