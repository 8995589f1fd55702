//! Diff command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_diff_unmodified_component_is_up_to_date() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["add", "button", "-y"])
        .assert()
        .success();

    common::veneer_cmd(&project.path)
        .args(["diff", "button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn test_diff_shows_locally_added_lines() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["add", "button", "-y"])
        .assert()
        .success();
    project.append_line("src/components/ui/button.tsx", "// local tweak");

    common::veneer_cmd(&project.path)
        .args(["diff", "button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ // local tweak"));
}

#[test]
fn test_diff_summary_over_all_installed() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["add", "button", "dialog", "-y"])
        .assert()
        .success();
    project.append_line("src/components/ui/dialog.tsx", "// drift");

    common::veneer_cmd(&project.path)
        .args(["diff"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("button")
                .and(predicate::str::contains("up to date"))
                .and(predicate::str::contains("modified")),
        );
}

#[test]
fn test_diff_reports_missing_on_disk() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["add", "button", "-y"])
        .assert()
        .success();
    std::fs::remove_file(project.path.join("src/components/ui/button.tsx")).unwrap();

    common::veneer_cmd(&project.path)
        .args(["diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn test_diff_component_not_installed() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["diff", "tabs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not installed"));
}

#[test]
fn test_diff_unknown_component_is_reported() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["diff", "not-a-real-component"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not-a-real-component"));
}

#[test]
fn test_diff_with_nothing_installed() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components installed"));
}

#[test]
fn test_diff_requires_manifest() {
    let project = common::TestProject::new();

    common::veneer_cmd(&project.path)
        .args(["diff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("components.json"));
}
