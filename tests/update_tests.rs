//! Update command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_update_unmodified_component_is_up_to_date() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["add", "dialog", "-y"])
        .assert()
        .success();
    let before = project.read_file("src/components/ui/dialog.tsx");

    common::veneer_cmd(&project.path)
        .args(["update", "dialog", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));

    assert_eq!(project.read_file("src/components/ui/dialog.tsx"), before);
}

#[test]
fn test_update_restores_modified_component() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["add", "dialog", "-y"])
        .assert()
        .success();
    let fresh = project.read_file("src/components/ui/dialog.tsx");

    project.append_line("src/components/ui/dialog.tsx", "// local tweak");

    common::veneer_cmd(&project.path)
        .args(["update", "dialog", "-y"])
        .assert()
        .success();

    let updated = project.read_file("src/components/ui/dialog.tsx");
    assert!(!updated.contains("local tweak"));
    assert_eq!(updated, fresh);
}

#[test]
fn test_update_defaults_to_all_installed_components() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["add", "button", "dialog", "-y"])
        .assert()
        .success();

    project.append_line("src/components/ui/button.tsx", "// drift");

    common::veneer_cmd(&project.path)
        .args(["update", "-y"])
        .assert()
        .success();

    assert!(!project
        .read_file("src/components/ui/button.tsx")
        .contains("drift"));
}

#[test]
fn test_update_skips_component_missing_on_disk() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["add", "dialog", "-y"])
        .assert()
        .success();
    std::fs::remove_file(project.path.join("src/components/ui/dialog.tsx")).unwrap();

    common::veneer_cmd(&project.path)
        .args(["update", "dialog", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping"));

    assert!(!project.file_exists("src/components/ui/dialog.tsx"));
}

#[test]
fn test_update_unknown_component_is_reported() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["update", "not-a-real-component", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not-a-real-component"));
}

#[test]
fn test_update_with_nothing_installed() {
    let project = common::TestProject::new();
    project.init_manifest();

    common::veneer_cmd(&project.path)
        .args(["update", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components installed"));
}

#[test]
fn test_update_requires_manifest() {
    let project = common::TestProject::new();

    common::veneer_cmd(&project.path)
        .args(["update", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("components.json"));
}
