use assert_cmd::Command;
use predicates::prelude::*;

fn osxdict() -> Command {
    let mut cmd = Command::cargo_bin("osxdict").unwrap();
    cmd.env_remove("OSX_DICTIONARY");
    cmd
}

#[test]
fn no_arguments_prints_usage_and_exits_zero() {
    osxdict()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn help_flag_prints_usage_and_exits_zero() {
    osxdict()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_option_is_treated_as_help() {
    osxdict()
        .arg("--frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn all_unknown_dictionaries_exit_one() {
    osxdict()
        .args(["-d", "missing1", "-d", "missing2", "word"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no such dictionary: missing1"))
        .stderr(predicate::str::contains("no such dictionary: missing2"));
}

#[test]
fn json_mode_emits_nothing_when_no_dictionary_survives() {
    // Rendering happens after normalization, so not even the array
    // brackets reach stdout.
    osxdict()
        .args(["-j", "-d", "missing1", "word"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn duplicate_unknown_dictionary_warns_once() {
    osxdict()
        .args(["-d", "missing1", "-d", "missing1", "word"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no such dictionary: missing1").count(1));
}

#[test]
fn empty_env_selection_prints_usage() {
    osxdict()
        .env("OSX_DICTIONARY", "")
        .arg("word")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn env_names_are_validated_like_flag_names() {
    osxdict()
        .env("OSX_DICTIONARY", "definitely-not-installed")
        .arg("word")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "no such dictionary: definitely-not-installed",
        ));
}

#[test]
fn list_all_exits_zero() {
    // Off macOS the catalog is empty and this takes the usage path; on a
    // Mac it lists every installed dictionary. Exit 0 either way.
    osxdict().args(["-l", "-A"]).assert().success();
}
