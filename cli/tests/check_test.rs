//! Integration tests for the `check` command.

mod common;

use common::{beautiful, temp_file};
use predicates::prelude::*;

#[test]
fn check_valid_file() {
    let file = temp_file("type Handler = pfun<i32, i32>;\ntype Grid = array<u8, 3, 5>;\n");

    beautiful()
        .args(["check", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK (2 declarations)"));
}

#[test]
fn check_multiple_valid_files() {
    let file1 = temp_file("type A = ptr<u8>;");
    let file2 = temp_file("type B = cnst<vltl<u32>>;");
    let file3 = temp_file("// empty\n");

    beautiful()
        .args([
            "check",
            file1.path().to_str().unwrap(),
            file2.path().to_str().unwrap(),
            file3.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK").count(3));
}

#[test]
fn check_empty_function_list() {
    let file = temp_file("type F = fun<>;");

    beautiful()
        .args(["check", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[E002] Error"));
}

#[test]
fn check_parse_error() {
    let file = temp_file("type F = ptr<u8;");

    beautiful()
        .args(["check", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[P001] Error"));
}

#[test]
fn check_duplicate_name() {
    let file = temp_file("type A = u8;\ntype A = u16;\n");

    beautiful()
        .args(["check", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("first declared here"));
}

#[test]
fn check_reports_every_bad_file() {
    let good = temp_file("type A = u8;");
    let bad = temp_file("type B = ref<u8, u8>;");

    beautiful()
        .args([
            "check",
            bad.path().to_str().unwrap(),
            good.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("OK (1 declarations)"))
        .stderr(predicate::str::contains("`ref` takes exactly 1"));
}

#[test]
fn check_quiet_mode() {
    let file = temp_file("type A = u8;");

    beautiful()
        .args(["check", "--quiet", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_from_stdin() {
    beautiful()
        .args(["check", "-"])
        .write_stdin("type A = plfun<bool, u8>;")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>: OK"));
}

#[test]
fn check_missing_file() {
    beautiful()
        .args(["check", "/nonexistent/file.bt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn check_no_files() {
    beautiful().args(["check"]).assert().failure();
}
