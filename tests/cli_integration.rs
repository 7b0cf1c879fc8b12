#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stickers_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("stickers"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn pdf_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".pdf"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_generate_with_flags_writes_sheet() {
    let temp = TempDir::new().unwrap();

    stickers_cmd()
        .current_dir(temp.path())
        .args(["generate", "--invoice", "INV-42", "--boxes", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stickers have been saved to"))
        .stdout(predicate::str::contains("stickers_INV-42.pdf"));

    let bytes = fs::read(temp.path().join("stickers_INV-42.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(pdf_files(temp.path()), vec!["stickers_INV-42.pdf"]);
}

#[test]
fn test_interactive_prompts() {
    let temp = TempDir::new().unwrap();

    stickers_cmd()
        .current_dir(temp.path())
        .write_stdin("A-7\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the invoice number: "))
        .stdout(predicate::str::contains("Enter the total number of boxes: "))
        .stdout(predicate::str::contains("stickers_A-7.pdf"));

    assert!(temp.path().join("stickers_A-7.pdf").exists());
}

#[test]
fn test_invalid_box_count_writes_nothing() {
    let temp = TempDir::new().unwrap();

    for input in ["INV\nabc\n", "INV\n0\n", "INV\n-3\n", "INV\n\n"] {
        stickers_cmd()
            .current_dir(temp.path())
            .write_stdin(input)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Invalid input. Please enter a valid number of boxes.",
            ));
    }

    stickers_cmd()
        .current_dir(temp.path())
        .args(["generate", "-i", "INV", "-b", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input."));

    assert!(pdf_files(temp.path()).is_empty());
}

#[test]
fn test_output_dir_flag() {
    let temp = TempDir::new().unwrap();

    stickers_cmd()
        .current_dir(temp.path())
        .args(["generate", "-i", "X", "-b", "1", "--output-dir", "labels"])
        .assert()
        .success();

    assert!(temp.path().join("labels").join("stickers_X.pdf").exists());
    assert!(pdf_files(temp.path()).is_empty());
}

#[test]
fn test_plan_reports_pages() {
    let temp = TempDir::new().unwrap();

    stickers_cmd()
        .current_dir(temp.path())
        .args(["plan", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stickers per page:"))
        .stdout(predicate::str::contains("24"))
        .stdout(predicate::str::contains("Pages for 25 boxes:"))
        .stdout(predicate::str::contains("23 blank cell(s) on the last page"));

    assert!(pdf_files(temp.path()).is_empty());
}

#[test]
fn test_config_round_trip_and_output_dir() {
    let temp = TempDir::new().unwrap();

    stickers_cmd()
        .current_dir(temp.path())
        .args(["config", "output-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output-dir set to out"));

    stickers_cmd()
        .current_dir(temp.path())
        .args(["config", "output-dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("out"));

    stickers_cmd()
        .current_dir(temp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("address = 127.0.0.1:5000"));

    stickers_cmd()
        .current_dir(temp.path())
        .args(["generate", "-i", "CFG", "-b", "2"])
        .assert()
        .success();

    assert!(temp.path().join("out").join("stickers_CFG.pdf").exists());
}

#[test]
fn test_corrupt_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".stickers")).unwrap();
    fs::write(temp.path().join(".stickers").join("config.json"), "{oops").unwrap();

    stickers_cmd()
        .current_dir(temp.path())
        .args(["plan", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}
