//! Integration tests for daznorm-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use daznorm_core::test_utils::create_test_zip;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn daznorm_cmd() -> Command {
    cargo_bin_cmd!("daznorm")
}

fn write_zip(dir: &Path, name: &str, entries: Vec<(&str, &[u8])>) {
    fs::write(dir.join(name), create_test_zip(entries)).unwrap();
}

/// Input directory holding one well-formed product archive.
fn simple_input(temp: &TempDir) -> std::path::PathBuf {
    let input = temp.path().join("in");
    fs::create_dir(&input).unwrap();
    write_zip(
        &input,
        "Product.zip",
        vec![
            ("Runtime/Textures/skin.jpg", b"texture".as_slice()),
            ("People/Genesis/figure.duf", b"duf".as_slice()),
            ("promo.jpg", b"preview".as_slice()),
        ],
    );
    input
}

#[test]
fn test_version_flag() {
    daznorm_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("daznorm"));
}

#[test]
fn test_help_flag() {
    daznorm_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalize DAZ Studio asset archives"));
}

#[test]
fn test_normalize_per_archive_output() {
    let temp = TempDir::new().unwrap();
    let input = simple_input(&temp);
    let output = temp.path().join("out");

    daznorm_cmd()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Product.zip"))
        .stdout(predicate::str::contains("Processed 1 archive(s)"));

    assert!(
        output
            .join("Product_normalized/Runtime/Textures/skin.jpg")
            .is_file()
    );
    assert!(
        output
            .join("Product_normalized/People/Genesis/figure.duf")
            .is_file()
    );
    assert!(!output.join("Product_normalized/promo.jpg").exists());
}

#[test]
fn test_include_promos_flag() {
    let temp = TempDir::new().unwrap();
    let input = simple_input(&temp);
    let output = temp.path().join("out");

    daznorm_cmd()
        .arg(&input)
        .arg(&output)
        .arg("--include-promos")
        .assert()
        .success();

    assert!(output.join("Product_normalized/promo.jpg").is_file());
}

#[test]
fn test_merge_into_content() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in");
    fs::create_dir(&input).unwrap();
    write_zip(
        &input,
        "figures.zip",
        vec![("People/Genesis/figure.duf", b"duf".as_slice())],
    );
    write_zip(
        &input,
        "props.zip",
        vec![("Props/chair.duf", b"duf".as_slice())],
    );
    let output = temp.path().join("out");

    daznorm_cmd()
        .arg(&input)
        .arg(&output)
        .arg("--merge-into-content")
        .assert()
        .success();

    assert!(output.join("Content/People/Genesis/figure.duf").is_file());
    assert!(output.join("Content/Props/chair.duf").is_file());
    assert!(!output.join("figures_normalized").exists());
}

/// The nested-product scenario: an outer zip wrapping a main content
/// zip and a templates zip normalizes to the main archive's categories.
#[test]
fn test_nested_product_archive() {
    let main = create_test_zip(vec![
        ("Data/DAZ 3D/figure.dsf", b"dsf".as_slice()),
        ("People/Genesis/char.duf", b"duf".as_slice()),
        ("Runtime/Textures/skin.jpg", b"texture".as_slice()),
        ("Documentation/readme.pdf", b"pdf".as_slice()),
    ]);
    let templates = create_test_zip(vec![("template.svg", b"svg".as_slice())]);
    let outer = create_test_zip(vec![
        ("Example_Product_Main.ZIP", main.as_slice()),
        ("Example_Product_Templates.ZIP", templates.as_slice()),
    ]);

    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("Example_Product.zip"), outer).unwrap();
    let output = temp.path().join("out");

    daznorm_cmd()
        .arg(&input)
        .arg(&output)
        .arg("--merge-into-content")
        .assert()
        .success();

    let content = output.join("Content");
    assert!(content.join("Data/DAZ 3D/figure.dsf").is_file());
    assert!(content.join("People/Genesis/char.duf").is_file());
    assert!(content.join("Runtime/Textures/skin.jpg").is_file());
    assert!(!content.join("Documentation").exists());
    assert!(!content.join("template.svg").exists());
}

/// A root-not-found archive is reported, fails the exit code, and does
/// not block other archives from being processed.
#[test]
fn test_root_not_found_sets_exit_code() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in");
    fs::create_dir(&input).unwrap();
    write_zip(
        &input,
        "Product.zip",
        vec![("Runtime/lib.obj", b"obj".as_slice())],
    );
    write_zip(
        &input,
        "Templates.zip",
        vec![("uvs/template.svg", b"svg".as_slice())],
    );
    let output = temp.path().join("out");

    daznorm_cmd()
        .arg(&input)
        .arg(&output)
        .arg("--merge-into-content")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no content root found"));

    // the good archive was still processed
    assert!(output.join("Content/Runtime/lib.obj").is_file());
}

#[test]
fn test_corrupt_archive_sets_exit_code() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("broken.zip"), b"garbage").unwrap();
    let output = temp.path().join("out");

    daznorm_cmd().arg(&input).arg(&output).assert().code(1);
}

#[test]
fn test_second_run_does_not_overwrite() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in");
    fs::create_dir(&input).unwrap();
    write_zip(
        &input,
        "Product.zip",
        vec![("Runtime/lib.obj", b"original".as_slice())],
    );
    let output = temp.path().join("out");

    daznorm_cmd()
        .arg(&input)
        .arg(&output)
        .arg("--merge-into-content")
        .assert()
        .success();

    // repackage the same entry with different contents
    write_zip(
        &input,
        "Product.zip",
        vec![("Runtime/lib.obj", b"changed".as_slice())],
    );

    daznorm_cmd()
        .arg(&input)
        .arg(&output)
        .arg("--merge-into-content")
        .assert()
        .success();

    assert_eq!(
        fs::read(output.join("Content/Runtime/lib.obj")).unwrap(),
        b"original"
    );
}

#[test]
fn test_empty_input_warns() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in");
    fs::create_dir(&input).unwrap();
    let output = temp.path().join("out");

    daznorm_cmd()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("no archives found"));
}

#[test]
fn test_missing_input_dir_fails() {
    let temp = TempDir::new().unwrap();

    daznorm_cmd()
        .arg(temp.path().join("does_not_exist"))
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

/// JSON output format - verifies structure, not extraction counts.
#[test]
fn test_json_output_format() {
    let temp = TempDir::new().unwrap();
    let input = simple_input(&temp);
    let output = temp.path().join("out");

    let stdout = daznorm_cmd()
        .arg("--json")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&stdout).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "normalize");
    assert_eq!(json["data"]["processed"], 1);
    assert_eq!(json["data"]["failures"], 0);
    assert!(json["data"]["archives"][0]["root_found"].as_bool().unwrap());
}

#[test]
fn test_quiet_suppresses_output() {
    let temp = TempDir::new().unwrap();
    let input = simple_input(&temp);
    let output = temp.path().join("out");

    daznorm_cmd()
        .arg("--quiet")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_keep_temp_reports_scratch_dir() {
    let temp = TempDir::new().unwrap();
    let input = simple_input(&temp);
    let output = temp.path().join("out");

    let stdout = daznorm_cmd()
        .arg("--json")
        .arg("--keep-temp")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    let kept = json["data"]["archives"][0]["kept_temp"]
        .as_str()
        .expect("kept_temp should be reported")
        .to_string();
    assert!(Path::new(&kept).is_dir());
    fs::remove_dir_all(kept).unwrap();
}
