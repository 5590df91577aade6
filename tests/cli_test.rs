mod fixtures;

use fixtures::{source_with_lines, PackageBuilder};
use std::process::Command;
use tempfile::TempDir;

const HEADER: &str = "Name,# Build Depends,# Exec Depends,# C/C++ files,# C/C++ source lines,\
# Python files,# Python source lines,# Message/Service files,Porting effort";

fn port_effort() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_port-effort"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_cli_help() {
    let output = port_effort()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("port-effort"));
    assert!(stdout.contains("--exclusive"));
    assert!(stdout.contains("--exclude"));
    assert!(stdout.contains("SOURCE_PATH"));
}

#[test]
fn test_cli_missing_path() {
    let output = port_effort().output().expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("required") || stderr.contains("SOURCE_PATH"));
}

#[test]
fn test_cli_invalid_path() {
    let output = port_effort()
        .arg("/nonexistent/path/that/does/not/exist")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist") || stderr.contains("Invalid arguments"));
}

#[test]
fn test_cli_report() {
    let temp_dir = TempDir::new().unwrap();
    PackageBuilder::new(
        temp_dir.path(),
        "foo",
        "<name>foo</name>\n<depend>bar</depend>",
    )
    .file("src/foo.cpp", &source_with_lines("using namespace ros;", 500));

    let output = port_effort()
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{HEADER}\nfoo,1,1,1,500,0,0,0,S\n"));
}

#[test]
fn test_cli_exclusive_and_exclude() {
    let temp_dir = TempDir::new().unwrap();
    PackageBuilder::new(temp_dir.path(), "foo", "<name>foo</name>");
    PackageBuilder::new(temp_dir.path(), "bar", "<name>bar</name>");

    let output = port_effort()
        .args(["--exclusive", "foo", "--exclusive", "bar", "--exclude", "foo"])
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{HEADER}\nbar,0,0,0,0,0,0,0,S\n"));
}

#[test]
fn test_cli_reports_nameless_package() {
    let temp_dir = TempDir::new().unwrap();
    PackageBuilder::new(temp_dir.path(), "nameless", "<depend>roscpp</depend>");

    let output = port_effort()
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Could not find package name in directory"));
    assert!(stdout.contains("nameless"));
    assert!(stdout.ends_with(&format!("{HEADER}\n")));
}

#[test]
fn test_cli_malformed_manifest_fails_without_report() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("package.xml"), "<package><name>foo").unwrap();

    let output = port_effort()
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Name,"));
}

#[test]
fn test_cli_json_format() {
    let temp_dir = TempDir::new().unwrap();
    PackageBuilder::new(temp_dir.path(), "foo", "<name>foo</name>");

    let output = port_effort()
        .args(["--format", "json"])
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"packages\""));
    assert!(stdout.contains("\"name\": \"foo\""));
}
