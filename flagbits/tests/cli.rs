use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flagbits(storage: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flagbits").unwrap();
    cmd.env("FLAGBITS_HOME", storage.path())
        .env_remove("FLAGBITS_LOG");
    cmd
}

fn storage() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let perms = "READ: 0x1\nWRITE: 0x2\nALSO_READ: 1\n";
    fs::write(dir.path().join("perms.yml"), perms).unwrap();
    fs::write(dir.path().join("broken.yml"), "READ: 0x1\nWRITE: nope\n").unwrap();
    dir
}

#[test]
fn decodes_without_table() {
    let dir = storage();
    flagbits(&dir)
        .arg("0x8000000000000005")
        .assert()
        .success()
        .stdout(concat!(
            "bit 0: 0x1\n",
            "bit 2: 0x4\n",
            "bit 63: 0x8000000000000000\n",
            "\n",
            "0x1 | 0x4 | 0x8000000000000000\n",
        ));
}

#[test]
fn decodes_with_table() {
    let dir = storage();
    flagbits(&dir)
        .args(["7", "perms"])
        .assert()
        .success()
        .stdout(concat!(
            "bit 0: [READ] 0x1\n",
            "bit 1: [WRITE] 0x2\n",
            "bit 2: 0x4\n",
            "\n",
            "READ | WRITE | 0x4\n",
        ));
}

#[test]
fn zero_prints_blank_summary() {
    let dir = storage();
    flagbits(&dir).arg("0").assert().success().stdout("\n\n");
}

#[test]
fn lists_types() {
    let dir = storage();
    flagbits(&dir)
        .arg("types")
        .assert()
        .success()
        .stdout("broken\nperms\n");
}

#[test]
fn table_named_like_a_command_still_decodes() {
    let dir = storage();
    fs::write(dir.path().join("types.yml"), "ONE: 1\n").unwrap();
    flagbits(&dir)
        .args(["1", "types"])
        .assert()
        .success()
        .stdout("bit 0: [ONE] 0x1\n\nONE\n");
}

// Failures are reported on stdout and still exit 0.
#[test]
fn missing_value_reports_error() {
    let dir = storage();
    flagbits(&dir)
        .assert()
        .success()
        .stdout("Error: Required hex var argument\n");
}

#[test]
fn bad_hex_reports_error() {
    let dir = storage();
    flagbits(&dir)
        .arg("xyz")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: invalid hex"));
}

#[test]
fn unknown_type_reports_error() {
    let dir = storage();
    let expected = predicate::str::starts_with("Error: File does not exist:")
        .and(predicate::str::contains("missing.yml"));
    flagbits(&dir)
        .args(["1", "missing"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn broken_table_reports_error_without_output() {
    let dir = storage();
    let expected = predicate::str::starts_with("Error: Parse error:")
        .and(predicate::str::contains("WRITE"))
        .and(predicate::str::contains("bit 0").not());
    flagbits(&dir)
        .args(["3", "broken"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn non_utf8_table_reports_parse_error() {
    let dir = storage();
    fs::write(dir.path().join("bin.yml"), b"READ: 0x1\nW\xff: 0x2\n").unwrap();
    let expected = predicate::str::starts_with("Error: Parse error:")
        .and(predicate::str::contains("bin.yml"));
    flagbits(&dir)
        .args(["1", "bin"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn usage_errors_exit_zero() {
    let dir = storage();
    flagbits(&dir)
        .args(["1", "perms", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: "));
}
