#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const OVERRIDES: [&str; 5] = [
    "UCS_CAT_ID",
    "UCS_CREATOR_ID",
    "UCS_SOURCE_ID",
    "UCS_USER_DATA",
    "UCS_CSV_FILE",
];

// Output is captured, so the binary always runs in listing mode here.
fn ucsrename_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("ucsrename"));
    for key in OVERRIDES {
        cmd.env_remove(key);
    }
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn lists_bundled_catalog_when_not_a_terminal() {
    ucsrename_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("AMBPark:"))
        .stdout(predicate::str::contains("AMBIENCE PARK --"))
        .stdout(predicate::str::contains("WINDGust:"));
}

#[test]
fn listing_honors_catalog_override() {
    ucsrename_cmd()
        .env("UCS_CSV_FILE", fixture("override.csv"))
        .assert()
        .success()
        .stdout("AMBPark: AMBIENCE PARK -- park indoor outdoor\n");
}

#[test]
fn listing_ignores_the_file_argument() {
    let temp = TempDir::new().unwrap();
    ucsrename_cmd()
        .current_dir(temp.path())
        .env("UCS_CSV_FILE", fixture("override.csv"))
        .args(["-y", "take1.wav"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("AMBPark:"));
}

#[test]
fn missing_catalog_file_exits_with_failure() {
    let temp = TempDir::new().unwrap();
    ucsrename_cmd()
        .env("UCS_CSV_FILE", temp.path().join("missing.csv"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to load category catalog"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    ucsrename_cmd()
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn help_exits_cleanly() {
    ucsrename_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CatID_FXName_CreatorID_SourceID_UserData"));
}
