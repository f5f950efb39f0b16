use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a geoblock command
fn geoblock_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("geoblock"))
}

/// Helper to write the two dataset fixtures, returning their paths
fn write_fixtures(dir: &TempDir) -> (PathBuf, PathBuf) {
    let v4 = dir.path().join("ipv4.csv");
    let v6 = dir.path().join("ipv6.csv");
    fs::write(&v4, "1.0.0.0,1.0.0.255,AU\n1.1.0.0,1.1.0.255,CN\n").unwrap();
    fs::write(&v6, "2001:db8::,2001:db8::ff,US\n").unwrap();
    (v4, v6)
}

#[test]
fn test_help() {
    geoblock_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Country lookup for IP addresses"));
}

#[test]
fn test_version() {
    geoblock_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("geoblock"));
}

#[test]
fn test_lookup_resolves_addresses() {
    let dir = TempDir::new().unwrap();
    let (v4, v6) = write_fixtures(&dir);

    geoblock_cmd()
        .arg("lookup")
        .arg("--v4")
        .arg(&v4)
        .arg("--v6")
        .arg(&v6)
        .arg("1.0.0.5")
        .arg("2001:db8::10")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0.5 AU"))
        .stdout(predicate::str::contains("2001:db8::10 US"));
}

#[test]
fn test_lookup_prints_dash_for_miss() {
    let dir = TempDir::new().unwrap();
    let (v4, v6) = write_fixtures(&dir);

    geoblock_cmd()
        .arg("lookup")
        .arg("--v4")
        .arg(&v4)
        .arg("--v6")
        .arg(&v6)
        .arg("9.9.9.9")
        .assert()
        .success()
        .stdout(predicate::str::contains("9.9.9.9 -"));
}

#[test]
fn test_lookup_fails_on_malformed_address() {
    let dir = TempDir::new().unwrap();
    let (v4, v6) = write_fixtures(&dir);

    geoblock_cmd()
        .arg("lookup")
        .arg("--v4")
        .arg(&v4)
        .arg("--v6")
        .arg(&v6)
        .arg("not-an-ip")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid IP address"));
}

#[test]
fn test_lookup_fails_on_missing_dataset() {
    let dir = TempDir::new().unwrap();
    let (v4, _) = write_fixtures(&dir);

    geoblock_cmd()
        .arg("lookup")
        .arg("--v4")
        .arg(&v4)
        .arg("--v6")
        .arg(dir.path().join("missing.csv"))
        .arg("1.0.0.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load IPv6 dataset"));
}

#[test]
fn test_lookup_requires_addresses() {
    let dir = TempDir::new().unwrap();
    let (v4, v6) = write_fixtures(&dir);

    geoblock_cmd()
        .arg("lookup")
        .arg("--v4")
        .arg(&v4)
        .arg("--v6")
        .arg(&v6)
        .assert()
        .failure();
}
