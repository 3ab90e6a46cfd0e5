// tests/cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

/// Helper to create a catalog file in the IANA layout
fn create_catalog_file(tlds: &[&str]) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let content = format!("# Version 2024100100\n{}\n", tlds.join("\n"));
    fs::write(file.path(), content).expect("Failed to write to temp file");
    file
}

fn tldify(catalog: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("tldify").unwrap();
    cmd.env("TLDIFY_CATALOG_FILE", catalog.path())
        .env("TLDIFY_RETRIES", "0")
        .env_remove("TLDIFY_CHECK")
        .env_remove("TLDIFY_REGISTRAR");
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("tldify").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("TLDIFY_CATALOG_FILE"));
}

#[test]
fn test_one_shot_suffix_match() {
    let catalog = create_catalog_file(&["COM", "NET", "OOGLE"]);

    tldify(&catalog)
        .arg("googlecom")
        .assert()
        .success()
        .stdout(predicate::str::contains("google.com"))
        .stdout(predicate::str::contains(
            "https://godaddy.com/domainsearch/find?&tld=.com&domainToCheck=google",
        ))
        .stdout(predicate::str::contains("TLD's updated at"));
}

#[test]
fn test_one_shot_json() {
    let catalog = create_catalog_file(&["COM", "NET", "OOGLE"]);

    let output = tldify(&catalog).args(["Google", "--json"]).output().unwrap();
    assert!(output.status.success());

    let candidates: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = candidates.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["fqdn"], "g.oogle");
    assert_eq!(list[0]["tld"], "OOGLE");
    assert_eq!(list[0]["pending"], true);
}

#[test]
fn test_custom_registrar() {
    let catalog = create_catalog_file(&["IO"]);

    tldify(&catalog)
        .env("TLDIFY_REGISTRAR", "registrar.example")
        .arg("startupio")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://registrar.example/domainsearch/find?&tld=.io&domainToCheck=startup",
        ));
}

#[test]
fn test_no_match() {
    let catalog = create_catalog_file(&["COM"]);

    tldify(&catalog)
        .arg("nothing")
        .assert()
        .success()
        .stdout(predicate::str::contains("no matching tld"));
}

#[test]
fn test_invalid_hostname_rejected() {
    let catalog = create_catalog_file(&["COM"]);

    tldify(&catalog)
        .arg("google.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("without dots"));
}

#[test]
fn test_missing_catalog_degrades() {
    let catalog = create_catalog_file(&["COM"]);
    let mut cmd = tldify(&catalog);
    cmd.env("TLDIFY_CATALOG_FILE", "/nonexistent/tlds-alpha-by-domain.txt");

    cmd.arg("googlecom")
        .assert()
        .success()
        .stdout(predicate::str::contains("no matching tld"))
        .stderr(predicate::str::contains("TLD list unavailable"));
}

#[test]
fn test_unknown_option() {
    let mut cmd = Command::cargo_bin("tldify").unwrap();
    cmd.arg("--frobnicate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option"));
}
