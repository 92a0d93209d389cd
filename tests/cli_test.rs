//! Integration tests for the adsh binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a site tree that passes every bootstrap probe.
fn write_site(root: &Path, base_url: &str) {
    fs::create_dir_all(root.join("includes")).unwrap();
    fs::create_dir_all(root.join("modules")).unwrap();
    fs::create_dir_all(root.join("sites").join("default")).unwrap();
    fs::write(root.join("index.php"), "<?php\n").unwrap();
    fs::write(
        root.join("includes").join("bootstrap.inc"),
        "<?php\ndefine('VERSION', '7.98');\n",
    )
    .unwrap();
    fs::write(
        root.join("sites").join("default").join("settings.php"),
        format!(
            "<?php\n$databases = array();\n$base_url = '{}';\n",
            base_url
        ),
    )
    .unwrap();
}

/// Temp workspace with a site tree under `www/blog` and a home sites file.
fn setup_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    let blog = temp.path().join("www").join("blog");
    write_site(&blog, "http://blog.localhost");

    fs::write(
        temp.path().join("sites.yml"),
        format!(
            "sites:\n  blog:\n    path: {}\n    url: http://blog.localhost\n  shared:\n    path: /srv/home-shared\n    url: http://shared.home\n",
            blog.display()
        ),
    )
    .unwrap();
    fs::write(
        temp.path().join("work.yml"),
        "sites:\n  shared:\n    path: /srv/work-shared\n    url: http://shared.work\n",
    )
    .unwrap();
    temp
}

fn adsh(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("adsh"));
    cmd.current_dir(temp.path());
    cmd.env("ADSH_SITES_FILE", temp.path().join("sites.yml"));
    cmd.env_remove("ADSH_SITE");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn with_work_registry(cmd: &mut Command, temp: &TempDir) {
    cmd.arg("--registry").arg(format!(
        "work={}",
        temp.path().join("work.yml").display()
    ));
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("adsh"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("list-sites"))
        .stdout(predicate::str::contains("bootstrap"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("adsh"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("adsh"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn list_sites_prints_qualified_identifiers() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.arg("list-sites");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("home/blog"))
        .stdout(predicate::str::contains("home/shared"))
        .stdout(predicate::str::contains("/srv/home-shared [default]"));
    Ok(())
}

#[test]
fn ls_alias_with_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    with_work_registry(&mut cmd, &temp);
    cmd.args(["ls", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["identifier"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["home/blog", "home/shared", "work/shared"]);
    Ok(())
}

#[test]
fn missing_sites_file_lists_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut cmd = adsh(&temp);
    cmd.arg("list-sites");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No sites registered"));
    Ok(())
}

#[test]
fn resolve_qualifies_bare_identifier() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    with_work_registry(&mut cmd, &temp);
    cmd.args(["resolve", "blog"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("home/blog\n"));
    Ok(())
}

#[test]
fn resolve_reports_ambiguity() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    with_work_registry(&mut cmd, &temp);
    cmd.args(["resolve", "shared"]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("home/shared"))
        .stdout(predicate::str::contains("work/shared"))
        .stderr(predicate::str::contains(
            "Error: Identifier conflict for shared, can be one of: home/shared, work/shared",
        ));
    Ok(())
}

#[test]
fn unknown_alias_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.args(["resolve", "play/blog"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Could not find the registry: play",
        ));
    Ok(())
}

#[test]
fn duplicate_registry_alias_aborts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.arg("--registry")
        .arg(format!("home={}", temp.path().join("work.yml").display()));
    cmd.arg("list-sites");
    cmd.assert().code(1).stderr(predicate::str::contains(
        "Error: Registry with alias home already exists",
    ));
    Ok(())
}

#[test]
fn malformed_sites_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sites.yml"), "sites: [unclosed").unwrap();
    let mut cmd = adsh(&temp);
    cmd.arg("list-sites");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn status_discovers_local_site() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.current_dir(temp.path().join("www").join("blog").join("sites"));
    cmd.arg("status");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Version:   7.98"))
        .stdout(predicate::str::contains("URL:       http://blog.localhost"));
    Ok(())
}

#[test]
fn status_of_named_site_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.args(["status", "--json", "--site", "home/blog"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["version"], "7.98");
    assert_eq!(parsed["state"], "configured");
    Ok(())
}

#[test]
fn status_reads_site_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.env("ADSH_SITE", "nope");
    cmd.arg("status");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Unknown identifier in registry: nope",
        ));
    Ok(())
}

#[test]
fn status_outside_site_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.arg("status");
    // The workspace root holds no marker; a marker further up would be a
    // broken test environment.
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("No site found"));
    Ok(())
}

#[test]
fn bootstrap_named_site() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.args(["bootstrap", "--site", "blog"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("full"))
        .stdout(predicate::str::contains("Reached full (version 7.98)"));
    Ok(())
}

#[test]
fn bootstrap_to_level_quietly() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    let mut cmd = adsh(&temp);
    cmd.current_dir(temp.path().join("www").join("blog"));
    cmd.args(["bootstrap", "--level", "database", "-q"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("database\n"));
    Ok(())
}

#[test]
fn bootstrap_failure_names_level() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace();
    fs::remove_dir_all(temp.path().join("www").join("blog").join("modules"))?;
    let mut cmd = adsh(&temp);
    cmd.args(["bootstrap", "--site", "home/blog"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Bootstrap failed at level full",
        ));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut cmd = adsh(&temp);
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("adsh"));
    Ok(())
}
