//! Integration tests for the iwyu-check binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Prints `canned/<stem>.txt` to stderr and logs each file it is run on.
const FAKE_ANALYZER: &str = r#"#!/bin/sh
for last; do :; done
here=$(dirname "$0")
echo "$last" >> "$here/calls.log"
name=$(basename "$last")
name=${name%.*}
if [ -f "$here/canned/$name.txt" ]; then
    cat "$here/canned/$name.txt" >&2
fi
exit 1
"#;

const B_MISSING_HEADER_MARKER: &str = "\
include/b.hpp should add these lines:
#include <string>  // for string
class Widget;

include/b.hpp should remove these lines:

The full include-list for include/b.hpp:
#include <string>  // for string
class Widget;
---

(src/b.cpp has correct #includes/fwd-decls)
";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[cfg(unix)]
fn setup_project(files: &[&str]) -> TempDir {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    for file in files {
        write(temp.path(), file, "");
    }

    let script = temp.path().join("fake-iwyu");
    fs::write(&script, FAKE_ANALYZER).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    write(
        temp.path(),
        ".iwyu-check.yml",
        &format!("analyzer: {}\nfix_tool: cat\n", script.display()),
    );
    temp
}

fn canned(project: &TempDir, stem: &str, output: &str) {
    write(project.path(), &format!("canned/{stem}.txt"), output);
}

fn calls(project: &TempDir) -> String {
    fs::read_to_string(project.path().join("calls.log")).unwrap_or_default()
}

fn iwyu_check(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("iwyu-check"));
    cmd.current_dir(project.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("iwyu-check"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--fix"))
        .stdout(predicate::str::contains("--policy"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("iwyu-check"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_missing_source_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("iwyu-check"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Cannot read directory"))
        .stdout(predicate::str::contains("src"));
    Ok(())
}

#[test]
fn cli_missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("iwyu-check"));
    cmd.current_dir(temp.path());
    cmd.args(["--config", "missing.yml"]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_correct_file_passes() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["src/a.cpp"]);
    canned(&project, "a", "\n(src/a.cpp has correct #includes/fwd-decls)\n");

    iwyu_check(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "src/a.cpp has correct #includes/fwd-decls ✔",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_strict_policy_fails_on_missing_header_marker() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["src/b.cpp", "include/b.hpp"]);
    canned(&project, "b", B_MISSING_HEADER_MARKER);

    iwyu_check(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The full include-list for include/b.hpp"))
        .stdout(predicate::str::contains("should add these lines").not())
        .stdout(predicate::str::contains(
            "Required #includes/fwd-decls are missing in 'src/b.cpp', and 'include/b.hpp'.",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_relaxed_policy_flag_passes_same_output() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["src/b.cpp", "include/b.hpp"]);
    canned(&project, "b", B_MISSING_HEADER_MARKER);

    iwyu_check(&project)
        .args(["--policy", "relaxed"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "src/b.cpp and include/b.hpp have correct #includes/fwd-decls ✔",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_stops_at_first_failure() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["src/a.cpp", "src/b.cpp", "src/c.cpp"]);
    canned(&project, "a", "(src/a.cpp has correct #includes/fwd-decls)\n");
    canned(&project, "b", "src/b.cpp should add these lines:\n#include <map>\n");
    canned(&project, "c", "(src/c.cpp has correct #includes/fwd-decls)\n");

    iwyu_check(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("src/a.cpp has correct"))
        .stdout(predicate::str::contains("src/c.cpp").not());

    assert_eq!(calls(&project), "./src/a.cpp\n./src/b.cpp\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_output_is_plain_when_not_a_tty() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["src/b.cpp"]);
    canned(
        &project,
        "b",
        "The full include-list for src/b.cpp:\n#include <map>  // for map\n",
    );

    iwyu_check(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\u{1b}[").not())
        .stdout(predicate::str::contains("#include <map>  // for map"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_checks_symlinked_sources_and_headers() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::symlink;

    let project = setup_project(&["real/b.cpp", "shared/b.hpp", "src/.keep", "include/.keep"]);
    symlink(project.path().join("real/b.cpp"), project.path().join("src/b.cpp"))?;
    symlink(
        project.path().join("shared/b.hpp"),
        project.path().join("include/b.hpp"),
    )?;
    canned(&project, "b", B_MISSING_HEADER_MARKER);

    iwyu_check(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Required #includes/fwd-decls are missing in 'src/b.cpp', and 'include/b.hpp'.",
        ));

    assert_eq!(calls(&project), "./src/b.cpp\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_missing_analyzer_reports_spawn_failure() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["src/a.cpp"]);
    write(
        project.path(),
        ".iwyu-check.yml",
        "analyzer: no-such-iwyu-binary\n",
    );

    iwyu_check(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Could not analyze src/a.cpp: Failed to start no-such-iwyu-binary",
        ))
        .stdout(predicate::str::contains("exit code").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_quiet_hides_passing_files() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["src/a.cpp"]);
    canned(&project, "a", "(src/a.cpp has correct #includes/fwd-decls)\n");

    iwyu_check(&project)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_fix_mode_prints_fix_tool_output_for_every_file() -> Result<(), Box<dyn std::error::Error>>
{
    let project = setup_project(&["src/a.cpp", "src/b.cpp"]);
    canned(&project, "a", "(src/a.cpp has correct #includes/fwd-decls)\n");
    canned(&project, "b", "src/b.cpp should add these lines:\n#include <map>\n");

    iwyu_check(&project)
        .arg("--fix")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(src/a.cpp has correct #includes/fwd-decls)\n\
             src/b.cpp should add these lines:\n#include <map>\n",
        ))
        .stdout(predicate::str::contains("✔").not())
        .stdout(predicate::str::contains("Required").not());

    assert_eq!(calls(&project), "./src/a.cpp\n./src/b.cpp\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_source_dir_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["lib/a.cpp"]);
    canned(&project, "a", "(lib/a.cpp has correct #includes/fwd-decls)\n");

    iwyu_check(&project)
        .args(["--source-dir", "./lib"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib/a.cpp has correct"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_project_flag_sets_root() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(&["src/a.cpp"]);
    canned(&project, "a", "(src/a.cpp has correct #includes/fwd-decls)\n");
    let elsewhere = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("iwyu-check"));
    cmd.current_dir(elsewhere.path());
    cmd.arg("--project").arg(project.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("src/a.cpp has correct"));
    Ok(())
}
