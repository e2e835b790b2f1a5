// Regression tests for the `kicadfiles` binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::tempdir;

fn kicadfiles() -> Command {
    Command::cargo_bin("kicadfiles").unwrap()
}

#[test]
fn cli_check_reports_each_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.kicad_mod"), common::FOOTPRINT).unwrap();
    fs::write(dir.path().join("bad.kicad_pcb"), "(kicad_pcb (version").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    kicadfiles()
        .arg("check")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(contains("OK").and(contains("good.kicad_mod")))
        .stdout(contains("FAIL").and(contains("bad.kicad_pcb")))
        .stdout(contains("1 passed, 1 failed"))
        .stdout(contains("notes.txt").not());
}

#[test]
fn cli_check_passes_clean_tree() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("demo.kicad_pcb"), common::BOARD).unwrap();
    fs::write(dir.path().join("sym-lib-table"), "(sym_lib_table (version 7))").unwrap();

    kicadfiles()
        .arg("check")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("2 passed, 0 failed"));
}

#[test]
fn cli_format_writes_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.kicad_sym");
    let output = dir.path().join("out.kicad_sym");
    fs::write(&input, common::SYMBOL_LIB).unwrap();

    kicadfiles()
        .arg("format")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("(kicad_symbol_lib\n\t(version 20231120)"));
}

#[test]
fn cli_roundtrip_of_formatted_file_is_clean() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.kicad_mod");
    fs::write(&input, common::FOOTPRINT).unwrap();
    let formatted = dir.path().join("formatted.kicad_mod");
    kicadfiles()
        .arg("format")
        .arg(&input)
        .arg("-o")
        .arg(&formatted)
        .assert()
        .success();

    kicadfiles()
        .arg("roundtrip")
        .arg(&formatted)
        .assert()
        .success()
        .stdout(contains("No differences."));
}

#[test]
fn cli_roundtrip_shows_dropped_section() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("extra.kicad_pcb");
    fs::write(&input, "(kicad_pcb (version 20240108) (generator \"pcbnew\") (zone (net 0)))").unwrap();

    kicadfiles()
        .args(["--strictness", "silent", "roundtrip"])
        .arg(&input)
        .assert()
        .failure()
        .stdout(contains("-\t(zone"));
}

#[test]
fn cli_defaults_to_strict() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("extra.kicad_pcb");
    fs::write(&input, "(kicad_pcb (version 20240108) (generator \"pcbnew\") (zone (net 0)))").unwrap();

    kicadfiles()
        .arg("format")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("zone"));

    kicadfiles()
        .args(["--strictness", "failsafe", "format"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("(kicad_pcb").and(contains("zone").not()));
}

#[test]
fn cli_tree_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("any.txt");
    fs::write(&input, "(a 1 \"b\")").unwrap();

    kicadfiles()
        .arg("tree")
        .arg(&input)
        .arg("--json")
        .assert()
        .success()
        .stdout(contains("\"Symbol\": \"a\"").and(contains("\"Int\": 1")));

    kicadfiles()
        .arg("tree")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("(a 1 \"b\")"));
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("readme.md");
    fs::write(&input, "(x)").unwrap();

    kicadfiles()
        .arg("format")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("kicadfiles::file::unsupported").or(contains("Unsupported file")));
}
