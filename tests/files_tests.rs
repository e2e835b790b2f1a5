// File entry points: extension checks, load and save.

mod common;

use std::fs;

use kicadfiles::binding::Strictness;
use kicadfiles::errors::SexprError;
use kicadfiles::files::{load, save, Document, FileKind};
use kicadfiles::schema::{Footprint, FpLibTable, KicadPcb, SymLibTable};
use tempfile::tempdir;

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("R_0603.kicad_mod");

    let footprint: Footprint = kicadfiles::SExpr::from_sexpr(common::FOOTPRINT, Strictness::Strict).unwrap();
    save(&footprint, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("(footprint \"R_0603_1608Metric\""));
    assert!(written.ends_with(")\n"));

    let loaded: Footprint = load(&path, Strictness::Strict).unwrap();
    assert_eq!(loaded, footprint);
}

#[test]
fn test_wrong_extension_rejected_before_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.kicad_mod");
    let board = KicadPcb::default();

    let err = save(&board, &path).unwrap_err();
    assert!(matches!(err, SexprError::UnsupportedFile { .. }));
    assert!(!path.exists());
}

#[test]
fn test_library_tables_use_exact_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fp-lib-table");
    fs::write(&path, common::FP_LIB_TABLE).unwrap();

    let table: FpLibTable = load(&path, Strictness::Strict).unwrap();
    assert_eq!(table.libraries.len(), 1);

    let err = load::<SymLibTable>(&path, Strictness::Strict).unwrap_err();
    assert!(err.to_string().contains("sym-lib-table"));
}

#[test]
fn test_syntax_error_report_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.kicad_pcb");
    fs::write(&path, "(kicad_pcb (version 20240108)").unwrap();

    let err = load::<KicadPcb>(&path, Strictness::Failsafe).unwrap_err();
    assert!(matches!(err, SexprError::Syntax { .. }));
    let report = format!("{:?}", miette::Report::new(err));
    assert!(report.contains("broken.kicad_pcb"));
}

#[test]
fn test_document_detects_kind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.kicad_pcb");
    fs::write(&path, common::BOARD).unwrap();

    let document = Document::load(&path, Strictness::Strict).unwrap();
    assert_eq!(document.kind(), FileKind::Board);

    let copy = dir.path().join("copy.kicad_pcb");
    document.save(&copy).unwrap();
    assert_eq!(Document::load(&copy, Strictness::Strict).unwrap(), document);
    assert!(document.save(dir.path().join("copy.kicad_sym")).is_err());
}
