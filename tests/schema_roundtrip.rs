// Realistic files decode, re-encode and decode to equal records.

mod common;

use kicadfiles::binding::{SExpr, Strictness};
use kicadfiles::schema::{
    FpLibTable, Footprint, GraphicItem, KicadPcb, KicadSymbolLib, PadShape, StrokeType,
};

fn assert_stable<T: SExpr + PartialEq + std::fmt::Debug>(text: &str) -> T {
    let first = T::from_sexpr(text, Strictness::Strict).unwrap();
    let second = T::from_sexpr(&first.to_sexpr_string(), Strictness::Strict).unwrap();
    assert_eq!(first, second);
    first
}

#[test]
fn test_footprint_file() {
    let footprint: Footprint = assert_stable(common::FOOTPRINT);
    assert_eq!(footprint.library_link, "R_0603_1608Metric");
    assert_eq!(footprint.version.as_ref().map(|v| v.value), Some(20240108));
    assert_eq!(footprint.properties.len(), 2);
    assert_eq!(footprint.properties[1].value, "R_0603_1608Metric");
    assert_eq!(footprint.graphics.len(), 3);
    match &footprint.graphics[0] {
        GraphicItem::Line(line) => {
            assert_eq!(line.stroke.as_ref().map(|s| s.kind.style), Some(StrokeType::Solid));
        }
        other => panic!("expected fp_line, got {other:?}"),
    }
    assert!(matches!(footprint.graphics[2], GraphicItem::Text(_)));
    assert_eq!(footprint.pads.len(), 2);
    assert_eq!(footprint.pads[1].shape, PadShape::Roundrect);
    assert_eq!(footprint.models.len(), 1);
    assert_eq!(footprint.models[0].scale.as_ref().map(|s| s.xyz.x), Some(1.0));
}

#[test]
fn test_board_file() {
    let board: KicadPcb = assert_stable(common::BOARD);
    assert_eq!(board.general.as_ref().map(|g| g.thickness.value), Some(1.6));
    assert_eq!(board.layers.as_ref().map(|l| l.defs.len()), Some(3));
    assert_eq!(board.nets.len(), 2);
    assert_eq!(board.segments.len(), 1);
    assert_eq!(board.vias.len(), 1);
    let setup = board.setup.as_ref().unwrap();
    assert_eq!(setup.pad_to_mask_clearance, 0.0);
    assert_eq!(setup.grid_origin.as_ref().map(|o| o.x), Some(100.0));
}

#[test]
fn test_symbol_library_file() {
    let lib: KicadSymbolLib = assert_stable(common::SYMBOL_LIB);
    let symbol = &lib.symbols[0];
    assert_eq!(symbol.units.len(), 2);
    assert_eq!(symbol.units[1].pins[0].length, 2.794);
    assert_eq!(symbol.pin_names.as_ref().and_then(|p| p.offset), Some(0.254));
}

#[test]
fn test_library_table_file() {
    let table: FpLibTable = assert_stable(common::FP_LIB_TABLE);
    assert_eq!(table.libraries[0].uri.value, "${KIPRJMOD}/Project.pretty");
}

#[test]
fn test_unknown_sections_dropped_in_failsafe() {
    let text = common::BOARD.replacen(
        "(paper \"A4\")",
        "(paper \"A4\")\n\t(zone\n\t\t(net 0)\n\t\t(layer \"F.Cu\")\n\t)",
        1,
    );
    let err = KicadPcb::from_sexpr(&text, Strictness::Strict).unwrap_err();
    assert!(err.to_string().contains("zone"));

    let board = KicadPcb::from_sexpr(&text, Strictness::Failsafe).unwrap();
    assert!(!board.to_sexpr_string().contains("zone"));
    assert_eq!(board, KicadPcb::from_sexpr(common::BOARD, Strictness::Strict).unwrap());
}

#[test]
fn test_legacy_footprint_upgrades_tokens() {
    let text = r#"(module Legacy (layer F.Cu) (tedit 5B307E4C)
        (fp_text reference REF** (at 0 0) (layer F.SilkS) (effects (font (size 1 1) (thickness 0.15))))
        (fp_line (start 0 0) (end 1 0) (layer F.SilkS) (width 0.12))
        (pad 1 thru_hole circle (at 0 0) (size 1.7 1.7) (drill 1) (layers *.Cu *.Mask) (tstamp 5B307E4D)))"#;
    let footprint = Footprint::from_sexpr(text, Strictness::Strict).unwrap();
    assert_eq!(footprint.pads[0].number, "1");
    assert_eq!(footprint.pads[0].uuid.as_ref().map(|u| u.value.as_str()), Some("5B307E4D"));

    let out = footprint.to_sexpr_string();
    assert!(out.starts_with("(footprint \"Legacy\""));
    assert!(out.contains("(uuid \"5B307E4D\")"));
    assert!(!out.contains("tstamp"));
    assert!(!out.contains("(module"));
}
