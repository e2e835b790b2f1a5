// Output layout of encoded records.

mod common;

use kicadfiles::binding::{KiFloat, OptionalFlag, SExpr, SimpleFlag, Strictness};
use kicadfiles::schema::{Color, Effects, Font, Size, Stroke, StrokeKind, StrokeType};
use kicadfiles::syntax::{parse, pretty, Term};

#[test]
fn test_short_record_on_one_line() {
    let size = Size { width: 1.27, height: 1.27 };
    assert_eq!(size.to_sexpr_string(), "(size 1.27 1.27)");
}

#[test]
fn test_stroke_with_color() {
    let stroke = Stroke {
        width: KiFloat::new("width", 0.1),
        kind: StrokeKind { style: StrokeType::Dash },
        color: Some(Color { r: 255, g: 0, b: 0, a: 1.0 }),
    };
    assert_eq!(
        stroke.to_sexpr_string(),
        "(stroke\n\t(width 0.1)\n\t(type dash)\n\t(color 255 0 0 1.0\n\t)\n)"
    );
}

#[test]
fn test_effects_nesting_and_flags() {
    let effects = Effects {
        font: Font {
            size: Size { width: 1.0, height: 1.0 },
            bold: Some(OptionalFlag::with_value("bold", "yes")),
            ..Font::default()
        },
        hide: Some(SimpleFlag::new("hide")),
        ..Effects::default()
    };
    let expected = "(effects hide\n\t(font\n\t\t(size 1.0 1.0)\n\t\t(bold yes)\n\t)\n)";
    assert_eq!(effects.to_sexpr_string(), expected);
}

#[test]
fn test_atoms_after_lists_move_to_first_line() {
    let term = parse("(fp_text (at 1 2) user \"x\")").unwrap();
    assert_eq!(pretty::format(&term, 0), "(fp_text user \"x\"\n\t(at 1 2)\n)");
}

#[test]
fn test_indent_argument() {
    let term = Term::list("layer", vec![Term::string("F.Cu")]);
    assert_eq!(pretty::format(&term, 1), "\t(layer \"F.Cu\")");
}

#[test]
fn test_formatting_is_idempotent() {
    let footprint = kicadfiles::schema::Footprint::from_sexpr(common::FOOTPRINT, Strictness::Strict).unwrap();
    let once = footprint.to_sexpr_string();
    let twice = kicadfiles::schema::Footprint::from_sexpr(&once, Strictness::Strict)
        .unwrap()
        .to_sexpr_string();
    assert_eq!(once, twice);
    assert!(once.ends_with("\n)"));
    assert!(once.contains("\n\t(attr smd)\n"));
}
