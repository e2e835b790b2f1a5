//! Schematic symbol libraries (`.kicad_sym`).

use crate::binding::{KiInt, KiStr, OptionalFlag, SimpleFlag};
use crate::schema::base::{At, Center, Effects, End, Fill, Mid, Property, Pts, Start, Stroke};
use crate::{sexpr_record, sexpr_union, symbol_enum};

// ============================================================================
// PINS
// ============================================================================

symbol_enum! {
    pub enum PinElectricalType {
        Input => "input",
        Output => "output",
        Bidirectional => "bidirectional",
        TriState => "tri_state",
        Passive => "passive",
        Free => "free",
        Unspecified => "unspecified",
        PowerIn => "power_in",
        PowerOut => "power_out",
        OpenCollector => "open_collector",
        OpenEmitter => "open_emitter",
        NoConnect => "no_connect",
    }
}

symbol_enum! {
    pub enum PinGraphicStyle {
        Line => "line",
        Inverted => "inverted",
        Clock => "clock",
        InvertedClock => "inverted_clock",
        InputLow => "input_low",
        ClockLow => "clock_low",
        OutputLow => "output_low",
        EdgeClockHigh => "edge_clock_high",
        NonLogic => "non_logic",
    }
}

sexpr_record! {
    pub struct PinName: "name" {
        pub name: String,
        pub effects: Option<Effects>,
    }
}

sexpr_record! {
    pub struct PinNumber: "number" {
        pub number: String,
        pub effects: Option<Effects>,
    }
}

sexpr_record! {
    /// `(pin TYPE STYLE (at X Y ANGLE) (length L) [hide] (name ...) (number ...))`
    pub struct Pin: "pin" {
        pub electrical_type: PinElectricalType,
        pub graphic_style: PinGraphicStyle,
        pub at: At,
        pub length: f64 [token = "length"],
        pub hide: Option<SimpleFlag>,
        pub hidden: Option<OptionalFlag> [token = "hide"],
        pub name: PinName,
        pub number: PinNumber,
    }
}

sexpr_record! {
    /// Pin name placement: `(pin_names [(offset D)] [hide])`.
    pub struct PinNames: "pin_names" {
        pub offset: Option<f64> [token = "offset"],
        pub hide: Option<SimpleFlag>,
        pub hidden: Option<OptionalFlag> [token = "hide"],
    }
}

sexpr_record! {
    pub struct PinNumbers: "pin_numbers" {
        pub hide: Option<SimpleFlag>,
        pub hidden: Option<OptionalFlag> [token = "hide"],
    }
}

// ============================================================================
// GRAPHICS
// ============================================================================

sexpr_record! {
    pub struct SymRectangle: "rectangle" {
        pub start: Start,
        pub end: End,
        pub stroke: Option<Stroke>,
        pub fill: Option<Fill>,
    }
}

sexpr_record! {
    pub struct SymPolyline: "polyline" {
        pub pts: Pts,
        pub stroke: Option<Stroke>,
        pub fill: Option<Fill>,
    }
}

sexpr_record! {
    pub struct SymCircle: "circle" {
        pub center: Center,
        pub radius: f64 [token = "radius"],
        pub stroke: Option<Stroke>,
        pub fill: Option<Fill>,
    }
}

sexpr_record! {
    pub struct SymArc: "arc" {
        pub start: Start,
        pub mid: Option<Mid>,
        pub end: End,
        pub stroke: Option<Stroke>,
        pub fill: Option<Fill>,
    }
}

sexpr_record! {
    pub struct SymText: "text" {
        pub text: String,
        pub at: At,
        pub effects: Option<Effects>,
    }
}

sexpr_union! {
    pub enum SymbolGraphic {
        Rectangle(SymRectangle),
        Polyline(SymPolyline),
        Circle(SymCircle),
        Arc(SymArc),
        Text(SymText),
    }
}

// ============================================================================
// SYMBOLS
// ============================================================================

sexpr_record! {
    /// A library symbol. Units are nested symbols named `PARENT_UNIT_STYLE`
    /// and carry the graphics and pins of one unit.
    pub struct Symbol: "symbol" {
        pub name: String,
        pub extends: Option<KiStr> [token = "extends"],
        pub power: Option<OptionalFlag> [token = "power"],
        pub pin_numbers: Option<PinNumbers>,
        pub pin_names: Option<PinNames>,
        pub exclude_from_sim: Option<bool> [token = "exclude_from_sim"],
        pub in_bom: Option<bool> [token = "in_bom"],
        pub on_board: Option<bool> [token = "on_board"],
        pub properties: Vec<Property>,
        pub graphics: Vec<SymbolGraphic>,
        pub pins: Vec<Pin>,
        pub units: Vec<Symbol>,
        pub unit_name: Option<KiStr> [token = "unit_name"],
        pub embedded_fonts: Option<OptionalFlag> [token = "embedded_fonts"],
    }
}

sexpr_record! {
    /// Bare symbol container, as embedded in a schematic.
    pub struct LibSymbols: "lib_symbols" {
        pub symbols: Vec<Symbol>,
    }
}

sexpr_record! {
    pub struct KicadSymbolLib: "kicad_symbol_lib" {
        pub version: KiInt = KiInt::new("version", 20231120),
        pub generator: KiStr = KiStr::new("generator", "kicad_symbol_editor".to_string()),
        pub generator_version: Option<KiStr> [token = "generator_version"],
        pub symbols: Vec<Symbol>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{SExpr, Strictness};

    const LIB: &str = r#"(kicad_symbol_lib (version 20231120) (generator "kicad_symbol_editor")
  (symbol "R" (pin_numbers hide) (pin_names (offset 0)) (exclude_from_sim no) (in_bom yes) (on_board yes)
    (property "Reference" "R" (at 2.032 0 90) (effects (font (size 1.27 1.27))))
    (property "Value" "R" (at 0 0 90) (effects (font (size 1.27 1.27))))
    (symbol "R_0_1"
      (rectangle (start -1.016 -2.54) (end 1.016 2.54) (stroke (width 0.254) (type default)) (fill (type none))))
    (symbol "R_1_1"
      (pin passive line (at 0 3.81 270) (length 1.27) (name "~" (effects (font (size 1.27 1.27)))) (number "1" (effects (font (size 1.27 1.27)))))
      (pin passive line (at 0 -3.81 90) (length 1.27) (name "~" (effects (font (size 1.27 1.27)))) (number "2" (effects (font (size 1.27 1.27))))))))"#;

    #[test]
    fn test_nested_units() {
        let lib = KicadSymbolLib::from_sexpr(LIB, Strictness::Strict).unwrap();
        let symbol = &lib.symbols[0];
        assert_eq!(symbol.name, "R");
        assert_eq!(symbol.in_bom, Some(true));
        assert_eq!(symbol.exclude_from_sim, Some(false));
        assert!(symbol.pin_numbers.as_ref().unwrap().hide.is_some());
        assert_eq!(symbol.pin_names.as_ref().unwrap().offset, Some(0.0));
        assert_eq!(symbol.properties.len(), 2);
        assert_eq!(symbol.units.len(), 2);
        assert!(matches!(symbol.units[0].graphics[0], SymbolGraphic::Rectangle(_)));
        let pins = &symbol.units[1].pins;
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[1].number.number, "2");
        assert_eq!(pins[1].electrical_type, PinElectricalType::Passive);
    }

    #[test]
    fn test_library_survives_rewrite() {
        let lib = KicadSymbolLib::from_sexpr(LIB, Strictness::Strict).unwrap();
        let again = KicadSymbolLib::from_sexpr(&lib.to_sexpr_string(), Strictness::Strict).unwrap();
        assert_eq!(again, lib);
    }

    #[test]
    fn test_bool_fields_print_yes_no() {
        let symbol = Symbol {
            name: "C".to_string(),
            in_bom: Some(true),
            on_board: Some(false),
            ..Symbol::default()
        };
        let text = symbol.to_sexpr_string();
        assert!(text.contains("(in_bom yes)"));
        assert!(text.contains("(on_board no)"));
        assert!(!text.contains("exclude_from_sim"));
    }
}
