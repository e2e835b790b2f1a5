//! Building blocks shared by every KiCad file kind: coordinates, layers,
//! strokes, text effects and properties.

use crate::binding::{KiFloat, KiStr, OptionalFlag, SimpleFlag};
use crate::{sexpr_record, symbol_enum};

// ============================================================================
// COORDINATES
// ============================================================================

sexpr_record! {
    /// Position with optional rotation: `(at X Y [ANGLE])`.
    pub struct At: "at" {
        pub x: f64,
        pub y: f64,
        pub angle: Option<f64>,
    }
}

sexpr_record! {
    /// Single polygon vertex: `(xy X Y)`.
    pub struct Xy: "xy" {
        pub x: f64,
        pub y: f64,
    }
}

sexpr_record! {
    pub struct Xyz: "xyz" {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }
}

sexpr_record! {
    /// `(size WIDTH HEIGHT)`
    pub struct Size: "size" {
        pub width: f64,
        pub height: f64,
    }
}

sexpr_record! {
    pub struct Start: "start" {
        pub x: f64,
        pub y: f64,
    }
}

sexpr_record! {
    pub struct End: "end" {
        pub x: f64,
        pub y: f64,
    }
}

sexpr_record! {
    pub struct Center: "center" {
        pub x: f64,
        pub y: f64,
    }
}

sexpr_record! {
    /// Arc midpoint.
    pub struct Mid: "mid" {
        pub x: f64,
        pub y: f64,
    }
}

sexpr_record! {
    pub struct Offset: "offset" {
        pub x: f64,
        pub y: f64,
    }
}

sexpr_record! {
    /// Polygon point list: `(pts (xy X Y) ...)`.
    pub struct Pts: "pts" {
        pub points: Vec<Xy>,
    }
}

// ============================================================================
// LAYERS AND IDENTIFIERS
// ============================================================================

sexpr_record! {
    /// Canonical layer name: `(layer "F.Cu")`.
    pub struct Layer: "layer" {
        pub name: String,
    }
}

sexpr_record! {
    /// Layer list: `(layers "F.Cu" "F.Paste" "F.Mask")`.
    pub struct Layers: "layers" {
        pub names: Vec<String>,
    }
}

sexpr_record! {
    /// Object identifier. Pre-6.0 files use `tstamp`; output always uses
    /// `uuid`.
    pub struct Uuid: "uuid" | "tstamp" {
        pub value: String,
    }
}

sexpr_record! {
    /// Legacy line width: `(width 0.12)`.
    pub struct Width: "width" {
        pub value: f64,
    }
}

// ============================================================================
// STROKES AND COLORS
// ============================================================================

symbol_enum! {
    pub enum StrokeType {
        Default => "default",
        Solid => "solid",
        Dash => "dash",
        DashDot => "dash_dot",
        DashDotDot => "dash_dot_dot",
        Dot => "dot",
    }
}

sexpr_record! {
    /// `(type solid)` inside a stroke.
    pub struct StrokeKind: "type" {
        pub style: StrokeType,
    }
}

sexpr_record! {
    /// RGBA color; channels are 0-255, alpha is 0.0-1.0.
    pub struct Color: "color" {
        pub r: i64,
        pub g: i64,
        pub b: i64,
        pub a: f64,
    }
}

sexpr_record! {
    /// Line style: `(stroke (width W) (type T) [(color R G B A)])`.
    pub struct Stroke: "stroke" {
        pub width: KiFloat = KiFloat::new("width", 0.0),
        pub kind: StrokeKind,
        pub color: Option<Color>,
    }
}

symbol_enum! {
    pub enum FillType {
        None => "none",
        Outline => "outline",
        Background => "background",
        Color => "color",
    }
}

sexpr_record! {
    /// Symbol graphic fill: `(fill (type background))`.
    pub struct Fill: "fill" {
        pub kind: FillType [token = "type"],
    }
}

// ============================================================================
// TEXT EFFECTS
// ============================================================================

sexpr_record! {
    pub struct Font: "font" {
        pub face: Option<KiStr> [token = "face"],
        pub size: Size,
        pub thickness: Option<KiFloat> [token = "thickness"],
        pub bold: Option<OptionalFlag> [token = "bold"],
        pub italic: Option<OptionalFlag> [token = "italic"],
        pub line_spacing: Option<f64> [token = "line_spacing"],
    }
}

symbol_enum! {
    pub enum JustifyMode {
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
        Mirror => "mirror",
    }
}

sexpr_record! {
    /// `(justify left bottom)`, any combination of modes.
    pub struct Justify: "justify" {
        pub modes: Vec<JustifyMode>,
    }
}

sexpr_record! {
    /// Text appearance. Older files hide text with a bare `hide`, newer ones
    /// with `(hide yes)`.
    pub struct Effects: "effects" {
        pub font: Font,
        pub justify: Option<Justify>,
        pub hide: Option<SimpleFlag>,
        pub hidden: Option<OptionalFlag> [token = "hide"],
    }
}

sexpr_record! {
    /// Key/value property attached to a footprint or symbol.
    pub struct Property: "property" {
        pub key: String,
        pub value: String,
        pub id: Option<i64> [token = "id"],
        pub at: Option<At>,
        pub unlocked: Option<OptionalFlag> [token = "unlocked"],
        pub layer: Option<Layer>,
        pub hide: Option<SimpleFlag>,
        pub hidden: Option<OptionalFlag> [token = "hide"],
        pub uuid: Option<Uuid>,
        pub effects: Option<Effects>,
    }
}
