//! Footprints (`.kicad_mod`) and their graphic items and 3D models.

use crate::binding::{KiInt, KiStr, OptionalFlag, SimpleFlag};
use crate::schema::base::{
    At, Center, Effects, End, Layer, Mid, Property, Pts, Start, Stroke, Uuid, Width, Xyz,
};
use crate::schema::pad::Pad;
use crate::{sexpr_record, sexpr_union, symbol_enum};

// ============================================================================
// ATTRIBUTES AND MODELS
// ============================================================================

symbol_enum! {
    pub enum FootprintType {
        Smd => "smd",
        ThroughHole => "through_hole",
    }
}

sexpr_record! {
    /// `(attr [TYPE] [board_only] [exclude_from_pos_files] [exclude_from_bom]
    /// [allow_missing_courtyard] [dnp])`
    pub struct Attr: "attr" {
        pub kind: Option<FootprintType>,
        pub board_only: Option<SimpleFlag>,
        pub exclude_from_pos_files: Option<SimpleFlag>,
        pub exclude_from_bom: Option<SimpleFlag>,
        pub allow_missing_courtyard: Option<SimpleFlag>,
        pub dnp: Option<SimpleFlag>,
    }
}

sexpr_record! {
    pub struct ModelOffset: "offset" {
        pub xyz: Xyz,
    }
}

sexpr_record! {
    pub struct ModelScale: "scale" {
        pub xyz: Xyz,
    }
}

sexpr_record! {
    pub struct ModelRotate: "rotate" {
        pub xyz: Xyz,
    }
}

sexpr_record! {
    /// 3D model reference.
    pub struct Model: "model" {
        pub path: String,
        pub hide: Option<SimpleFlag>,
        pub opacity: Option<f64> [token = "opacity"],
        pub offset: Option<ModelOffset>,
        pub scale: Option<ModelScale>,
        pub rotate: Option<ModelRotate>,
    }
}

// ============================================================================
// GRAPHIC ITEMS
// ============================================================================

sexpr_record! {
    pub struct FpLine: "fp_line" {
        pub start: Start,
        pub end: End,
        pub stroke: Option<Stroke>,
        pub layer: Layer,
        pub width: Option<Width>,
        pub locked: Option<OptionalFlag> [token = "locked"],
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    pub struct FpCircle: "fp_circle" {
        pub center: Center,
        pub end: End,
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub fill: Option<OptionalFlag> [token = "fill"],
        pub layer: Layer,
        pub locked: Option<OptionalFlag> [token = "locked"],
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    /// Three-point arc. Pre-6.0 files use `(start) (end) (angle)` instead of
    /// a midpoint.
    pub struct FpArc: "fp_arc" {
        pub start: Start,
        pub mid: Option<Mid>,
        pub end: End,
        pub angle: Option<f64> [token = "angle"],
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub layer: Layer,
        pub locked: Option<OptionalFlag> [token = "locked"],
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    pub struct FpRect: "fp_rect" {
        pub start: Start,
        pub end: End,
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub fill: Option<OptionalFlag> [token = "fill"],
        pub layer: Layer,
        pub locked: Option<OptionalFlag> [token = "locked"],
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    pub struct FpPoly: "fp_poly" {
        pub pts: Pts,
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub fill: Option<OptionalFlag> [token = "fill"],
        pub layer: Layer,
        pub locked: Option<OptionalFlag> [token = "locked"],
        pub uuid: Option<Uuid>,
    }
}

symbol_enum! {
    pub enum FpTextType {
        Reference => "reference",
        Value => "value",
        User => "user",
    }
}

sexpr_record! {
    pub struct FpText: "fp_text" {
        pub kind: FpTextType,
        pub text: String,
        pub at: At,
        pub unlocked: Option<OptionalFlag> [token = "unlocked"],
        pub layer: Layer,
        pub hide: Option<SimpleFlag>,
        pub hidden: Option<OptionalFlag> [token = "hide"],
        pub uuid: Option<Uuid>,
        pub effects: Effects,
    }
}

sexpr_union! {
    /// Footprint graphic item, in file order.
    pub enum GraphicItem {
        Text(FpText),
        Line(FpLine),
        Rect(FpRect),
        Circle(FpCircle),
        Arc(FpArc),
        Poly(FpPoly),
    }
}

// ============================================================================
// FOOTPRINT
// ============================================================================

sexpr_record! {
    /// A footprint, either a `.kicad_mod` file or embedded in a board.
    ///
    /// Files written before KiCad 6 use the `module` head; they decode the
    /// same way and are written back as `footprint`.
    pub struct Footprint: "footprint" | "module" {
        pub library_link: String,
        pub locked: Option<SimpleFlag>,
        pub placed: Option<SimpleFlag>,
        pub version: Option<KiInt> [token = "version"],
        pub generator: Option<KiStr> [token = "generator"],
        pub generator_version: Option<KiStr> [token = "generator_version"],
        pub layer: Layer,
        pub tedit: Option<KiStr> [token = "tedit"],
        pub uuid: Option<Uuid>,
        pub at: Option<At>,
        pub descr: Option<KiStr> [token = "descr"],
        pub tags: Option<KiStr> [token = "tags"],
        pub properties: Vec<Property>,
        pub path: Option<KiStr> [token = "path"],
        pub solder_mask_margin: Option<f64> [token = "solder_mask_margin"],
        pub solder_paste_margin: Option<f64> [token = "solder_paste_margin"],
        pub solder_paste_ratio: Option<f64> [token = "solder_paste_ratio"],
        pub clearance: Option<f64> [token = "clearance"],
        pub zone_connect: Option<i64> [token = "zone_connect"],
        pub attr: Option<Attr>,
        pub private_layers: Vec<String> [token = "private_layers"],
        pub net_tie_pad_groups: Vec<String> [token = "net_tie_pad_groups"],
        pub graphics: Vec<GraphicItem>,
        pub pads: Vec<Pad>,
        pub embedded_fonts: Option<OptionalFlag> [token = "embedded_fonts"],
        pub models: Vec<Model>,
    }
}

sexpr_record! {
    pub struct Footprints: "footprints" {
        pub footprints: Vec<Footprint>,
    }
}
