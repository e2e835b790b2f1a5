//! Footprint pads and their drill, net and teardrop settings.

use crate::binding::{KiFloat, KiStr, OptionalFlag, SimpleFlag};
use crate::schema::base::{At, Layers, Offset, Size, Uuid, Width};
use crate::schema::graphics::GrItem;
use crate::{sexpr_record, symbol_enum};

symbol_enum! {
    pub enum PadType {
        ThruHole => "thru_hole",
        Smd => "smd",
        Connect => "connect",
        NpThruHole => "np_thru_hole",
    }
}

symbol_enum! {
    pub enum PadShape {
        Circle => "circle",
        Rect => "rect",
        Oval => "oval",
        Trapezoid => "trapezoid",
        Roundrect => "roundrect",
        Custom => "custom",
    }
}

symbol_enum! {
    pub enum ChamferCorner {
        TopLeft => "top_left",
        TopRight => "top_right",
        BottomLeft => "bottom_left",
        BottomRight => "bottom_right",
    }
}

sexpr_record! {
    /// `(drill [oval] DIAMETER [WIDTH] [(offset X Y)])`
    ///
    /// `oval` is a bare marker, so `DIAMETER` is the first positional value
    /// whether or not it is present.
    pub struct Drill: "drill" {
        pub oval: Option<SimpleFlag>,
        pub diameter: f64,
        pub width: Option<f64>,
        pub offset: Option<Offset>,
    }
}

sexpr_record! {
    /// `(net NUMBER "NAME")`
    pub struct Net: "net" {
        pub number: i64,
        pub name: String,
    }
}

sexpr_record! {
    pub struct Chamfer: "chamfer" {
        pub corners: Vec<ChamferCorner>,
    }
}

sexpr_record! {
    /// Custom pad options: `(options (clearance outline) (anchor rect))`.
    pub struct Options: "options" {
        pub clearance: Option<KiStr> [token = "clearance"],
        pub anchor: Option<KiStr> [token = "anchor"],
    }
}

sexpr_record! {
    /// Drawing primitives of a custom pad.
    pub struct Primitives: "primitives" {
        pub items: Vec<GrItem>,
        pub width: Option<Width>,
        pub fill: Option<OptionalFlag> [token = "fill"],
    }
}

sexpr_record! {
    pub struct Teardrops: "teardrops" {
        pub best_length_ratio: KiFloat = KiFloat::new("best_length_ratio", 0.5),
        pub max_length: KiFloat = KiFloat::new("max_length", 1.0),
        pub best_width_ratio: KiFloat = KiFloat::new("best_width_ratio", 1.0),
        pub max_width: KiFloat = KiFloat::new("max_width", 2.0),
        pub curved_edges: bool [token = "curved_edges"],
        pub filter_ratio: KiFloat = KiFloat::new("filter_ratio", 0.9),
        pub enabled: bool [token = "enabled"] = true,
        pub allow_two_segments: bool [token = "allow_two_segments"] = true,
        pub prefer_zone_connections: bool [token = "prefer_zone_connections"] = true,
    }
}

sexpr_record! {
    /// A footprint pad.
    ///
    /// ```text
    /// (pad "NUMBER" TYPE SHAPE (at X Y [ANGLE]) [locked] (size X Y)
    ///      [(drill ...)] (layers ...) [(net N "NAME")] ... [(uuid ...)])
    /// ```
    pub struct Pad: "pad" {
        pub number: String,
        pub kind: PadType,
        pub shape: PadShape,
        pub at: At,
        pub locked: Option<SimpleFlag>,
        pub size: Size,
        pub drill: Option<Drill>,
        pub layers: Layers,
        pub remove_unused_layers: Option<OptionalFlag> [token = "remove_unused_layers"],
        pub keep_end_layers: Option<OptionalFlag> [token = "keep_end_layers"],
        pub roundrect_rratio: Option<f64> [token = "roundrect_rratio"],
        pub chamfer_ratio: Option<f64> [token = "chamfer_ratio"],
        pub chamfer: Option<Chamfer>,
        pub net: Option<Net>,
        pub pinfunction: Option<KiStr> [token = "pinfunction"],
        pub pintype: Option<KiStr> [token = "pintype"],
        pub die_length: Option<f64> [token = "die_length"],
        pub solder_mask_margin: Option<f64> [token = "solder_mask_margin"],
        pub solder_paste_margin: Option<f64> [token = "solder_paste_margin"],
        pub solder_paste_margin_ratio: Option<f64> [token = "solder_paste_margin_ratio"],
        pub clearance: Option<f64> [token = "clearance"],
        pub zone_connect: Option<i64> [token = "zone_connect"],
        pub thermal_bridge_width: Option<f64> [token = "thermal_bridge_width"],
        pub thermal_gap: Option<f64> [token = "thermal_gap"],
        pub options: Option<Options>,
        pub primitives: Option<Primitives>,
        pub teardrops: Option<Teardrops>,
        pub uuid: Option<Uuid>,
    }
}
