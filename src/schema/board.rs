//! Printed circuit boards (`.kicad_pcb`).

use crate::binding::{KiFloat, KiInt, KiStr, OptionalFlag, ParseCursor, SExpr, Scalar, SimpleFlag};
use crate::errors::SexprError;
use crate::schema::base::{At, End, Layer, Layers, Mid, Property, Start, Uuid};
use crate::schema::footprint::Footprint;
use crate::schema::graphics::GrItem;
use crate::schema::pad::{Net, Teardrops};
use crate::syntax::Term;
use crate::{sexpr_record, symbol_enum};

// ============================================================================
// HEADER
// ============================================================================

sexpr_record! {
    pub struct General: "general" {
        pub thickness: KiFloat = KiFloat::new("thickness", 1.6),
        pub legacy_teardrops: Option<OptionalFlag> [token = "legacy_teardrops"],
    }
}

sexpr_record! {
    /// `(paper "A4" [portrait])`
    pub struct Paper: "paper" {
        pub size: String,
        pub portrait: Option<SimpleFlag>,
    }
}

sexpr_record! {
    pub struct AuxAxisOrigin: "aux_axis_origin" {
        pub x: f64,
        pub y: f64,
    }
}

sexpr_record! {
    pub struct GridOrigin: "grid_origin" {
        pub x: f64,
        pub y: f64,
    }
}

sexpr_record! {
    /// Board-wide manufacturing settings.
    ///
    /// Stackup and plot parameters are not modelled; strict decoding rejects
    /// a setup block that carries them.
    pub struct Setup: "setup" {
        pub pad_to_mask_clearance: f64 [token = "pad_to_mask_clearance"],
        pub allow_soldermask_bridges_in_footprints:
            Option<OptionalFlag> [token = "allow_soldermask_bridges_in_footprints"],
        pub solder_mask_min_width: Option<f64> [token = "solder_mask_min_width"],
        pub pad_to_paste_clearance: Option<f64> [token = "pad_to_paste_clearance"],
        pub pad_to_paste_clearance_ratio: Option<f64> [token = "pad_to_paste_clearance_ratio"],
        pub aux_axis_origin: Option<AuxAxisOrigin>,
        pub grid_origin: Option<GridOrigin>,
    }
}

// ============================================================================
// LAYER TABLE
// ============================================================================

symbol_enum! {
    pub enum LayerType {
        Signal => "signal",
        Power => "power",
        Mixed => "mixed",
        Jumper => "jumper",
        User => "user",
    }
}

/// One row of the board layer table: `(0 "F.Cu" signal ["User Name"])`.
///
/// The head is the layer ordinal rather than a symbol, so this type decodes
/// by hand instead of through `sexpr_record!`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerDef {
    pub ordinal: i64,
    pub canonical_name: String,
    pub kind: LayerType,
    pub user_name: Option<String>,
}

impl SExpr for LayerDef {
    fn type_label() -> &'static str {
        "LayerDef"
    }

    fn accepts(_head: &str) -> bool {
        false
    }

    fn decode_term(cursor: &mut ParseCursor<'_>) -> Result<Self, SexprError> {
        let ordinal = match (cursor.term(), cursor.items().first()) {
            (Term::List(_), Some(Term::Int(n))) => *n,
            (_, first) => {
                return Err(SexprError::TokenMismatch {
                    path: cursor.path_str(),
                    expected: "layer ordinal".to_string(),
                    found: first.map_or_else(|| "empty".to_string(), Term::to_string),
                })
            }
        };
        let canonical_name = cursor
            .parse_scalar::<String>(1, "canonical_name", true)?
            .unwrap_or_default();
        let kind = cursor
            .parse_scalar::<LayerType>(2, "kind", true)?
            .unwrap_or_default();
        let user_name = cursor.parse_scalar::<String>(3, "user_name", false)?;
        cursor.finish()?;

        Ok(LayerDef {
            ordinal,
            canonical_name,
            kind,
            user_name,
        })
    }

    fn encode(&self) -> Term {
        let mut items = vec![
            Term::Int(self.ordinal),
            Term::string(self.canonical_name.as_str()),
            self.kind.to_term(),
        ];
        if let Some(name) = &self.user_name {
            items.push(Term::string(name.as_str()));
        }
        Term::List(items)
    }
}

crate::__impl_nested_field!(LayerDef, None);

sexpr_record! {
    /// The board layer table. Distinct from [`Layers`], which lists layer
    /// names on a pad or via.
    pub struct BoardLayers: "layers" {
        pub defs: Vec<LayerDef>,
    }
}

// ============================================================================
// TRACKS
// ============================================================================

sexpr_record! {
    pub struct Segment: "segment" {
        pub start: Start,
        pub end: End,
        pub width: KiFloat = KiFloat::new("width", 0.25),
        pub layer: Layer,
        pub locked: Option<OptionalFlag> [token = "locked"],
        pub net: i64 [token = "net"],
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    /// Curved track segment.
    pub struct ArcSegment: "arc" {
        pub start: Start,
        pub mid: Mid,
        pub end: End,
        pub width: KiFloat = KiFloat::new("width", 0.25),
        pub layer: Layer,
        pub locked: Option<OptionalFlag> [token = "locked"],
        pub net: i64 [token = "net"],
        pub uuid: Option<Uuid>,
    }
}

symbol_enum! {
    pub enum ViaType {
        Through => "through",
        Blind => "blind",
        Micro => "micro",
    }
}

sexpr_record! {
    /// `(via [blind|micro] [locked] (at X Y) (size D) (drill D) (layers A B) ...)`
    pub struct Via: "via" {
        pub kind: Option<ViaType>,
        pub locked: Option<SimpleFlag>,
        pub at: At,
        pub size: KiFloat = KiFloat::new("size", 0.6),
        pub drill: KiFloat = KiFloat::new("drill", 0.3),
        pub layers: Layers,
        pub remove_unused_layers: Option<OptionalFlag> [token = "remove_unused_layers"],
        pub keep_end_layers: Option<OptionalFlag> [token = "keep_end_layers"],
        pub free: Option<OptionalFlag> [token = "free"],
        pub teardrops: Option<Teardrops>,
        pub net: i64 [token = "net"],
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    /// Routing-only container, for tools that exchange tracks without a
    /// full board.
    pub struct Tracks: "tracks" {
        pub segments: Vec<Segment>,
        pub arcs: Vec<ArcSegment>,
        pub vias: Vec<Via>,
    }
}

// ============================================================================
// BOARD
// ============================================================================

sexpr_record! {
    /// A complete board file.
    ///
    /// Sections without a schema type here (zones, groups, ...) are rejected
    /// by strict decoding; use failsafe or silent strictness to skip them.
    pub struct KicadPcb: "kicad_pcb" {
        pub version: KiInt = KiInt::new("version", 20240108),
        pub generator: KiStr = KiStr::new("generator", "pcbnew".to_string()),
        pub generator_version: Option<KiStr> [token = "generator_version"],
        pub general: Option<General>,
        pub page: Option<KiStr> [token = "page"],
        pub paper: Option<Paper>,
        pub layers: Option<BoardLayers>,
        pub setup: Option<Setup>,
        pub properties: Vec<Property>,
        pub nets: Vec<Net>,
        pub footprints: Vec<Footprint>,
        pub graphics: Vec<GrItem>,
        pub segments: Vec<Segment>,
        pub arcs: Vec<ArcSegment>,
        pub vias: Vec<Via>,
        pub embedded_fonts: Option<OptionalFlag> [token = "embedded_fonts"],
    }
}
