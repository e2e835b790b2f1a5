//! Board-level graphic items (`gr_*`), also used as custom pad primitives.

use crate::binding::OptionalFlag;
use crate::schema::base::{At, Center, Effects, End, Layer, Mid, Pts, Start, Stroke, Uuid, Width};
use crate::{sexpr_record, sexpr_union};

sexpr_record! {
    pub struct GrLine: "gr_line" {
        pub start: Start,
        pub end: End,
        pub angle: Option<f64> [token = "angle"],
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub layer: Option<Layer>,
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    pub struct GrCircle: "gr_circle" {
        pub center: Center,
        pub end: End,
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub fill: Option<OptionalFlag> [token = "fill"],
        pub layer: Option<Layer>,
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    pub struct GrArc: "gr_arc" {
        pub start: Start,
        pub mid: Option<Mid>,
        pub end: End,
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub layer: Option<Layer>,
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    pub struct GrRect: "gr_rect" {
        pub start: Start,
        pub end: End,
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub fill: Option<OptionalFlag> [token = "fill"],
        pub layer: Option<Layer>,
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    pub struct GrPoly: "gr_poly" {
        pub pts: Pts,
        pub stroke: Option<Stroke>,
        pub width: Option<Width>,
        pub fill: Option<OptionalFlag> [token = "fill"],
        pub layer: Option<Layer>,
        pub uuid: Option<Uuid>,
    }
}

sexpr_record! {
    pub struct GrText: "gr_text" {
        pub text: String,
        pub at: At,
        pub layer: Option<Layer>,
        pub uuid: Option<Uuid>,
        pub effects: Option<Effects>,
    }
}

sexpr_union! {
    /// Any `gr_*` item. Lists of these keep the input order across kinds.
    pub enum GrItem {
        Line(GrLine),
        Circle(GrCircle),
        Arc(GrArc),
        Rect(GrRect),
        Poly(GrPoly),
        Text(GrText),
    }
}
