//! KiCad file schemas, declared with the binding macros.
//!
//! Types are grouped by the file kind that introduces them; shared building
//! blocks live in [`base`].

pub mod base;
pub mod board;
pub mod footprint;
pub mod graphics;
pub mod pad;
pub mod symbol;
pub mod tables;

pub use base::{
    At, Center, Color, Effects, End, Fill, FillType, Font, Justify, JustifyMode, Layer, Layers,
    Mid, Offset, Property, Pts, Size, Start, Stroke, StrokeKind, StrokeType, Uuid, Width, Xy, Xyz,
};
pub use board::{
    ArcSegment, AuxAxisOrigin, BoardLayers, General, GridOrigin, KicadPcb, LayerDef, LayerType,
    Paper, Segment, Setup, Tracks, Via, ViaType,
};
pub use footprint::{
    Attr, FootprintType, Footprint, Footprints, FpArc, FpCircle, FpLine, FpPoly, FpRect, FpText,
    FpTextType, GraphicItem, Model, ModelOffset, ModelRotate, ModelScale,
};
pub use graphics::{GrArc, GrCircle, GrItem, GrLine, GrPoly, GrRect, GrText};
pub use pad::{Chamfer, ChamferCorner, Drill, Net, Options, Pad, PadShape, PadType, Primitives, Teardrops};
pub use symbol::{
    KicadSymbolLib, LibSymbols, Pin, PinElectricalType, PinGraphicStyle, PinName, PinNames,
    PinNumber, PinNumbers, SymArc, SymCircle, SymPolyline, SymRectangle, SymText, Symbol,
    SymbolGraphic,
};
pub use tables::{FpLibTable, LibEntry, SymLibTable};
