//! Syntax layer: the generic term tree, the text reader and the KiCad-style
//! pretty printer.

pub mod parser;
pub mod pretty;
pub mod term;

pub use parser::{parse, parse_named};
pub use term::{format_float, quote, Term};
