//! Schema-driven binding between KiCad S-expression files and typed records.
//!
//! - [`syntax`]: the term tree, the reader and the KiCad pretty printer.
//! - [`binding`]: the generic engine and the declaration macros.
//! - [`schema`]: record types for boards, footprints, symbols and library tables.
//! - [`files`]: extension-checked load and save.
//!
//! # Examples
//!
//! ```rust
//! use kicadfiles::binding::{SExpr, Strictness};
//! use kicadfiles::schema::At;
//!
//! let at = At::from_sexpr("(at 10 20 90)", Strictness::Strict).unwrap();
//! assert_eq!(at.angle, Some(90.0));
//! assert_eq!(at.to_sexpr_string(), "(at 10.0 20.0 90.0)");
//! ```

pub mod binding;
pub mod cli;
pub mod errors;
pub mod files;
pub mod schema;
pub mod syntax;

pub use crate::binding::{SExpr, Strictness};
pub use crate::errors::SexprError;
pub use crate::files::{load, save, Document, FileKind};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::OnceCell;
}
