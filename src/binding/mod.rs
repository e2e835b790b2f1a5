//! Schema-driven binding between [`Term`] trees and typed records.
//!
//! Record types are declared with [`sexpr_record!`](crate::sexpr_record); the
//! macro produces a field declaration table that [`classify`] turns into
//! cached descriptors, and trait impls that delegate to the generic
//! [`engine`]. The engine depends only on the capability traits below:
//!
//! - [`SExpr`]: a type that decodes itself from a term and encodes back.
//! - [`Record`]: an `SExpr` with a fixed token and declared fields.
//! - [`Field`]: anything that can occupy a record field.
//! - [`ListElement`]: anything that can be collected into a `Vec` field.
//!
//! # Examples
//!
//! ```rust
//! use kicadfiles::sexpr_record;
//! use kicadfiles::binding::{SExpr, Strictness};
//!
//! sexpr_record! {
//!     pub struct Size: "size" {
//!         pub width: f64,
//!         pub height: f64,
//!     }
//! }
//!
//! let size = Size::from_sexpr("(size 10.0 20.0)", Strictness::Strict).unwrap();
//! assert_eq!(size, Size { width: 10.0, height: 20.0 });
//! assert_eq!(size.to_sexpr_string(), "(size 10.0 20.0)");
//! ```

pub mod classify;
pub mod cursor;
pub mod engine;
pub mod macros;
pub mod scalar;
pub mod strictness;
pub mod wrappers;

pub use classify::{classify, FieldDecl, FieldDescriptor, FieldKind, FieldShape};
pub use cursor::{ConsumptionTracker, ParseCursor};
pub use scalar::Scalar;
pub use strictness::Strictness;
pub use wrappers::{KiFloat, KiInt, KiStr, OptionalFlag, Primitive, SimpleFlag};

use crate::errors::SexprError;
use crate::syntax::{self, pretty, Term};

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// A type that decodes itself from a term and encodes itself back.
pub trait SExpr: Sized {
    /// Name used as the first diagnostic path segment.
    fn type_label() -> &'static str;

    /// Whether a term with this head could be an instance of this type.
    fn accepts(head: &str) -> bool;

    /// Older head tokens this type still decodes from. Named fields look for
    /// these when the current token is absent.
    fn aliases() -> &'static [&'static str] {
        &[]
    }

    /// Decodes the term the cursor is rooted at.
    fn decode_term(cursor: &mut ParseCursor<'_>) -> Result<Self, SexprError>;

    fn encode(&self) -> Term;

    fn from_term(term: &Term, strictness: Strictness) -> Result<Self, SexprError> {
        let mut cursor = ParseCursor::root(term, Self::type_label(), strictness);
        Self::decode_term(&mut cursor)
    }

    fn from_sexpr(text: &str, strictness: Strictness) -> Result<Self, SexprError> {
        let term = syntax::parse(text)?;
        Self::from_term(&term, strictness)
    }

    /// KiCad-formatted text of [`SExpr::encode`].
    fn to_sexpr_string(&self) -> String {
        pretty::format(&self.encode(), 0)
    }
}

/// A record with a fixed head token and a declared field list.
pub trait Record: SExpr + Default {
    const TOKEN: &'static str;

    fn field_decls() -> Vec<FieldDecl>;

    /// Classified fields, computed once per type.
    fn descriptors() -> &'static [FieldDescriptor];

    fn bind_fields(cursor: &mut ParseCursor<'_>) -> Result<Self, SexprError>;

    fn emit_fields(&self, out: &mut Vec<Term>);
}

/// A value that can occupy one record field.
pub trait Field: Sized {
    const SHAPE: FieldShape;

    /// `Ok(None)` leaves the field at its declared default.
    fn bind(desc: &FieldDescriptor, cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SexprError>;

    fn emit(&self, desc: &FieldDescriptor, out: &mut Vec<Term>);

    /// Token carried by this instance rather than by its type.
    fn prototype_token(&self) -> Option<&str> {
        None
    }

    fn prototype_required(&self) -> bool {
        true
    }
}

/// A value that can be collected into a `Vec` field.
pub trait ListElement: Sized {
    const ELEMENT: FieldShape;

    fn bind_many(desc: &FieldDescriptor, cursor: &mut ParseCursor<'_>) -> Result<Vec<Self>, SexprError>;

    fn emit_all(items: &[Self], desc: &FieldDescriptor, out: &mut Vec<Term>);
}
