//! Wrapper field types that carry their token per instance.
//!
//! - [`Primitive`] (`KiStr`, `KiInt`, `KiFloat`): `(token value)` or a bare value.
//! - [`OptionalFlag`]: `(token)` or `(token value)`.
//! - [`SimpleFlag`]: a bare symbol whose presence is the value. It never
//!   occupies a positional slot.

use std::fmt;

use crate::binding::classify::{FieldDescriptor, FieldShape};
use crate::binding::cursor::ParseCursor;
use crate::binding::engine;
use crate::binding::scalar::Scalar;
use crate::binding::{Field, ListElement, SExpr};
use crate::errors::SexprError;
use crate::syntax::Term;

// ============================================================================
// PRIMITIVE
// ============================================================================

/// A scalar paired with its own token.
///
/// Equality compares the token and the value; `required` is classification
/// metadata only.
#[derive(Debug, Clone)]
pub struct Primitive<T> {
    pub token: String,
    pub value: T,
    pub required: bool,
}

pub type KiStr = Primitive<String>;
pub type KiInt = Primitive<i64>;
pub type KiFloat = Primitive<f64>;

impl<T> Primitive<T> {
    pub fn new(token: &str, value: T) -> Self {
        Primitive {
            token: token.to_string(),
            value,
            required: true,
        }
    }

    /// Like [`Primitive::new`], classified as optional when used as a field
    /// default.
    pub fn optional(token: &str, value: T) -> Self {
        Primitive {
            required: false,
            ..Self::new(token, value)
        }
    }

    /// Replaces the value, keeping the token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kicadfiles::binding::KiInt;
    /// let mut version = KiInt::new("version", 20221018);
    /// version.set(20240108);
    /// assert_eq!(version, KiInt::new("version", 20240108));
    /// ```
    pub fn set(&mut self, value: T) -> &mut Self {
        self.value = value;
        self
    }
}

impl<T: Default> Default for Primitive<T> {
    fn default() -> Self {
        Primitive::new("", T::default())
    }
}

impl<T: PartialEq> PartialEq for Primitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token && self.value == other.value
    }
}

impl<T: fmt::Display> fmt::Display for Primitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: Scalar + Default> SExpr for Primitive<T> {
    fn type_label() -> &'static str {
        match T::KIND {
            "str" => "KiStr",
            "int" => "KiInt",
            "float" => "KiFloat",
            _ => "Primitive",
        }
    }

    fn accepts(_head: &str) -> bool {
        true
    }

    fn decode_term(cursor: &mut ParseCursor<'_>) -> Result<Self, SexprError> {
        if cursor.term().is_list() {
            let token = cursor.term().head().unwrap_or_default().to_string();
            let value = cursor.parse_scalar::<T>(1, &token, true)?;
            cursor.finish()?;
            Ok(Primitive::new(&token, value.unwrap_or_default()))
        } else {
            let value = cursor.parse_scalar::<T>(0, "value", true)?;
            Ok(Primitive::new("", value.unwrap_or_default()))
        }
    }

    fn encode(&self) -> Term {
        if self.token.is_empty() {
            self.value.to_term()
        } else {
            Term::list(&self.token, vec![self.value.to_term()])
        }
    }
}

impl<T: Scalar + Default> Field for Primitive<T> {
    const SHAPE: FieldShape = FieldShape::nested(None);

    fn bind(desc: &FieldDescriptor, cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SexprError> {
        engine::bind_nested::<Self>(desc, cursor)
    }

    fn emit(&self, _desc: &FieldDescriptor, out: &mut Vec<Term>) {
        out.push(self.encode());
    }

    fn prototype_token(&self) -> Option<&str> {
        Some(&self.token)
    }

    fn prototype_required(&self) -> bool {
        self.required
    }
}

impl<T: Scalar + Default> ListElement for Primitive<T> {
    const ELEMENT: FieldShape = FieldShape::nested(None);

    fn bind_many(desc: &FieldDescriptor, cursor: &mut ParseCursor<'_>) -> Result<Vec<Self>, SexprError> {
        engine::bind_nested_list::<Self>(desc, cursor)
    }

    fn emit_all(items: &[Self], _desc: &FieldDescriptor, out: &mut Vec<Term>) {
        out.extend(items.iter().map(SExpr::encode));
    }
}

// ============================================================================
// OPTIONAL FLAG
// ============================================================================

/// A flag with an optional trailing value: `(locked)`, `(hide yes)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionalFlag {
    pub token: String,
    pub value: Option<String>,
}

impl OptionalFlag {
    pub fn new(token: &str) -> Self {
        OptionalFlag {
            token: token.to_string(),
            value: None,
        }
    }

    pub fn with_value(token: &str, value: &str) -> Self {
        OptionalFlag {
            token: token.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn set(&mut self, value: Option<&str>) -> &mut Self {
        self.value = value.map(str::to_string);
        self
    }

    /// Presence means enabled unless the value says otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kicadfiles::binding::OptionalFlag;
    /// assert!(OptionalFlag::new("locked").is_enabled());
    /// assert!(OptionalFlag::with_value("hide", "YES").is_enabled());
    /// assert!(!OptionalFlag::with_value("hide", "no").is_enabled());
    /// ```
    pub fn is_enabled(&self) -> bool {
        match &self.value {
            Some(value) => matches!(value.to_ascii_lowercase().as_str(), "yes" | "true" | "1"),
            None => true,
        }
    }
}

impl fmt::Display for OptionalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "({} {})", self.token, value),
            None => write!(f, "({})", self.token),
        }
    }
}

impl SExpr for OptionalFlag {
    fn type_label() -> &'static str {
        "OptionalFlag"
    }

    fn accepts(_head: &str) -> bool {
        true
    }

    fn decode_term(cursor: &mut ParseCursor<'_>) -> Result<Self, SexprError> {
        let term = cursor.term();
        match term {
            Term::List(items) => {
                let token = term.head().unwrap_or_default().to_string();
                let value = items.get(1).and_then(Term::atom_text).map(|t| t.into_owned());
                if value.is_some() {
                    cursor.mark_used(1);
                }
                cursor.finish()?;
                Ok(OptionalFlag { token, value })
            }
            atom => Ok(OptionalFlag {
                token: atom.atom_text().map(|t| t.into_owned()).unwrap_or_default(),
                value: None,
            }),
        }
    }

    fn encode(&self) -> Term {
        let value = self.value.iter().map(Term::string).collect();
        Term::list(&self.token, value)
    }
}

impl Field for OptionalFlag {
    const SHAPE: FieldShape = FieldShape::nested(None);

    fn bind(desc: &FieldDescriptor, cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SexprError> {
        engine::bind_nested::<Self>(desc, cursor)
    }

    fn emit(&self, _desc: &FieldDescriptor, out: &mut Vec<Term>) {
        out.push(self.encode());
    }

    fn prototype_token(&self) -> Option<&str> {
        Some(&self.token)
    }

    fn prototype_required(&self) -> bool {
        false
    }
}

// ============================================================================
// SIMPLE FLAG
// ============================================================================

/// A bare marker symbol such as `oval` or `locked`.
///
/// Declared as `Option<SimpleFlag>`; the token defaults to the field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleFlag {
    pub token: String,
}

impl SimpleFlag {
    pub fn new(token: &str) -> Self {
        SimpleFlag {
            token: token.to_string(),
        }
    }
}

impl fmt::Display for SimpleFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl SExpr for SimpleFlag {
    fn type_label() -> &'static str {
        "SimpleFlag"
    }

    fn accepts(_head: &str) -> bool {
        false
    }

    fn decode_term(cursor: &mut ParseCursor<'_>) -> Result<Self, SexprError> {
        match cursor.term() {
            Term::Symbol(token) => Ok(SimpleFlag::new(token)),
            other => Err(SexprError::TokenMismatch {
                path: cursor.path_str(),
                expected: "bare symbol".to_string(),
                found: other.to_string(),
            }),
        }
    }

    fn encode(&self) -> Term {
        Term::symbol(&self.token)
    }
}

impl Field for SimpleFlag {
    const SHAPE: FieldShape = FieldShape::marker();

    fn bind(desc: &FieldDescriptor, cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SexprError> {
        let token = desc.token_name.as_deref().unwrap_or(desc.name);
        if cursor.find_marker(token) {
            return Ok(Some(SimpleFlag::new(token)));
        }
        if desc.is_required() {
            cursor.log_issue(SexprError::MissingToken {
                path: cursor.path_str(),
                token: token.to_string(),
            })?;
        }
        Ok(None)
    }

    fn emit(&self, _desc: &FieldDescriptor, out: &mut Vec<Term>) {
        out.push(self.encode());
    }

    fn prototype_token(&self) -> Option<&str> {
        Some(&self.token)
    }

    fn prototype_required(&self) -> bool {
        false
    }
}
