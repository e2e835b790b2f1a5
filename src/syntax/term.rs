//! The generic S-expression tree shared by the reader, the binding engine and
//! the printers.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A node of an S-expression: either an atom or an ordered list of terms.
///
/// The first element of a list is conventionally its head token.
///
/// # Examples
///
/// ```rust
/// use kicadfiles::syntax::Term;
/// let term = Term::list("at", vec![Term::Float(1.0), Term::Float(2.5)]);
/// assert_eq!(term.head(), Some("at"));
/// assert_eq!(term.to_string(), "(at 1.0 2.5)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Term {
    /// Bare symbol such as `F.Cu`, `yes` or `smd`.
    Symbol(String),
    /// Double-quoted string, stored unescaped.
    Str(String),
    Int(i64),
    Float(f64),
    List(Vec<Term>),
}

impl Term {
    /// Builds `(head items...)`.
    pub fn list(head: &str, items: Vec<Term>) -> Term {
        let mut all = Vec::with_capacity(items.len() + 1);
        all.push(Term::symbol(head));
        all.extend(items);
        Term::List(all)
    }

    pub fn symbol(text: impl Into<String>) -> Term {
        Term::Symbol(text.into())
    }

    pub fn string(text: impl Into<String>) -> Term {
        Term::Str(text.into())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Term::List(_))
    }

    pub fn is_atom(&self) -> bool {
        !self.is_list()
    }

    /// Returns the list items, head included.
    pub fn as_list(&self) -> Option<&[Term]> {
        match self {
            Term::List(items) => Some(items),
            _ => None,
        }
    }

    /// Head token of a list whose first element is an atom.
    pub fn head(&self) -> Option<&str> {
        match self {
            Term::List(items) => match items.first() {
                Some(Term::Symbol(s)) | Some(Term::Str(s)) => Some(s),
                _ => None,
            },
            _ => None,
        }
    }

    /// Textual form of an atom, the way scalar conversion sees it.
    pub fn atom_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Term::Symbol(s) | Term::Str(s) => Some(Cow::Borrowed(s)),
            Term::Int(i) => Some(Cow::Owned(i.to_string())),
            Term::Float(f) => Some(Cow::Owned(format_float(*f))),
            Term::List(_) => None,
        }
    }

    /// Short description used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Symbol(_) => "symbol",
            Term::Str(_) => "string",
            Term::Int(_) => "int",
            Term::Float(_) => "float",
            Term::List(_) => "list",
        }
    }
}

/// Formats a float so that integral values keep a trailing `.0`.
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') && !text.contains('e') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Quotes and escapes a string atom.
pub fn quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

// Raw single-line rendering. The pretty printer in `syntax::pretty` is the
// canonical output path.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Symbol(s) => write!(f, "{}", s),
            Term::Str(s) => write!(f, "{}", quote(s)),
            Term::Int(i) => write!(f, "{}", i),
            Term::Float(v) => write!(f, "{}", format_float(*v)),
            Term::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_keeps_fraction() {
        assert_eq!(format_float(10.0), "10.0");
        assert_eq!(format_float(0.15), "0.15");
        assert_eq!(format_float(-2.0), "-2.0");
    }

    #[test]
    fn test_quote_escapes_backslash_before_quote() {
        assert_eq!(quote(r#"a\"b"#), r#""a\\\"b""#);
    }

    #[test]
    fn test_head_of_atom_is_none() {
        assert_eq!(Term::Int(3).head(), None);
        assert_eq!(Term::List(vec![]).head(), None);
    }
}
