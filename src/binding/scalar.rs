//! Scalar conversions between atoms and Rust values.

use crate::syntax::Term;

/// A value stored in a single atom.
pub trait Scalar: Sized {
    /// Kind name used in diagnostics.
    const KIND: &'static str;

    /// `None` when the atom cannot be converted.
    fn from_atom(atom: &Term) -> Option<Self>;

    fn to_term(&self) -> Term;
}

/// 2^63 as a float; every integral float in `[-2^63, 2^63)` fits an `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Scalar for i64 {
    const KIND: &'static str = "int";

    fn from_atom(atom: &Term) -> Option<Self> {
        match atom {
            Term::Int(i) => Some(*i),
            // Literals past the i64 range arrive as floats; `as` would saturate.
            Term::Float(f) if f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(f) => {
                Some(*f as i64)
            }
            Term::Symbol(s) | Term::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_term(&self) -> Term {
        Term::Int(*self)
    }
}

impl Scalar for i32 {
    const KIND: &'static str = "int";

    fn from_atom(atom: &Term) -> Option<Self> {
        i64::from_atom(atom).and_then(|v| i32::try_from(v).ok())
    }

    fn to_term(&self) -> Term {
        Term::Int(i64::from(*self))
    }
}

impl Scalar for u32 {
    const KIND: &'static str = "int";

    fn from_atom(atom: &Term) -> Option<Self> {
        i64::from_atom(atom).and_then(|v| u32::try_from(v).ok())
    }

    fn to_term(&self) -> Term {
        Term::Int(i64::from(*self))
    }
}

impl Scalar for f64 {
    const KIND: &'static str = "float";

    fn from_atom(atom: &Term) -> Option<Self> {
        match atom {
            Term::Int(i) => Some(*i as f64),
            Term::Float(f) => Some(*f),
            Term::Symbol(s) | Term::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_term(&self) -> Term {
        Term::Float(*self)
    }
}

/// `yes`, `true` and `1` are true in any case; every other atom is false.
impl Scalar for bool {
    const KIND: &'static str = "bool";

    fn from_atom(atom: &Term) -> Option<Self> {
        let text = atom.atom_text()?;
        Some(matches!(
            text.to_ascii_lowercase().as_str(),
            "yes" | "true" | "1"
        ))
    }

    fn to_term(&self) -> Term {
        Term::symbol(if *self { "yes" } else { "no" })
    }
}

impl Scalar for String {
    const KIND: &'static str = "str";

    fn from_atom(atom: &Term) -> Option<Self> {
        atom.atom_text().map(|t| t.into_owned())
    }

    fn to_term(&self) -> Term {
        Term::Str(self.clone())
    }
}

crate::__impl_scalar_field!(i64);
crate::__impl_scalar_field!(i32);
crate::__impl_scalar_field!(u32);
crate::__impl_scalar_field!(f64);
crate::__impl_scalar_field!(bool);
crate::__impl_scalar_field!(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(i64::from_atom(&Term::Float(3.0)), Some(3));
        assert_eq!(i64::from_atom(&Term::Float(3.5)), None);
        assert_eq!(i64::from_atom(&Term::string("12")), Some(12));
        assert_eq!(f64::from_atom(&Term::Int(2)), Some(2.0));
        assert_eq!(f64::from_atom(&Term::symbol("not_a_number")), None);
        assert_eq!(u32::from_atom(&Term::Int(-1)), None);
    }

    #[test]
    fn test_int_out_of_range_is_rejected() {
        assert_eq!(i64::from_atom(&Term::Float(1e20)), None);
        assert_eq!(i64::from_atom(&Term::Float(-1e20)), None);
        assert_eq!(i64::from_atom(&Term::Float(I64_BOUND)), None);
        assert_eq!(i64::from_atom(&Term::Float(-I64_BOUND)), Some(i64::MIN));
        assert_eq!(i64::from_atom(&Term::Float(f64::INFINITY)), None);
    }

    #[test]
    fn test_bool_never_fails() {
        assert_eq!(bool::from_atom(&Term::symbol("YES")), Some(true));
        assert_eq!(bool::from_atom(&Term::Int(1)), Some(true));
        assert_eq!(bool::from_atom(&Term::symbol("maybe")), Some(false));
        assert_eq!(bool::from_atom(&Term::List(vec![])), None);
        assert_eq!(true.to_term(), Term::symbol("yes"));
    }

    #[test]
    fn test_string_from_number() {
        assert_eq!(String::from_atom(&Term::Int(7)), Some("7".to_string()));
        assert_eq!("x".to_string().to_term(), Term::string("x"));
    }
}
