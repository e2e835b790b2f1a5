//! The binding engine.
//!
//! Generic drivers that the macro-generated record impls delegate to. Every
//! function here is parameterised by the element type's capability trait and
//! a [`FieldDescriptor`]; none knows any concrete record.

use crate::binding::classify::{FieldDescriptor, FieldShape};
use crate::binding::cursor::ParseCursor;
use crate::binding::scalar::Scalar;
use crate::binding::{Field, ListElement, Record, SExpr};
use crate::errors::SexprError;
use crate::syntax::Term;

// ============================================================================
// RECORDS
// ============================================================================

/// Decodes the cursor's term as record `R`.
///
/// The token gate runs first and is fatal under every strictness. Fields are
/// then bound and, in strict mode, leftover elements are rejected.
pub fn decode_record<R: Record>(cursor: &mut ParseCursor<'_>) -> Result<R, SexprError> {
    let found = match cursor.term() {
        Term::List(_) => cursor.term().head().map(str::to_string),
        atom => atom.atom_text().map(|t| t.into_owned()),
    };
    let accepted = found.as_deref().map_or(false, R::accepts);
    if !accepted {
        return Err(SexprError::TokenMismatch {
            path: cursor.path_str(),
            expected: R::TOKEN.to_string(),
            found: found.unwrap_or_else(|| "empty".to_string()),
        });
    }

    let value = R::bind_fields(cursor)?;
    cursor.finish()?;
    Ok(value)
}

/// `(token field...)` with fields in declaration order.
pub fn encode_record<R: Record>(record: &R) -> Term {
    let mut items = vec![Term::symbol(R::TOKEN)];
    record.emit_fields(&mut items);
    Term::List(items)
}

/// Binds one descriptor of `R` into `target`. Unbound fields keep their
/// declared default.
pub fn bind_into<T: Field>(
    target: &mut T,
    desc: &FieldDescriptor,
    cursor: &mut ParseCursor<'_>,
) -> Result<(), SexprError> {
    if let Some(value) = T::bind(desc, cursor)? {
        *target = value;
    }
    Ok(())
}

// ============================================================================
// SCALAR FIELDS
// ============================================================================

pub fn bind_scalar<T: Scalar>(
    desc: &FieldDescriptor,
    cursor: &mut ParseCursor<'_>,
) -> Result<Option<T>, SexprError> {
    let required = desc.is_required();
    match desc.token_name.as_deref() {
        Some(token) => match cursor.find_token(token) {
            Some(found) => {
                let mut child = cursor.enter(found, desc.name);
                let value = child.parse_scalar::<T>(1, desc.name, required)?;
                child.finish()?;
                Ok(value)
            }
            None => {
                if required {
                    cursor.log_issue(missing_token(cursor, token))?;
                }
                Ok(None)
            }
        },
        None => {
            let index = cursor.slot_index(desc.position_index);
            cursor.parse_scalar::<T>(index, desc.name, required)
        }
    }
}

/// Named scalar lists read every atom of the matching sub-term; positional
/// ones claim unclaimed atoms from their slot until the first nested list.
pub fn bind_scalar_list<T: Scalar>(
    desc: &FieldDescriptor,
    cursor: &mut ParseCursor<'_>,
) -> Result<Vec<T>, SexprError> {
    let mut values = Vec::new();
    match desc.token_name.as_deref() {
        Some(token) => {
            if let Some(found) = cursor.find_token(token) {
                let mut child = cursor.enter(found, desc.name);
                for index in 1..child.items().len() {
                    if let Some(value) = child.parse_scalar::<T>(index, desc.name, true)? {
                        values.push(value);
                    }
                }
                child.finish()?;
            }
        }
        None => {
            let start = cursor.slot_index(desc.position_index);
            let items = cursor.items();
            for index in start..items.len() {
                if cursor.is_used(index) {
                    continue;
                }
                if items[index].is_list() {
                    break;
                }
                let field = format!("{}[{}]", desc.name, values.len());
                if let Some(value) = cursor.parse_scalar::<T>(index, &field, true)? {
                    values.push(value);
                } else {
                    cursor.mark_used(index);
                }
            }
        }
    }
    Ok(values)
}

pub fn emit_scalar<T: Scalar>(value: &T, desc: &FieldDescriptor, out: &mut Vec<Term>) {
    match desc.token_name.as_deref() {
        Some(token) => out.push(Term::list(token, vec![value.to_term()])),
        None => out.push(value.to_term()),
    }
}

pub fn emit_scalar_list<T: Scalar>(values: &[T], desc: &FieldDescriptor, out: &mut Vec<Term>) {
    match desc.token_name.as_deref() {
        Some(_) if values.is_empty() => {}
        Some(token) => out.push(Term::list(token, values.iter().map(Scalar::to_term).collect())),
        None => out.extend(values.iter().map(Scalar::to_term)),
    }
}

// ============================================================================
// SELF-PARSING FIELDS
// ============================================================================

pub fn bind_nested<T: SExpr>(
    desc: &FieldDescriptor,
    cursor: &mut ParseCursor<'_>,
) -> Result<Option<T>, SexprError> {
    let required = desc.is_required();
    match desc.token_name.as_deref() {
        Some(token) => match find_with_aliases::<T>(cursor, token) {
            Some(found) => {
                let mut child = cursor.enter(found, desc.name);
                T::decode_term(&mut child).map(Some)
            }
            None => {
                if required {
                    cursor.log_issue(missing_token(cursor, token))?;
                }
                Ok(None)
            }
        },
        None => {
            let index = cursor.slot_index(desc.position_index);
            let items = cursor.items();
            let item = match items.get(index) {
                Some(item) if !cursor.is_used(index) => item,
                _ => {
                    if required {
                        cursor.log_issue(SexprError::MissingField {
                            path: cursor.path_str(),
                            field: desc.name.to_string(),
                            kind: T::type_label(),
                            index,
                        })?;
                    }
                    return Ok(None);
                }
            };
            cursor.mark_used(index);
            let mut child = cursor.enter(item, desc.name);
            match T::decode_term(&mut child) {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    if required {
                        cursor.log_issue(err)?;
                    }
                    Ok(None)
                }
            }
        }
    }
}

/// Collects list elements.
///
/// With a known token every matching sub-term is decoded in input order.
/// Without one, every unclaimed nested list is offered to `T` in order; a
/// token mismatch leaves the element for other fields. Element failures go
/// through the strictness funnel, so strict decoding aborts and the other
/// modes drop the element.
pub fn bind_nested_list<T: SExpr>(
    desc: &FieldDescriptor,
    cursor: &mut ParseCursor<'_>,
) -> Result<Vec<T>, SexprError> {
    let mut values = Vec::new();
    let items = cursor.items();

    for (index, item) in items.iter().enumerate().skip(1) {
        if cursor.is_used(index) || !item.is_list() {
            continue;
        }
        let name = format!("{}[{}]", desc.name, values.len());

        if let Some(token) = desc.token_name.as_deref() {
            let matches = item
                .head()
                .map_or(false, |head| head == token || T::aliases().iter().any(|a| *a == head));
            if !matches {
                continue;
            }
            cursor.mark_used(index);
            let mut child = cursor.enter(item, name);
            match T::decode_term(&mut child) {
                Ok(value) => values.push(value),
                Err(err) => cursor.log_issue(err)?,
            }
        } else {
            let mut child = cursor.enter(item, name);
            match T::decode_term(&mut child) {
                Ok(value) => {
                    cursor.mark_used(index);
                    values.push(value);
                }
                Err(err) if err.is_token_mismatch() => continue,
                Err(err) => {
                    cursor.mark_used(index);
                    cursor.log_issue(err)?;
                }
            }
        }
    }

    Ok(values)
}

/// Claims the sub-term for `token`, falling back to `T`'s legacy heads.
fn find_with_aliases<'a, T: SExpr>(cursor: &mut ParseCursor<'a>, token: &str) -> Option<&'a Term> {
    cursor
        .find_token(token)
        .or_else(|| T::aliases().iter().find_map(|alias| cursor.find_token(alias)))
}

fn missing_token(cursor: &ParseCursor<'_>, token: &str) -> SexprError {
    SexprError::MissingToken {
        path: cursor.path_str(),
        token: token.to_string(),
    }
}

// ============================================================================
// CONTAINER IMPLS
// ============================================================================

impl<T: Field> Field for Option<T> {
    const SHAPE: FieldShape = T::SHAPE.optional();

    fn bind(desc: &FieldDescriptor, cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SexprError> {
        Ok(T::bind(desc, cursor)?.map(Some))
    }

    fn emit(&self, desc: &FieldDescriptor, out: &mut Vec<Term>) {
        if let Some(value) = self {
            value.emit(desc, out);
        }
    }

    fn prototype_token(&self) -> Option<&str> {
        self.as_ref().and_then(Field::prototype_token)
    }

    fn prototype_required(&self) -> bool {
        false
    }
}

impl<T: ListElement> Field for Vec<T> {
    const SHAPE: FieldShape = T::ELEMENT.list();

    fn bind(desc: &FieldDescriptor, cursor: &mut ParseCursor<'_>) -> Result<Option<Self>, SexprError> {
        T::bind_many(desc, cursor).map(Some)
    }

    fn emit(&self, desc: &FieldDescriptor, out: &mut Vec<Term>) {
        T::emit_all(self, desc, out);
    }
}
