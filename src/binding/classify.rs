//! Field classification.
//!
//! Each record type declares its fields as a list of [`FieldDecl`]s (generated
//! by `sexpr_record!`). [`classify`] turns that list into the ordered
//! [`FieldDescriptor`]s the engine matches against input. Records cache the
//! result in a write-once static, so classification runs at most once per
//! type.

// ============================================================================
// FIELD SHAPES
// ============================================================================

/// Whether a field's element type converts from a single atom or decodes
/// itself from a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    SelfParsing,
}

/// Static facts about a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldShape {
    pub kind: FieldKind,
    pub is_list: bool,
    pub is_optional: bool,
    pub is_marker: bool,
    /// Token fixed by the element type itself (records only).
    pub static_token: Option<&'static str>,
}

impl FieldShape {
    pub const SCALAR: FieldShape = FieldShape {
        kind: FieldKind::Scalar,
        is_list: false,
        is_optional: false,
        is_marker: false,
        static_token: None,
    };

    pub const fn nested(static_token: Option<&'static str>) -> FieldShape {
        FieldShape {
            kind: FieldKind::SelfParsing,
            is_list: false,
            is_optional: false,
            is_marker: false,
            static_token,
        }
    }

    pub const fn marker() -> FieldShape {
        FieldShape {
            kind: FieldKind::SelfParsing,
            is_list: false,
            is_optional: false,
            is_marker: true,
            static_token: None,
        }
    }

    pub const fn optional(self) -> FieldShape {
        FieldShape {
            is_optional: true,
            ..self
        }
    }

    pub const fn list(self) -> FieldShape {
        FieldShape {
            is_list: true,
            is_optional: true,
            ..self
        }
    }
}

// ============================================================================
// DECLARATIONS AND DESCRIPTORS
// ============================================================================

/// One declared field: its name, the shape of its type, its hints and what
/// its declared default instance reports about itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub shape: FieldShape,
    pub token_hint: Option<&'static str>,
    pub required_hint: Option<bool>,
    pub prototype_token: Option<String>,
    pub prototype_required: bool,
}

impl FieldDecl {
    pub fn new(name: &'static str, shape: FieldShape) -> Self {
        FieldDecl {
            name,
            shape,
            token_hint: None,
            required_hint: None,
            prototype_token: None,
            prototype_required: true,
        }
    }

    /// Match this field by the named sub-term `token` instead of by position.
    pub fn token(mut self, token: &'static str) -> Self {
        self.token_hint = Some(token);
        self
    }

    /// Explicit override of the field's optionality.
    pub fn required(mut self, required: bool) -> Self {
        self.required_hint = Some(required);
        self
    }

    /// What the field's default instance says about itself.
    pub fn prototype(mut self, token: Option<&str>, required: bool) -> Self {
        self.prototype_token = token.filter(|t| !t.is_empty()).map(str::to_string);
        self.prototype_required = required;
        self
    }
}

/// How one field is matched against input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub is_list: bool,
    pub is_optional: bool,
    pub is_marker: bool,
    /// Matched by searching for this named sub-term when set, by position
    /// otherwise.
    pub token_name: Option<String>,
    /// Ordinal slot among non-marker fields.
    pub position_index: usize,
}

impl FieldDescriptor {
    pub fn is_required(&self) -> bool {
        !self.is_optional
    }

    pub fn is_named(&self) -> bool {
        self.token_name.is_some()
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Computes the descriptors for a record's declared fields, in declaration
/// order.
///
/// Optionality precedence: an explicit `required` hint wins; otherwise a
/// nullable declared type (`Option`, `Vec`) is optional; otherwise the
/// declared default instance decides.
///
/// # Examples
///
/// ```rust
/// use kicadfiles::binding::{classify, FieldDecl, FieldShape};
/// let decls = vec![
///     FieldDecl::new("oval", FieldShape::marker().optional()).token("oval"),
///     FieldDecl::new("diameter", FieldShape::SCALAR),
///     FieldDecl::new("_cache", FieldShape::SCALAR),
/// ];
/// let descriptors = classify(&decls);
/// assert_eq!(descriptors.len(), 2);
/// assert_eq!(descriptors[1].position_index, 0);
/// ```
pub fn classify(decls: &[FieldDecl]) -> Vec<FieldDescriptor> {
    let mut position = 0;
    let mut descriptors = Vec::with_capacity(decls.len());

    for decl in decls.iter().filter(|d| !d.name.starts_with('_')) {
        let shape = decl.shape;
        let hint = decl.token_hint.map(str::to_string);
        let fixed = shape.static_token.map(str::to_string);

        let token_name = if shape.is_list {
            hint.or(fixed)
        } else if shape.is_marker {
            hint.or_else(|| decl.prototype_token.clone())
        } else {
            match shape.kind {
                FieldKind::SelfParsing => hint
                    .or(fixed)
                    .or_else(|| decl.prototype_token.clone()),
                FieldKind::Scalar => hint,
            }
        };

        let is_optional = match decl.required_hint {
            Some(required) => !required,
            None => shape.is_optional || !decl.prototype_required,
        };

        descriptors.push(FieldDescriptor {
            name: decl.name,
            kind: shape.kind,
            is_list: shape.is_list,
            is_optional,
            is_marker: shape.is_marker,
            token_name,
            position_index: position,
        });

        if !shape.is_marker {
            position += 1;
        }
    }

    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_skip_markers() {
        let decls = vec![
            FieldDecl::new("number", FieldShape::SCALAR),
            FieldDecl::new("oval", FieldShape::marker().optional()).token("oval"),
            FieldDecl::new("width", FieldShape::SCALAR.optional()),
        ];
        let d = classify(&decls);
        assert_eq!(d[0].position_index, 0);
        assert!(d[1].is_marker);
        assert_eq!(d[1].token_name.as_deref(), Some("oval"));
        assert_eq!(d[2].position_index, 1);
    }

    #[test]
    fn test_token_sources() {
        let decls = vec![
            FieldDecl::new("at", FieldShape::nested(Some("at"))),
            FieldDecl::new("width", FieldShape::nested(None)).prototype(Some("width"), true),
            FieldDecl::new("layer", FieldShape::nested(Some("layer"))).token("layer_name"),
            FieldDecl::new("items", FieldShape::nested(None).list()),
            FieldDecl::new("pads", FieldShape::nested(Some("pad")).list()),
            FieldDecl::new("name", FieldShape::SCALAR).prototype(Some("ignored"), true),
        ];
        let d = classify(&decls);
        assert_eq!(d[0].token_name.as_deref(), Some("at"));
        assert_eq!(d[1].token_name.as_deref(), Some("width"));
        assert_eq!(d[2].token_name.as_deref(), Some("layer_name"));
        assert_eq!(d[3].token_name, None);
        assert_eq!(d[4].token_name.as_deref(), Some("pad"));
        assert_eq!(d[5].token_name, None);
    }

    #[test]
    fn test_optionality_precedence() {
        let decls = vec![
            FieldDecl::new("a", FieldShape::SCALAR),
            FieldDecl::new("b", FieldShape::SCALAR.optional()),
            FieldDecl::new("c", FieldShape::SCALAR.optional()).required(true),
            FieldDecl::new("d", FieldShape::SCALAR).required(false),
            FieldDecl::new("e", FieldShape::nested(None)).prototype(Some("e"), false),
            FieldDecl::new("f", FieldShape::nested(None)).prototype(Some("f"), false).required(true),
        ];
        let d = classify(&decls);
        let optional: Vec<bool> = d.iter().map(|f| f.is_optional).collect();
        assert_eq!(optional, vec![false, true, false, true, true, false]);
    }

    #[test]
    fn test_private_fields_excluded() {
        let decls = vec![
            FieldDecl::new("_hidden", FieldShape::SCALAR),
            FieldDecl::new("value", FieldShape::SCALAR),
        ];
        let d = classify(&decls);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].name, "value");
        assert_eq!(d[0].position_index, 0);
    }
}
