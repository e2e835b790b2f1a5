//! Declaration macros for record, union and enum schema types.
//!
//! These replace runtime reflection: each macro expands a declaration into the
//! type plus its field table and capability trait impls.

/// Declares a record type bound to a head token.
///
/// ```text
/// sexpr_record! {
///     /// Docs.
///     pub struct Footprint: "footprint" | "module" {
///         pub name: String,
///         pub layer: Layer,
///         pub locked: Option<OptionalFlag> [token = "locked"],
///         pub width: KiFloat = KiFloat::new("width", 0.0),
///         pub count: i64 [token = "count", required = false] = 1,
///     }
/// }
/// ```
///
/// Field hints are builder calls on [`FieldDecl`](crate::binding::FieldDecl);
/// `= expr` sets the declared default, which also serves as the prototype for
/// wrapper types that carry their own token.
///
/// # Examples
///
/// ```rust
/// use kicadfiles::sexpr_record;
/// use kicadfiles::binding::{KiFloat, SExpr, Strictness};
///
/// sexpr_record! {
///     pub struct Stroke: "stroke" {
///         pub width: KiFloat = KiFloat::new("width", 0.1),
///     }
/// }
///
/// let stroke = Stroke::from_sexpr("(stroke (width 0.25))", Strictness::Strict).unwrap();
/// assert_eq!(stroke.width.value, 0.25);
/// ```
#[macro_export]
macro_rules! sexpr_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $token:literal $(| $legacy:literal)* {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty
                $([ $($hint:ident = $hval:expr),* $(,)? ])?
                $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                $name {
                    $( $field: $crate::__field_default!($ty $(, $default)?), )*
                }
            }
        }

        impl $crate::binding::SExpr for $name {
            fn type_label() -> &'static str {
                stringify!($name)
            }

            fn accepts(head: &str) -> bool {
                head == $token $(|| head == $legacy)*
            }

            fn aliases() -> &'static [&'static str] {
                &[$($legacy),*]
            }

            fn decode_term(
                cursor: &mut $crate::binding::ParseCursor<'_>,
            ) -> ::core::result::Result<Self, $crate::errors::SexprError> {
                $crate::binding::engine::decode_record::<Self>(cursor)
            }

            fn encode(&self) -> $crate::syntax::Term {
                $crate::binding::engine::encode_record(self)
            }
        }

        impl $crate::binding::Record for $name {
            const TOKEN: &'static str = $token;

            fn field_decls() -> ::std::vec::Vec<$crate::binding::FieldDecl> {
                ::std::vec![
                    $({
                        let prototype: $ty = $crate::__field_default!($ty $(, $default)?);
                        let decl = $crate::binding::FieldDecl::new(
                            stringify!($field),
                            <$ty as $crate::binding::Field>::SHAPE,
                        )
                        .prototype(
                            $crate::binding::Field::prototype_token(&prototype),
                            $crate::binding::Field::prototype_required(&prototype),
                        )
                        $($( .$hint($hval) )*)?;
                        decl
                    }),*
                ]
            }

            fn descriptors() -> &'static [$crate::binding::FieldDescriptor] {
                static DESCRIPTORS: $crate::__private::OnceCell<
                    ::std::vec::Vec<$crate::binding::FieldDescriptor>,
                > = $crate::__private::OnceCell::new();
                DESCRIPTORS.get_or_init(|| {
                    $crate::binding::classify(&<Self as $crate::binding::Record>::field_decls())
                })
            }

            #[allow(unused_variables, unused_mut)]
            fn bind_fields(
                cursor: &mut $crate::binding::ParseCursor<'_>,
            ) -> ::core::result::Result<Self, $crate::errors::SexprError> {
                let mut value = <Self as ::core::default::Default>::default();
                let descriptors = <Self as $crate::binding::Record>::descriptors();
                // Markers first, so positional slots can skip their atoms.
                for markers in [true, false] {
                    for desc in descriptors.iter().filter(|d| d.is_marker == markers) {
                        $(
                            if desc.name == stringify!($field) {
                                $crate::binding::engine::bind_into(&mut value.$field, desc, cursor)?;
                                continue;
                            }
                        )*
                    }
                }
                Ok(value)
            }

            #[allow(unused_variables)]
            fn emit_fields(&self, out: &mut ::std::vec::Vec<$crate::syntax::Term>) {
                for desc in <Self as $crate::binding::Record>::descriptors() {
                    $(
                        if desc.name == stringify!($field) {
                            $crate::binding::Field::emit(&self.$field, desc, out);
                            continue;
                        }
                    )*
                }
            }
        }

        $crate::__impl_nested_field!($name, ::core::option::Option::Some($token));
    };
}

/// Declares a tagged union of record types, decoded by trying each variant
/// whose token matches, in declaration order.
///
/// Union-typed `Vec` fields have no fixed token, so they claim any unclaimed
/// nested list one of the variants accepts, keeping input order across
/// variants.
#[macro_export]
macro_rules! sexpr_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident ( $ty:ty )
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        $(
            impl ::core::convert::From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::$variant(value)
                }
            }
        )+

        impl $crate::binding::SExpr for $name {
            fn type_label() -> &'static str {
                stringify!($name)
            }

            fn accepts(head: &str) -> bool {
                false $(|| <$ty as $crate::binding::SExpr>::accepts(head))+
            }

            fn decode_term(
                cursor: &mut $crate::binding::ParseCursor<'_>,
            ) -> ::core::result::Result<Self, $crate::errors::SexprError> {
                let head = cursor.term().head().unwrap_or("").to_string();
                let mut first_error: ::core::option::Option<$crate::errors::SexprError> = None;
                $(
                    if <$ty as $crate::binding::SExpr>::accepts(&head) {
                        let mut attempt = cursor.fork();
                        match <$ty as $crate::binding::SExpr>::decode_term(&mut attempt) {
                            Ok(value) => return Ok($name::$variant(value)),
                            Err(err) => {
                                if first_error.is_none() {
                                    first_error = Some(err);
                                }
                            }
                        }
                    }
                )+
                Err(first_error.unwrap_or_else(|| $crate::errors::SexprError::TokenMismatch {
                    path: cursor.path_str(),
                    expected: [$(<$ty as $crate::binding::Record>::TOKEN),+].join(" | "),
                    found: if head.is_empty() { cursor.term().to_string() } else { head },
                }))
            }

            fn encode(&self) -> $crate::syntax::Term {
                match self {
                    $( $name::$variant(value) => <$ty as $crate::binding::SExpr>::encode(value), )+
                }
            }
        }

        $crate::__impl_nested_field!($name, ::core::option::Option::None);
    };
}

/// Declares an enum stored as a bare symbol.
///
/// Decoding accepts the exact tag first, then a case-insensitive match. The
/// first variant is the default.
///
/// # Examples
///
/// ```rust
/// use kicadfiles::symbol_enum;
///
/// symbol_enum! {
///     pub enum PadShape {
///         Circle => "circle",
///         Rect => "rect",
///     }
/// }
///
/// assert_eq!(PadShape::from_tag("RECT"), Some(PadShape::Rect));
/// assert_eq!(PadShape::default().as_str(), "circle");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident => $first_tag:literal
            $(,
                $(#[$vmeta:meta])*
                $variant:ident => $tag:literal
            )* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(#[$first_meta])*
            $first,
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$name::$first $(, $name::$variant)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$first => $first_tag,
                    $( $name::$variant => $tag, )*
                }
            }

            pub fn from_tag(tag: &str) -> ::core::option::Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == tag)
                    .or_else(|| {
                        Self::ALL
                            .iter()
                            .copied()
                            .find(|v| v.as_str().eq_ignore_ascii_case(tag))
                    })
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                $name::$first
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::binding::Scalar for $name {
            const KIND: &'static str = stringify!($name);

            fn from_atom(atom: &$crate::syntax::Term) -> ::core::option::Option<Self> {
                atom.atom_text().and_then(|text| Self::from_tag(&text))
            }

            fn to_term(&self) -> $crate::syntax::Term {
                $crate::syntax::Term::symbol(self.as_str())
            }
        }

        $crate::__impl_scalar_field!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_default {
    ($ty:ty, $default:expr) => {
        $default
    };
    ($ty:ty) => {
        <$ty as ::core::default::Default>::default()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_scalar_field {
    ($ty:ty) => {
        impl $crate::binding::Field for $ty {
            const SHAPE: $crate::binding::FieldShape = $crate::binding::FieldShape::SCALAR;

            fn bind(
                desc: &$crate::binding::FieldDescriptor,
                cursor: &mut $crate::binding::ParseCursor<'_>,
            ) -> ::core::result::Result<::core::option::Option<Self>, $crate::errors::SexprError> {
                $crate::binding::engine::bind_scalar::<Self>(desc, cursor)
            }

            fn emit(
                &self,
                desc: &$crate::binding::FieldDescriptor,
                out: &mut ::std::vec::Vec<$crate::syntax::Term>,
            ) {
                $crate::binding::engine::emit_scalar(self, desc, out)
            }
        }

        impl $crate::binding::ListElement for $ty {
            const ELEMENT: $crate::binding::FieldShape = $crate::binding::FieldShape::SCALAR;

            fn bind_many(
                desc: &$crate::binding::FieldDescriptor,
                cursor: &mut $crate::binding::ParseCursor<'_>,
            ) -> ::core::result::Result<::std::vec::Vec<Self>, $crate::errors::SexprError> {
                $crate::binding::engine::bind_scalar_list::<Self>(desc, cursor)
            }

            fn emit_all(
                items: &[Self],
                desc: &$crate::binding::FieldDescriptor,
                out: &mut ::std::vec::Vec<$crate::syntax::Term>,
            ) {
                $crate::binding::engine::emit_scalar_list(items, desc, out)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_nested_field {
    ($ty:ty, $token:expr) => {
        impl $crate::binding::Field for $ty {
            const SHAPE: $crate::binding::FieldShape = $crate::binding::FieldShape::nested($token);

            fn bind(
                desc: &$crate::binding::FieldDescriptor,
                cursor: &mut $crate::binding::ParseCursor<'_>,
            ) -> ::core::result::Result<::core::option::Option<Self>, $crate::errors::SexprError> {
                $crate::binding::engine::bind_nested::<Self>(desc, cursor)
            }

            fn emit(
                &self,
                _desc: &$crate::binding::FieldDescriptor,
                out: &mut ::std::vec::Vec<$crate::syntax::Term>,
            ) {
                out.push($crate::binding::SExpr::encode(self));
            }
        }

        impl $crate::binding::ListElement for $ty {
            const ELEMENT: $crate::binding::FieldShape = $crate::binding::FieldShape::nested($token);

            fn bind_many(
                desc: &$crate::binding::FieldDescriptor,
                cursor: &mut $crate::binding::ParseCursor<'_>,
            ) -> ::core::result::Result<::std::vec::Vec<Self>, $crate::errors::SexprError> {
                $crate::binding::engine::bind_nested_list::<Self>(desc, cursor)
            }

            fn emit_all(
                items: &[Self],
                _desc: &$crate::binding::FieldDescriptor,
                out: &mut ::std::vec::Vec<$crate::syntax::Term>,
            ) {
                out.extend(items.iter().map($crate::binding::SExpr::encode));
            }
        }
    };
}
