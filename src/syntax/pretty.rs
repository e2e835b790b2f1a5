//! KiCad-style pretty printer.
//!
//! The layout is an output contract with KiCad itself:
//!
//! - `(head)` always stays on one line.
//! - A list of at most three atoms stays on one line: `(head a b c)`.
//! - Otherwise the head and every atom child go on the first line, each nested
//!   list goes on its own line one tab deeper, and a lone `)` closes the list
//!   at the parent indent.
//!
//! Strings are quoted except for the literal `yes`/`no`; symbols (enum tags,
//! booleans, flags) are written bare. Strings directly under a `type` head are
//! written bare as well.

use crate::syntax::term::{format_float, quote, Term};

/// Head token whose string children are printed without quotes.
const UNQUOTED_HEAD: &str = "type";

/// Render `term` at the given nesting level.
///
/// # Examples
///
/// ```rust
/// use kicadfiles::syntax::{pretty, Term};
/// let term = Term::list("size", vec![Term::Float(1.0), Term::Float(2.0)]);
/// assert_eq!(pretty::format(&term, 0), "(size 1.0 2.0)");
/// ```
pub fn format(term: &Term, indent_level: usize) -> String {
    let items = match term {
        Term::List(items) => items,
        atom => return format_atom(atom),
    };
    if items.is_empty() {
        return "()".to_string();
    }

    let current_indent = "\t".repeat(indent_level);
    let head = match &items[0] {
        Term::Symbol(s) | Term::Str(s) => s.clone(),
        other => format_atom(other),
    };

    if items.len() == 1 {
        return format!("{}({})", current_indent, head);
    }

    let mut atoms = Vec::new();
    let mut nested = Vec::new();
    for item in &items[1..] {
        match item {
            Term::List(_) => nested.push(item),
            Term::Str(s) if head == UNQUOTED_HEAD => atoms.push(s.clone()),
            atom => atoms.push(format_atom(atom)),
        }
    }

    if nested.is_empty() && items.len() <= 4 {
        return format!("{}({} {})", current_indent, head, atoms.join(" "));
    }

    let atom_part = if atoms.is_empty() {
        String::new()
    } else {
        format!(" {}", atoms.join(" "))
    };
    let mut lines = vec![format!("{}({}{}", current_indent, head, atom_part)];
    for child in nested {
        lines.push(format(child, indent_level + 1));
    }
    lines.push(format!("{})", current_indent));
    lines.join("\n")
}

/// Render one atom.
pub fn format_atom(term: &Term) -> String {
    match term {
        Term::Symbol(s) => s.clone(),
        Term::Str(s) if s == "yes" || s == "no" => s.clone(),
        Term::Str(s) => quote(s),
        Term::Int(i) => i.to_string(),
        Term::Float(f) => format_float(*f),
        Term::List(_) => format(term, 0),
    }
}
