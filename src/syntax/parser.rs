//! KiCad S-expression reader.
//!
//! Converts UTF-8 text into a single [`Term`] tree. This reader is purely
//! syntactic: it knows nothing about record types or field layouts.

use crate::errors::SexprError;
use crate::syntax::Term;
use pest::{error::Error, iterators::Pair, Parser};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct SexprParser;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse S-expression text into a term tree.
///
/// Exactly one top-level expression is accepted.
///
/// # Examples
///
/// ```rust
/// use kicadfiles::syntax::{parse, Term};
/// let term = parse("(at 1 2.5 \"x\")").unwrap();
/// assert_eq!(term.head(), Some("at"));
/// assert_eq!(term.as_list().unwrap()[1], Term::Int(1));
/// ```
pub fn parse(source_text: &str) -> Result<Term, SexprError> {
    parse_named(source_text, "input")
}

/// Like [`parse`], naming the source for diagnostics (usually a file path).
pub fn parse_named(source_text: &str, name: &str) -> Result<Term, SexprError> {
    if source_text.trim().is_empty() {
        return Err(SexprError::syntax("empty input", name, source_text, 0, 0));
    }

    let mut pairs = SexprParser::parse(Rule::document, source_text)
        .map_err(|e| convert_parse_error(e, name, source_text))?;

    let document = pairs
        .next()
        .ok_or_else(|| SexprError::syntax("empty input", name, source_text, 0, 0))?;

    let first = document
        .into_inner()
        .find(|p| p.as_rule() != Rule::EOI)
        .ok_or_else(|| SexprError::syntax("empty input", name, source_text, 0, 0))?;

    Ok(build_term(first))
}

// ============================================================================
// TERM BUILDERS
// ============================================================================

fn build_term(pair: Pair<Rule>) -> Term {
    match pair.as_rule() {
        Rule::list => Term::List(pair.into_inner().map(build_term).collect()),
        Rule::string => Term::Str(unescape_string(pair.as_str())),
        _ => classify_bare(pair.as_str()),
    }
}

/// Bare tokens become numbers only when they look numeric; `inf`, `nan` and
/// identifiers like `F.Cu` stay symbols.
fn classify_bare(text: &str) -> Term {
    let looks_numeric = text
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit() || c == '-' || c == '+' || c == '.');
    if looks_numeric {
        if let Ok(i) = text.parse::<i64>() {
            return Term::Int(i);
        }
        if text.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c)) {
            if let Ok(f) = text.parse::<f64>() {
                return Term::Float(f);
            }
        }
    }
    Term::Symbol(text.to_string())
}

fn unescape_string(text: &str) -> String {
    // Remove surrounding quotes
    let inner = &text[1..text.len() - 1];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(ch);
        }
    }

    result
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

fn convert_parse_error(error: Error<Rule>, name: &str, source: &str) -> SexprError {
    let (start, end) = match error.location {
        pest::error::InputLocation::Pos(pos) => (pos, pos),
        pest::error::InputLocation::Span((start, end)) => (start, end),
    };

    let rendered = error.to_string();
    let message = if start >= source.len() || rendered.contains("expected list") {
        "missing closing parenthesis"
    } else if rendered.contains("expected EOI") {
        "unexpected content after the top-level expression"
    } else {
        "malformed expression"
    };

    SexprError::syntax(message, name, source, start, end)
}
