//! Parse cursor and consumption tracking.
//!
//! A [`ParseCursor`] wraps one term being destructured. Every element a field
//! claims is recorded in the cursor's [`ConsumptionTracker`], so no later field
//! can claim the same element again and strict decoding can report whatever
//! was left over.

use std::collections::BTreeSet;

use crate::binding::scalar::Scalar;
use crate::binding::strictness::Strictness;
use crate::errors::SexprError;
use crate::syntax::Term;

// ============================================================================
// CONSUMPTION TRACKER
// ============================================================================

/// Indices of the current list that have been bound to a field.
///
/// Marker atoms are tracked separately as well because they never occupy a
/// positional slot.
#[derive(Debug, Clone, Default)]
pub struct ConsumptionTracker {
    used: BTreeSet<usize>,
    markers: BTreeSet<usize>,
}

impl ConsumptionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_used(&mut self, index: usize) {
        self.used.insert(index);
    }

    pub fn mark_marker(&mut self, index: usize) {
        self.used.insert(index);
        self.markers.insert(index);
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used.contains(&index)
    }

    pub fn is_marker(&self, index: usize) -> bool {
        self.markers.contains(&index)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}

// ============================================================================
// PARSE CURSOR
// ============================================================================

/// Decode state for one term: the term itself, its tracker, the diagnostic
/// path from the root record and the strictness of the whole decode call.
#[derive(Debug, Clone)]
pub struct ParseCursor<'a> {
    term: &'a Term,
    items: &'a [Term],
    tracker: ConsumptionTracker,
    path: Vec<String>,
    strictness: Strictness,
}

impl<'a> ParseCursor<'a> {
    /// Cursor for a top-level decode. `label` becomes the first path segment.
    pub fn root(term: &'a Term, label: &str, strictness: Strictness) -> Self {
        Self::with_path(term, vec![label.to_string()], strictness)
    }

    fn with_path(term: &'a Term, path: Vec<String>, strictness: Strictness) -> Self {
        let items = match term {
            Term::List(items) => items.as_slice(),
            atom => std::slice::from_ref(atom),
        };
        ParseCursor {
            term,
            items,
            tracker: ConsumptionTracker::new(),
            path,
            strictness,
        }
    }

    /// Child cursor for a nested term: fresh tracker, extended path, same
    /// strictness.
    pub fn enter(&self, child: &'a Term, name: impl Into<String>) -> ParseCursor<'a> {
        let mut path = self.path.clone();
        path.push(name.into());
        Self::with_path(child, path, self.strictness)
    }

    /// A copy of this cursor with an empty tracker, used to attempt a decode
    /// that may be abandoned.
    pub fn fork(&self) -> ParseCursor<'a> {
        Self::with_path(self.term, self.path.clone(), self.strictness)
    }

    pub fn term(&self) -> &'a Term {
        self.term
    }

    /// The elements of the wrapped list, head included. For an atom this is a
    /// one-element slice holding the atom.
    pub fn items(&self) -> &'a [Term] {
        self.items
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn path_str(&self) -> String {
        self.path.join(" > ")
    }

    pub fn tracker(&self) -> &ConsumptionTracker {
        &self.tracker
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.tracker.is_used(index)
    }

    pub fn mark_used(&mut self, index: usize) {
        self.tracker.mark_used(index);
    }

    /// Finds the first unclaimed element after the head that is either a list
    /// headed by `name` or a bare atom equal to `name`, and claims it.
    pub fn find_token(&mut self, name: &str) -> Option<&'a Term> {
        let items = self.items;
        for (index, item) in items.iter().enumerate().skip(1) {
            if self.tracker.is_used(index) {
                continue;
            }
            let matches = match item {
                Term::List(_) => item.head() == Some(name),
                Term::Symbol(s) | Term::Str(s) => s == name,
                _ => false,
            };
            if matches {
                self.tracker.mark_used(index);
                return Some(item);
            }
        }
        None
    }

    /// Claims the first unclaimed bare symbol equal to `name` as a marker.
    pub fn find_marker(&mut self, name: &str) -> bool {
        let hit = self
            .items
            .iter()
            .enumerate()
            .skip(1)
            .find(|(index, item)| {
                !self.tracker.is_used(*index) && matches!(item, Term::Symbol(s) if s == name)
            })
            .map(|(index, _)| index);
        match hit {
            Some(index) => {
                self.tracker.mark_marker(index);
                true
            }
            None => false,
        }
    }

    /// Maps a field's positional ordinal to a list index, skipping atoms that
    /// were claimed as marker flags.
    pub fn slot_index(&self, position: usize) -> usize {
        let mut remaining = position;
        let mut index = 1;
        loop {
            if index >= self.items.len() || !self.tracker.is_marker(index) {
                if remaining == 0 {
                    return index;
                }
                remaining -= 1;
            }
            index += 1;
        }
    }

    /// Reads and converts the atom at `index`.
    ///
    /// Returns `Ok(None)` when the value is absent or unusable and the
    /// strictness allows substituting a default.
    pub fn parse_scalar<T: Scalar>(
        &mut self,
        index: usize,
        field: &str,
        required: bool,
    ) -> Result<Option<T>, SexprError> {
        let item = match self.items.get(index) {
            Some(item) if !self.tracker.is_used(index) => item,
            _ => {
                if required {
                    self.log_issue(SexprError::MissingField {
                        path: self.path_str(),
                        field: field.to_string(),
                        kind: T::KIND,
                        index,
                    })?;
                }
                return Ok(None);
            }
        };

        if item.is_list() {
            if required {
                self.log_issue(self.conversion_error::<T>(field, item))?;
            }
            return Ok(None);
        }

        match T::from_atom(item) {
            Some(value) => {
                self.tracker.mark_used(index);
                Ok(Some(value))
            }
            None => {
                self.log_issue(self.conversion_error::<T>(field, item))?;
                Ok(None)
            }
        }
    }

    fn conversion_error<T: Scalar>(&self, field: &str, item: &Term) -> SexprError {
        SexprError::Conversion {
            path: self.path_str(),
            field: field.to_string(),
            kind: T::KIND,
            value: item.to_string(),
        }
    }

    /// The single funnel for recoverable anomalies.
    pub fn log_issue(&self, issue: SexprError) -> Result<(), SexprError> {
        match self.strictness {
            Strictness::Strict => Err(issue),
            Strictness::Failsafe => {
                tracing::warn!(path = %self.path_str(), "{}", issue);
                Ok(())
            }
            Strictness::Silent => Ok(()),
        }
    }

    /// Strict decoding rejects elements no field claimed.
    pub fn finish(&self) -> Result<(), SexprError> {
        if self.strictness != Strictness::Strict {
            return Ok(());
        }
        let unused: Vec<String> = self
            .items
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(index, _)| !self.tracker.is_used(*index))
            .map(|(_, item)| item.to_string())
            .collect();
        if unused.is_empty() {
            Ok(())
        } else {
            Err(SexprError::UnusedInput {
                path: self.path_str(),
                items: unused.join(", "),
            })
        }
    }
}
