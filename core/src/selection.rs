//! Accumulating filter clause and positional arguments

use crate::value::Value;
use smallvec::SmallVec;
use std::fmt::Display;

/// A boolean filter expression plus its positional arguments.
///
/// Fragments accumulate with `" AND "` between them, in call order. The core
/// treats fragments as opaque text: no syntax validation and no
/// parenthesization, so a caller combining `OR` fragments parenthesizes them
/// itself. Arguments are stored in their canonical string form, one per
/// placeholder, in left-to-right order across all appended fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    clause: String,
    args: SmallVec<[String; 4]>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter fragment and its positional arguments.
    ///
    /// An empty selection takes the fragment as-is; otherwise the fragment is
    /// joined to the existing clause with `" AND "`.
    pub fn append<A>(&mut self, fragment: &str, args: impl IntoIterator<Item = A>) -> &mut Self
    where
        A: Into<Value>,
    {
        if !self.clause.is_empty() {
            self.clause.push_str(" AND ");
        }
        self.clause.push_str(fragment);
        self.args
            .extend(args.into_iter().map(|arg| arg.into().to_string()));
        self
    }

    /// Appends a `<column> IN (<members>)` fragment.
    ///
    /// Members are inlined as comma-joined literals; no positional arguments
    /// are appended for them. This matches what callers relying on unquoted
    /// numeric IN-lists expect, but it also means text members are **not**
    /// escaped. Do not pass untrusted input here.
    pub fn append_in<I>(&mut self, column: &str, members: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut fragment = String::with_capacity(column.len() + 8);
        fragment.push_str(column);
        fragment.push_str(" IN (");
        for (idx, member) in members.into_iter().enumerate() {
            if idx > 0 {
                fragment.push(',');
            }
            fragment.push_str(&member.to_string());
        }
        fragment.push(')');
        self.append(&fragment, std::iter::empty::<Value>())
    }

    /// The accumulated clause, or `None` when no fragment was ever appended.
    ///
    /// Absence is distinct from an empty string: handlers receive "no filter"
    /// rather than "match nothing".
    pub fn clause(&self) -> Option<&str> {
        (!self.clause.is_empty()).then_some(self.clause.as_str())
    }

    /// The accumulated arguments, or `None` when there are none.
    pub fn args(&self) -> Option<&[String]> {
        (!self.args.is_empty()).then_some(self.args.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_reports_absence() {
        let selection = Selection::new();
        assert_eq!(selection.clause(), None);
        assert_eq!(selection.args(), None);
        assert!(selection.is_empty());
    }

    #[test]
    fn fragments_join_with_and_in_call_order() {
        let mut selection = Selection::new();
        selection
            .append("COL1 = ?", ["arg"])
            .append("COL2 = ?", ["arg2"]);
        assert_eq!(selection.clause(), Some("COL1 = ? AND COL2 = ?"));
        assert_eq!(
            selection.args(),
            Some(&["arg".to_string(), "arg2".to_string()][..])
        );
    }

    #[test]
    fn arguments_concatenate_across_calls_in_canonical_form() {
        let mut selection = Selection::new();
        selection.append("a > ?", [18]).append("b = ?", [true]);
        assert_eq!(
            selection.args(),
            Some(&["18".to_string(), "1".to_string()][..])
        );
    }

    #[test]
    fn no_auto_parenthesization() {
        let mut selection = Selection::new();
        selection
            .append("a = 1 OR b = 2", std::iter::empty::<Value>())
            .append("c = 3", std::iter::empty::<Value>());
        assert_eq!(selection.clause(), Some("a = 1 OR b = 2 AND c = 3"));
    }

    #[test]
    fn in_list_members_are_inlined_without_arguments() {
        let mut selection = Selection::new();
        selection.append_in("col1", [1i64, 2, 3]);
        assert_eq!(selection.clause(), Some("col1 IN (1,2,3)"));
        assert_eq!(selection.args(), None);
    }

    #[test]
    fn in_list_joins_with_prior_fragments() {
        let mut selection = Selection::new();
        selection.append("flag = ?", [1]).append_in("id", [7, 9]);
        assert_eq!(selection.clause(), Some("flag = ? AND id IN (7,9)"));
        assert_eq!(selection.args(), Some(&["1".to_string()][..]));
    }
}
