use db_actions_core::{Handler, Operation, Result, Selection, ToOperation, Uri, Value, action_trace};
use std::fmt::Display;

/// Delete action builder.
///
/// Owns only a [`Selection`]; a delete with no filter targets the whole
/// collection, and the handler sees that as an absent selection.
#[derive(Debug, Clone, Default)]
pub struct Delete {
    uri: Uri,
    selection: Selection,
}

impl Delete {
    pub fn new(uri: impl Into<Uri>) -> Self {
        Self {
            uri: uri.into(),
            selection: Selection::new(),
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Appends a filter fragment with positional arguments; fragments join
    /// with `" AND "`.
    pub fn filter<A>(mut self, fragment: &str, args: impl IntoIterator<Item = A>) -> Self
    where
        A: Into<Value>,
    {
        self.selection.append(fragment, args);
        self
    }

    /// Appends a `<column> IN (<members>)` fragment with the members inlined
    /// as literals. See [`Selection::append_in`] for the escaping caveat.
    pub fn filter_in<I>(mut self, column: &str, members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.selection.append_in(column, members);
        self
    }

    /// Runs the delete through `handler`; returns the affected-row count.
    pub fn perform<H: Handler>(&self, handler: &H) -> Result<usize> {
        action_trace!("delete", self.uri);
        handler.delete(&self.uri, self.selection.clause(), self.selection.args())
    }
}

impl ToOperation for Delete {
    fn to_operation(&self) -> Operation {
        Operation::Delete {
            uri: self.uri.clone(),
            selection: self.selection.clone(),
        }
    }
}
