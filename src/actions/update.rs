use db_actions_core::{
    ActionError, Handler, Operation, Result, Selection, ToOperation, Uri, Value, ValueMap,
    action_trace,
};
use std::fmt::Display;

/// Update action builder.
///
/// Accumulates both a [`ValueMap`] and a [`Selection`]. As with inserts, the
/// handler always receives a present value map; the selection is passed as
/// absent when no filter was ever appended.
#[derive(Debug, Clone, Default)]
pub struct Update {
    uri: Uri,
    values: ValueMap,
    selection: Selection,
}

impl Update {
    pub fn new(uri: impl Into<Uri>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Merges every assignment from `values` over the accumulated map.
    /// The caller's map is copied, not retained.
    pub fn values(mut self, values: &ValueMap) -> Self {
        self.values.merge(values);
        self
    }

    /// Sets a single column assignment.
    pub fn value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.set(column, value);
        self
    }

    /// Sets a single column assignment from a fallible conversion, rejecting
    /// unsupported kinds here rather than at execution time.
    pub fn try_value(
        mut self,
        column: impl Into<String>,
        value: impl TryInto<Value, Error = ActionError>,
    ) -> Result<Self> {
        self.values.try_set(column, value)?;
        Ok(self)
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

    /// Runs the update through `handler`; returns the affected-row count.
    pub fn perform<H: Handler>(&self, handler: &H) -> Result<usize> {
        action_trace!("update", self.uri);
        handler.update(
            &self.uri,
            &self.values,
            self.selection.clause(),
            self.selection.args(),
        )
    }
}

impl ToOperation for Update {
    fn to_operation(&self) -> Operation {
        Operation::Update {
            uri: self.uri.clone(),
            values: self.values.clone(),
            selection: self.selection.clone(),
        }
    }
}
