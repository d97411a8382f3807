use db_actions_core::{Handler, Result, Selection, Uri, Value, action_trace};
use smallvec::SmallVec;
use std::fmt::Display;

/// Read action builder.
///
/// Owns a projection (append-only, duplicates preserved), a [`Selection`],
/// and an optional sort order (last write wins). Queries have no deferred
/// form; only the mutating verbs convert to batch operations.
#[derive(Debug, Clone, Default)]
pub struct Query {
    uri: Uri,
    projection: SmallVec<[String; 4]>,
    selection: Selection,
    order_by: Option<String>,
}

impl Query {
    pub fn new(uri: impl Into<Uri>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Appends columns to the projection. Repeated calls accumulate.
    pub fn projection<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.projection.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Sets the sort order, replacing any previous one.
    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.order_by = Some(clause.into());
        self
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

    /// Runs the query through `handler`, passing each unset part as absent.
    pub fn perform<H: Handler>(&self, handler: &H) -> Result<H::Rows> {
        action_trace!("query", self.uri);
        handler.query(
            &self.uri,
            self.projection_or_absent(),
            self.selection.clause(),
            self.selection.args(),
            self.order_by.as_deref(),
        )
    }

    fn projection_or_absent(&self) -> Option<&[String]> {
        (!self.projection.is_empty()).then_some(self.projection.as_slice())
    }
}
