use db_actions_core::{
    ActionError, Handler, Operation, Result, ToOperation, Uri, Value, ValueMap, action_trace,
};

/// Insert action builder.
///
/// Accumulates a [`ValueMap`]; later calls override earlier ones on shared
/// columns. The handler always receives a present (possibly empty) value
/// map, never an absent one.
#[derive(Debug, Clone, Default)]
pub struct Insert {
    uri: Uri,
    values: ValueMap,
}

impl Insert {
    pub fn new(uri: impl Into<Uri>) -> Self {
        Self {
            uri: uri.into(),
            values: ValueMap::new(),
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

    /// Runs the insert through `handler`; returns the new row identifier.
    pub fn perform<H: Handler>(&self, handler: &H) -> Result<i64> {
        action_trace!("insert", self.uri);
        handler.insert(&self.uri, &self.values)
    }
}

impl ToOperation for Insert {
    fn to_operation(&self) -> Operation {
        Operation::Insert {
            uri: self.uri.clone(),
            values: self.values.clone(),
        }
    }
}
