#![allow(dead_code)]

use db_actions::{Applied, BatchHandler, Handler, Operation, Result, Row, Uri, ValueMap};
use std::cell::RefCell;

/// Handler double that records every call for later inspection.
///
/// `query` answers with the preloaded `rows`, `insert` hands out ascending
/// row identifiers, and `update`/`delete` report zero affected rows. The
/// batch implementation applies operations in order without atomicity,
/// which is enough to observe dispatch and ordering.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    calls: RefCell<Vec<Call>>,
    next_row_id: RefCell<i64>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query {
        uri: Uri,
        projection: Option<Vec<String>>,
        selection: Option<String>,
        args: Option<Vec<String>>,
        order_by: Option<String>,
    },
    Insert {
        uri: Uri,
        values: ValueMap,
    },
    Update {
        uri: Uri,
        values: ValueMap,
        selection: Option<String>,
        args: Option<Vec<String>>,
    },
    Delete {
        uri: Uri,
        selection: Option<String>,
        args: Option<Vec<String>>,
    },
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls
            .borrow()
            .last()
            .expect("no handler call recorded")
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

fn owned_str(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn owned_args(value: Option<&[String]>) -> Option<Vec<String>> {
    value.map(<[String]>::to_vec)
}

impl Handler for RecordingHandler {
    type Rows = Vec<Row>;

    fn query(
        &self,
        uri: &Uri,
        projection: Option<&[String]>,
        selection: Option<&str>,
        args: Option<&[String]>,
        order_by: Option<&str>,
    ) -> Result<Vec<Row>> {
        self.calls.borrow_mut().push(Call::Query {
            uri: uri.clone(),
            projection: owned_args(projection),
            selection: owned_str(selection),
            args: owned_args(args),
            order_by: owned_str(order_by),
        });
        Ok(self.rows.clone())
    }

    fn insert(&self, uri: &Uri, values: &ValueMap) -> Result<i64> {
        self.calls.borrow_mut().push(Call::Insert {
            uri: uri.clone(),
            values: values.clone(),
        });
        let mut next = self.next_row_id.borrow_mut();
        *next += 1;
        Ok(*next)
    }

    fn update(
        &self,
        uri: &Uri,
        values: &ValueMap,
        selection: Option<&str>,
        args: Option<&[String]>,
    ) -> Result<usize> {
        self.calls.borrow_mut().push(Call::Update {
            uri: uri.clone(),
            values: values.clone(),
            selection: owned_str(selection),
            args: owned_args(args),
        });
        Ok(0)
    }

    fn delete(&self, uri: &Uri, selection: Option<&str>, args: Option<&[String]>) -> Result<usize> {
        self.calls.borrow_mut().push(Call::Delete {
            uri: uri.clone(),
            selection: owned_str(selection),
            args: owned_args(args),
        });
        Ok(0)
    }
}

impl BatchHandler for RecordingHandler {
    fn apply_batch(&self, operations: &[Operation]) -> Result<Vec<Applied>> {
        operations.iter().map(|op| op.apply(self)).collect()
    }
}
