//! Deferred operation descriptors for batched execution

use crate::error::Result;
use crate::selection::Selection;
use crate::traits::Handler;
use crate::uri::Uri;
use crate::values::ValueMap;

/// An inert, replayable snapshot of a mutating action.
///
/// Produced by [`ToOperation::to_operation`](crate::traits::ToOperation);
/// carries deep copies of the builder's state, so mutating the originating
/// builder afterwards cannot alter a descriptor that already exists.
/// Descriptors are what batch executors consume to apply several writes
/// atomically. Reads have no descriptor form: they do not participate in the
/// batch atomicity contract.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Insert {
        uri: Uri,
        values: ValueMap,
    },
    Update {
        uri: Uri,
        values: ValueMap,
        selection: Selection,
    },
    Delete {
        uri: Uri,
        selection: Selection,
    },
}

impl Operation {
    pub fn uri(&self) -> &Uri {
        match self {
            Operation::Insert { uri, .. }
            | Operation::Update { uri, .. }
            | Operation::Delete { uri, .. } => uri,
        }
    }

    /// Replays this descriptor against a live handler.
    pub fn apply<H: Handler>(&self, handler: &H) -> Result<Applied> {
        match self {
            Operation::Insert { uri, values } => {
                handler.insert(uri, values).map(Applied::Inserted)
            }
            Operation::Update {
                uri,
                values,
                selection,
            } => handler
                .update(uri, values, selection.clause(), selection.args())
                .map(Applied::Updated),
            Operation::Delete { uri, selection } => handler
                .delete(uri, selection.clause(), selection.args())
                .map(Applied::Deleted),
        }
    }
}

/// What a single applied [`Operation`] reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Applied {
    /// Row identifier reported by an insert.
    Inserted(i64),
    /// Rows affected by an update.
    Updated(usize),
    /// Rows affected by a delete.
    Deleted(usize),
}
