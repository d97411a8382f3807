//! Ordered collection of operation descriptors for atomic application

use db_actions_core::{Applied, BatchHandler, Operation, Result, ToOperation};

/// A sequence of [`Operation`]s to be applied atomically.
///
/// The batch itself is inert: it snapshots actions as they are pushed and
/// hands the whole sequence to a [`BatchHandler`], which owns atomicity.
/// Results come back in submission order.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    operations: Vec<Operation>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots `action` and appends the descriptor.
    pub fn push(&mut self, action: &impl ToOperation) -> &mut Self {
        self.operations.push(action.to_operation());
        self
    }

    /// Appends an already-built descriptor.
    pub fn push_operation(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Applies every operation through `handler`, atomically.
    pub fn apply<H: BatchHandler>(&self, handler: &H) -> Result<Vec<Applied>> {
        handler.apply_batch(&self.operations)
    }
}

impl Extend<Operation> for Batch {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        self.operations.extend(iter);
    }
}

impl FromIterator<Operation> for Batch {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Batch {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}
