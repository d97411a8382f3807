//! Read-side loader: a row source paired with a result transform.
//!
//! The loader itself is synchronous; whatever schedules it off the primary
//! thread (and whenever it re-runs) is the caller's concern, not this
//! crate's.

use db_actions_core::Result;

/// Supplies raw rows on demand.
///
/// Blanket-implemented for closures, so a bound query is simply
/// `|| query.perform(&handler)`.
pub trait RowSource {
    type Rows;

    fn load(&self) -> Result<Self::Rows>;
}

impl<R, F> RowSource for F
where
    F: Fn() -> Result<R>,
{
    type Rows = R;

    fn load(&self) -> Result<R> {
        self()
    }
}

/// Pairs a [`RowSource`] with a transform from raw rows to a result type.
#[derive(Debug, Clone)]
pub struct Loader<S, F> {
    source: S,
    transform: F,
}

impl<S, F, T> Loader<S, F>
where
    S: RowSource,
    F: Fn(S::Rows) -> T,
{
    pub fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }

    /// Loads from the source and applies the transform. Source errors
    /// propagate untransformed.
    pub fn load(&self) -> Result<T> {
        self.source.load().map(|rows| (self.transform)(rows))
    }
}

impl<S: RowSource> Loader<S, fn(S::Rows) -> S::Rows> {
    /// A loader whose transform passes rows through unchanged.
    pub fn identity(source: S) -> Self {
        Self {
            source,
            transform: std::convert::identity,
        }
    }
}
