use thiserror::Error;

/// Errors reported by the containers.
///
/// A value that is merely absent (`index_of`, `remove` by value) is never an
/// error; those operations report absence through `Option`/`bool`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index argument outside `[0, len)` was passed to a positional
    /// list operation.
    #[error("invalid argument: index {index} out of range for size {len}")]
    InvalidArgument { index: usize, len: usize },

    /// Array element access outside `[0, len)`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Boundary read or removal on an empty list.
    #[error("operation on empty collection")]
    EmptyCollection,
}
