use crate::Tuple;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{op} expects a {expected} matrix, got {height}x{width}")]
    ShapeMismatch {
        op: &'static str,
        expected: &'static str,
        height: usize,
        width: usize,
    },
    #[error("matrix row {row} has {len} values, expected {width}")]
    RaggedRows { row: usize, len: usize, width: usize },
    #[error("index ({row}, {col}) out of bounds for {height}x{width} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    #[error("matrix is not invertible")]
    SingularMatrix,
    #[error("{what} must be a {expected}, got {tuple:?}")]
    InvalidTupleRole {
        what: &'static str,
        expected: &'static str,
        tuple: Tuple,
    },
    #[error("render cancelled after {completed} scanlines")]
    Cancelled { completed: usize },
    #[error("render thread panicked")]
    WorkerPanicked,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
