use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SystemError {
    #[error("dimension mismatch: expected {expected}, got state of length {state} and output of length {out}")]
    DimensionMismatch {
        expected: usize,
        state: usize,
        out: usize,
    },
}
