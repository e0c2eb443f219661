use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("a 4x4 matrix needs 16 elements, got {0}")]
    InvalidMatrixLength(usize),
}
