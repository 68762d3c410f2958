//! Error types for trigrid_rs.

use thiserror::Error;

use crate::buffer::Arena;

/// Errors that can occur while preparing an interpolation call.
///
/// Every variant is detected before any work is dispatched; a call either
/// produces a complete output buffer or fails with no output at all.
#[derive(Error, Debug)]
pub enum TrigridError {
    /// A buffer's flat length does not match its declared shape.
    #[error("buffer length {len} does not match declared shape {shape:?}")]
    ShapeMismatch {
        /// Flat element count that was supplied.
        len: usize,
        /// The shape the buffer was declared with.
        shape: Vec<usize>,
    },

    /// Cube counts differ across the arguments of one call.
    #[error("cube count mismatch: {argument} has {got} cubes, expected {expected}")]
    CubeCountMismatch {
        /// Name of the mismatching argument.
        argument: &'static str,
        /// Cube count of the reference argument.
        expected: usize,
        /// Cube count actually supplied.
        got: usize,
    },

    /// Channel counts differ across the arguments of one call.
    #[error("channel count mismatch: {argument} has {got} channels, expected {expected}")]
    ChannelCountMismatch {
        /// Name of the mismatching argument.
        argument: &'static str,
        /// Channel count of the reference argument.
        expected: usize,
        /// Channel count actually supplied.
        got: usize,
    },

    /// Arguments are tagged with different execution arenas.
    #[error("arena mismatch: {argument} is tagged {got:?}, expected {expected:?}")]
    ArenaMismatch {
        /// Name of the mismatching argument.
        argument: &'static str,
        /// Arena of the reference argument.
        expected: Arena,
        /// Arena actually supplied.
        got: Arena,
    },

    /// The output buffer could not be allocated.
    #[error("failed to allocate output buffer of {elements} elements")]
    AllocationFailure {
        /// Number of elements that were requested.
        elements: usize,
    },
}

/// Result type for trigrid_rs operations.
pub type Result<T> = std::result::Result<T, TrigridError>;
