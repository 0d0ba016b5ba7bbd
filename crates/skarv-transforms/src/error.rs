//! Error types for the transforms crate.

use thiserror::Error;

/// Errors produced by fermion-to-qubit encodings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// The caller forced a qubit count below what the operator references.
    #[error("invalid number of qubits specified: {specified} (operator requires {required})")]
    InvalidQubitCount {
        /// The caller-specified qubit count.
        specified: u32,
        /// Minimum count implied by the operator's highest mode index.
        required: u32,
    },

    /// A Fenwick tree query addressed an index outside the register.
    #[error("index {index} is out of range for a {n_qubits}-qubit Fenwick tree")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of qubits the tree was built for.
        n_qubits: u32,
    },
}

/// Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;
