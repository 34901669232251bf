//! Error types for the Voltlab DC solver.
//!
//! This module provides a unified error type [`SolverError`] that covers
//! descriptor validation, circuit assembly, and the linear solve.

use thiserror::Error;

/// Result type alias using [`SolverError`].
pub type Result<T> = std::result::Result<T, SolverError>;

/// Unified error type for all solver operations.
#[derive(Error, Debug)]
pub enum SolverError {
    // ============ Component Errors ============
    /// A component descriptor that cannot become a circuit element
    #[error("malformed component: {message}")]
    MalformedComponent { message: String },

    /// A component whose type string is not in the recognized set
    #[error("unknown component type '{kind}'")]
    UnknownComponentType { kind: String },

    // ============ Solve Errors ============
    /// The nodal system has no unique solution (near-zero pivot)
    #[error("singular system - a node may be isolated or the circuit under-constrained")]
    SingularSystem,

    // ============ Configuration Errors ============
    /// Unrecognized solver mode name
    #[error("unknown solver mode '{mode}' (expected 'injection' or 'mna')")]
    UnknownSolverMode { mode: String },

    // ============ I/O Errors ============
    /// Error reading a circuit file
    #[error("failed to read circuit file '{path}': {source}")]
    CircuitFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a serialized descriptor sequence
    #[error("failed to parse circuit description: {source}")]
    CircuitJson {
        #[from]
        source: serde_json::Error,
    },
}

impl SolverError {
    /// Create a malformed-component error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedComponent {
            message: message.into(),
        }
    }

    /// Create an unknown-component-type error.
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownComponentType { kind: kind.into() }
    }
}
