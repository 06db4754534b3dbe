//! Geometry error types
//!
//! Only configuration mistakes and malformed inputs are errors. A cross-section
//! that produces no visible mesh is a normal outcome and is reported through
//! the mesher's result type instead.

use thiserror::Error;

/// Error type for kernel operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Unknown or unsupported shape identifier
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A caller-provided buffer does not match the vertex count
    #[error("Length mismatch: expected {expected} vertices, buffer holds {actual}")]
    LengthMismatch {
        /// Number of vertices in the source skeleton
        expected: usize,
        /// Length of the buffer that was passed in
        actual: usize,
    },
    /// An edge references a vertex that does not exist
    #[error("Edge ({i0}, {i1}) is out of range for {vertex_count} vertices")]
    EdgeOutOfRange {
        /// First endpoint index
        i0: usize,
        /// Second endpoint index
        i1: usize,
        /// Number of vertices available
        vertex_count: usize,
    },
}

impl GeometryError {
    /// Shorthand for an unknown shape name or identifier
    pub fn unknown_shape(name: impl std::fmt::Display) -> Self {
        GeometryError::Configuration(format!("unknown or unsupported shape '{}'", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = GeometryError::unknown_shape("dodecaplex");
        let msg = format!("{}", err);
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("dodecaplex"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = GeometryError::LengthMismatch { expected: 16, actual: 8 };
        let msg = format!("{}", err);
        assert!(msg.contains("16"));
        assert!(msg.contains("8"));
    }

    #[test]
    fn test_edge_out_of_range_display() {
        let err = GeometryError::EdgeOutOfRange { i0: 3, i1: 42, vertex_count: 16 };
        let msg = format!("{}", err);
        assert!(msg.contains("(3, 42)"));
        assert!(msg.contains("16 vertices"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GeometryError::unknown_shape("x"));
    }
}
