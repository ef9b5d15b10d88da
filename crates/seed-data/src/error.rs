//! Error types for the seed-data crate.
//!
//! Semantic error enums for configuration parsing and facility generation,
//! following the project's error handling conventions with `thiserror`.

use thiserror::Error;

/// Errors that can occur when parsing or validating a seed configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The configuration JSON is malformed or missing required fields.
    #[error("invalid seed configuration JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The configuration version is not supported.
    #[error("unsupported seed configuration version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the configuration.
        actual: u32,
    },

    /// The configuration requests zero facilities.
    #[error("facility count must be at least 1")]
    EmptyFacilityCount,

    /// A centre coordinate is out of range or not finite.
    #[error("centre {field} is out of range: {value}")]
    InvalidCentre {
        /// Name of the offending coordinate.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The positional spread is negative or not finite.
    #[error("spread must be a finite non-negative number of degrees: {value}")]
    InvalidSpread {
        /// The rejected value.
        value: f64,
    },
}

/// Errors that can occur during facility generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a non-empty facility name after maximum retries.
    #[error("failed to generate a valid facility name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
