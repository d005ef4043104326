//! Error types for the buck converter simulator.
//!
//! This module provides a unified error type [`BuckError`] that covers
//! parameter validation and the reporting layer. The stepping loop itself
//! is infallible once a [`ParameterSet`](crate::params::ParameterSet) exists.

use thiserror::Error;

/// Result type alias using [`BuckError`].
pub type Result<T> = std::result::Result<T, BuckError>;

/// Unified error type for all buck simulator operations.
#[derive(Error, Debug)]
pub enum BuckError {
    // ============ Parameter Errors ============
    /// A design parameter is outside its physical domain
    #[error("Invalid parameter '{param}' = {value}: {message}")]
    InvalidParameter {
        param: &'static str,
        value: f64,
        message: String,
    },

    // ============ Output Errors ============
    /// Error writing a report
    #[error("Failed to write output '{path}': {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error serializing a sample sequence
    #[cfg(feature = "serde")]
    #[error("Failed to serialize samples: {message}")]
    SerializeError { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl BuckError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: &'static str, value: f64, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            value,
            message: message.into(),
        }
    }

    /// Create an output error for the given destination
    pub fn output(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputError {
            path: path.into(),
            source,
        }
    }

    /// Name of the offending parameter, if this is a validation failure.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { param, .. } => Some(*param),
            _ => None,
        }
    }
}
