//! Error types for the exemplar generator.
//!
//! Every variant here is fatal for a generation run. Recoverable conditions
//! (unparsable example bodies, empty query keys, unknown verbs) are absorbed
//! where they occur and never surface as a `GeneratorError`.

use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to read the input collection
    #[error("Failed to read collection '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the input collection
    #[error("Failed to parse collection: {0}")]
    ParseError(String),

    /// The walk over the collection produced nothing to emit
    #[error("No operations found in collection")]
    NoOperations,

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
