//! Error types for gridview.

use thiserror::Error;

/// The main error type for gridview operations.
#[derive(Error, Debug)]
pub enum GridError {
    /// The grid resource could not be retrieved (network, HTTP status or file access).
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The fetched document does not follow the grid schema.
    #[error("malformed grid data: {0}")]
    MalformedData(String),

    /// A cell reached the mesh builder with the wrong number of corners.
    #[error("cell {index} has {found} points, expected 8")]
    InvalidCell { index: usize, found: usize },

    /// The lookup table configuration is unusable.
    #[error("invalid lookup table: {0}")]
    InvalidLookupTable(String),

    /// No color map is registered under the given name.
    #[error("color map '{0}' not found")]
    UnknownColorMap(String),

    /// Another load is already running on the same loader.
    #[error("a load is already in progress")]
    LoadInProgress,

    /// A structure with the given name already exists in the scene.
    #[error("structure '{0}' already exists")]
    StructureExists(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for gridview operations.
pub type Result<T> = std::result::Result<T, GridError>;
