//! Tile tree layout and the coverage index document

pub mod index;
pub mod path;

pub use index::CoverageIndex;
pub use path::{tile_dir, tile_path, total_tile_bytes};

/// Output errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
