//! CLI error types and conversions

use crate::downloader::DownloadError;
use crate::output::OutputError;
use crate::region::RegionError;
use crate::registry::RegistryError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Region configuration error
    #[error("region error: {0}")]
    Region(#[from] RegionError),

    /// Registry error
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Download error
    #[error("download error: {0}")]
    Download(#[from] DownloadError),

    /// Output error
    #[error("output error: {0}")]
    Output(#[from] OutputError),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
