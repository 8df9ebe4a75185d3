//! .

use std::path::PathBuf;

use crate::cli::RequestError;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or unknown command; carries the usage text.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    #[error("PNG rendering is unavailable: {0}")]
    RasterUnavailable(String),
    #[error("Failed to rasterize image: {0}")]
    Raster(String),
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Free-form failure for `Preview` implementations outside this crate.
    /// The message is printed as is.
    #[error("{0}")]
    Other(String),
}
