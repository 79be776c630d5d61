use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("PNG encoding error: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Image must not be empty (got {width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, MapError>;
