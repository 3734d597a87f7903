use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid image dimensions {width}x{height}, both must be greater than zero")]
    InvalidDimensions { width: usize, height: usize },

    #[error("degenerate scene geometry: {0}")]
    Geometry(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Config(e.to_string())
    }
}
