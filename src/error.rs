use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot prepare output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed {chart} data: {detail}")]
    MalformedData { chart: &'static str, detail: String },

    #[error("drawing error: {0}")]
    Draw(String),

    #[error("invalid jitter distribution: {0}")]
    Jitter(#[from] rand_distr::NormalError),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(value: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
#[path = "../tests/src_inline/error.rs"]
mod tests;
