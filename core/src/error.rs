use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("PNG encoding error: {0}")]
    PngEncode(#[from] image::ImageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
