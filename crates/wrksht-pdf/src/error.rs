use thiserror::Error;

use wrksht_core::error::CoreError;
use wrksht_core::sink::SinkError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid quote data: {0}")]
    Input(#[from] CoreError),

    #[error("asset unavailable: {0}")]
    Asset(String),

    #[error("image decode failed: {0}")]
    Image(String),

    #[error("no page open for {0}")]
    NoPage(&'static str),

    #[error("PDF encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("output sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
