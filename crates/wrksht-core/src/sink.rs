use std::future::Future;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("store failed: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable destination for a finished document.
///
/// `store` persists `bytes` under `name` and returns a location string the
/// caller can hand back to its client (a URL, a path, ...).
pub trait OutputSink {
    fn store(
        &self,
        name: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<String, SinkError>> + Send;
}
