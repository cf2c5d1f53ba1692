use std::path::PathBuf;

use tracing::debug;
use wrksht_core::sink::{OutputSink, SinkError};

/// Stores documents as files below a base directory. Names may contain
/// `/`; missing parent directories are created.
#[derive(Debug, Clone)]
pub struct LocalSink {
    base: PathBuf,
}

impl LocalSink {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl OutputSink for LocalSink {
    async fn store(&self, name: &str, bytes: Vec<u8>) -> Result<String, SinkError> {
        let name = name.trim_start_matches('/');
        if name.is_empty() || name.split('/').any(|part| part == "..") {
            return Err(SinkError::Store(format!("invalid document name {name:?}")));
        }

        let path = self.base.join(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        debug!(path = %path.display(), "document stored locally");
        Ok(path.display().to_string())
    }
}
