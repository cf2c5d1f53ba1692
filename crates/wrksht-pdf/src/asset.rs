//! Remote image retrieval for the worksheet logo.

use std::time::Duration;

use tracing::{debug, warn};
use ureq::Agent;

use crate::error::RenderError;

/// Bytes of a fetched image plus the MIME type the server declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAsset {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Fetch an image, bounded by `timeout` end to end.
///
/// Fails on transport errors, non-success statuses, a missing or non-image
/// `Content-Type`, and empty bodies.
pub fn fetch_remote_asset_strict(uri: &str, timeout: Duration) -> Result<RemoteAsset, RenderError> {
    let config = Agent::config_builder().timeout_global(Some(timeout)).build();
    let agent = Agent::new_with_config(config);

    let mut response = agent
        .get(uri)
        .call()
        .map_err(|e| RenderError::Asset(format!("GET {uri}: {e}")))?;

    let mime = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
        .unwrap_or_default();
    if !mime.starts_with("image/") {
        return Err(RenderError::Asset(format!(
            "GET {uri}: expected an image, got content type {mime:?}"
        )));
    }

    let bytes = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| RenderError::Asset(format!("GET {uri}: reading body: {e}")))?;
    if bytes.is_empty() {
        return Err(RenderError::Asset(format!("GET {uri}: empty body")));
    }

    debug!(uri, mime = %mime, len = bytes.len(), "fetched remote asset");
    Ok(RemoteAsset { bytes, mime })
}

/// Like [`fetch_remote_asset_strict`], but a failure is logged and
/// reported as `None` so rendering can continue without the image.
pub fn fetch_remote_asset(uri: &str, timeout: Duration) -> Option<RemoteAsset> {
    if uri.is_empty() {
        debug!("no asset uri configured");
        return None;
    }
    match fetch_remote_asset_strict(uri, timeout) {
        Ok(asset) => Some(asset),
        Err(e) => {
            warn!(uri, error = %e, "remote asset unavailable, continuing without it");
            None
        }
    }
}
