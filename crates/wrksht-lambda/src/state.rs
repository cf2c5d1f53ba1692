use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use wrksht_auth::jwt::TokenVerifier;
use wrksht_core::config::Config;
use wrksht_pdf::worksheet::RenderSettings;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub config: Arc<Config>,
    pub settings: Arc<RenderSettings>,
    /// `None` when no user pool is configured.
    pub verifier: Option<Arc<TokenVerifier>>,
}
