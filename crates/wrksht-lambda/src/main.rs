use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use wrksht_auth::jwt::TokenVerifier;
use wrksht_core::config::Config;
use wrksht_pdf::worksheet::RenderSettings;
use wrksht_lambda::state::AppState;

const JWKS_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::load(None)?;
    tracing::info!(
        stage = ?config.stage,
        region = %config.aws_region,
        bucket = %config.s3_bucket,
        "configuration loaded"
    );

    let s3 = wrksht_storage::client::build_client(&config.aws_region).await?;

    let verifier = match config.cognito_user_pool_id.clone() {
        Some(pool_id) => {
            let region = config.aws_region.clone();
            let client_id = config.cognito_client_id.clone();
            let verifier = tokio::task::spawn_blocking(move || {
                TokenVerifier::for_user_pool(&region, &pool_id, client_id, JWKS_TIMEOUT)
            })
            .await??;
            Some(Arc::new(verifier))
        }
        None => {
            tracing::warn!("no user pool configured, worksheet requests are not authenticated");
            None
        }
    };

    let state = AppState {
        s3,
        settings: Arc::new(RenderSettings::from(&config)),
        config: Arc::new(config),
        verifier,
    };

    let app = wrksht_lambda::router(state);
    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
