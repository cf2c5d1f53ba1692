use axum::body::Bytes;
use axum::Extension;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use wrksht_pdf::worksheet::Worksheet;
use wrksht_storage::quotes::fetch_quote;
use wrksht_storage::sink::S3Sink;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WorksheetRequest {
    #[serde(rename = "quoteID")]
    pub quote_id: String,
}

/// Render the worksheet for one quote and store it in the document bucket.
///
/// Responds `201` with the stored object's URL. `user` is absent when no
/// user pool is configured.
pub async fn create_worksheet(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    body: Bytes,
) -> Result<Envelope<String>, ApiError> {
    let request: WorksheetRequest = serde_json::from_slice(&body)?;
    let requested_by = user.map(|Extension(u)| u.sub);
    tracing::info!(
        quote_id = %request.quote_id,
        requested_by = requested_by.as_deref().unwrap_or("anonymous"),
        "worksheet requested"
    );
    let config = &state.config;

    let quote = fetch_quote(&state.s3, &config.s3_bucket, &request.quote_id).await?;

    // Rendering and the logo download are blocking.
    let settings = state.settings.clone();
    let rendered = tokio::task::spawn_blocking(move || {
        Worksheet::new(&quote, &settings).render_with_fetch()
    })
    .await
    .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))??;

    let name = rendered.name().to_string();
    let sink = S3Sink::new(state.s3.clone(), &config.s3_bucket, &config.aws_region);
    let location = rendered.save(&sink).await?;

    tracing::info!(
        quote_id = %request.quote_id,
        requested_by = requested_by.as_deref().unwrap_or("anonymous"),
        key = %name,
        %location,
        "worksheet created"
    );
    Ok(Envelope::success(StatusCode::CREATED, location))
}
