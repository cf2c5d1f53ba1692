use axum::http::StatusCode;

use crate::response::Envelope;

pub async fn ping() -> Envelope<&'static str> {
    tracing::info!("ping");
    Envelope::success(StatusCode::OK, "pong")
}
