use std::time::Duration;

use jsonwebtoken::jwk::JwkSet;
use tracing::info;
use ureq::Agent;

use crate::error::AuthError;

/// Token issuer for a Cognito user pool.
pub fn issuer(region: &str, user_pool_id: &str) -> String {
    format!("https://cognito-idp.{region}.amazonaws.com/{user_pool_id}")
}

pub fn jwks_url(issuer: &str) -> String {
    format!("{issuer}/.well-known/jwks.json")
}

/// Download the pool's public signing keys.
pub fn fetch_jwks(url: &str, timeout: Duration) -> Result<JwkSet, AuthError> {
    let config = Agent::config_builder().timeout_global(Some(timeout)).build();
    let agent = Agent::new_with_config(config);

    let body = agent
        .get(url)
        .call()
        .map_err(|e| AuthError::Jwks(format!("GET {url}: {e}")))?
        .body_mut()
        .read_to_string()
        .map_err(|e| AuthError::Jwks(format!("reading {url}: {e}")))?;

    let keys: JwkSet = serde_json::from_str(&body).map_err(|e| AuthError::Jwks(e.to_string()))?;
    info!(url, keys = keys.keys.len(), "loaded signing keys");
    Ok(keys)
}
