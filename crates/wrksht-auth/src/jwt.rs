use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use tracing::debug;

use crate::error::AuthError;
use crate::jwks;

/// Claims extracted from a Cognito JWT.
#[derive(Debug, Deserialize)]
pub struct CognitoClaims {
    pub sub: String,
    pub iss: String,
    pub token_use: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// App client of an access token.
    #[serde(default)]
    pub client_id: Option<String>,
    /// App client of an ID token.
    #[serde(default)]
    pub aud: Option<String>,
}

impl CognitoClaims {
    fn app_client(&self) -> Option<&str> {
        self.client_id.as_deref().or(self.aud.as_deref())
    }
}

/// Validate an RS256 Cognito token against one key and issuer.
pub fn validate_token(
    token: &str,
    decoding_key: &DecodingKey,
    issuer: &str,
) -> Result<CognitoClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[issuer]);
    validation.validate_exp = true;
    // ID tokens carry `aud`, access tokens `client_id`; checked by the caller.
    validation.validate_aud = false;

    let token_data = decode::<CognitoClaims>(token, decoding_key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::Jwt(e),
        }
    })?;

    let token_use = &token_data.claims.token_use;
    if token_use != "access" && token_use != "id" {
        return Err(AuthError::InvalidToken(format!(
            "unexpected token_use: {token_use}"
        )));
    }

    Ok(token_data.claims)
}

/// Validates bearer tokens for one user pool with its cached key set.
pub struct TokenVerifier {
    issuer: String,
    keys: JwkSet,
    client_id: Option<String>,
}

impl TokenVerifier {
    pub fn new(issuer: impl Into<String>, keys: JwkSet, client_id: Option<String>) -> Self {
        Self {
            issuer: issuer.into(),
            keys,
            client_id,
        }
    }

    /// Fetch the pool's key set once and build a verifier around it.
    pub fn for_user_pool(
        region: &str,
        user_pool_id: &str,
        client_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let issuer = jwks::issuer(region, user_pool_id);
        let keys = jwks::fetch_jwks(&jwks::jwks_url(&issuer), timeout)?;
        Ok(Self::new(issuer, keys, client_id))
    }

    pub fn verify(&self, token: &str) -> Result<CognitoClaims, AuthError> {
        let header = decode_header(token)?;
        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidToken("token header has no kid".to_string()))?;
        let jwk = self
            .keys
            .find(&kid)
            .ok_or_else(|| AuthError::KeyNotFound(kid.clone()))?;
        let key = DecodingKey::from_jwk(jwk)?;

        let claims = validate_token(token, &key, &self.issuer)?;
        if let Some(expected) = &self.client_id
            && claims.app_client() != Some(expected.as_str())
        {
            return Err(AuthError::InvalidToken("token issued for another client".to_string()));
        }

        debug!(sub = %claims.sub, token_use = %claims.token_use, "token verified");
        Ok(claims)
    }
}
