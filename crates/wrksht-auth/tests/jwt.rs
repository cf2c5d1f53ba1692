use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;
use wrksht_auth::error::AuthError;
use wrksht_auth::jwks;
use wrksht_auth::jwt::TokenVerifier;

const PRIVATE_KEY: &[u8] = include_bytes!("fixtures/test_rsa.pem");
const JWKS: &str = include_str!("fixtures/jwks.json");
const KID: &str = "test-key-1";

fn issuer() -> String {
    jwks::issuer("ca-central-1", "ca-central-1_test")
}

fn verifier(client_id: Option<&str>) -> TokenVerifier {
    let keys: JwkSet = serde_json::from_str(JWKS).unwrap();
    TokenVerifier::new(issuer(), keys, client_id.map(str::to_string))
}

fn sign(kid: Option<&str>, claims: serde_json::Value) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);
    let key = EncodingKey::from_rsa_pem(PRIVATE_KEY).unwrap();
    encode(&header, &claims, &key).unwrap()
}

fn claims(token_use: &str, exp_offset: i64) -> serde_json::Value {
    let now = jiff::Timestamp::now().as_second();
    json!({
        "sub": "user-1",
        "iss": issuer(),
        "token_use": token_use,
        "iat": now,
        "exp": now + exp_offset,
        "client_id": "app-client",
    })
}

#[test]
fn issuer_and_jwks_url() {
    assert_eq!(
        issuer(),
        "https://cognito-idp.ca-central-1.amazonaws.com/ca-central-1_test"
    );
    assert_eq!(
        jwks::jwks_url(&issuer()),
        "https://cognito-idp.ca-central-1.amazonaws.com/ca-central-1_test/.well-known/jwks.json"
    );
}

#[test]
fn valid_access_token() {
    let token = sign(Some(KID), claims("access", 3600));
    let claims = verifier(Some("app-client")).verify(&token).unwrap();
    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.token_use, "access");
}

#[test]
fn expired_token() {
    let token = sign(Some(KID), claims("access", -3600));
    assert!(matches!(verifier(None).verify(&token), Err(AuthError::TokenExpired)));
}

#[test]
fn refresh_token_use_is_rejected() {
    let token = sign(Some(KID), claims("refresh", 3600));
    assert!(matches!(verifier(None).verify(&token), Err(AuthError::InvalidToken(_))));
}

#[test]
fn unknown_kid() {
    let token = sign(Some("rotated-away"), claims("id", 3600));
    assert!(matches!(
        verifier(None).verify(&token),
        Err(AuthError::KeyNotFound(ref kid)) if kid == "rotated-away"
    ));
}

#[test]
fn missing_kid() {
    let token = sign(None, claims("id", 3600));
    assert!(matches!(verifier(None).verify(&token), Err(AuthError::InvalidToken(_))));
}

#[test]
fn other_client_is_rejected() {
    let token = sign(Some(KID), claims("access", 3600));
    assert!(matches!(
        verifier(Some("someone-else")).verify(&token),
        Err(AuthError::InvalidToken(_))
    ));
}

#[test]
fn wrong_issuer_is_rejected() {
    let mut c = claims("id", 3600);
    c["iss"] = json!("https://cognito-idp.us-east-1.amazonaws.com/other");
    let token = sign(Some(KID), c);
    assert!(matches!(verifier(None).verify(&token), Err(AuthError::Jwt(_))));
}

#[test]
fn garbage_token() {
    assert!(verifier(None).verify("not.a.jwt").is_err());
}
