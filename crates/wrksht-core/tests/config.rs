use std::collections::HashMap;
use std::time::Duration;

use wrksht_core::config::{Config, Stage};
use wrksht_core::error::CoreError;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

const DEFAULTS: &str = r#"{
    "stage": "dev",
    "aws_region": "ca-central-1",
    "s3_bucket": "wrksht-dev",
    "doc_author": "Universal Windows",
    "logo_uri": "https://example.com/logo.png"
}"#;

#[test]
fn defaults_file_only() {
    let cfg = Config::resolve(Some(DEFAULTS), env_from(&[])).unwrap();
    assert_eq!(cfg.stage, Stage::Dev);
    assert_eq!(cfg.aws_region, "ca-central-1");
    assert_eq!(cfg.s3_bucket, "wrksht-dev");
    assert_eq!(cfg.logo_timeout, Duration::from_secs(5));
    assert_eq!(cfg.cognito_user_pool_id, None);
}

#[test]
fn environment_overrides_file() {
    let env = env_from(&[
        ("WRKSHT_STAGE", "production"),
        ("WRKSHT_S3_BUCKET", "wrksht-prod"),
        ("WRKSHT_LOGO_TIMEOUT_SECS", "2"),
        ("COGNITO_USER_POOL_ID", "ca-central-1_abc"),
    ]);
    let cfg = Config::resolve(Some(DEFAULTS), env).unwrap();
    assert_eq!(cfg.stage, Stage::Prod);
    assert_eq!(cfg.s3_bucket, "wrksht-prod");
    assert_eq!(cfg.doc_author, "Universal Windows");
    assert_eq!(cfg.logo_timeout, Duration::from_secs(2));
    assert_eq!(cfg.cognito_user_pool_id.as_deref(), Some("ca-central-1_abc"));
}

#[test]
fn explicit_region_beats_aws_region() {
    let env = env_from(&[
        ("WRKSHT_STAGE", "test"),
        ("AWS_REGION", "us-east-1"),
        ("WRKSHT_AWS_REGION", "ca-central-1"),
    ]);
    let cfg = Config::resolve(None, env).unwrap();
    assert_eq!(cfg.aws_region, "ca-central-1");
}

#[test]
fn invalid_stage_is_rejected() {
    let err = Config::resolve(None, env_from(&[("WRKSHT_STAGE", "qa")])).unwrap_err();
    assert!(matches!(err, CoreError::InvalidStage(s) if s == "qa"));
}

#[test]
fn missing_stage_is_rejected() {
    assert!(Config::resolve(None, env_from(&[])).is_err());
}

#[test]
fn bad_timeout_is_a_config_error() {
    let env = env_from(&[("WRKSHT_LOGO_TIMEOUT_SECS", "soon")]);
    let err = Config::resolve(Some(DEFAULTS), env).unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn load_reads_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defaults.json");
    std::fs::write(&path, DEFAULTS).unwrap();

    let cfg = Config::load(Some(&path)).unwrap();
    assert_eq!(cfg.logo_uri, "https://example.com/logo.png");
}

#[test]
fn load_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.json"))).unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}
