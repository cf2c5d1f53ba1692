//! Runtime configuration.
//!
//! Values are layered: a JSON defaults file first, then environment
//! variables on top, then stage validation. The environment layer takes a
//! lookup closure so it can be exercised without touching process env.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const DEFAULTS_FILE: &str = "defaults.json";

const DEFAULT_LOGO_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Dev,
    Stage,
    Test,
    Prod,
}

impl FromStr for Stage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Stage::Dev),
            "stage" => Ok(Stage::Stage),
            "test" => Ok(Stage::Test),
            "prod" | "production" => Ok(Stage::Prod),
            other => Err(CoreError::InvalidStage(other.to_string())),
        }
    }
}

/// Shape of the defaults file. Every field is optional so the file can be
/// partial and environment variables can fill the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Defaults {
    stage: String,
    aws_region: String,
    s3_bucket: String,
    doc_author: String,
    logo_uri: String,
    logo_timeout_secs: Option<u64>,
    cognito_user_pool_id: Option<String>,
    cognito_client_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub stage: Stage,
    pub aws_region: String,
    pub s3_bucket: String,
    pub doc_author: String,
    pub logo_uri: String,
    pub logo_timeout: Duration,
    pub cognito_user_pool_id: Option<String>,
    pub cognito_client_id: Option<String>,
}

impl Config {
    /// Load configuration from the defaults file and the process environment.
    ///
    /// An explicit `path` must exist. Without one, `defaults.json` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let contents = match path {
            Some(p) => Some(read_defaults(p)?),
            None => {
                let fallback = PathBuf::from(DEFAULTS_FILE);
                if fallback.exists() {
                    Some(read_defaults(&fallback)?)
                } else {
                    tracing::debug!("no defaults file, using environment only");
                    None
                }
            }
        };

        Self::resolve(contents.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build a config from optional defaults JSON and an environment lookup.
    pub fn resolve<F>(defaults_json: Option<&str>, env: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defs: Defaults = match defaults_json {
            Some(json) => serde_json::from_str(json)?,
            None => Defaults::default(),
        };

        let set = |target: &mut String, key: &str| {
            if let Some(v) = env(key).filter(|v| !v.is_empty()) {
                *target = v;
            }
        };
        set(&mut defs.stage, "WRKSHT_STAGE");
        set(&mut defs.aws_region, "AWS_REGION");
        set(&mut defs.aws_region, "WRKSHT_AWS_REGION");
        set(&mut defs.s3_bucket, "WRKSHT_S3_BUCKET");
        set(&mut defs.doc_author, "WRKSHT_DOC_AUTHOR");
        set(&mut defs.logo_uri, "WRKSHT_LOGO_URI");

        if let Some(raw) = env("WRKSHT_LOGO_TIMEOUT_SECS").filter(|v| !v.is_empty()) {
            let secs = raw.parse::<u64>().map_err(|e| {
                CoreError::Config(format!("WRKSHT_LOGO_TIMEOUT_SECS `{raw}`: {e}"))
            })?;
            defs.logo_timeout_secs = Some(secs);
        }
        if let Some(v) = env("COGNITO_USER_POOL_ID").filter(|v| !v.is_empty()) {
            defs.cognito_user_pool_id = Some(v);
        }
        if let Some(v) = env("COGNITO_CLIENT_ID").filter(|v| !v.is_empty()) {
            defs.cognito_client_id = Some(v);
        }

        let stage: Stage = defs.stage.parse()?;

        Ok(Self {
            stage,
            aws_region: defs.aws_region,
            s3_bucket: defs.s3_bucket,
            doc_author: defs.doc_author,
            logo_uri: defs.logo_uri,
            logo_timeout: Duration::from_secs(
                defs.logo_timeout_secs.unwrap_or(DEFAULT_LOGO_TIMEOUT_SECS),
            ),
            cognito_user_pool_id: defs.cognito_user_pool_id.filter(|v| !v.is_empty()),
            cognito_client_id: defs.cognito_client_id.filter(|v| !v.is_empty()),
        })
    }
}

fn read_defaults(path: &Path) -> Result<String, CoreError> {
    std::fs::read_to_string(path).map_err(|e| {
        CoreError::Config(format!("failed to read defaults at {}: {e}", path.display()))
    })
}
