use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("spec value `{key}` is {found}, expected {expected}")]
    SpecType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid stage: {0}")]
    InvalidStage(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
