use serde::{Deserialize, Serialize};

/// One measured edge: whole inches plus an optional fraction label ("3/8").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dim {
    pub inch: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction: Option<String>,
    #[serde(default)]
    pub decimal: f64,
}

impl Dim {
    pub fn new(inch: i64, fraction: &str) -> Self {
        Self {
            inch,
            fraction: (!fraction.is_empty()).then(|| fraction.to_string()),
            decimal: 0.0,
        }
    }

    pub fn fraction(&self) -> &str {
        self.fraction.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dims {
    pub width: Dim,
    pub height: Dim,
}

impl Dims {
    pub fn new(width: Dim, height: Dim) -> Self {
        Self { width, height }
    }
}
