use serde::{Deserialize, Serialize};

use super::customer::Customer;
use super::items::Items;

/// A sales quote with everything the worksheet prints, fully assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub number: u64,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    pub customer: Customer,
    #[serde(default, rename = "jobsheetID")]
    pub jobsheet_id: String,
    /// Job sheet feature text.
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub items: Items,
}
