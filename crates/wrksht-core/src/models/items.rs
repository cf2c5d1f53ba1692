use serde::{Deserialize, Serialize};

use super::dims::Dims;
use super::spec::SpecMap;

/// A cluster of windows installed together in one opening.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub dims: Dims,
    #[serde(default)]
    pub items: Vec<GroupWindow>,
    #[serde(default)]
    pub specs: SpecMap,
    pub qty: u32,
    #[serde(default)]
    pub rooms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupWindow {
    pub dims: Dims,
    #[serde(default)]
    pub product: SpecMap,
    pub qty: u32,
    #[serde(default)]
    pub specs: SpecMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub dims: Dims,
    pub qty: u32,
    #[serde(rename = "productID")]
    pub product_id: String,
    /// Resolved against the product catalog when the quote is fetched.
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub specs: SpecMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSpecs {
    #[serde(default)]
    pub options: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Other {
    pub description: String,
    pub qty: u32,
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub specs: OtherSpecs,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Items {
    #[serde(default)]
    pub group: Vec<Group>,
    #[serde(default)]
    pub window: Vec<Window>,
    #[serde(default)]
    pub other: Vec<Other>,
}
