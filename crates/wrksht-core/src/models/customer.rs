use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub associate: String,
    pub street1: String,
    pub city: String,
    #[serde(alias = "provinceCode")]
    pub province: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// Phone kind label: "mobile", "home", ...
    #[serde(rename = "type", alias = "_id")]
    pub kind: String,
    pub number: String,
    #[serde(default)]
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: PersonName,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phones: Vec<Phone>,
    /// Phone kind -> number, derived from `phones` by [`Customer::index_phones`].
    #[serde(default)]
    pub phone_map: BTreeMap<String, String>,
}

impl Customer {
    /// Rebuild `phone_map` from `phones`. A later entry of the same kind
    /// replaces an earlier one.
    pub fn index_phones(&mut self) {
        self.phone_map = self
            .phones
            .iter()
            .map(|p| (p.kind.clone(), p.number.clone()))
            .collect();
    }

    pub fn phone(&self, kind: &str) -> Option<&str> {
        self.phone_map.get(kind).map(String::as_str)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}
