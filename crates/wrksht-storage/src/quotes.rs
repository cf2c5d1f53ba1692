//! Quote retrieval.
//!
//! A quote is stored as one JSON record under `quotes/<id>.json`; product
//! names for standalone windows come from the shared catalog at
//! `catalog/products.json`. [`assemble_quote`] fills in the derived fields
//! so the renderer gets a fully populated value.

use std::collections::BTreeMap;

use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wrksht_core::error::CoreError;
use wrksht_core::models::quote::Quote;
use wrksht_core::s3_keys;

use crate::error::StorageError;
use crate::objects;

/// Product id to display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog(BTreeMap<String, String>);

impl ProductCatalog {
    pub fn name(&self, product_id: &str) -> Option<&str> {
        self.0.get(product_id).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Derive the phone map and resolve window product names.
pub fn assemble_quote(mut quote: Quote, catalog: &ProductCatalog) -> Result<Quote, StorageError> {
    quote.customer.index_phones();

    for window in &mut quote.items.window {
        let name = catalog
            .name(&window.product_id)
            .ok_or_else(|| StorageError::NotFound {
                key: format!("{}#{}", s3_keys::PRODUCT_CATALOG, window.product_id),
            })?;
        window.product_name = name.to_string();
    }

    Ok(quote)
}

/// Load quote `id` and everything it references.
pub async fn fetch_quote(client: &Client, bucket: &str, id: &str) -> Result<Quote, StorageError> {
    if id.trim().is_empty() {
        return Err(CoreError::MissingField("quote_id".to_string()).into());
    }

    let quote: Quote = objects::get_json(client, bucket, &s3_keys::quote(id)).await?;
    let catalog = if quote.items.window.is_empty() {
        ProductCatalog::default()
    } else {
        objects::get_json(client, bucket, s3_keys::PRODUCT_CATALOG).await?
    };

    let quote = assemble_quote(quote, &catalog)?;
    debug!(
        quote_id = id,
        quote_number = quote.number,
        groups = quote.items.group.len(),
        windows = quote.items.window.len(),
        other = quote.items.other.len(),
        "quote assembled"
    );
    Ok(quote)
}
