//! S3 key/path conventions.
//!
//! Pure string functions. These define where quote records are read from
//! and where finished worksheets land in the bucket.

pub const WORKSHEET_PREFIX: &str = "worksheet/";

pub const PRODUCT_CATALOG: &str = "catalog/products.json";

pub fn worksheet(number: u64) -> String {
    format!("{WORKSHEET_PREFIX}sht-{number}.pdf")
}

pub fn quote(id: &str) -> String {
    format!("quotes/{id}.json")
}
