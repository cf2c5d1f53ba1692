//! wrksht-core
//!
//! Pure domain types for the worksheet service: the quote record, its
//! attribute bags, storage key conventions, runtime configuration and the
//! output sink capability. No AWS SDK or PDF dependency.

pub mod config;
pub mod error;
pub mod models;
pub mod s3_keys;
pub mod sink;
