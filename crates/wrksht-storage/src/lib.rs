//! wrksht-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus the quote fetch
//! and the S3-backed output sink built on it.

pub mod client;
pub mod error;
pub mod objects;
pub mod quotes;
pub mod sink;
