use aws_sdk_s3::Client;
use tracing::info;
use wrksht_core::sink::{OutputSink, SinkError};

use crate::objects::{self, PutOptions};

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Stores documents in a bucket and reports their object URL.
#[derive(Debug, Clone)]
pub struct S3Sink {
    client: Client,
    bucket: String,
    region: String,
}

impl S3Sink {
    pub fn new(client: Client, bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            region: region.into(),
        }
    }
}

impl OutputSink for S3Sink {
    async fn store(&self, name: &str, bytes: Vec<u8>) -> Result<String, SinkError> {
        let len = bytes.len();
        objects::put_object(
            &self.client,
            &self.bucket,
            name,
            bytes,
            PutOptions {
                content_type: Some(PDF_CONTENT_TYPE),
                content_disposition: Some("attachment"),
            },
        )
        .await
        .map_err(|e| SinkError::Store(e.to_string()))?;

        let location = objects::object_url(&self.bucket, &self.region, name);
        info!(bucket = %self.bucket, key = name, len, "document uploaded");
        Ok(location)
    }
}
