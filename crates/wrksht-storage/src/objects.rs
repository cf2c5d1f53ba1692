use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::StorageError;

/// Result of a GET operation.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// Optional headers stored with a PUT.
#[derive(Debug, Clone, Copy, Default)]
pub struct PutOptions<'a> {
    pub content_type: Option<&'a str>,
    pub content_disposition: Option<&'a str>,
}

/// Get an object from S3.
pub async fn get_object(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<GetObjectOutput, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let content_type = resp.content_type().map(|s| s.to_string());
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    debug!(bucket, key, len = body.len(), "fetched object");
    Ok(GetObjectOutput { body, content_type })
}

/// Get an object and parse it as JSON.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let output = get_object(client, bucket, key).await?;
    Ok(serde_json::from_slice(&output.body)?)
}

/// Put an object to S3. Returns the new ETag.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    options: PutOptions<'_>,
) -> Result<String, StorageError> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body));

    if let Some(ct) = options.content_type {
        req = req.content_type(ct);
    }
    if let Some(cd) = options.content_disposition {
        req = req.content_disposition(cd);
    }

    let resp = req
        .send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// Public virtual-hosted-style URL of an object.
pub fn object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}
