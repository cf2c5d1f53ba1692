use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;

use crate::error::StorageError;

/// Build an S3 client for `region` from the default credential chain.
pub async fn build_client(region: &str) -> Result<Client, StorageError> {
    if region.is_empty() {
        return Err(StorageError::Config("AWS region is not set".to_string()));
    }
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;
    Ok(Client::new(&config))
}
