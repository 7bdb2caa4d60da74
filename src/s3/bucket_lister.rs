// Implement the BucketLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    BucketLister,
    Buckets,
    SizeError,
};
use super::client::Client;

#[async_trait]
impl BucketLister for Client {
    /// Return `Buckets` discovered in S3.
    async fn buckets(&self) -> Result<Buckets, SizeError> {
        self.list_buckets().await
    }
}
