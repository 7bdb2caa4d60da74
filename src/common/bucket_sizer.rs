// BucketLister and BucketSizer traits
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use super::{
    Bucket,
    Buckets,
    SizeError,
};

/// `BucketLister` represents the required method to discover S3 buckets.
///
/// Implemented by the S3 `Client`.
#[async_trait]
pub trait BucketLister {
    /// Returns every bucket visible to the account.
    async fn buckets(&self) -> Result<Buckets, SizeError>;
}

/// `BucketSizer` represents the required method to find the size of a single
/// bucket.
///
/// Implemented by the CloudWatch `Client`.
#[async_trait]
pub trait BucketSizer {
    /// Returns the most recent average size of `bucket` in bytes.
    ///
    /// Returns `SizeError::NoData` if no recent metric exists.
    async fn bucket_size(&self, bucket: &Bucket) -> Result<f64, SizeError>;
}
