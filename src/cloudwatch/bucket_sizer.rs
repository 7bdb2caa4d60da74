// Implements the BucketSizer trait for CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use aws_sdk_cloudwatch::types::Datapoint;
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    Bucket,
    BucketSizer,
    SizeError,
};
use super::client::Client;
use tracing::debug;

/// Return the `Average` of the most recent datapoint.
///
/// We don't know which order datapoints will be in if we get more than a
/// single datapoint, so pick the one with the latest timestamp. Datapoints
/// without an average are ignored.
fn latest_average(datapoints: &[Datapoint]) -> Option<f64> {
    datapoints.iter()
        .filter(|d| d.average().is_some())
        .max_by_key(|d| {
            d.timestamp()
                .and_then(|t| t.to_chrono_utc().ok())
        })
        .and_then(|d| d.average())
}

#[async_trait]
impl BucketSizer for Client {
    /// Get the size of a given bucket
    async fn bucket_size(&self, bucket: &Bucket) -> Result<f64, SizeError> {
        let bucket_name = &bucket.name;

        debug!("bucket_size: Calculating size for '{}'", bucket_name);

        let output = self.get_metric_statistics(bucket).await?;

        // Buckets with no objects, or created since the last daily metric,
        // have no datapoints.
        let size = latest_average(output.datapoints())
            .ok_or_else(|| SizeError::NoData(bucket_name.to_owned()))?;

        debug!(
            "bucket_size: Calculated bucket size for '{}' is '{}'",
            bucket_name,
            size,
        );

        Ok(size)
    }
}
