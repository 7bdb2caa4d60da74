// Implement the CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::SdkConfig;
use aws_sdk_cloudwatch::client::Client as CloudWatchClient;
use aws_sdk_cloudwatch::operation::get_metric_statistics::GetMetricStatisticsOutput;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{
    Dimension,
    StandardUnit,
    Statistic,
};
use crate::common::{
    Bucket,
    SizeError,
};
use std::time::{
    Duration,
    SystemTime,
};
use tracing::debug;

const ONE_HOUR: Duration = Duration::from_secs(3_600);
const ONE_DAY: Duration = Duration::from_secs(86_400);

/// How far back we look for a `BucketSizeBytes` datapoint. S3 only publishes
/// this metric once a day.
const LOOKBACK: Duration = Duration::from_secs(ONE_DAY.as_secs() * 2);

const S3_BUCKET_SIZE_BYTES: &str = "BucketSizeBytes";
const S3_NAMESPACE: &str = "AWS/S3";
const STANDARD_STORAGE: &str = "StandardStorage";

/// A `CloudWatch` `Client`
pub struct Client {
    /// The AWS SDK `CloudWatchClient`.
    pub client: CloudWatchClient,
}

impl Client {
    /// Return a new `Client` built from the shared `SdkConfig`.
    pub fn new(config: &SdkConfig) -> Self {
        debug!(
            "new: Creating CloudWatchClient in region '{:?}'",
            config.region(),
        );

        Self {
            client: CloudWatchClient::new(config),
        }
    }

    /// Returns the `GetMetricStatisticsOutput` for the `StandardStorage`
    /// `BucketSizeBytes` metric of the given `Bucket` over the lookback
    /// window, at one hour resolution.
    pub async fn get_metric_statistics(
        &self,
        bucket: &Bucket,
    ) -> Result<GetMetricStatisticsOutput, SizeError> {
        debug!("get_metric_statistics: Processing {:?}", bucket);

        let now = SystemTime::now();
        let start_time = DateTime::from(now - LOOKBACK);

        // 3600 always fits in an i32.
        let period = ONE_HOUR.as_secs() as i32;

        let dimensions = vec![
            Dimension::builder()
                .name("BucketName")
                .value(bucket.name.clone())
                .build(),
            Dimension::builder()
                .name("StorageType")
                .value(STANDARD_STORAGE)
                .build(),
        ];

        let input = self.client.get_metric_statistics()
            .end_time(DateTime::from(now))
            .metric_name(S3_BUCKET_SIZE_BYTES)
            .namespace(S3_NAMESPACE)
            .period(period)
            .set_dimensions(Some(dimensions))
            .start_time(start_time)
            .statistics(Statistic::Average)
            .unit(StandardUnit::Bytes);

        debug!("{:?}", input);

        let output = input
            .send()
            .await
            .map_err(SizeError::from_sdk_error)?;

        debug!(
            "get_metric_statistics: '{}' returned {} datapoints",
            bucket.name,
            output.datapoints().len(),
        );

        Ok(output)
    }
}
