// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::SdkConfig;
use aws_sdk_s3::client::Client as S3Client;
use crate::common::{
    Bucket,
    Buckets,
    SizeError,
};
use tracing::debug;

/// Number of buckets requested per `ListBuckets` page.
const LIST_BUCKETS_PAGE_SIZE: i32 = 1_000;

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` built from the shared `SdkConfig`.
    pub fn new(config: &SdkConfig) -> Self {
        debug!(
            "new: Creating S3Client in region '{:?}'",
            config.region(),
        );

        Self {
            client: S3Client::new(config),
        }
    }

    /// Returns every bucket owned by the account.
    ///
    /// Buckets are listed in all regions, CloudWatch will simply have no
    /// metrics for buckets outside of the selected region.
    pub async fn list_buckets(&self) -> Result<Buckets, SizeError> {
        debug!("list_buckets: Listing...");

        let mut buckets            = Buckets::new();
        let mut continuation_token = None;

        // Loop until all pages are processed.
        loop {
            let output = self.client.list_buckets()
                .max_buckets(LIST_BUCKETS_PAGE_SIZE)
                .set_continuation_token(continuation_token)
                .send()
                .await
                .map_err(SizeError::from_sdk_error)?;

            let page = output.buckets()
                .iter()
                .filter_map(|b| {
                    let name = b.name()?;

                    Some(Bucket {
                        region: b.bucket_region().map(str::to_owned),
                        ..Bucket::new(name)
                    })
                });

            buckets.extend(page);

            // A continuation token means there are more buckets to fetch.
            match output.continuation_token() {
                Some(token) => continuation_token = Some(token.to_owned()),
                None        => break,
            }
        }

        debug!("list_buckets: Found {} buckets", buckets.len());

        Ok(buckets)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use aws_credential_types::Credentials;
    use aws_sdk_s3::config::Config as S3Config;
    use aws_smithy_http_client::test_util::{
        ReplayEvent,
        StaticReplayClient,
    };
    use aws_smithy_types::body::SdkBody;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    /// A canned response for the mock client.
    pub enum ResponseType<'a> {
        /// Status 200 with the body read from a file in `test-data`.
        FromFile(&'a str),

        /// The given status with the body read from a file in `test-data`.
        WithStatus(u16, &'a str),
    }

    // Create a mock S3 client, returning the responses in order.
    pub fn mock_client(responses: Vec<ResponseType<'_>>) -> Client {
        let events = responses
            .iter()
            .map(|r| {
                let (status, file) = match r {
                    ResponseType::FromFile(file)           => (200, *file),
                    ResponseType::WithStatus(status, file) => (*status, *file),
                };

                let path = Path::new("test-data").join(file);
                let data = fs::read_to_string(path).unwrap();

                ReplayEvent::new(
                    http::Request::builder()
                        .body(SdkBody::empty())
                        .unwrap(),

                    http::Response::builder()
                        .status(status)
                        .body(SdkBody::from(data))
                        .unwrap(),
                )
            })
            .collect();

        let http_client = StaticReplayClient::new(events);

        let creds = Credentials::for_tests_with_session_token();

        let conf = S3Config::builder()
            .behavior_version_latest()
            .credentials_provider(creds)
            .http_client(http_client)
            .region(aws_sdk_s3::config::Region::new("ap-southeast-2"))
            .build();

        Client {
            client: S3Client::from_conf(conf),
        }
    }

    #[tokio::test]
    async fn test_list_buckets() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets.xml"),
        ]);

        let ret = client.list_buckets().await.unwrap();

        let expected = vec![
            Bucket {
                name:   "a-bucket-name".into(),
                region: Some("ap-southeast-2".into()),
            },
            Bucket {
                name:   "another-bucket-name".into(),
                region: Some("us-east-1".into()),
            },
        ];

        assert_eq!(ret, expected);
    }

    #[tokio::test]
    async fn test_list_buckets_paginated() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets-page-1.xml"),
            ResponseType::FromFile("s3-list-buckets-page-2.xml"),
        ]);

        let ret = client.list_buckets().await.unwrap();

        let names: Vec<&str> = ret.iter()
            .map(|b| b.name.as_str())
            .collect();

        let expected = vec![
            "first-page-bucket",
            "second-page-bucket",
            "third-page-bucket",
        ];

        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_list_buckets_empty() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets-empty.xml"),
        ]);

        let ret = client.list_buckets().await.unwrap();

        assert!(ret.is_empty());
    }

    #[tokio::test]
    async fn test_list_buckets_invalid_access_key() {
        let client = mock_client(vec![
            ResponseType::WithStatus(403, "s3-error-invalid-access-key-id.xml"),
        ]);

        let ret = client.list_buckets().await;

        assert!(matches!(ret, Err(SizeError::Auth(_))), "{ret:?}");
    }
}
