// SizeError and classification of AWS SDK errors
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_credential_types::provider::error::CredentialsError;
use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use std::error::Error as StdError;
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

/// Service error codes that mean our credentials were rejected.
const AUTH_ERROR_CODES: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "AuthFailure",
    "ExpiredToken",
    "ExpiredTokenException",
    "InvalidAccessKeyId",
    "InvalidClientTokenId",
    "InvalidToken",
    "MissingAuthenticationToken",
    "SignatureDoesNotMatch",
    "UnrecognizedClientException",
];

/// Errors that can occur while sizing buckets.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The profile or credentials are invalid. Always fatal.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A network or service failure.
    #[error("AWS API request failed: {0}")]
    Api(String),

    /// CloudWatch had no recent datapoint for the bucket.
    #[error("No recent CloudWatch datapoints for '{0}'")]
    NoData(String),
}

impl SizeError {
    /// Classify an SDK error as either `Auth` or `Api`.
    ///
    /// The message kept in the error is short enough to show to the user, the
    /// full error context is only logged.
    pub fn from_sdk_error<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + StdError + 'static,
        R: Debug + 'static,
    {
        debug!("from_sdk_error: {}", DisplayErrorContext(&err));

        if let Some(creds) = credentials_error(&err) {
            return Self::Auth(summary(creds));
        }

        let message = match (err.code(), err.message()) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (Some(code), None)          => code.to_owned(),
            _                           => summary(&err),
        };

        let rejected = err.code()
            .map(|code| AUTH_ERROR_CODES.contains(&code))
            .unwrap_or(false);

        if rejected {
            Self::Auth(message)
        }
        else {
            Self::Api(message)
        }
    }

    /// Returns `true` if the whole run should be aborted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Walk the source chain of `err` looking for a credentials provider failure.
///
/// A missing profile or unloadable credentials never reach AWS, so there is no
/// service error code to inspect.
fn credentials_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a CredentialsError> {
    let mut source = Some(err);

    while let Some(err) = source {
        if let Some(creds) = err.downcast_ref::<CredentialsError>() {
            return Some(creds);
        }

        source = err.source();
    }

    None
}

/// `err` followed by its immediate source, if any.
fn summary(err: &(dyn StdError + 'static)) -> String {
    match err.source() {
        Some(source) => format!("{}: {}", err, source),
        None         => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cloudwatch::operation::get_metric_statistics::GetMetricStatisticsError;
    use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Error)]
    #[error("dispatch failed")]
    struct Wrapper(#[source] CredentialsError);

    #[test]
    fn test_credentials_error() {
        let err = Wrapper(CredentialsError::not_loaded("no profile named prod"));

        assert!(credentials_error(&err).is_some());
    }

    #[test]
    fn test_credentials_error_other() {
        let err = std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "connection timed out",
        );

        assert!(credentials_error(&err).is_none());
    }

    #[test]
    fn test_is_fatal() {
        let tests = vec![
            (SizeError::Auth("bad token".into()), true),
            (SizeError::Api("throttled".into()),  false),
            (SizeError::NoData("bucket".into()),  false),
        ];

        for test in tests {
            let err      = test.0;
            let expected = test.1;

            assert_eq!(err.is_fatal(), expected);
        }
    }

    #[test]
    fn test_from_sdk_error_missing_profile() {
        let err: SdkError<GetMetricStatisticsError, HttpResponse> =
            SdkError::construction_failure(
                Wrapper(CredentialsError::not_loaded("no profile named prod")),
            );

        let ret = SizeError::from_sdk_error(err);

        match ret {
            SizeError::Auth(message) => {
                assert!(message.contains("no profile named prod"), "{message}");
                assert!(!message.contains("NotLoaded"), "{message}");
            },
            other => panic!("expected Auth, got {:?}", other),
        }
    }

    #[test]
    fn test_from_sdk_error_timeout() {
        let err: SdkError<GetMetricStatisticsError, HttpResponse> =
            SdkError::construction_failure(
                std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out"),
            );

        let ret = SizeError::from_sdk_error(err);

        assert!(matches!(ret, SizeError::Api(_)), "{ret:?}");
    }
}
