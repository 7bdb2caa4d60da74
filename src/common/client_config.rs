// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::{
    BehaviorVersion,
    SdkConfig,
};
use super::{
    Region,
    SizeUnit,
};
use tracing::debug;

/// Number of CloudWatch requests that may be in flight at once by default.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Profile name shown in the report header when no profile was given.
const DEFAULT_PROFILE_NAME: &str = "default";

/// Client configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Named profile from the local AWS configuration.
    ///
    /// If this isn't given, the default credential chain is used.
    pub profile: Option<String>,

    /// The region that our AWS clients should be created in.
    ///
    /// CloudWatch only reports on buckets in this region.
    pub region: Region,

    /// How bucket sizes are displayed.
    pub unit: SizeUnit,

    /// Maximum number of bucket sizes fetched concurrently.
    pub concurrency: usize,
}

impl Default for ClientConfig {
    /// Returns a default `ClientConfig`.
    ///
    /// The region is always `DEFAULT_REGION` here, environment overrides are
    /// applied by the CLI.
    ///
    /// ```rust
    /// ClientConfig {
    ///     profile:     None,
    ///     region:      Region::default(),
    ///     unit:        SizeUnit::Legacy,
    ///     concurrency: 8,
    /// }
    /// ```
    fn default() -> Self {
        Self {
            profile:     None,
            region:      Region::default(),
            unit:        SizeUnit::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ClientConfig {
    /// The profile name to show in the report header.
    pub fn profile_name(&self) -> &str {
        self.profile
            .as_deref()
            .unwrap_or(DEFAULT_PROFILE_NAME)
    }

    /// Load the shared AWS `SdkConfig` that both of our clients are built
    /// from.
    pub async fn sdk_config(&self) -> SdkConfig {
        debug!(
            "sdk_config: Loading for profile '{}' in region '{}'",
            self.profile_name(),
            self.region.name(),
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(self.region.clone());

        if let Some(profile) = self.profile.as_ref() {
            loader = loader.profile_name(profile);
        }

        loader.load().await
    }
}
