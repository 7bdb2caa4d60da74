// Handles region things
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use tracing::debug;

/// Region used when neither the command line nor the environment set one.
pub const DEFAULT_REGION: &str = "ap-southeast-2";

#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    region: region::Region,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            region: region::Region::from_static(DEFAULT_REGION),
        }
    }
}

impl Region {
    // Returns the region name
    pub fn name(&self) -> &str {
        self.region.as_ref()
    }

    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        self.region = region::Region::new(region.to_string());
        self
    }
}

impl ProvideRegion for Region {
    // Takes our region string and returns a proper AWS Region, this should
    // allow us to pass our Region into AWS SDK functions expecting an AWS
    // Region.
    fn region(&self) -> future::ProvideRegion<'_> {
        future::ProvideRegion::ready(Some(self.region.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_region() {
        let region = Region::default();

        assert_eq!(region.name(), "ap-southeast-2");
    }

    #[test]
    fn test_set_region() {
        let region = Region::default().set_region("us-east-1");

        assert_eq!(region.name(), "us-east-1");
    }

    #[tokio::test]
    async fn test_provide_region() {
        let region = Region::default().set_region("eu-west-1");
        let ret    = ProvideRegion::region(&region).await;

        let expected = Some(region::Region::new("eu-west-1"));

        assert_eq!(ret, expected);
    }
}
