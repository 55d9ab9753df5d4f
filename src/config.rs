use aws_config::{Region, SdkConfig, meta::region::RegionProviderChain};

/// Loads the shared AWS configuration, falling back to `us-east-1` when the
/// environment does not provide a region.
pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
