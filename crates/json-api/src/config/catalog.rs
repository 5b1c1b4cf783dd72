//! Campaign Catalog Config

use std::path::PathBuf;

use clap::Args;

use perks_app::domain::campaigns::MalformedCampaignPolicy;

/// Campaign catalog settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Campaign catalog YAML file
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog_path: PathBuf,

    /// What to do with campaigns that fail validation (abort, skip)
    #[arg(
        long,
        env = "MALFORMED_CAMPAIGNS",
        value_enum,
        default_value_t = MalformedCampaignPolicy::Abort
    )]
    pub malformed_campaigns: MalformedCampaignPolicy,
}
