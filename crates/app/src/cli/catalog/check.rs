use std::path::PathBuf;

use clap::Args;
use perks_app::domain::campaigns::{CatalogCampaignsRepository, MalformedCampaignPolicy};

use crate::cli::describe;

#[derive(Debug, Args)]
pub(crate) struct CheckCatalogArgs {
    /// Campaign catalog YAML file
    #[arg(long, env = "CATALOG_PATH")]
    catalog: PathBuf,

    /// What to do with campaigns that fail validation
    #[arg(long, value_enum, default_value_t = MalformedCampaignPolicy::Abort)]
    malformed_campaigns: MalformedCampaignPolicy,
}

pub(crate) fn run(args: &CheckCatalogArgs) -> Result<(), String> {
    let catalog = CatalogCampaignsRepository::from_path(&args.catalog, args.malformed_campaigns)
        .map_err(|error| describe("invalid catalog", &error))?;

    for error in catalog.skipped() {
        println!("{}", describe("skipped", error));
    }

    println!("campaigns: {}", catalog.campaigns().len());

    Ok(())
}
