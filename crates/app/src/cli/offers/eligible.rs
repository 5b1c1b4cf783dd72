use std::path::PathBuf;

use clap::{ArgAction, Args};
use jiff::{Zoned, civil::Date};
use perks::{amounts::parse_amount, campaigns::CampaignUuid, customers::CustomerProfile};
use perks_app::{
    context::AppContext,
    domain::campaigns::{CampaignQuery, MalformedCampaignPolicy},
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::cli::describe;

#[derive(Debug, Args)]
pub(crate) struct EligibleOffersArgs {
    /// Campaign catalog YAML file
    #[arg(long, env = "CATALOG_PATH")]
    catalog: PathBuf,

    /// What to do with campaigns that fail validation
    #[arg(long, value_enum, default_value_t = MalformedCampaignPolicy::Abort)]
    malformed_campaigns: MalformedCampaignPolicy,

    /// Customer identifier
    #[arg(long)]
    customer_uuid: String,

    /// Customer country
    #[arg(long)]
    country: String,

    /// Customer registration date (YYYY-MM-DD)
    #[arg(long)]
    registration_date: Date,

    /// Deposit amount, plain or scientific notation; rounding is refused
    #[arg(long, value_parser = parse_amount)]
    deposit_amount: Decimal,

    /// Whether this is the customer's first deposit
    #[arg(long, action = ArgAction::Set)]
    first_deposit: bool,

    /// Reference date for active campaigns; today when omitted
    #[arg(long)]
    at: Option<Date>,

    /// Only consider this campaign
    #[arg(long)]
    campaign: Option<Uuid>,
}

pub(crate) async fn run(args: EligibleOffersArgs) -> Result<(), String> {
    let app = AppContext::from_catalog_path(&args.catalog, args.malformed_campaigns)
        .map_err(|error| describe("failed to load catalog", &error))?;

    let mut query = CampaignQuery::active_on(args.at.unwrap_or_else(|| Zoned::now().date()));

    if let Some(campaign) = args.campaign {
        query = query.with_campaign(CampaignUuid::from_uuid(campaign));
    }

    let profile = CustomerProfile {
        customer_uuid: args.customer_uuid,
        country: args.country,
        registration_date: args.registration_date,
        deposit_amount: args.deposit_amount,
        is_first_deposit: args.first_deposit,
    };

    let offers = app
        .eligibility
        .eligible_offers(profile, query)
        .await
        .map_err(|error| describe("failed to evaluate eligibility", &error))?;

    for offer in offers {
        println!(
            "{}\t{}\t{}",
            offer.uuid(),
            offer.campaign_uuid(),
            offer.expiration_date()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Command {
        #[command(flatten)]
        args: EligibleOffersArgs,
    }

    fn parse(deposit_amount: &str) -> Result<Command, clap::Error> {
        Command::try_parse_from([
            "eligible",
            "--catalog",
            "campaigns.yml",
            "--customer-uuid",
            "abc",
            "--country",
            "Poland",
            "--registration-date",
            "2024-03-12",
            "--deposit-amount",
            deposit_amount,
            "--first-deposit",
            "true",
        ])
    }

    #[test]
    fn parses_deposit_amount_exactly() -> TestResult {
        let command = parse("1.05e1")?;

        assert_eq!(command.args.deposit_amount, Decimal::new(1050, 2));
        assert!(command.args.first_deposit);

        Ok(())
    }

    #[test]
    fn refuses_deposit_that_would_round() {
        let result = parse("9.99999999999999999999999999999");

        assert!(result.is_err(), "deposit should not round up to 10");
    }
}
