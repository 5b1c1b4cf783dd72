//! Eligible Offers Handler

use jiff::civil::Date;
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use perks::{
    amounts::parse_amount,
    campaigns::{CampaignUuid, Offer},
    customers::CustomerProfile,
};
use perks_app::domain::campaigns::CampaignQuery;

use crate::{campaigns::errors::into_status_error, extensions::*};

/// Eligible offer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferResponse {
    /// The unique identifier of the offer
    pub uuid: Uuid,

    /// The last day the offer can be redeemed
    pub expiration_date: String,

    /// The campaign the offer belongs to
    pub campaign_uuid: Uuid,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        OfferResponse {
            uuid: offer.uuid().into(),
            expiration_date: offer.expiration_date().to_string(),
            campaign_uuid: offer.campaign_uuid().into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EligibleOffersResponse {
    /// Offers the customer qualifies for, in campaign order
    pub offers: Vec<OfferResponse>,
}

/// Eligible Offers Handler
///
/// Returns the offers of every campaign active on `at` (default today) whose
/// conditions the described customer meets.
#[endpoint(
    tags("campaigns"),
    summary = "List Eligible Offers",
    responses(
        (status_code = StatusCode::OK, description = "Eligible offers"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[expect(
    clippy::too_many_arguments,
    reason = "each query parameter is its own documented extractor"
)]
pub(crate) async fn handler(
    customer_uuid: QueryParam<String, true>,
    country: QueryParam<String, true>,
    registration_date: QueryParam<String, true>,
    deposit_amount: QueryParam<String, true>,
    first_deposit: QueryParam<String, true>,
    at: QueryParam<String, false>,
    campaign: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<EligibleOffersResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let profile = CustomerProfile {
        customer_uuid: customer_uuid.into_inner(),
        country: country.into_inner(),
        registration_date: registration_date
            .parse::<Date>()
            .or_400("could not parse \"registration_date\" query parameter")?,
        deposit_amount: parse_amount(&deposit_amount)
            .or_400("could not parse \"deposit_amount\" query parameter")?,
        is_first_deposit: first_deposit
            .parse::<bool>()
            .or_400("could not parse \"first_deposit\" query parameter")?,
    };

    let mut query = CampaignQuery::active_on(at.into_reference_date()?);

    if let Some(campaign) = campaign.into_inner() {
        query = query.with_campaign(
            campaign
                .parse::<CampaignUuid>()
                .or_400("could not parse \"campaign\" query parameter")?,
        );
    }

    let offers = state
        .app
        .eligibility
        .eligible_offers(profile, query)
        .await
        .map_err(into_status_error)?;

    Ok(Json(EligibleOffersResponse {
        offers: offers.into_iter().map(Into::into).collect(),
    }))
}
