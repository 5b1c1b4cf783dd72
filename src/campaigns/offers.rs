//! Offers

use jiff::civil::Date;

use crate::{campaigns::CampaignUuid, uuids::TypedUuid};

/// Offer UUID
pub type OfferUuid = TypedUuid<Offer>;

/// A deliverable reward belonging to exactly one campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    uuid: OfferUuid,
    expiration_date: Date,
    campaign_uuid: CampaignUuid,
}

impl Offer {
    /// Create an offer owned by `campaign_uuid`.
    pub fn new(uuid: OfferUuid, expiration_date: Date, campaign_uuid: CampaignUuid) -> Self {
        Self {
            uuid,
            expiration_date,
            campaign_uuid,
        }
    }

    /// Offer uuid
    pub fn uuid(&self) -> OfferUuid {
        self.uuid
    }

    /// Last day the offer can be redeemed
    pub fn expiration_date(&self) -> Date {
        self.expiration_date
    }

    /// Uuid of the owning campaign, for lookup only.
    pub fn campaign_uuid(&self) -> CampaignUuid {
        self.campaign_uuid
    }
}
