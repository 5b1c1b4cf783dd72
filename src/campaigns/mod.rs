//! Campaigns

use jiff::civil::Date;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    conditions::{Condition, ConditionError},
    uuids::TypedUuid,
};

pub mod offers;
pub mod records;

pub use offers::{Offer, OfferUuid};
pub use records::{CampaignRecord, OfferRecord};

/// Campaign UUID
pub type CampaignUuid = TypedUuid<Campaign>;

/// Campaign loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    /// One of the campaign's conditions is malformed.
    #[error("campaign {campaign} has a malformed condition")]
    Condition {
        /// Offending campaign
        campaign: CampaignUuid,

        /// Underlying condition error
        #[source]
        source: ConditionError,
    },

    /// The active window ends before it starts.
    #[error("campaign {campaign} ends ({end_date}) before it starts ({start_date})")]
    InvalidWindow {
        /// Offending campaign
        campaign: CampaignUuid,

        /// First active day
        start_date: Date,

        /// Last active day
        end_date: Date,
    },
}

impl CampaignError {
    /// The campaign the error refers to.
    pub fn campaign(&self) -> CampaignUuid {
        match self {
            CampaignError::Condition { campaign, .. }
            | CampaignError::InvalidWindow { campaign, .. } => *campaign,
        }
    }

    /// The condition error, if the failure came from a condition.
    pub fn condition_error(&self) -> Option<&ConditionError> {
        match self {
            CampaignError::Condition { source, .. } => Some(source),
            CampaignError::InvalidWindow { .. } => None,
        }
    }
}

/// A time-bounded bundle of offers, gated by conditions that must all hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    uuid: CampaignUuid,
    name: String,
    start_date: Date,
    end_date: Date,
    amount: Decimal,
    offers: Vec<Offer>,
    conditions: SmallVec<[Condition; 4]>,
}

impl Campaign {
    /// Create a campaign with no offers and no conditions.
    pub fn new(
        uuid: CampaignUuid,
        name: impl Into<String>,
        start_date: Date,
        end_date: Date,
        amount: Decimal,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            start_date,
            end_date,
            amount,
            offers: Vec::new(),
            conditions: SmallVec::new(),
        }
    }

    /// Append an offer, stamped with this campaign's uuid.
    #[must_use]
    pub fn with_offer(mut self, uuid: OfferUuid, expiration_date: Date) -> Self {
        let offer = Offer::new(uuid, expiration_date, self.uuid);

        self.offers.push(offer);
        self
    }

    /// Append a condition.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Campaign uuid
    pub fn uuid(&self) -> CampaignUuid {
        self.uuid
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First active day (inclusive)
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last active day (inclusive)
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Campaign amount. Not used when deciding eligibility.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Offers, in stored order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Conditions, in stored order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether `date` falls inside the campaign's active window.
    pub fn is_active_on(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl TryFrom<CampaignRecord> for Campaign {
    type Error = CampaignError;

    fn try_from(record: CampaignRecord) -> Result<Self, Self::Error> {
        let uuid = CampaignUuid::from_uuid(record.uuid);

        if record.end_date < record.start_date {
            return Err(CampaignError::InvalidWindow {
                campaign: uuid,
                start_date: record.start_date,
                end_date: record.end_date,
            });
        }

        let conditions = record
            .conditions
            .into_iter()
            .map(Condition::try_from)
            .collect::<Result<SmallVec<[Condition; 4]>, _>>()
            .map_err(|source| CampaignError::Condition {
                campaign: uuid,
                source,
            })?;

        let offers = record
            .offers
            .into_iter()
            .map(|offer| Offer::new(OfferUuid::from_uuid(offer.uuid), offer.expiration_date, uuid))
            .collect();

        Ok(Campaign {
            uuid,
            name: record.name,
            start_date: record.start_date,
            end_date: record.end_date,
            amount: record.amount,
            offers,
            conditions,
        })
    }
}
