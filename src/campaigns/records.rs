//! Campaign Records
//!
//! The stored shape of a campaign, before its conditions have been parsed.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::conditions::ConditionRecord;

/// Stored campaign
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CampaignRecord {
    /// Campaign uuid
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// First active day (inclusive)
    pub start_date: Date,

    /// Last active day (inclusive)
    pub end_date: Date,

    /// Campaign amount
    #[serde(default)]
    pub amount: Decimal,

    /// Offers, in delivery order
    #[serde(default)]
    pub offers: Vec<OfferRecord>,

    /// Conditions, in evaluation order
    #[serde(default)]
    pub conditions: Vec<ConditionRecord>,
}

/// Stored offer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OfferRecord {
    /// Offer uuid
    pub uuid: Uuid,

    /// Last day the offer can be redeemed
    pub expiration_date: Date,
}
