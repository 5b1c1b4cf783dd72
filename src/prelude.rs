//! Perks prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    amounts::parse_amount,
    campaigns::{
        Campaign, CampaignError, CampaignRecord, CampaignUuid, Offer, OfferRecord, OfferUuid,
    },
    conditions::{Condition, ConditionError, ConditionKind, ConditionRecord},
    customers::CustomerProfile,
    eligibility::{ConditionEvaluator, EligibilityAggregator, Evaluator, Verdict},
    uuids::TypedUuid,
};
