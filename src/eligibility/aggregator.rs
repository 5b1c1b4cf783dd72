//! Eligibility Aggregator

use crate::{
    campaigns::{Campaign, Offer},
    customers::CustomerProfile,
    eligibility::evaluator::{ConditionEvaluator, Evaluator},
};

/// Runs the [`ConditionEvaluator`] over candidate campaigns and concatenates
/// the offers of those that pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityAggregator;

impl EligibilityAggregator {
    /// Offers of every campaign `profile` qualifies for.
    ///
    /// Ordered by input campaign order, then by each campaign's stored offer
    /// order. Offers are neither deduplicated nor ranked.
    pub fn collect_eligible_offers<'c>(
        campaigns: &'c [Campaign],
        profile: &CustomerProfile,
    ) -> Vec<&'c Offer> {
        campaigns
            .iter()
            .filter(|campaign| ConditionEvaluator::is_eligible(campaign, profile))
            .flat_map(Campaign::offers)
            .collect()
    }
}
