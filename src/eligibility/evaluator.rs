//! Condition Evaluator

use crate::{campaigns::Campaign, conditions::ConditionKind, customers::CustomerProfile};

/// Outcome of evaluating one campaign against one customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every condition holds and there is something to hand out.
    Eligible,

    /// The campaign has no offers, so its conditions were never checked.
    NoOffers,

    /// The first condition, in stored order, that did not hold.
    Unmet(ConditionKind),
}

impl Verdict {
    /// Whether the campaign's offers should be granted.
    pub fn is_eligible(self) -> bool {
        matches!(self, Verdict::Eligible)
    }
}

/// Decides whether a customer qualifies for a campaign.
pub trait Evaluator {
    /// Evaluate `campaign` for `profile`, reporting why it failed if it did.
    fn evaluate(campaign: &Campaign, profile: &CustomerProfile) -> Verdict;

    /// Whether `profile` qualifies for `campaign`.
    fn is_eligible(campaign: &Campaign, profile: &CustomerProfile) -> bool {
        Self::evaluate(campaign, profile).is_eligible()
    }
}

/// Checks a campaign's conditions against a customer profile.
///
/// Conditions combine with logical AND and are checked in stored order,
/// stopping at the first one that fails. A campaign without offers is never
/// eligible, whatever its conditions say.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionEvaluator;

impl Evaluator for ConditionEvaluator {
    fn evaluate(campaign: &Campaign, profile: &CustomerProfile) -> Verdict {
        if campaign.offers().is_empty() {
            return Verdict::NoOffers;
        }

        campaign
            .conditions()
            .iter()
            .find(|condition| !condition.is_met_by(profile))
            .map_or(Verdict::Eligible, |condition| Verdict::Unmet(condition.kind()))
    }
}
