//! Eligibility Service

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use perks::{campaigns::Offer, customers::CustomerProfile, eligibility::EligibilityAggregator};

use crate::domain::{
    campaigns::{CampaignQuery, CampaignsRepository},
    eligibility::EligibilityServiceError,
};

#[derive(Clone)]
pub struct CampaignsEligibilityService {
    campaigns: Arc<dyn CampaignsRepository>,
}

impl CampaignsEligibilityService {
    #[must_use]
    pub fn new(campaigns: Arc<dyn CampaignsRepository>) -> Self {
        Self { campaigns }
    }
}

#[async_trait]
impl EligibilityService for CampaignsEligibilityService {
    #[tracing::instrument(
        name = "eligibility.service.eligible_offers",
        skip(self, profile),
        fields(
            customer_uuid = %profile.customer_uuid,
            reference_date = %query.reference_date,
            campaign_filter = ?query.campaign,
            candidate_count = tracing::field::Empty,
            offer_count = tracing::field::Empty
        ),
        err
    )]
    async fn eligible_offers(
        &self,
        profile: CustomerProfile,
        query: CampaignQuery,
    ) -> Result<Vec<Offer>, EligibilityServiceError> {
        let candidates = self.campaigns.find_active_campaigns(query).await?;

        let eligible = EligibilityAggregator::collect_eligible_offers(&candidates, &profile);
        let offers: Vec<Offer> = eligible.into_iter().cloned().collect();

        let span = Span::current();

        span.record("candidate_count", tracing::field::display(candidates.len()));
        span.record("offer_count", tracing::field::display(offers.len()));

        info!(
            candidates = candidates.len(),
            offers = offers.len(),
            "evaluated campaign eligibility"
        );

        Ok(offers)
    }
}

#[automock]
#[async_trait]
pub trait EligibilityService: Send + Sync {
    /// Offers from every campaign matching `query` that `profile` qualifies for.
    async fn eligible_offers(
        &self,
        profile: CustomerProfile,
        query: CampaignQuery,
    ) -> Result<Vec<Offer>, EligibilityServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use perks::{
        campaigns::{Campaign, CampaignError, CampaignUuid, OfferUuid},
        conditions::{Condition, ConditionError, ConditionKind},
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::campaigns::{CampaignsRepositoryError, MockCampaignsRepository};

    use super::*;

    fn profile() -> CustomerProfile {
        CustomerProfile {
            customer_uuid: "abc".to_string(),
            country: "Poland".to_string(),
            registration_date: date(2024, 3, 12),
            deposit_amount: Decimal::TEN,
            is_first_deposit: true,
        }
    }

    fn campaign(condition: Condition) -> Campaign {
        Campaign::new(
            CampaignUuid::new(),
            "Test Campaign",
            date(2024, 3, 10),
            date(2024, 3, 17),
            Decimal::ONE,
        )
        .with_offer(OfferUuid::new(), date(2024, 3, 17))
        .with_condition(condition)
    }

    fn service(repository: MockCampaignsRepository) -> CampaignsEligibilityService {
        CampaignsEligibilityService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn no_active_campaigns_yields_no_offers() -> TestResult {
        let mut repository = MockCampaignsRepository::new();

        repository
            .expect_find_active_campaigns()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let offers = service(repository)
            .eligible_offers(profile(), CampaignQuery::active_on(date(2024, 3, 12)))
            .await?;

        assert!(offers.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn returns_offers_of_eligible_campaigns_only() -> TestResult {
        let poland = campaign(Condition::Country("Poland".to_string()));
        let us = campaign(Condition::Country("US".to_string()));
        let first_deposit = campaign(Condition::IsFirstDeposit(true));

        let expected: Vec<Offer> = poland
            .offers()
            .iter()
            .chain(first_deposit.offers())
            .cloned()
            .collect();

        let mut repository = MockCampaignsRepository::new();

        repository
            .expect_find_active_campaigns()
            .once()
            .return_once(move |_| Ok(vec![poland, us, first_deposit]));

        let offers = service(repository)
            .eligible_offers(profile(), CampaignQuery::active_on(date(2024, 3, 12)))
            .await?;

        assert_eq!(offers, expected);

        Ok(())
    }

    #[tokio::test]
    async fn forwards_query_to_repository() -> TestResult {
        let campaign_uuid = CampaignUuid::new();
        let query = CampaignQuery::active_on(date(2024, 3, 14))
            .with_campaign(campaign_uuid);

        let mut repository = MockCampaignsRepository::new();

        repository
            .expect_find_active_campaigns()
            .once()
            .withf(move |q| *q == query)
            .return_once(|_| Ok(Vec::new()));

        service(repository).eligible_offers(profile(), query).await?;

        Ok(())
    }

    #[tokio::test]
    async fn malformed_value_aborts_the_request() {
        let mut repository = MockCampaignsRepository::new();

        repository
            .expect_find_active_campaigns()
            .once()
            .return_once(|_| {
                Err(CampaignsRepositoryError::Campaign(CampaignError::Condition {
                    campaign: CampaignUuid::new(),
                    source: ConditionError::InvalidValue {
                        kind: ConditionKind::MinDepositAmount,
                        value: "ten".to_string(),
                    },
                }))
            });

        let result = service(repository)
            .eligible_offers(profile(), CampaignQuery::active_on(date(2024, 3, 12)))
            .await;

        assert!(
            matches!(result, Err(EligibilityServiceError::DataIntegrity(_))),
            "expected data integrity error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_kind_aborts_the_request() {
        let mut repository = MockCampaignsRepository::new();

        repository
            .expect_find_active_campaigns()
            .once()
            .return_once(|_| {
                Err(CampaignsRepositoryError::Campaign(CampaignError::Condition {
                    campaign: CampaignUuid::new(),
                    source: ConditionError::UnrecognisedKind("MAX_AGE".to_string()),
                }))
            });

        let result = service(repository)
            .eligible_offers(profile(), CampaignQuery::active_on(date(2024, 3, 12)))
            .await;

        assert!(
            matches!(result, Err(EligibilityServiceError::Configuration(_))),
            "expected configuration error, got {result:?}"
        );
    }
}
