//! Campaigns Repository

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;

use perks::campaigns::{Campaign, CampaignUuid};

use crate::domain::campaigns::CampaignsRepositoryError;

/// Which campaigns to hand to the eligibility engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignQuery {
    /// Only campaigns whose active window contains this date.
    pub reference_date: Date,

    /// Restrict to a single campaign.
    pub campaign: Option<CampaignUuid>,
}

impl CampaignQuery {
    #[must_use]
    pub fn active_on(reference_date: Date) -> Self {
        Self {
            reference_date,
            campaign: None,
        }
    }

    #[must_use]
    pub fn with_campaign(self, campaign: CampaignUuid) -> Self {
        Self {
            campaign: Some(campaign),
            ..self
        }
    }

    /// Whether `campaign` satisfies this query.
    #[must_use]
    pub fn matches(&self, campaign: &Campaign) -> bool {
        campaign.is_active_on(self.reference_date)
            && self.campaign.is_none_or(|uuid| uuid == campaign.uuid())
    }
}

#[automock]
#[async_trait]
pub trait CampaignsRepository: Send + Sync {
    /// Candidate campaigns for `query`, in storage order.
    async fn find_active_campaigns(
        &self,
        query: CampaignQuery,
    ) -> Result<Vec<Campaign>, CampaignsRepositoryError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;

    use super::*;

    fn campaign() -> Campaign {
        Campaign::new(
            CampaignUuid::new(),
            "Spring",
            date(2024, 3, 10),
            date(2024, 3, 17),
            Decimal::ONE,
        )
    }

    #[test]
    fn matches_campaigns_active_on_reference_date() {
        let campaign = campaign();

        assert!(CampaignQuery::active_on(date(2024, 3, 12)).matches(&campaign));
        assert!(!CampaignQuery::active_on(date(2024, 3, 18)).matches(&campaign));
    }

    #[test]
    fn campaign_filter_narrows_to_one_campaign() {
        let campaign = campaign();
        let query = CampaignQuery::active_on(date(2024, 3, 12));

        assert!(query.with_campaign(campaign.uuid()).matches(&campaign));
        assert!(!query.with_campaign(CampaignUuid::new()).matches(&campaign));
    }
}
