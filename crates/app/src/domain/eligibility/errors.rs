//! Eligibility service errors.

use perks::{campaigns::CampaignError, conditions::ConditionError};
use thiserror::Error;

use crate::domain::campaigns::CampaignsRepositoryError;

#[derive(Debug, Error)]
pub enum EligibilityServiceError {
    /// A campaign uses a condition kind we don't recognise.
    #[error("campaign configuration error")]
    Configuration(#[source] CampaignError),

    /// A campaign carries a condition value of the wrong shape.
    #[error("campaign data integrity error")]
    DataIntegrity(#[source] CampaignError),

    #[error("campaign storage error")]
    Repository(#[source] CampaignsRepositoryError),
}

impl From<CampaignsRepositoryError> for EligibilityServiceError {
    fn from(error: CampaignsRepositoryError) -> Self {
        match error {
            CampaignsRepositoryError::Campaign(error)
                if error
                    .condition_error()
                    .is_some_and(ConditionError::is_configuration_error) =>
            {
                Self::Configuration(error)
            }
            CampaignsRepositoryError::Campaign(error) => Self::DataIntegrity(error),
            CampaignsRepositoryError::Io(_) | CampaignsRepositoryError::Yaml(_) => {
                Self::Repository(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use perks::campaigns::CampaignUuid;

    use super::*;

    #[test]
    fn unknown_kind_maps_to_configuration() {
        let error = CampaignsRepositoryError::Campaign(CampaignError::Condition {
            campaign: CampaignUuid::new(),
            source: ConditionError::UnrecognisedKind("LOYALTY_TIER".to_string()),
        });

        assert!(matches!(
            EligibilityServiceError::from(error),
            EligibilityServiceError::Configuration(_)
        ));
    }

    #[test]
    fn storage_failure_maps_to_repository() {
        let error = CampaignsRepositoryError::Io(io::Error::other("disk gone"));

        assert!(matches!(
            EligibilityServiceError::from(error),
            EligibilityServiceError::Repository(CampaignsRepositoryError::Io(_))
        ));
    }
}
