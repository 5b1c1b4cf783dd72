//! Campaign Errors

use salvo::http::StatusError;
use tracing::error;

use perks_app::domain::eligibility::EligibilityServiceError;

pub(crate) fn into_status_error(error: EligibilityServiceError) -> StatusError {
    match error {
        EligibilityServiceError::Configuration(source) => {
            error!(
                campaign_uuid = %source.campaign(),
                condition_error = ?source.condition_error(),
                "campaign configuration error: {source}"
            );

            StatusError::internal_server_error()
                .brief("Campaign configuration error")
        }
        EligibilityServiceError::DataIntegrity(source) => {
            error!(
                campaign_uuid = %source.campaign(),
                condition_error = ?source.condition_error(),
                "campaign data integrity error: {source}"
            );

            StatusError::internal_server_error()
                .brief("Campaign data integrity error")
        }
        EligibilityServiceError::Repository(source) => {
            error!("failed to load campaigns: {source}");

            StatusError::internal_server_error()
        }
    }
}
