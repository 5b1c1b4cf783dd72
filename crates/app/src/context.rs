//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::domain::{
    campaigns::{CampaignsRepositoryError, CatalogCampaignsRepository, MalformedCampaignPolicy},
    eligibility::{CampaignsEligibilityService, EligibilityService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load campaign catalog")]
    Catalog(#[source] CampaignsRepositoryError),
}

#[derive(Clone)]
pub struct AppContext {
    pub eligibility: Arc<dyn EligibilityService>,
}

impl AppContext {
    #[must_use]
    pub fn new(eligibility: Arc<dyn EligibilityService>) -> Self {
        Self { eligibility }
    }

    /// Build application context from a campaign catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read or fails validation.
    pub fn from_catalog_path(
        path: impl AsRef<Path>,
        policy: MalformedCampaignPolicy,
    ) -> Result<Self, AppInitError> {
        let catalog = CatalogCampaignsRepository::from_path(path, policy)
            .map_err(AppInitError::Catalog)?;

        let eligibility = CampaignsEligibilityService::new(Arc::new(catalog));

        Ok(Self::new(Arc::new(eligibility)))
    }
}
