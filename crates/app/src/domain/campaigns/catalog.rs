//! Campaign Catalog
//!
//! A read-only, in-memory campaign store loaded from YAML. Every campaign is
//! validated once while loading, so lookups never see a malformed condition.

use std::{fs, path::Path, sync::Arc};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use perks::campaigns::{Campaign, CampaignError, CampaignRecord};

use crate::domain::campaigns::{CampaignQuery, CampaignsRepository, CampaignsRepositoryError};

/// What to do with a campaign that fails validation while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MalformedCampaignPolicy {
    /// Refuse to load the catalog.
    #[default]
    Abort,

    /// Drop the campaign, log it, and keep loading.
    Skip,
}

/// Catalog file layout
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    campaigns: Vec<CampaignRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogCampaignsRepository {
    campaigns: Arc<[Campaign]>,
    skipped: Arc<[CampaignError]>,
}

impl CatalogCampaignsRepository {
    /// Load a catalog from a YAML file.
    pub fn from_path(
        path: impl AsRef<Path>,
        policy: MalformedCampaignPolicy,
    ) -> Result<Self, CampaignsRepositoryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&contents, policy)?;

        info!(
            path = %path.display(),
            campaigns = catalog.campaigns.len(),
            skipped = catalog.skipped.len(),
            "loaded campaign catalog"
        );

        Ok(catalog)
    }

    /// Load a catalog from YAML text.
    pub fn from_yaml_str(
        yaml: &str,
        policy: MalformedCampaignPolicy,
    ) -> Result<Self, CampaignsRepositoryError> {
        let document: CatalogDocument = serde_norway::from_str(yaml)?;

        let mut campaigns = Vec::with_capacity(document.campaigns.len());
        let mut skipped = Vec::new();

        for record in document.campaigns {
            match Campaign::try_from(record) {
                Ok(campaign) => campaigns.push(campaign),
                Err(error) if policy == MalformedCampaignPolicy::Skip => {
                    warn!(
                        campaign_uuid = %error.campaign(),
                        condition_error = ?error.condition_error(),
                        "skipping malformed campaign: {error}"
                    );

                    skipped.push(error);
                }
                Err(error) => return Err(error.into()),
            }
        }

        Ok(Self {
            campaigns: campaigns.into(),
            skipped: skipped.into(),
        })
    }

    /// Loaded campaigns, in file order.
    #[must_use]
    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    /// Campaigns dropped under [`MalformedCampaignPolicy::Skip`].
    #[must_use]
    pub fn skipped(&self) -> &[CampaignError] {
        &self.skipped
    }
}

#[async_trait]
impl CampaignsRepository for CatalogCampaignsRepository {
    async fn find_active_campaigns(
        &self,
        query: CampaignQuery,
    ) -> Result<Vec<Campaign>, CampaignsRepositoryError> {
        Ok(self
            .campaigns
            .iter()
            .filter(|campaign| query.matches(campaign))
            .cloned()
            .collect())
    }
}
