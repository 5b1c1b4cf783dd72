//! Campaigns repository errors.

use std::io;

use perks::campaigns::CampaignError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampaignsRepositoryError {
    #[error("failed to read campaign catalog")]
    Io(#[from] io::Error),

    #[error("failed to parse campaign catalog")]
    Yaml(#[from] serde_norway::Error),

    #[error("malformed campaign")]
    Campaign(#[from] CampaignError),
}
