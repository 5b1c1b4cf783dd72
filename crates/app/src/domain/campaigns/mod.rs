//! Campaigns

pub mod catalog;
mod errors;
pub mod repository;

pub use catalog::{CatalogCampaignsRepository, MalformedCampaignPolicy};
pub use errors::CampaignsRepositoryError;
pub use repository::*;
