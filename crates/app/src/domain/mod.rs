//! Perks Domain Concerns

pub mod campaigns;
pub mod eligibility;
