//! Perks
//!
//! Perks decides which promotional offers a customer qualifies for. Campaigns
//! bundle offers behind conditions on the customer's country, registration
//! date, deposit amount and first-deposit status; the engine evaluates a
//! pre-filtered list of candidate campaigns and returns the offers of every
//! campaign the customer satisfies.

pub mod amounts;
pub mod campaigns;
pub mod conditions;
pub mod customers;
pub mod eligibility;
pub mod prelude;
pub mod uuids;
