//! Eligibility
//!
//! Decides which campaigns a customer qualifies for and gathers their offers.
//! Everything here is a pure function of its inputs: no I/O, no shared state.

pub mod aggregator;
pub mod evaluator;

pub use aggregator::EligibilityAggregator;
pub use evaluator::{ConditionEvaluator, Evaluator, Verdict};
