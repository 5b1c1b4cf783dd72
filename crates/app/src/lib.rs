//! Shared application services and repositories.

pub mod context;
pub mod domain;
