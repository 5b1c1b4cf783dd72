//! Campaign Handlers

pub(crate) mod eligible;
