//! Extension traits

mod depot;
mod reference_date;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use reference_date::ReferenceDateExt as _;
pub(crate) use result::ResultExt as _;
