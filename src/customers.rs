//! Customers

use jiff::civil::Date;
use rust_decimal::Decimal;

/// The attributes of a customer that campaign conditions are checked against.
///
/// Built fresh for every eligibility request; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    /// Opaque customer identifier.
    pub customer_uuid: String,

    /// Country the customer is registered in, compared verbatim.
    pub country: String,

    /// Date the customer registered.
    pub registration_date: Date,

    /// Amount of the deposit being made.
    pub deposit_amount: Decimal,

    /// Whether this deposit is the customer's first.
    pub is_first_deposit: bool,
}
