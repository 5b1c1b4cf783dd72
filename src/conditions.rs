//! Campaign Conditions
//!
//! Conditions are stored as a kind tag plus a raw text value. They are parsed
//! into [`Condition`] once, when a campaign is loaded, so evaluation never has
//! to deal with malformed values. Values are taken verbatim for every kind:
//! surrounding whitespace is never trimmed.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{amounts::parse_amount, customers::CustomerProfile};

/// Recognised condition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// Customer country must match exactly.
    Country,

    /// Customer must have registered on or after a date.
    RegistrationDate,

    /// Deposit must be at least an amount.
    MinDepositAmount,

    /// Deposit must (or must not) be the customer's first.
    IsFirstDeposit,
}

impl ConditionKind {
    /// All kinds, in declaration order.
    pub const ALL: [ConditionKind; 4] = [
        ConditionKind::Country,
        ConditionKind::RegistrationDate,
        ConditionKind::MinDepositAmount,
        ConditionKind::IsFirstDeposit,
    ];

    /// The stored tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConditionKind::Country => "COUNTRY",
            ConditionKind::RegistrationDate => "REGISTRATION_DATE",
            ConditionKind::MinDepositAmount => "MIN_DEPOSIT_AMOUNT",
            ConditionKind::IsFirstDeposit => "IS_FIRST_DEPOSIT",
        }
    }
}

impl Display for ConditionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionKind {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConditionError::UnrecognisedKind(s.to_string()))
    }
}

/// Condition parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// The kind tag is not one we know how to evaluate.
    #[error("unrecognised condition kind: {0:?}")]
    UnrecognisedKind(String),

    /// The value could not be parsed into the type its kind requires.
    #[error("invalid {kind} condition value: {value:?}")]
    InvalidValue {
        /// Kind whose value failed to parse
        kind: ConditionKind,

        /// Raw value as stored
        value: String,
    },
}

impl ConditionError {
    /// Whether the campaign configuration uses a kind this build doesn't know.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ConditionError::UnrecognisedKind(_))
    }

    /// Whether a known kind carries a value of the wrong shape.
    pub fn is_data_integrity_error(&self) -> bool {
        matches!(self, ConditionError::InvalidValue { .. })
    }
}

/// A single, typed eligibility rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Customer country must equal this value (case-sensitive).
    Country(String),

    /// Customer registration date must not be before this date.
    RegistrationDate(Date),

    /// Deposit amount must be at least this much.
    MinDepositAmount(Decimal),

    /// Customer first-deposit flag must equal this value.
    IsFirstDeposit(bool),
}

impl Condition {
    /// Parse a stored kind tag and raw value into a typed condition.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::UnrecognisedKind`] for an unknown tag and
    /// [`ConditionError::InvalidValue`] when the value doesn't fit the kind.
    pub fn parse(kind: &str, value: &str) -> Result<Self, ConditionError> {
        let kind = kind.parse::<ConditionKind>()?;

        let invalid = || ConditionError::InvalidValue {
            kind,
            value: value.to_string(),
        };

        match kind {
            ConditionKind::Country => Ok(Condition::Country(value.to_string())),
            ConditionKind::RegistrationDate => value
                .parse::<Date>()
                .map(Condition::RegistrationDate)
                .map_err(|_error| invalid()),
            ConditionKind::MinDepositAmount => parse_amount(value)
                .map(Condition::MinDepositAmount)
                .map_err(|_error| invalid()),
            ConditionKind::IsFirstDeposit => parse_bool(value)
                .map(Condition::IsFirstDeposit)
                .ok_or_else(invalid),
        }
    }

    /// Whether `profile` satisfies this condition.
    pub fn is_met_by(&self, profile: &CustomerProfile) -> bool {
        match self {
            Condition::Country(country) => *country == profile.country,
            // Registered on or after the threshold.
            Condition::RegistrationDate(threshold) => profile.registration_date >= *threshold,
            Condition::MinDepositAmount(minimum) => profile.deposit_amount >= *minimum,
            Condition::IsFirstDeposit(expected) => profile.is_first_deposit == *expected,
        }
    }

    /// The kind of this condition.
    pub fn kind(&self) -> ConditionKind {
        match self {
            Condition::Country(_) => ConditionKind::Country,
            Condition::RegistrationDate(_) => ConditionKind::RegistrationDate,
            Condition::MinDepositAmount(_) => ConditionKind::MinDepositAmount,
            Condition::IsFirstDeposit(_) => ConditionKind::IsFirstDeposit,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Condition as stored: a kind tag and an unparsed value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConditionRecord {
    /// Kind tag, e.g. `COUNTRY`
    pub kind: String,

    /// Raw value text
    pub value: String,
}

impl TryFrom<ConditionRecord> for Condition {
    type Error = ConditionError;

    fn try_from(record: ConditionRecord) -> Result<Self, Self::Error> {
        Condition::parse(&record.kind, &record.value)
    }
}
