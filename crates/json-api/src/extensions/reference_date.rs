//! Reference date query parsing helpers.

use jiff::{Zoned, civil::Date};
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// Resolve an optional `at` query value to the date campaigns are checked against.
pub(crate) trait ReferenceDateExt {
    fn into_reference_date(self) -> Result<Date, StatusError>;
}

impl ReferenceDateExt for QueryParam<String, false> {
    fn into_reference_date(self) -> Result<Date, StatusError> {
        reference_date(self.into_inner())
    }
}

fn reference_date(at: Option<String>) -> Result<Date, StatusError> {
    at.map(|value| value.parse::<Date>())
        .transpose()
        .or_400("could not parse \"at\" query parameter")
        .map(|date| date.unwrap_or_else(|| Zoned::now().date()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_explicit_date() -> TestResult {
        let date_param = reference_date(Some("2024-03-12".to_string()))?;

        assert_eq!(date_param, date(2024, 3, 12));

        Ok(())
    }

    #[test]
    fn defaults_to_today() -> TestResult {
        assert_eq!(reference_date(None)?, Zoned::now().date());

        Ok(())
    }

    #[test]
    fn rejects_non_iso_dates() {
        let result = reference_date(Some("12/03/2024".to_string()));

        assert_eq!(
            result.err().map(|error| error.code),
            Some(StatusCode::BAD_REQUEST)
        );
    }
}
