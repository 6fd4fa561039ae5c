// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::{
    diagnostics::Diagnostics,
    error::{Error, Result},
};

const DATE_FORMAT: &str = "%d/%m/%Y";

static DATE_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("date shape is a valid regex")
});

/// Parses a `dd/mm/yyyy` date.
///
/// Exactly two digits of day, two of month and four of year are required,
/// with no surrounding whitespace or sign. Out of range days and months are
/// rejected rather than rolled over.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if !DATE_SHAPE_REGEX.is_match(input) {
        return Err(Error::DateFormat {
            input: input.to_string(),
        });
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| Error::DateParse {
        input: input.to_string(),
        source,
    })
}

/// Checks that two `dd/mm/yyyy` dates form an interval, i.e. `start <= end`.
///
/// A date that fails to parse makes the interval invalid. The failure is
/// reported to `diagnostics` at error level and is not returned.
pub fn is_valid_date_interval<D>(start: &str, end: &str, diagnostics: &D) -> bool
where
    D: Diagnostics + ?Sized,
{
    let start = match parse_date(start) {
        Ok(date) => date,
        Err(e) => {
            diagnostics.error(&format!("An error occurred while parsing start date. {}", e));
            return false;
        }
    };

    let end = match parse_date(end) {
        Ok(date) => date,
        Err(e) => {
            diagnostics.error(&format!("An error occurred while parsing end date. {}", e));
            return false;
        }
    };

    start <= end
}

/// Today's date in the local time zone.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{
        NoDiagnostics,
        testing::{Line, RecordingDiagnostics},
    };

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("25/12/2021").unwrap(),
            NaiveDate::from_ymd_opt(2021, 12, 25).unwrap()
        );
        assert!(parse_date("2021-12-25").is_err());
        assert!(parse_date("31/02/2020").is_err());
        assert!(parse_date("01/13/2020").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_date_requires_exact_shape() {
        for input in [
            "1/1/2020",
            " 01/01/2020",
            "01/01/2020 ",
            "01/01/+2020",
            "01/01/20",
            "01/01/02020",
        ] {
            let err = parse_date(input).unwrap_err();
            assert!(
                matches!(&err, Error::DateFormat { input: i } if i == input),
                "{:?} should be rejected by shape",
                input
            );
        }
    }

    #[test]
    fn test_parse_date_range_errors_keep_chrono_source() {
        assert!(matches!(parse_date("31/02/2020"), Err(Error::DateParse { .. })));
    }

    #[test]
    fn test_parse_date_error_names_input() {
        let err = parse_date("tomorrow").unwrap_err();
        assert!(matches!(&err, Error::DateFormat { input } if input == "tomorrow"));
        assert!(err.to_string().contains("tomorrow"));
    }

    #[test]
    fn test_interval_in_order() {
        assert!(is_valid_date_interval("01/01/2020", "02/01/2020", &NoDiagnostics));
        assert!(is_valid_date_interval("31/12/2019", "01/01/2020", &NoDiagnostics));
    }

    #[test]
    fn test_interval_same_day_is_valid() {
        assert!(is_valid_date_interval("15/06/2020", "15/06/2020", &NoDiagnostics));
    }

    #[test]
    fn test_interval_reversed_is_invalid() {
        assert!(!is_valid_date_interval("02/01/2020", "01/01/2020", &NoDiagnostics));
    }

    #[test]
    fn test_unparseable_start_is_logged() {
        let diagnostics = RecordingDiagnostics::default();
        assert!(!is_valid_date_interval("1st of May", "02/05/2020", &diagnostics));

        let lines = diagnostics.lines();
        assert_eq!(lines.len(), 1);
        assert!(matches!(&lines[0], Line::Error(msg) if msg.contains("start date")));
    }

    #[test]
    fn test_unparseable_end_is_logged() {
        let diagnostics = RecordingDiagnostics::default();
        assert!(!is_valid_date_interval("01/05/2020", "32/05/2020", &diagnostics));

        let lines = diagnostics.lines();
        assert_eq!(lines.len(), 1);
        assert!(matches!(&lines[0], Line::Error(msg) if msg.contains("end date")));
    }

    #[test]
    fn test_current_date_is_today() {
        let before = Local::now().date_naive();
        let today = current_date();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
