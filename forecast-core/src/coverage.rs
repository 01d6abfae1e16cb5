//! Post-fetch check of how much of the requested range the data spans.

use chrono::{Days, NaiveDate, NaiveTime};
use tracing::debug;

use crate::{
    error::CoverageError,
    model::{Dataset, Request},
};

/// Days of tolerance on the requested end date. The source does not always
/// publish the most recent day yet, e.g. when the range ends today.
pub const GRACE_DAYS: u64 = 1;

/// Outcome of [`check_coverage`]. A partial outcome is advisory: the data is
/// still usable, the caller just gets told about the gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coverage {
    Covered {
        country: String,
        earliest: NaiveDate,
        latest: NaiveDate,
    },
    Partial {
        earliest: NaiveDate,
        latest: NaiveDate,
        requested_start: NaiveDate,
        requested_end: NaiveDate,
    },
}

impl Coverage {
    pub fn is_covered(&self) -> bool {
        matches!(self, Coverage::Covered { .. })
    }

    /// Whole days between the earliest and latest issue date present.
    pub fn span_days(&self) -> i64 {
        let (earliest, latest) = match self {
            Coverage::Covered {
                earliest, latest, ..
            }
            | Coverage::Partial {
                earliest, latest, ..
            } => (earliest, latest),
        };
        (*latest - *earliest).num_days()
    }

    pub fn message(&self) -> String {
        match self {
            Coverage::Covered {
                country, earliest, ..
            } => format!(
                "Extraction successful for {country} with issue dates from {} spanning {} days of data",
                iso(*earliest),
                self.span_days(),
            ),
            Coverage::Partial {
                earliest,
                latest,
                requested_start,
                requested_end,
            } => format!(
                "Warning: Data is stored but may be incomplete. The request returned delta \
                 {} to {} which does not/partly cover the requested delta from {} to {}.",
                iso(*earliest),
                iso(*latest),
                iso(*requested_start),
                iso(*requested_end),
            ),
        }
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Reduce an issue date as the API sends it to a calendar date.
///
/// The text must start with `YYYY-MM-DD`, optionally followed by a time of
/// day after `T` or a space (seconds, fractions and any offset are allowed).
/// The time of day is dropped.
pub fn normalize_issue_date(value: &str) -> Option<NaiveDate> {
    let (date, rest) = NaiveDate::parse_and_remainder(value.trim(), "%Y-%m-%d").ok()?;
    is_time_of_day(rest).then_some(date)
}

fn is_time_of_day(rest: &str) -> bool {
    if rest.is_empty() {
        return true;
    }
    rest.strip_prefix(['T', ' '])
        .is_some_and(|time| NaiveTime::parse_and_remainder(time, "%H:%M").is_ok())
}

/// Compare the span of issue dates in `dataset` with the requested range.
///
/// Covered when the earliest issue date is on or before the requested start
/// and the latest is no more than [`GRACE_DAYS`] before the requested end.
pub fn check_coverage(dataset: &Dataset, request: &Request) -> Result<Coverage, CoverageError> {
    let mut bounds: Option<(NaiveDate, NaiveDate)> = None;

    for record in dataset.iter() {
        let date = normalize_issue_date(&record.issue_date).ok_or_else(|| {
            CoverageError::IssueDate {
                value: record.issue_date.clone(),
            }
        })?;

        bounds = Some(match bounds {
            None => (date, date),
            Some((min, max)) => (min.min(date), max.max(date)),
        });
    }

    let (earliest, latest) = bounds.ok_or(CoverageError::EmptyDataset)?;

    let start = request.start();
    let end = request.end();
    let end_with_grace = end
        .checked_sub_days(Days::new(GRACE_DAYS))
        .unwrap_or(NaiveDate::MIN);

    debug!(
        %earliest,
        %latest,
        %start,
        %end,
        records = dataset.len(),
        "computed issue date span"
    );

    if earliest <= start && latest >= end_with_grace {
        Ok(Coverage::Covered {
            country: request.country().to_owned(),
            earliest,
            latest,
        })
    } else {
        Ok(Coverage::Partial {
            earliest,
            latest,
            requested_start: start,
            requested_end: end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::ForecastRecord, validate::validate_args};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(start: &str, end: &str) -> Request {
        validate_args(&["prog", "Mali", start, end]).unwrap()
    }

    fn july(days: std::ops::RangeInclusive<u32>) -> Dataset {
        days.map(|d| ForecastRecord::new(format!("2024-07-{d:02}")))
            .collect()
    }

    #[test]
    fn exact_range_is_covered() {
        let coverage = check_coverage(&july(1..=10), &request("01-07-2024", "10-07-2024")).unwrap();

        assert!(coverage.is_covered());
        assert_eq!(coverage.span_days(), 9);
        assert_eq!(
            coverage.message(),
            "Extraction successful for Mali with issue dates from 2024-07-01 spanning 9 days of data"
        );
    }

    #[test]
    fn missing_last_day_is_within_grace() {
        let coverage = check_coverage(&july(1..=9), &request("01-07-2024", "10-07-2024")).unwrap();
        assert!(coverage.is_covered());
    }

    #[test]
    fn short_tail_is_partial() {
        let coverage = check_coverage(&july(1..=10), &request("01-07-2024", "15-07-2024")).unwrap();

        assert_eq!(
            coverage,
            Coverage::Partial {
                earliest: date(2024, 7, 1),
                latest: date(2024, 7, 10),
                requested_start: date(2024, 7, 1),
                requested_end: date(2024, 7, 15),
            }
        );
        let msg = coverage.message();
        assert!(msg.starts_with("Warning: Data is stored but may be incomplete."));
        assert!(msg.contains("2024-07-01 to 2024-07-10"));
        assert!(msg.contains("from 2024-07-01 to 2024-07-15"));
    }

    #[test]
    fn late_start_is_partial() {
        let coverage = check_coverage(&july(2..=10), &request("01-07-2024", "10-07-2024")).unwrap();
        assert!(!coverage.is_covered());
    }

    #[test]
    fn record_order_does_not_matter() {
        let dataset: Dataset = ["2024-07-05", "2024-07-10", "2024-07-01", "2024-07-03"]
            .into_iter()
            .map(ForecastRecord::new)
            .collect();

        let coverage = check_coverage(&dataset, &request("01-07-2024", "10-07-2024")).unwrap();
        assert!(coverage.is_covered());
        assert_eq!(coverage.span_days(), 9);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let err = check_coverage(&Dataset::default(), &request("01-07-2024", "10-07-2024"))
            .unwrap_err();
        assert_eq!(err, CoverageError::EmptyDataset);
    }

    #[test]
    fn unreadable_issue_date_is_an_error() {
        let dataset: Dataset = ["2024-07-01", "next tuesday"]
            .into_iter()
            .map(ForecastRecord::new)
            .collect();

        let err = check_coverage(&dataset, &request("01-07-2024", "10-07-2024")).unwrap_err();
        assert_eq!(
            err,
            CoverageError::IssueDate {
                value: "next tuesday".into()
            }
        );
    }

    #[test]
    fn normalizes_timestamps_to_dates() {
        let expected = Some(date(2024, 7, 1));

        assert_eq!(normalize_issue_date("2024-07-01"), expected);
        assert_eq!(normalize_issue_date("2024-07-01T06:30:00"), expected);
        assert_eq!(normalize_issue_date("2024-07-01 06:30:00.250"), expected);
        assert_eq!(normalize_issue_date("2024-07-01T23:00:00+02:00"), expected);
        assert_eq!(normalize_issue_date("2024-07-01T00:00:00Z"), expected);
        assert_eq!(normalize_issue_date("2024-07-01T06:30"), expected);
        assert_eq!(normalize_issue_date("2024-07-01 06:30"), expected);
        assert_eq!(normalize_issue_date("2024-07-01T06:30:00+0000"), expected);
        assert_eq!(normalize_issue_date("2024-07-01T06:30:00.5-0300"), expected);
    }

    #[test]
    fn rejects_text_that_is_not_an_issue_date() {
        for bad in ["01-07-2024", "2024-07-01xyz", "2024-07-01T", "2024-07-01 noon", "next tuesday"] {
            assert_eq!(normalize_issue_date(bad), None, "{bad:?} should be rejected");
        }
    }
}
