/// Enrollment period arithmetic
///
/// The end of an enrollment is its start plus the plan's duration in calendar
/// months. Days past the end of the target month are clamped to its last day
/// (Jan 31 + 1 month = Feb 28, or Feb 29 in leap years).
use super::errors::EnrollmentError;
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentPeriod {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl EnrollmentPeriod {
    pub fn compute(start_date: &str, duration_months: i32) -> Result<Self, EnrollmentError> {
        let start_date = parse_start_date(start_date)?;
        let end_date = add_months(start_date, duration_months)?;
        Ok(Self {
            start_date,
            end_date,
        })
    }
}

/// Parse an ISO-8601 start date and return the date `duration_months` later.
pub fn compute_end_date(
    start_date: &str,
    duration_months: i32,
) -> Result<DateTime<Utc>, EnrollmentError> {
    EnrollmentPeriod::compute(start_date, duration_months).map(|period| period.end_date)
}

/// Accepts RFC 3339 (`2024-01-15T10:00:00-03:00`), a date-time without offset
/// (taken as UTC), or a plain date (midnight UTC).
pub fn parse_start_date(input: &str) -> Result<DateTime<Utc>, EnrollmentError> {
    let trimmed = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| EnrollmentError::InvalidDate(input.to_string()))
}

pub fn add_months(
    start: DateTime<Utc>,
    duration_months: i32,
) -> Result<DateTime<Utc>, EnrollmentError> {
    let months = u32::try_from(duration_months)
        .map_err(|_| EnrollmentError::InvalidDuration(duration_months))?;

    start
        .checked_add_months(Months::new(months))
        .ok_or(EnrollmentError::InvalidDuration(duration_months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn adds_calendar_months_to_plain_date() {
        assert_eq!(compute_end_date("2024-01-15", 3).unwrap(), utc(2024, 4, 15));
    }

    #[test]
    fn crosses_year_boundary() {
        assert_eq!(compute_end_date("2023-11-10", 6).unwrap(), utc(2024, 5, 10));
    }

    #[test]
    fn clamps_to_end_of_shorter_month() {
        assert_eq!(compute_end_date("2024-01-31", 1).unwrap(), utc(2024, 2, 29));
        assert_eq!(compute_end_date("2023-01-31", 1).unwrap(), utc(2023, 2, 28));
        assert_eq!(compute_end_date("2024-03-31", 1).unwrap(), utc(2024, 4, 30));
    }

    #[test]
    fn twelve_months_is_one_year() {
        assert_eq!(compute_end_date("2024-02-29", 12).unwrap(), utc(2025, 2, 28));
        assert_eq!(compute_end_date("2024-05-20", 12).unwrap(), utc(2025, 5, 20));
    }

    #[test]
    fn zero_months_keeps_start() {
        assert_eq!(compute_end_date("2024-05-20", 0).unwrap(), utc(2024, 5, 20));
    }

    #[test]
    fn every_duration_lands_that_many_months_later() {
        let start = utc(2024, 1, 10);
        for months in 0..=36 {
            let end = add_months(start, months).unwrap();
            let elapsed =
                (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
            assert_eq!(elapsed, months);
            assert_eq!(end.day(), 10);
        }
    }

    #[test]
    fn keeps_time_of_day_and_normalizes_offset() {
        let end = compute_end_date("2024-01-15T10:30:00-03:00", 1).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 15, 13, 30, 0).unwrap());
    }

    #[test]
    fn accepts_datetime_without_offset() {
        let period = EnrollmentPeriod::compute("2024-01-15T08:00:00", 2).unwrap();
        assert_eq!(
            period.start_date,
            Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
        );
        assert_eq!(
            period.end_date,
            Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn accepts_fractional_seconds() {
        let start = parse_start_date("2024-01-15T08:00:00.250Z").unwrap();
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn rejects_unparseable_dates() {
        for input in ["", "tomorrow", "2024-13-01", "15/01/2024", "2024-02-30"] {
            assert!(
                matches!(
                    compute_end_date(input, 1),
                    Err(EnrollmentError::InvalidDate(_))
                ),
                "expected InvalidDate for {:?}",
                input
            );
        }
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(matches!(
            compute_end_date("2024-01-15", -1),
            Err(EnrollmentError::InvalidDuration(-1))
        ));
    }
}
