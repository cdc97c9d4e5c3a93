// File: ./src/model/status.rs
//! Deadline status derived from the free-form application period text.
//!
//! Upstream periods look like `20240201 ~ 20240315`, `20240110 ~ 예산 소진시`
//! or are simply empty. Runs of exactly eight ASCII digits are dates. If any
//! such run is not a real calendar date the period is treated as unspecified.
use crate::model::record::DeadlineStatus;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of remaining days for which a countdown label (`D-n`) is shown.
pub const COUNTDOWN_WINDOW_DAYS: i64 = 14;

pub const LABEL_UNSPECIFIED: &str = "date unspecified";
pub const LABEL_PENDING: &str = "pending";
pub const LABEL_CLOSED: &str = "closed";
pub const LABEL_TODAY: &str = "D-Day";
pub const LABEL_OPEN: &str = "open";
pub const EMPTY_PERIOD_TEXT: &str = "기간 미정";

// `[0-9]` rather than `\d`: the latter also matches non-ASCII digits.
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("static regex"));

// Length of `YYYYMMDD~YYYYMMDD`.
const FULL_RANGE_LEN: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineInfo {
    pub status: DeadlineStatus,
    pub d_day: String,
    pub date_info: String,
}

/// Extracts the `YYYYMMDD` dates from `raw`, in order of appearance.
///
/// Returns `None` when an eight-digit run is not a valid date.
pub fn extract_dates(raw: &str) -> Option<Vec<NaiveDate>> {
    DIGIT_RUN
        .find_iter(raw)
        .map(|m| m.as_str())
        .filter(|run| run.len() == 8)
        .map(|run| NaiveDate::parse_from_str(run, "%Y%m%d").ok())
        .collect()
}

pub fn evaluate_at(raw: &str, today: NaiveDate) -> DeadlineInfo {
    let dates = extract_dates(raw).unwrap_or_else(|| {
        log::debug!("Period {:?} holds an invalid date; treating as unspecified", raw);
        Vec::new()
    });
    let (status, d_day) = classify(&dates, today);
    DeadlineInfo {
        status,
        d_day,
        date_info: format_period(raw, &dates),
    }
}

fn classify(dates: &[NaiveDate], today: NaiveDate) -> (DeadlineStatus, String) {
    let (Some(start), Some(end)) = (dates.first(), dates.last()) else {
        return (DeadlineStatus::Open, LABEL_UNSPECIFIED.to_string());
    };

    // Both sides are plain dates, so this is already the ceiling of the day difference.
    let diff_days = (*end - today).num_days();

    if *start > today {
        (DeadlineStatus::Upcoming, LABEL_PENDING.to_string())
    } else if diff_days < 0 {
        (DeadlineStatus::Closed, LABEL_CLOSED.to_string())
    } else if diff_days == 0 {
        (DeadlineStatus::Open, LABEL_TODAY.to_string())
    } else if diff_days <= COUNTDOWN_WINDOW_DAYS {
        (DeadlineStatus::Open, format!("D-{}", diff_days))
    } else {
        (DeadlineStatus::Open, LABEL_OPEN.to_string())
    }
}

/// `YYYY.MM.DD ~ MM.DD` for a full two-date range, the original text otherwise.
fn format_period(raw: &str, dates: &[NaiveDate]) -> String {
    if raw.trim().is_empty() {
        return EMPTY_PERIOD_TEXT.to_string();
    }

    let significant = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '~' | '-'))
        .count();

    match dates {
        [start, .., end] if significant >= FULL_RANGE_LEN => {
            format!("{} ~ {}", start.format("%Y.%m.%d"), end.format("%m.%d"))
        }
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_calendar_dates_reject_the_period() {
        assert_eq!(extract_dates("20240201 ~ 20241399"), None);
        assert_eq!(extract_dates("no. 123456789 / 20240101").map(|d| d.len()), Some(1));
    }

    #[test]
    fn non_ascii_digits_are_not_dates() {
        // Fullwidth digits.
        assert_eq!(extract_dates("２０２４０２０１"), Some(Vec::new()));
    }
}
