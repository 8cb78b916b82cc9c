//! Month-end calendar arithmetic for the synthetic date index

use chrono::{Duration, NaiveDate};

/// First calendar month covered by the raw table.
pub const EPOCH_YEAR: i32 = 2014;
/// Month number (1-based) of the epoch.
pub const EPOCH_MONTH: u32 = 1;

/// Last day of the given calendar month.
pub fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
}

/// Month-end dates for `periods` consecutive months starting at
/// (`start_year`, `start_month`). The sequence is strictly increasing with a
/// step of exactly one calendar month.
pub fn month_ends(start_year: i32, start_month: u32, periods: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(periods);
    let mut year = start_year;
    let mut month = start_month;

    for _ in 0..periods {
        dates.push(month_end(year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    dates
}

/// Month-end dates from the fixed epoch, one per value column of the raw
/// table.
pub fn epoch_index(periods: usize) -> Vec<NaiveDate> {
    month_ends(EPOCH_YEAR, EPOCH_MONTH, periods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_end() {
        assert_eq!(month_end(2014, 1), NaiveDate::from_ymd_opt(2014, 1, 31).unwrap());
        assert_eq!(month_end(2014, 2), NaiveDate::from_ymd_opt(2014, 2, 28).unwrap());
        assert_eq!(month_end(2016, 2), NaiveDate::from_ymd_opt(2016, 2, 29).unwrap());
        assert_eq!(month_end(2024, 12), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_month_ends_crosses_year_boundary() {
        let dates = month_ends(2014, 11, 4);
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2014, 11, 30).unwrap(),
                NaiveDate::from_ymd_opt(2014, 12, 31).unwrap(),
                NaiveDate::from_ymd_opt(2015, 1, 31).unwrap(),
                NaiveDate::from_ymd_opt(2015, 2, 28).unwrap(),
            ]
        );
    }

    #[test]
    fn test_epoch_index_starts_at_2014_01() {
        let dates = epoch_index(3);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2014, 1, 31).unwrap());
        assert_eq!(dates.len(), 3);
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
