//! Monday to Sunday weeks.

use chrono::{Datelike, Days, Local, NaiveDate};

pub const DAYS_IN_WEEK: usize = 7;

/// The Monday of the week containing `date`.
///
/// Sunday is the last day of a week, so a Sunday resolves to the Monday six
/// days before it.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Days::new(u64::from(offset))
}

/// The seven dates of the week containing `date`, Monday first.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; DAYS_IN_WEEK] {
    let monday = week_anchor(date);
    std::array::from_fn(|i| monday + Days::new(i as u64))
}

pub fn is_same_week(a: NaiveDate, b: NaiveDate) -> bool {
    week_anchor(a) == week_anchor(b)
}

/// Moves `date` by whole weeks, backwards when `weeks` is negative.
///
/// `None` when the result falls outside the supported calendar range.
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    let days = Days::new(weeks.unsigned_abs().checked_mul(DAYS_IN_WEEK as u64)?);

    if weeks >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// e.g. `Mon, Jun 3`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sunday_belongs_to_previous_monday() {
        assert_eq!(week_anchor(ymd(2024, 6, 2)), ymd(2024, 5, 27));
    }

    #[test]
    fn test_anchor_for_every_weekday() {
        // 2024-06-03 is a Monday
        for d in 3..=9 {
            assert_eq!(week_anchor(ymd(2024, 6, d)), ymd(2024, 6, 3));
        }
        assert_eq!(week_anchor(ymd(2024, 6, 10)), ymd(2024, 6, 10));
    }

    #[test]
    fn test_anchor_across_year_boundary() {
        // 2025-01-01 is a Wednesday
        assert_eq!(week_anchor(ymd(2025, 1, 1)), ymd(2024, 12, 30));
    }

    #[test]
    fn test_week_dates() {
        let week = week_dates(ymd(2024, 6, 2));
        assert_eq!(week[0], ymd(2024, 5, 27));
        assert_eq!(week[6], ymd(2024, 6, 2));
        assert!(week.windows(2).all(|w| w[1] == w[0] + Days::new(1)));
    }

    #[test]
    fn test_same_week() {
        assert!(is_same_week(ymd(2024, 5, 27), ymd(2024, 6, 2)));
        assert!(!is_same_week(ymd(2024, 6, 2), ymd(2024, 6, 3)));
    }

    #[test]
    fn test_shift_weeks() {
        assert_eq!(shift_weeks(ymd(2024, 6, 3), 1), Some(ymd(2024, 6, 10)));
        assert_eq!(shift_weeks(ymd(2024, 6, 3), -1), Some(ymd(2024, 5, 27)));
        assert_eq!(shift_weeks(ymd(2024, 6, 3), 0), Some(ymd(2024, 6, 3)));
    }

    #[test]
    fn test_shift_weeks_out_of_range() {
        assert_eq!(shift_weeks(ymd(2024, 6, 3), i64::MAX), None);
        assert_eq!(shift_weeks(ymd(2024, 6, 3), i64::MIN), None);
        assert_eq!(shift_weeks(NaiveDate::MAX, 1), None);
        assert_eq!(shift_weeks(NaiveDate::MIN, -1), None);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(format_display_date(ymd(2024, 6, 3)), "Mon, Jun 3");
        assert_eq!(format_display_date(ymd(2024, 12, 25)), "Wed, Dec 25");
    }
}
