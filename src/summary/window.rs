//! Date-window derivation for the summary endpoints.

use rusqlite::Connection;
use time::{Date, Duration, Month};

use crate::Error;

/// A half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SummaryWindow {
    /// The first date inside the window.
    pub start: Date,
    /// The first date past the end of the window.
    pub end: Date,
}

/// Compute the window covering one calendar month.
///
/// The window runs from the first day of the month up to, but excluding, the
/// first day of the following month, rolling over to January of the next
/// year after December.
///
/// # Errors
/// Returns an [Error::InvalidMonth] if `month` is outside 1-12, or an
/// [Error::InvalidYear] if `year` is outside the supported calendar range.
pub(crate) fn month_window(year: i32, month: u8) -> Result<SummaryWindow, Error> {
    let month = Month::try_from(month).map_err(|_| Error::InvalidMonth(month))?;

    let start =
        Date::from_calendar_date(year, month, 1).map_err(|_| Error::InvalidYear(year))?;
    let end = match month {
        Month::December => Date::from_calendar_date(year + 1, Month::January, 1),
        month => Date::from_calendar_date(year, month.next(), 1),
    }
    .map_err(|_| Error::InvalidYear(year))?;

    Ok(SummaryWindow { start, end })
}

/// Compute the window covering one week under `%W`-style numbering.
///
/// Week 1 begins on the year's first Monday, weeks advance by 7 days, and
/// week 0 begins on the Monday on or before January 1, which may fall in the
/// previous year. When January 1 is a Monday, weeks 0 and 1 coincide.
///
/// # Errors
/// Returns an [Error::InvalidYear] if `year`, or the requested week within
/// it, is outside the supported calendar range.
pub(crate) fn week_window(year: i32, week: u8) -> Result<SummaryWindow, Error> {
    let jan_1 =
        Date::from_calendar_date(year, Month::January, 1).map_err(|_| Error::InvalidYear(year))?;
    let weekday_offset = jan_1.weekday().number_days_from_monday() as i64;

    let start = match week {
        0 => jan_1.checked_sub(Duration::days(weekday_offset)),
        week => {
            let days_to_first_monday = (7 - weekday_offset) % 7;
            jan_1.checked_add(Duration::days(
                days_to_first_monday + 7 * (week as i64 - 1),
            ))
        }
    }
    .ok_or(Error::InvalidYear(year))?;
    let end = start
        .checked_add(Duration::days(7))
        .ok_or(Error::InvalidYear(year))?;

    Ok(SummaryWindow { start, end })
}

/// Compute the inclusive date range covering the calendar month before the
/// one containing `today`.
///
/// Both endpoints are inclusive, unlike [SummaryWindow].
pub(crate) fn last_month_bounds(today: Date) -> (Date, Date) {
    let first_day_this_month = today.replace_day(1).expect("day 1 is valid in every month");
    let last_day_last_month = first_day_this_month - Duration::days(1);
    let first_day_last_month = last_day_last_month
        .replace_day(1)
        .expect("day 1 is valid in every month");

    (first_day_last_month, last_day_last_month)
}

/// Sum expense amounts over the half-open window `[start, end)`.
///
/// Returns 0.0 when no expenses fall inside the window.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub(crate) fn sum_amounts_in_window(
    window: SummaryWindow,
    connection: &Connection,
) -> Result<f64, Error> {
    connection
        .query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM expense WHERE date >= ?1 AND date < ?2",
            [window.start, window.end],
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{SummaryWindow, last_month_bounds, month_window, week_window};

    #[test]
    fn month_window_covers_calendar_month() {
        let window = month_window(2025, 6).unwrap();

        assert_eq!(
            window,
            SummaryWindow {
                start: date!(2025 - 06 - 01),
                end: date!(2025 - 07 - 01),
            }
        );
    }

    #[test]
    fn month_window_rolls_over_after_december() {
        let window = month_window(2025, 12).unwrap();

        assert_eq!(
            window,
            SummaryWindow {
                start: date!(2025 - 12 - 01),
                end: date!(2026 - 01 - 01),
            }
        );
    }

    #[test]
    fn month_window_rejects_invalid_month() {
        assert_eq!(month_window(2025, 0), Err(Error::InvalidMonth(0)));
        assert_eq!(month_window(2025, 13), Err(Error::InvalidMonth(13)));
    }

    #[test]
    fn week_one_starts_on_first_monday() {
        // 2025-01-01 is a Wednesday, so the first Monday is January 6.
        let window = week_window(2025, 1).unwrap();

        assert_eq!(window.start, date!(2025 - 01 - 06));
        assert_eq!(window.end, date!(2025 - 01 - 13));
    }

    #[test]
    fn week_one_is_january_first_when_year_starts_on_monday() {
        // 2024-01-01 is a Monday.
        let window = week_window(2024, 1).unwrap();

        assert_eq!(window.start, date!(2024 - 01 - 01));
    }

    #[test]
    fn week_zero_starts_in_previous_year() {
        // 2025-01-01 is a Wednesday, so week 0 starts on Monday 2024-12-30.
        let window = week_window(2025, 0).unwrap();

        assert_eq!(window.start, date!(2024 - 12 - 30));
        assert_eq!(window.end, date!(2025 - 01 - 06));
    }

    #[test]
    fn week_zero_coincides_with_week_one_when_year_starts_on_monday() {
        assert_eq!(week_window(2024, 0), week_window(2024, 1));
    }

    #[test]
    fn weeks_advance_by_seven_days() {
        // Week 23 of 2025: 22 weeks after Monday 2025-01-06.
        let window = week_window(2025, 23).unwrap();

        assert_eq!(window.start, date!(2025 - 06 - 09));
        assert_eq!(window.end, date!(2025 - 06 - 16));
    }

    #[test]
    fn last_month_bounds_cover_previous_month() {
        let (first_day, last_day) = last_month_bounds(date!(2025 - 07 - 15));

        assert_eq!(first_day, date!(2025 - 06 - 01));
        assert_eq!(last_day, date!(2025 - 06 - 30));
    }

    #[test]
    fn last_month_bounds_roll_back_to_previous_year() {
        let (first_day, last_day) = last_month_bounds(date!(2025 - 01 - 10));

        assert_eq!(first_day, date!(2024 - 12 - 01));
        assert_eq!(last_day, date!(2024 - 12 - 31));
    }

    #[test]
    fn last_month_bounds_handle_leap_february() {
        let (first_day, last_day) = last_month_bounds(date!(2024 - 03 - 05));

        assert_eq!(first_day, date!(2024 - 02 - 01));
        assert_eq!(last_day, date!(2024 - 02 - 29));
    }
}
