//! Ethiopian calendar arithmetic.
//!
//! Every function here is pure: the same inputs always give the same
//! outputs, nothing is cached, and nothing blocks.
//!
//! # Rules
//! * A year is a leap year when `year mod 4 == 0`.
//! * Months 1–12 have 30 days; Pagume (month 13) has 6 days in a leap year
//!   and 5 otherwise.
//! * New Year (1 Meskerem) of 2018 falls on a Thursday.  Every other New Year
//!   weekday follows from that anchor by counting the days of the years in
//!   between.

use ec_core::errors::{Error, Result};
use ec_core::Year;

use crate::month::EthiopianMonth;
use crate::weekday::Weekday;

/// Year whose New Year weekday is known.
pub const REFERENCE_YEAR: Year = 2018;

/// Weekday of 1 Meskerem [`REFERENCE_YEAR`].
pub const REFERENCE_NEW_YEAR_WEEKDAY: Weekday = Weekday::Thursday;

/// Length of months 1–12.
pub const DAYS_IN_ORDINARY_MONTH: u8 = 30;

/// Number of months in the Ethiopian year.
pub const MONTHS_IN_YEAR: u8 = 13;

/// Whether a given Ethiopian year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    year.rem_euclid(4) == 0
}

/// Number of days in the given Ethiopian year.
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Check that `month` lies in `[1, 13]`.
pub fn validate_month(month: u8) -> Result<EthiopianMonth> {
    EthiopianMonth::from_number(month).ok_or(Error::InvalidMonth(month as i64))
}

/// Number of days in a given Ethiopian month.
///
/// # Errors
/// [`Error::InvalidMonth`] if `month` is outside `[1, 13]`.
pub fn days_in_month(year: Year, month: u8) -> Result<u8> {
    let month = validate_month(month)?;
    Ok(month_length(year, month))
}

/// Infallible form of [`days_in_month`] for an already-typed month.
pub fn month_length(year: Year, month: EthiopianMonth) -> u8 {
    match month {
        EthiopianMonth::Pagume if is_leap_year(year) => 6,
        EthiopianMonth::Pagume => 5,
        _ => DAYS_IN_ORDINARY_MONTH,
    }
}

/// Leap years strictly before `year`, counted from an arbitrary origin.
/// Differences give the leap years in a half-open range.
fn leap_index(year: i64) -> i64 {
    (year - 1).div_euclid(4)
}

/// Signed day count from 1 Meskerem [`REFERENCE_YEAR`] to 1 Meskerem `year`.
///
/// Equal to the sum of [`days_in_year`] over `[REFERENCE_YEAR, year)` when
/// `year` is later, and minus the sum over `[year, REFERENCE_YEAR)` when it is
/// earlier.
pub fn days_from_reference(year: Year) -> i64 {
    let (y, r) = (year as i64, REFERENCE_YEAR as i64);
    365 * (y - r) + leap_index(y) - leap_index(r)
}

/// Weekday of 1 Meskerem of `year`.
///
/// Defined for every `i32`; the result is always normalized into Sunday …
/// Saturday.
///
/// ```
/// use ec_time::calendar_math::new_year_weekday;
/// use ec_time::Weekday;
/// assert_eq!(new_year_weekday(2018), Weekday::Thursday);
/// assert_eq!(new_year_weekday(2019), Weekday::Friday);
/// assert_eq!(new_year_weekday(2017), Weekday::Wednesday);
/// ```
pub fn new_year_weekday(year: Year) -> Weekday {
    REFERENCE_NEW_YEAR_WEEKDAY.advance(days_from_reference(year))
}

/// Weekday of day 1 of `month` in `year`.
///
/// Walks the weekday cursor forward from New Year by the length of each
/// preceding month.
///
/// # Errors
/// [`Error::InvalidMonth`] if `month` is outside `[1, 13]`.
pub fn first_weekday_of_month(year: Year, month: u8) -> Result<Weekday> {
    validate_month(month).map(|m| month_start_weekday(year, m))
}

/// Infallible form of [`first_weekday_of_month`] for an already-typed month.
pub fn month_start_weekday(year: Year, month: EthiopianMonth) -> Weekday {
    EthiopianMonth::ALL[..month.number() as usize - 1]
        .iter()
        .fold(new_year_weekday(year), |cursor, &m| {
            cursor.advance(month_length(year, m) as i64)
        })
}

/// Layout of one month within its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthSpan {
    /// The month.
    pub month: EthiopianMonth,
    /// Weekday of its first day.
    pub first_weekday: Weekday,
    /// Weekday of its last day.
    pub last_weekday: Weekday,
    /// Number of days.
    pub days: u8,
}

/// First and last weekday plus length of every month of `year`, in order.
pub fn year_structure(year: Year) -> Vec<MonthSpan> {
    let mut cursor = new_year_weekday(year);
    EthiopianMonth::ALL
        .iter()
        .map(|&month| {
            let days = month_length(year, month);
            let span = MonthSpan {
                month,
                first_weekday: cursor,
                last_weekday: cursor.advance(days as i64 - 1),
                days,
            };
            cursor = cursor.advance(days as i64);
            span
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2016));
        assert!(!is_leap_year(2015));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-3));
        assert_eq!(days_in_year(2020), 366);
        assert_eq!(days_in_year(2021), 365);
    }

    #[test]
    fn month_lengths() {
        for m in 1..=12 {
            assert_eq!(days_in_month(2015, m), Ok(30));
        }
        assert_eq!(days_in_month(2016, 13), Ok(6));
        assert_eq!(days_in_month(2015, 13), Ok(5));
        assert_eq!(days_in_month(2015, 0), Err(Error::InvalidMonth(0)));
        assert_eq!(days_in_month(2015, 14), Err(Error::InvalidMonth(14)));
    }

    #[test]
    fn reference_anchor() {
        assert_eq!(days_from_reference(REFERENCE_YEAR), 0);
        assert_eq!(new_year_weekday(2018).index(), 4);
        assert_eq!(days_from_reference(2019), 365);
        assert_eq!(days_from_reference(2017), -365);
        assert_eq!(days_from_reference(2016), -731);
        assert_eq!(new_year_weekday(2016), Weekday::Monday);
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert_eq!(
            new_year_weekday(i32::MIN + 1),
            new_year_weekday(i32::MIN).advance(days_in_year(i32::MIN) as i64)
        );
        assert_eq!(
            new_year_weekday(i32::MAX),
            new_year_weekday(i32::MAX - 1).advance(days_in_year(i32::MAX - 1) as i64)
        );
    }

    #[test]
    fn first_weekday_walk() {
        // 2018: Thursday, then each 30-day month shifts the start by two days.
        assert_eq!(first_weekday_of_month(2018, 1), Ok(Weekday::Thursday));
        assert_eq!(first_weekday_of_month(2018, 2), Ok(Weekday::Saturday));
        assert_eq!(first_weekday_of_month(2018, 13), Ok(Weekday::Sunday));
        assert_eq!(first_weekday_of_month(2018, 14), Err(Error::InvalidMonth(14)));
    }

    #[test]
    fn year_structure_chains() {
        let spans = year_structure(2018);
        assert_eq!(spans.len(), MONTHS_IN_YEAR as usize);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].last_weekday.advance(1), pair[1].first_weekday);
        }
        let pagume = spans[12];
        assert_eq!(pagume.days, 5);
        assert_eq!(pagume.last_weekday.advance(1), new_year_weekday(2019));
    }
}
