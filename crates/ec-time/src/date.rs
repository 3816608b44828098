//! Ethiopian and Gregorian date values.
//!
//! Both types are plain `Copy` values compared structurally.  Constructors
//! validate the day against the month length of their own calendar; for the
//! Ethiopian calendar that is [`calendar_math::days_in_month`].

use chrono::{Datelike, NaiveDate};
use ec_core::errors::{Error, Result};
use ec_core::Year;

use crate::calendar_math::{self, month_start_weekday};
use crate::conversion::gregorian_to_jdn;
use crate::month::EthiopianMonth;
use crate::weekday::Weekday;

// ── EthiopianDate ─────────────────────────────────────────────────────────────

/// A day in the Ethiopian calendar.
///
/// Deserialized values are checked like converter output: month in
/// `[1, 13]`, day in `[1, 30]`, and at most six Pagume days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDate"))]
pub struct EthiopianDate {
    year: Year,
    month: u8,
    day: u8,
}

impl EthiopianDate {
    /// Create a date, checking the month and the day-of-month.
    ///
    /// # Errors
    /// * [`Error::InvalidMonth`] if `month` is outside `[1, 13]`.
    /// * [`Error::InvalidDate`] if `day` is outside
    ///   `[1, days_in_month(year, month)]`.
    pub fn new(year: Year, month: u8, day: u8) -> Result<Self> {
        let days_in = calendar_math::days_in_month(year, month)?;
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for Ethiopian {year}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Create a date whose fields were produced by a calendar converter.
    ///
    /// The month must already be in `[1, 13]` and the day in `[1, 30]`; the
    /// Pagume length is not rechecked because converters may follow a
    /// different intercalation than [`calendar_math::is_leap_year`].
    pub(crate) fn from_converter(year: Year, month: u8, day: u8) -> Self {
        debug_assert!((1..=13).contains(&month) && (1..=30).contains(&day));
        Self { year, month, day }
    }

    /// Create a date accepted by some intercalation: at most six Pagume days
    /// whatever the year.
    ///
    /// # Errors
    /// * [`Error::InvalidMonth`] if `month` is outside `[1, 13]`.
    /// * [`Error::InvalidDate`] if `day` is outside `[1, 30]`, or `[1, 6]`
    ///   for Pagume.
    pub fn from_any_intercalation(year: Year, month: u8, day: u8) -> Result<Self> {
        let max_day = if calendar_math::validate_month(month)?.is_epagomenal() {
            6
        } else {
            calendar_math::DAYS_IN_ORDINARY_MONTH
        };
        if day == 0 || day > max_day {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {max_day}] for Ethiopian {year}-{month:02}"
            )));
        }
        Ok(Self::from_converter(year, month, day))
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–13).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the month as an [`EthiopianMonth`].
    pub fn month_enum(&self) -> EthiopianMonth {
        EthiopianMonth::ALL[self.month as usize - 1]
    }

    /// Weekday of this date, propagated from the New Year anchor.
    pub fn weekday(&self) -> Weekday {
        month_start_weekday(self.year, self.month_enum()).advance(self.day as i64 - 1)
    }
}

impl std::fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_enum(), self.year)
    }
}

// ── GregorianDate ─────────────────────────────────────────────────────────────

/// A day in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDate"))]
pub struct GregorianDate {
    year: Year,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if the month or day does not exist.
    pub fn new(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = gregorian_days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // JDN 0 was a Monday.
        Weekday::from_days(gregorian_to_jdn(*self) + 1)
    }

    /// Convert to a `chrono` date, or `None` if outside chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month() as u8,
            day: d.day() as u8,
        }
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

// ── Deserialization ───────────────────────────────────────────────────────────

/// Unchecked wire form shared by both date types.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDate {
    year: Year,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDate> for EthiopianDate {
    type Error = Error;

    fn try_from(raw: RawDate) -> Result<Self> {
        Self::from_any_intercalation(raw.year, raw.month, raw.day)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawDate> for GregorianDate {
    type Error = Error;

    fn try_from(raw: RawDate) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

// ── Gregorian helpers ─────────────────────────────────────────────────────────

/// Whether a given Gregorian year is a leap year.
pub fn is_gregorian_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given Gregorian month/year.
pub fn gregorian_days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
