//! Ethiopian ⇄ Gregorian conversion.
//!
//! The view layer only depends on the [`CalendarConverter`] trait, so any
//! conversion service can be plugged in.  [`JdnConverter`] is the built-in
//! implementation: both calendars are mapped onto the Julian Day Number and
//! back.
//!
//! # Intercalation
//! `JdnConverter` follows the astronomical Ethiopian calendar, in which
//! Pagume has six days when `year mod 4 == 3`.  This is independent of
//! [`crate::calendar_math::is_leap_year`], which drives the month grid.

use ec_core::errors::{Error, Result};
use ec_core::{JulianDay, Year};

use crate::clock;
use crate::date::{EthiopianDate, GregorianDate};

/// Converts dates between the Ethiopian and Gregorian calendars.
///
/// Implementations report unsupported or non-existent input with
/// [`Error::ConversionFailed`].
pub trait CalendarConverter: std::fmt::Debug + Send + Sync {
    /// Ethiopian date falling on the given Gregorian date.
    fn to_ethiopian(&self, date: GregorianDate) -> Result<EthiopianDate>;

    /// Gregorian date falling on the given Ethiopian date.
    fn to_gregorian(&self, date: EthiopianDate) -> Result<GregorianDate>;

    /// Convert today's date (see [`clock::today`]) to the Ethiopian calendar.
    fn today_ethiopian(&self) -> Result<EthiopianDate> {
        self.to_ethiopian(clock::today())
    }
}

impl<C: CalendarConverter + ?Sized> CalendarConverter for &C {
    fn to_ethiopian(&self, date: GregorianDate) -> Result<EthiopianDate> {
        (**self).to_ethiopian(date)
    }

    fn to_gregorian(&self, date: EthiopianDate) -> Result<GregorianDate> {
        (**self).to_gregorian(date)
    }
}

/// JDN of 1 Meskerem 1 (Amete Mihret epoch): 29 August 8 CE Julian,
/// 27 August 8 proleptic Gregorian.
pub const ETHIOPIAN_EPOCH: JulianDay = 1_724_221;

/// Days in a four-year intercalation cycle.
const DAYS_PER_CYCLE: JulianDay = 1461;

/// Julian Day Number based converter.
///
/// Years of either calendar outside `[min_year, max_year]` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JdnConverter {
    min_year: Year,
    max_year: Year,
}

impl JdnConverter {
    /// Smallest year accepted by default.
    pub const MIN_YEAR: Year = 1;
    /// Largest year accepted by default.
    pub const MAX_YEAR: Year = 9999;

    /// Converter accepting years in `[MIN_YEAR, MAX_YEAR]`.
    pub fn new() -> Self {
        Self {
            min_year: Self::MIN_YEAR,
            max_year: Self::MAX_YEAR,
        }
    }

    /// Converter accepting years in `[min_year, max_year]` for both calendars.
    ///
    /// # Errors
    /// [`Error::Precondition`] if the range is empty or starts before year 1.
    pub fn with_year_range(min_year: Year, max_year: Year) -> Result<Self> {
        ec_core::ensure!(
            1 <= min_year && min_year <= max_year,
            "invalid converter year range [{min_year}, {max_year}]"
        );
        Ok(Self { min_year, max_year })
    }

    fn check_year(&self, calendar: &str, year: Year) -> Result<()> {
        if (self.min_year..=self.max_year).contains(&year) {
            Ok(())
        } else {
            Err(Error::ConversionFailed(format!(
                "{calendar} year {year} outside supported range [{}, {}]",
                self.min_year, self.max_year
            )))
        }
    }
}

impl Default for JdnConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarConverter for JdnConverter {
    fn to_ethiopian(&self, date: GregorianDate) -> Result<EthiopianDate> {
        self.check_year("Gregorian", date.year())?;
        let (year, month, day) = jdn_to_ethiopian(gregorian_to_jdn(date));
        self.check_year("Ethiopian", year)?;
        Ok(EthiopianDate::from_converter(year, month, day))
    }

    fn to_gregorian(&self, date: EthiopianDate) -> Result<GregorianDate> {
        self.check_year("Ethiopian", date.year())?;
        let pagume = astronomical_pagume_length(date.year());
        if date.month() == 13 && date.day() > pagume {
            return Err(Error::ConversionFailed(format!(
                "Pagume {} does not exist in Ethiopian year {} ({pagume} days)",
                date.day(),
                date.year()
            )));
        }
        let jdn = ethiopian_to_jdn(date.year(), date.month(), date.day());
        let (year, month, day) = jdn_to_gregorian(jdn);
        self.check_year("Gregorian", year)?;
        GregorianDate::new(year, month, day)
            .map_err(|e| Error::ConversionFailed(e.to_string()))
    }
}

// ── Julian Day Number arithmetic ──────────────────────────────────────────────

/// Length of Pagume under the astronomical intercalation.
pub fn astronomical_pagume_length(year: Year) -> u8 {
    if year.rem_euclid(4) == 3 {
        6
    } else {
        5
    }
}

/// JDN of a proleptic Gregorian date (Fliegel–Van Flandern).
pub fn gregorian_to_jdn(date: GregorianDate) -> JulianDay {
    let (y, m, d) = (
        date.year() as i64,
        date.month() as i64,
        date.day() as i64,
    );
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

/// Proleptic Gregorian (year, month, day) for a JDN.
pub fn jdn_to_gregorian(jdn: JulianDay) -> (Year, u8, u8) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as Year, month as u8, day as u8)
}

/// JDN of an Ethiopian date under the astronomical intercalation.
pub fn ethiopian_to_jdn(year: Year, month: u8, day: u8) -> JulianDay {
    let y = year as i64;
    ETHIOPIAN_EPOCH + 365 * (y - 1) + y.div_euclid(4) + 30 * (month as i64 - 1) + day as i64 - 1
}

/// Ethiopian (year, month, day) for a JDN under the astronomical
/// intercalation.
pub fn jdn_to_ethiopian(jdn: JulianDay) -> (Year, u8, u8) {
    let offset = jdn - ETHIOPIAN_EPOCH;
    let cycle = offset.div_euclid(DAYS_PER_CYCLE);
    let r = offset.rem_euclid(DAYS_PER_CYCLE);
    // Years 1, 2 and 4 of a cycle have 365 days; year 3 has 366.
    let (year_in_cycle, day_of_year) = match r {
        0..=364 => (0, r),
        365..=729 => (1, r - 365),
        730..=1095 => (2, r - 730),
        _ => (3, r - 1096),
    };
    let year = 4 * cycle + year_in_cycle + 1;
    (
        year as Year,
        (day_of_year / 30 + 1) as u8,
        (day_of_year % 30 + 1) as u8,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
