//! `MonthGrid` — the cells of a Sunday-first month view.
//!
//! A grid starts with one blank cell per weekday before day 1, followed by
//! the days of the month in order.  It is rebuilt from scratch on every call
//! and keeps no iteration state.

use ec_core::errors::Result;
use ec_core::{Size, Year};

use crate::calendar_math::{month_length, month_start_weekday, validate_month};
use crate::month::EthiopianMonth;
use crate::weekday::Weekday;

/// Number of columns in a grid row.
pub const DAYS_PER_WEEK: Size = 7;

/// Day cells for one Ethiopian month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthGrid {
    year: Year,
    month: EthiopianMonth,
    first_weekday: Weekday,
    cells: Vec<Option<u8>>,
}

impl MonthGrid {
    /// Year the grid belongs to.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Month the grid belongs to.
    pub fn month(&self) -> EthiopianMonth {
        self.month
    }

    /// Weekday of day 1.
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// All cells: `None` for the leading placeholders, then `Some(1)` …
    /// `Some(days)`.
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    /// Total number of cells.
    pub fn len(&self) -> Size {
        self.cells.len()
    }

    /// Always `false`: every month has at least five days.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of placeholder cells before day 1.
    pub fn leading_blanks(&self) -> Size {
        self.first_weekday.index() as Size
    }

    /// Number of days in the month.
    pub fn days(&self) -> u8 {
        (self.cells.len() - self.leading_blanks()) as u8
    }

    /// Rows of seven cells; the last row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u8>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Number of rows needed to display the grid.
    pub fn week_count(&self) -> Size {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }

    /// Cell index of `day`, or `None` if the month has no such day.
    pub fn position_of(&self, day: u8) -> Option<Size> {
        (1..=self.days())
            .contains(&day)
            .then(|| self.leading_blanks() + day as Size - 1)
    }

    /// Weekday of `day`, or `None` if the month has no such day.
    pub fn weekday_of(&self, day: u8) -> Option<Weekday> {
        self.position_of(day).map(|pos| Weekday::from_days(pos as i64))
    }
}

/// Build the grid for `month` of `year`.
///
/// # Errors
/// [`ec_core::Error::InvalidMonth`] if `month` is outside `[1, 13]`.
///
/// ```
/// use ec_time::grid::build_month_grid;
/// let grid = build_month_grid(2018, 1).unwrap();
/// assert_eq!(grid.len(), 34);
/// assert_eq!(grid.cells()[..5], [None, None, None, None, Some(1)]);
/// ```
pub fn build_month_grid(year: Year, month: u8) -> Result<MonthGrid> {
    validate_month(month).map(|m| month_grid(year, m))
}

/// Infallible form of [`build_month_grid`] for an already-typed month.
pub fn month_grid(year: Year, month: EthiopianMonth) -> MonthGrid {
    let first_weekday = month_start_weekday(year, month);
    let cells = std::iter::repeat(None)
        .take(first_weekday.index() as Size)
        .chain((1..=month_length(year, month)).map(Some))
        .collect();
    MonthGrid {
        year,
        month,
        first_weekday,
        cells,
    }
}
