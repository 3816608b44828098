//! # ec-time
//!
//! Ethiopian calendar arithmetic, date values, Ethiopian ⇄ Gregorian
//! conversion, and the headless calendar view.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Leap years, month lengths, and weekday propagation.
pub mod calendar_math;

/// "Today", with an overridable evaluation date.
pub mod clock;

/// `ViewConfig` — year bounds and fallbacks for the view.
pub mod config;

/// `CalendarConverter` trait and the built-in `JdnConverter`.
pub mod conversion;

/// `EthiopianDate` and `GregorianDate` values.
pub mod date;

/// `MonthGrid` — day cells of a month view.
pub mod grid;

/// `EthiopianMonth` — the thirteen months.
pub mod month;

/// `CalendarView` — navigation and selection state.
pub mod view;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar_math::{
    days_in_month, first_weekday_of_month, is_leap_year, new_year_weekday, year_structure,
    MonthSpan,
};
pub use clock::today;
pub use config::ViewConfig;
pub use conversion::{CalendarConverter, JdnConverter};
pub use date::{EthiopianDate, GregorianDate};
pub use grid::{build_month_grid, MonthGrid};
pub use month::EthiopianMonth;
pub use view::{CalendarView, DateSummary};
pub use weekday::Weekday;
