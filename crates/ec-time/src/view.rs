//! `CalendarView` — headless state behind the Ethiopian date picker.
//!
//! The view owns the navigation state (current year, selected month, selected
//! Gregorian date) and recomputes everything else from
//! [`crate::calendar_math`] and its [`CalendarConverter`] on every query.
//! Rendering is left to the caller: [`CalendarView::grid`] provides the cells,
//! the `is_*` predicates provide highlighting, and [`CalendarView::select_day`]
//! returns the Gregorian date to hand upward.
//!
//! Every failing operation leaves the view exactly as it was.

use ec_core::errors::{Error, Result};
use ec_core::Year;
use tracing::{debug, warn};

use crate::calendar_math::{self, year_structure};
use crate::clock;
use crate::config::ViewConfig;
use crate::conversion::{CalendarConverter, JdnConverter};
use crate::date::{EthiopianDate, GregorianDate};
use crate::grid::{month_grid, MonthGrid};
use crate::month::EthiopianMonth;

/// Navigation and selection state of the calendar widget.
#[derive(Debug, Clone)]
pub struct CalendarView<C: CalendarConverter = JdnConverter> {
    config: ViewConfig,
    converter: C,
    year: Year,
    selected_month: Option<EthiopianMonth>,
    selected_date: Option<GregorianDate>,
}

impl CalendarView<JdnConverter> {
    /// View backed by the default [`JdnConverter`].
    pub fn with_default_converter(config: ViewConfig) -> Result<Self> {
        Self::new(config, JdnConverter::new())
    }
}

impl<C: CalendarConverter> CalendarView<C> {
    /// Create a view showing the Ethiopian year of today.
    ///
    /// If today's date cannot be converted, the view starts at
    /// `config.fallback_year`.
    ///
    /// # Errors
    /// [`Error::Precondition`] if `config` is inconsistent.
    pub fn new(config: ViewConfig, converter: C) -> Result<Self> {
        config.validate()?;
        let year = match converter.today_ethiopian() {
            Ok(today) => today.year(),
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = config.fallback_year,
                    "cannot convert today; using fallback year"
                );
                config.fallback_year
            }
        };
        Ok(Self {
            config,
            converter,
            year,
            selected_month: None,
            selected_date: None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The year currently shown.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The month currently shown, or `None` on the month picker.
    pub fn selected_month(&self) -> Option<EthiopianMonth> {
        self.selected_month
    }

    /// The Gregorian date last selected.
    pub fn selected_date(&self) -> Option<GregorianDate> {
        self.selected_date
    }

    /// The configuration in use.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The converter in use.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    /// Step back one year.
    pub fn previous_year(&mut self) {
        self.year = self.year.saturating_sub(1);
        debug!(year = self.year, "previous year");
    }

    /// Step forward one year.
    pub fn next_year(&mut self) {
        self.year = self.year.saturating_add(1);
        debug!(year = self.year, "next year");
    }

    /// Jump to `year`, clamped into the configured range.
    pub fn set_year(&mut self, year: Year) {
        self.year = self.config.clamp_year(year);
        if self.year != year {
            debug!(requested = year, year = self.year, "year clamped");
        }
    }

    /// Open the day grid for `month`.
    ///
    /// # Errors
    /// [`Error::InvalidMonth`] if `month` is outside `[1, 13]`.
    pub fn select_month(&mut self, month: u8) -> Result<()> {
        let month = calendar_math::validate_month(month)?;
        self.selected_month = Some(month);
        self.log_year_structure();
        Ok(())
    }

    /// Return to the month picker.
    pub fn back_to_months(&mut self) {
        self.selected_month = None;
    }

    /// Advance to the next month of the same year.
    ///
    /// Returns `false` (and changes nothing) on Pagume or when no month is
    /// open.
    pub fn next_month(&mut self) -> bool {
        match self.selected_month.and_then(|m| m.next()) {
            Some(next) => {
                self.selected_month = Some(next);
                true
            }
            None => false,
        }
    }

    /// Navigate to today's month and select today.
    ///
    /// # Errors
    /// [`Error::ConversionFailed`] if today's date cannot be converted.
    #[tracing::instrument(skip(self))]
    pub fn go_to_today(&mut self) -> Result<GregorianDate> {
        let today = clock::today();
        let ethiopian = self
            .converter
            .to_ethiopian(today)
            .map_err(as_conversion_failure)?;
        self.year = ethiopian.year();
        self.selected_month = Some(ethiopian.month_enum());
        self.selected_date = Some(today);
        debug!(ethiopian = %ethiopian, gregorian = %today, "navigated to today");
        Ok(today)
    }

    // ── Grid & selection ──────────────────────────────────────────────────────

    /// Cells of the open month, or `None` on the month picker.
    pub fn grid(&self) -> Option<MonthGrid> {
        self.selected_month.map(|m| month_grid(self.year, m))
    }

    /// Header label of the open month, e.g. `"መስከረም 2018"`.
    pub fn month_label(&self) -> Option<String> {
        self.selected_month
            .map(|m| format!("{} {}", m.amharic_name(), self.year))
    }

    /// Select `day` of the open month and return its Gregorian date.
    ///
    /// # Errors
    /// * [`Error::Precondition`] if no month is open.
    /// * [`Error::InvalidDate`] if the month has no such day.
    /// * [`Error::ConversionFailed`] if the converter rejects the date.
    #[tracing::instrument(skip(self), fields(year = self.year))]
    pub fn select_day(&mut self, day: u8) -> Result<GregorianDate> {
        let Some(month) = self.selected_month else {
            return Err(Error::Precondition(
                "a month must be open before selecting a day".into(),
            ));
        };
        let ethiopian = EthiopianDate::new(self.year, month.number(), day)?;
        let gregorian = match self.converter.to_gregorian(ethiopian) {
            Ok(date) => date,
            Err(e) => {
                let e = as_conversion_failure(e);
                warn!(ethiopian = %ethiopian, error = %e, "selection rejected");
                return Err(e);
            }
        };
        self.selected_date = Some(gregorian);
        debug!(ethiopian = %ethiopian, gregorian = %gregorian, "date selected");
        Ok(gregorian)
    }

    /// Replace the selected date from outside (form binding).
    pub fn set_selected_date(&mut self, date: Option<GregorianDate>) {
        self.selected_date = date;
    }

    /// `true` if `day` of the open month is the selected date.
    pub fn is_selected(&self, day: u8) -> bool {
        self.selected_date
            .is_some_and(|date| self.falls_on(date, day))
    }

    /// `true` if `day` of the open month is today.
    pub fn is_today(&self, day: u8) -> bool {
        self.falls_on(clock::today(), day)
    }

    /// Summary of the selected date, or `None` if nothing is selected.
    pub fn selected_summary(&self) -> Option<Result<DateSummary>> {
        self.selected_date.map(|date| DateSummary::from_gregorian(date, &self.converter))
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn falls_on(&self, date: GregorianDate, day: u8) -> bool {
        let Some(month) = self.selected_month else {
            return false;
        };
        self.converter.to_ethiopian(date).is_ok_and(|e| {
            e.year() == self.year && e.month() == month.number() && e.day() == day
        })
    }

    fn log_year_structure(&self) {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        for span in year_structure(self.year) {
            debug!(
                year = self.year,
                month = span.month.name(),
                first = %span.first_weekday,
                last = %span.last_weekday,
                days = span.days,
                "month layout"
            );
        }
    }
}

fn as_conversion_failure(e: Error) -> Error {
    match e {
        Error::ConversionFailed(_) => e,
        other => Error::ConversionFailed(other.to_string()),
    }
}

// ── DateSummary ───────────────────────────────────────────────────────────────

/// A selected date shown in both calendars, with the details of its
/// Ethiopian month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateSummary {
    /// The date in the Ethiopian calendar.
    pub ethiopian: EthiopianDate,
    /// The date in the Gregorian calendar.
    pub gregorian: GregorianDate,
    /// Ethiopian month of the date.
    pub month: EthiopianMonth,
    /// Length of that month.
    pub days_in_month: u8,
    /// Whether the Ethiopian year is a leap year.
    pub is_leap_year: bool,
}

impl DateSummary {
    /// Summarize `date` using `converter`.
    ///
    /// # Errors
    /// [`Error::ConversionFailed`] if the converter rejects the date.
    pub fn from_gregorian<C: CalendarConverter + ?Sized>(
        date: GregorianDate,
        converter: &C,
    ) -> Result<Self> {
        let ethiopian = converter
            .to_ethiopian(date)
            .map_err(as_conversion_failure)?;
        let month = ethiopian.month_enum();
        Ok(Self {
            ethiopian,
            gregorian: date,
            month,
            days_in_month: calendar_math::month_length(ethiopian.year(), month),
            is_leap_year: calendar_math::is_leap_year(ethiopian.year()),
        })
    }
}

impl std::fmt::Display for DateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.ethiopian, self.gregorian)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
