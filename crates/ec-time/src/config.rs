//! `ViewConfig` — tunables for [`crate::view::CalendarView`].

use ec_core::errors::Result;
use ec_core::{ensure, Year};

/// Year bounds and fallbacks used by the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewConfig {
    /// Smallest year reachable through [`set_year`](crate::view::CalendarView::set_year).
    pub min_year: Year,
    /// Largest year reachable through [`set_year`](crate::view::CalendarView::set_year).
    pub max_year: Year,
    /// Year shown when today's date cannot be converted.
    pub fallback_year: Year,
}

impl ViewConfig {
    /// Default lower year bound.
    pub const DEFAULT_MIN_YEAR: Year = 1900;
    /// Default upper year bound.
    pub const DEFAULT_MAX_YEAR: Year = 2100;
    /// Default fallback year.
    pub const DEFAULT_FALLBACK_YEAR: Year = 2017;

    /// Set the year bounds.
    pub fn with_year_range(mut self, min_year: Year, max_year: Year) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Set the fallback year.
    pub fn with_fallback_year(mut self, year: Year) -> Self {
        self.fallback_year = year;
        self
    }

    /// Check that the bounds are ordered and contain the fallback year.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_year <= self.max_year,
            "min_year {} exceeds max_year {}",
            self.min_year,
            self.max_year
        );
        ensure!(
            (self.min_year..=self.max_year).contains(&self.fallback_year),
            "fallback_year {} outside [{}, {}]",
            self.fallback_year,
            self.min_year,
            self.max_year
        );
        Ok(())
    }

    /// Clamp `year` into `[min_year, max_year]`.
    pub fn clamp_year(&self, year: Year) -> Year {
        year.clamp(self.min_year, self.max_year)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_year: Self::DEFAULT_MIN_YEAR,
            max_year: Self::DEFAULT_MAX_YEAR,
            fallback_year: Self::DEFAULT_FALLBACK_YEAR,
        }
    }
}
