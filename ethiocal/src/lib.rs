//! # ethiocal
//!
//! Ethiopian calendar arithmetic and date-picker state.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ec-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ethiocal = "0.1"
//! ```
//!
//! ```rust
//! use ethiocal::time::{build_month_grid, days_in_month, new_year_weekday, Weekday};
//!
//! assert_eq!(new_year_weekday(2018), Weekday::Thursday);
//! assert_eq!(days_in_month(2016, 13).unwrap(), 6);
//!
//! let grid = build_month_grid(2018, 1).unwrap();
//! assert_eq!(grid.leading_blanks(), 4);
//! assert_eq!(grid.len(), 34);
//! ```
//!
//! Picking a date through the headless view:
//!
//! ```rust
//! use ethiocal::time::{CalendarView, GregorianDate, ViewConfig};
//!
//! let mut view = CalendarView::with_default_converter(ViewConfig::default()).unwrap();
//! view.set_year(2018);
//! view.select_month(1).unwrap();
//! let picked = view.select_day(1).unwrap();
//! assert_eq!(picked, GregorianDate::new(2025, 9, 11).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings, and error definitions.
pub use ec_core as core;

/// Calendar arithmetic, dates, conversion, and the calendar view.
pub use ec_time as time;
