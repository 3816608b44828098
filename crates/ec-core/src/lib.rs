//! # ec-core
//!
//! Core types and error definitions for ethiocal.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: type aliases, the error enum with its `ensure!` macro, and the
//! process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year (Ethiopian or Gregorian).  Any integer is accepted by the
/// arithmetic; range limits are applied by the view and the converters.
pub type Year = i32;

/// A continuous day count (Julian Day Number, day starting at noon UT).
pub type JulianDay = i64;

/// Alias used for grid sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
