//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**: an optional override for
//! "today", stored as a Julian Day Number.  When unset, callers fall back to
//! the local wall-clock date.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Tests that change it should do so through
//! [`ScopedEvaluationDate`], which restores the previous value on drop.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::JulianDay;

/// Process-wide settings used by ethiocal.
pub struct Settings {
    evaluation_date: Mutex<Option<JulianDay>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<JulianDay>> {
        // The guarded value is a plain `Option`, so a poisoned lock still
        // holds a consistent value.
        self.evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the evaluation date as a Julian Day Number, or `None` if the
    /// wall clock should be used.
    pub fn evaluation_date_jdn(&self) -> Option<JulianDay> {
        *self.slot()
    }

    /// Pin "today" to the given Julian Day Number.
    pub fn set_evaluation_date_jdn(&self, jdn: JulianDay) {
        *self.slot() = Some(jdn);
    }

    /// Clear the evaluation date, resetting it to "use the wall clock".
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// RAII guard that pins the evaluation date and restores the previous value
/// when dropped.
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<JulianDay>,
}

impl ScopedEvaluationDate {
    /// Pin the evaluation date to `jdn` for the lifetime of the guard.
    pub fn new(jdn: JulianDay) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_jdn();
        settings.set_evaluation_date_jdn(jdn);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(jdn) => settings.set_evaluation_date_jdn(jdn),
            None => settings.reset_evaluation_date(),
        }
    }
}
