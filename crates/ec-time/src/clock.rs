//! "Today", honouring the evaluation date in [`ec_core::Settings`].

use chrono::Local;
use ec_core::{ScopedEvaluationDate, Settings};

use crate::conversion::{gregorian_to_jdn, jdn_to_gregorian};
use crate::date::GregorianDate;

/// Today's Gregorian date.
///
/// Returns the evaluation date from [`Settings`] when one is set, otherwise
/// the local wall-clock date.
pub fn today() -> GregorianDate {
    match Settings::instance().evaluation_date_jdn() {
        Some(jdn) => {
            let (y, m, d) = jdn_to_gregorian(jdn);
            GregorianDate::new(y, m, d)
                .unwrap_or_else(|_| Local::now().date_naive().into())
        }
        None => Local::now().date_naive().into(),
    }
}

/// Pin [`today`] to `date` until the returned guard is dropped.
pub fn pin_today(date: GregorianDate) -> ScopedEvaluationDate {
    ScopedEvaluationDate::new(gregorian_to_jdn(date))
}
