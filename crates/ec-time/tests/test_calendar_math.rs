//! Laws of the Ethiopian calendar arithmetic.
//!
//! The table-driven tests pin the reference scenarios; the `proptest` blocks
//! check the recurrence laws over the whole `i32` year range.

use ec_core::Error;
use ec_time::calendar_math::{
    days_in_month, days_in_year, first_weekday_of_month, is_leap_year, new_year_weekday,
    year_structure, REFERENCE_YEAR,
};
use ec_time::grid::build_month_grid;
use ec_time::Weekday;
use proptest::prelude::*;

/// New Year weekday obtained by walking year by year from the anchor.
fn walked_new_year_weekday(year: i32) -> Weekday {
    let mut w = Weekday::Thursday;
    if year >= REFERENCE_YEAR {
        for y in REFERENCE_YEAR..year {
            w = w.advance(days_in_year(y) as i64);
        }
    } else {
        for y in year..REFERENCE_YEAR {
            w = w.advance(-(days_in_year(y) as i64));
        }
    }
    w
}

// ─── Reference scenarios ──────────────────────────────────────────────────────

#[test]
fn meskerem_2018() {
    assert_eq!(new_year_weekday(2018).index(), 4);
    assert_eq!(first_weekday_of_month(2018, 1).unwrap().index(), 4);
    assert_eq!(days_in_month(2018, 1).unwrap(), 30);

    let grid = build_month_grid(2018, 1).unwrap();
    assert_eq!(grid.len(), 34);
    assert!(grid.cells()[..4].iter().all(Option::is_none));
    assert_eq!(grid.cells()[4], Some(1));
    assert_eq!(grid.cells()[33], Some(30));
}

#[test]
fn pagume_lengths() {
    assert!(is_leap_year(2016));
    assert_eq!(days_in_month(2016, 13).unwrap(), 6);
    assert!(!is_leap_year(2015));
    assert_eq!(days_in_month(2015, 13).unwrap(), 5);
}

#[test]
fn symmetry_around_reference_year() {
    let back = new_year_weekday(2017);
    let fwd = new_year_weekday(2019);
    assert_eq!(back.advance(days_in_year(2017) as i64), new_year_weekday(2018));
    assert_eq!(new_year_weekday(2018).advance(days_in_year(2018) as i64), fwd);
    assert_eq!(back.advance((days_in_year(2017) + days_in_year(2018)) as i64), fwd);
    assert_eq!(back, Weekday::Wednesday);
    assert_eq!(fwd, Weekday::Friday);
}

#[test]
fn closed_form_matches_year_walk() {
    for year in 1900..=2100 {
        assert_eq!(
            new_year_weekday(year),
            walked_new_year_weekday(year),
            "New Year weekday mismatch for {year}"
        );
    }
}

#[test]
fn invalid_months_fail_everywhere() {
    for month in [0u8, 14, 15, 255] {
        let err = Error::InvalidMonth(month as i64);
        assert_eq!(days_in_month(2018, month), Err(err.clone()));
        assert_eq!(first_weekday_of_month(2018, month), Err(err.clone()));
        assert_eq!(build_month_grid(2018, month).unwrap_err(), err);
    }
}

#[test]
fn year_structure_ends_where_next_year_begins() {
    for year in 2010..=2020 {
        let spans = year_structure(year);
        let total: u16 = spans.iter().map(|s| s.days as u16).sum();
        assert_eq!(total, days_in_year(year));
        let last = spans.last().unwrap();
        assert_eq!(last.last_weekday.advance(1), new_year_weekday(year + 1));
    }
}

// ─── Property tests ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn leap_rule(y in any::<i32>()) {
        prop_assert_eq!(is_leap_year(y), y % 4 == 0);
    }

    #[test]
    fn ordinary_months_have_thirty_days(y in any::<i32>(), m in 1u8..=12) {
        prop_assert_eq!(days_in_month(y, m), Ok(30));
    }

    #[test]
    fn pagume_length(y in any::<i32>()) {
        let expected = if is_leap_year(y) { 6 } else { 5 };
        prop_assert_eq!(days_in_month(y, 13), Ok(expected));
    }

    #[test]
    fn new_year_recurrence(y in i32::MIN..i32::MAX) {
        let step = if is_leap_year(y) { 366 } else { 365 };
        prop_assert_eq!(new_year_weekday(y + 1), new_year_weekday(y).advance(step));
    }

    #[test]
    fn month_start_recurrence(y in any::<i32>(), m in 1u8..=12) {
        let this = first_weekday_of_month(y, m).unwrap();
        let next = first_weekday_of_month(y, m + 1).unwrap();
        prop_assert_eq!(next, this.advance(days_in_month(y, m).unwrap() as i64));
    }

    #[test]
    fn first_month_starts_on_new_year(y in any::<i32>()) {
        prop_assert_eq!(first_weekday_of_month(y, 1), Ok(new_year_weekday(y)));
    }

    #[test]
    fn out_of_range_months_fail(y in any::<i32>(), m in 14u8..) {
        prop_assert_eq!(days_in_month(y, m), Err(Error::InvalidMonth(m as i64)));
    }

    #[test]
    fn grid_layout(y in -10_000i32..10_000, m in 1u8..=13) {
        let grid = build_month_grid(y, m).unwrap();
        let blanks = first_weekday_of_month(y, m).unwrap().index() as usize;
        let days = days_in_month(y, m).unwrap();
        prop_assert_eq!(grid.len(), blanks + days as usize);
        prop_assert!(grid.cells()[..blanks].iter().all(Option::is_none));
        let tail: Vec<u8> = grid.cells()[blanks..].iter().map(|c| c.unwrap()).collect();
        prop_assert_eq!(tail, (1..=days).collect::<Vec<_>>());
    }

    #[test]
    fn grid_is_deterministic(y in any::<i32>(), m in 1u8..=13) {
        prop_assert_eq!(build_month_grid(y, m), build_month_grid(y, m));
    }
}
