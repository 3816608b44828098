//! Tests for the Julian Day Number based converter.

use ec_time::conversion::{gregorian_to_jdn, jdn_to_ethiopian, jdn_to_gregorian};
use ec_time::{CalendarConverter, EthiopianDate, GregorianDate, JdnConverter, Weekday};
use proptest::prelude::*;

fn greg(y: i32, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn eth(y: i32, m: u8, d: u8) -> EthiopianDate {
    EthiopianDate::new(y, m, d).unwrap()
}

// ─── Known dates ──────────────────────────────────────────────────────────────

#[test]
fn new_year_dates() {
    let conv = JdnConverter::new();
    // (Ethiopian year, Gregorian date of 1 Meskerem)
    let known = [
        (2012, greg(2019, 9, 12)),
        (2013, greg(2020, 9, 11)),
        (2016, greg(2023, 9, 12)),
        (2017, greg(2024, 9, 11)),
        (2018, greg(2025, 9, 11)),
    ];
    for (year, gregorian) in known {
        assert_eq!(conv.to_gregorian(eth(year, 1, 1)).unwrap(), gregorian, "{year}");
        assert_eq!(conv.to_ethiopian(gregorian).unwrap(), eth(year, 1, 1), "{gregorian}");
    }
}

#[test]
fn christmas_and_epiphany() {
    let conv = JdnConverter::new();
    // 29 Tahsas and 11 Tir.
    assert_eq!(conv.to_gregorian(eth(2018, 4, 29)).unwrap(), greg(2026, 1, 7));
    assert_eq!(conv.to_gregorian(eth(2018, 5, 11)).unwrap(), greg(2026, 1, 19));
    assert_eq!(conv.to_ethiopian(greg(2024, 1, 7)).unwrap(), eth(2016, 4, 28));
}

#[test]
fn six_day_pagume_is_reachable_from_gregorian() {
    let conv = JdnConverter::new();
    let e = conv.to_ethiopian(greg(2023, 9, 11)).unwrap();
    assert_eq!((e.year(), e.month(), e.day()), (2015, 13, 6));
}

#[test]
fn reference_year_weekdays_agree() {
    // The anchor year agrees with the astronomical calendar.
    let conv = JdnConverter::new();
    for day in 1..=30u8 {
        let e = eth(2018, 1, day);
        let g = conv.to_gregorian(e).unwrap();
        assert_eq!(g.weekday(), e.weekday(), "{e}");
    }
    assert_eq!(greg(2025, 9, 11).weekday(), Weekday::Thursday);
}

#[test]
fn out_of_range_input_fails() {
    let conv = JdnConverter::new();
    assert!(conv.to_ethiopian(greg(0, 1, 1)).unwrap_err().is_conversion_failure());
    assert!(conv.to_ethiopian(greg(8, 8, 26)).unwrap_err().is_conversion_failure());
    assert!(conv.to_gregorian(eth(0, 1, 1)).unwrap_err().is_conversion_failure());
    assert!(conv.to_gregorian(eth(9999, 13, 1)).unwrap_err().is_conversion_failure());
    assert!(conv.to_ethiopian(greg(8, 8, 27)).is_ok());
}

#[test]
fn converter_by_reference() {
    fn new_year_2018(conv: impl CalendarConverter) -> GregorianDate {
        conv.to_gregorian(eth(2018, 1, 1)).unwrap()
    }
    let conv = JdnConverter::new();
    assert_eq!(new_year_2018(&conv), greg(2025, 9, 11));
    let dyn_conv: &dyn CalendarConverter = &conv;
    assert_eq!(new_year_2018(dyn_conv), greg(2025, 9, 11));
}

// ─── Round trips ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn gregorian_jdn_round_trip(jdn in 1_721_426i64..5_373_484) {
        let (y, m, d) = jdn_to_gregorian(jdn);
        prop_assert_eq!(gregorian_to_jdn(greg(y, m, d)), jdn);
    }

    #[test]
    fn gregorian_to_ethiopian_and_back(jdn in 1_724_221i64..5_000_000) {
        let conv = JdnConverter::new();
        let (y, m, d) = jdn_to_gregorian(jdn);
        let g = greg(y, m, d);
        let e = conv.to_ethiopian(g).unwrap();
        prop_assert_eq!(conv.to_gregorian(e).unwrap(), g);
    }

    #[test]
    fn ethiopian_months_are_contiguous(jdn in 1_724_221i64..5_000_000) {
        let (y0, m0, d0) = jdn_to_ethiopian(jdn);
        let (y1, m1, d1) = jdn_to_ethiopian(jdn + 1);
        if (y1, m1) == (y0, m0) {
            prop_assert_eq!(d1, d0 + 1);
        } else {
            prop_assert_eq!(d1, 1);
            prop_assert!(d0 == 30 || (m0 == 13 && (d0 == 5 || d0 == 6)));
        }
    }
}
