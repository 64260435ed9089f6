//! Temperature trend analysis tests.
mod common;
use common::*;
use galley::prelude::*;

#[test]
fn test_no_readings_gives_stable_zeros() {
    let logs = vec![
        reading("a", "freezer", 1, "-20"),
        HaccpLog::new("clean", "fridge", LogType::Cleaning, hours_ago(2)),
    ];
    let trend = analyze_temperature_trends(&logs, "fridge");
    assert_eq!(trend, TemperatureTrend::default());
    assert_eq!(trend.trend, Trend::Stable);
    assert_eq!(trend.readings, 0);
}

#[test]
fn test_difference_of_exactly_threshold_is_stable() {
    let logs = vec![
        reading("early", "fridge", 5, "4.0"),
        reading("late", "fridge", 1, "6.0"),
    ];
    assert_eq!(analyze_temperature_trends(&logs, "fridge").trend, Trend::Stable);
}

#[test]
fn test_rising_and_falling() {
    let rising = vec![
        reading("a", "fridge", 4, "2.0"),
        reading("b", "fridge", 3, "2.5"),
        reading("c", "fridge", 2, "4.5"),
        reading("d", "fridge", 1, "5.0"),
    ];
    assert_eq!(analyze_temperature_trends(&rising, "fridge").trend, Trend::Rising);

    let falling = vec![
        reading("a", "freezer", 4, "-14"),
        reading("b", "freezer", 3, "-15"),
        reading("c", "freezer", 2, "-19"),
        reading("d", "freezer", 1, "-20"),
    ];
    assert_eq!(analyze_temperature_trends(&falling, "freezer").trend, Trend::Falling);
}

#[test]
fn test_readings_are_sorted_chronologically() {
    // Supplied newest first; chronologically the series falls from 9 to 3.
    let logs = vec![
        reading("d", "fridge", 1, "3"),
        reading("c", "fridge", 2, "3"),
        reading("b", "fridge", 3, "9"),
        reading("a", "fridge", 4, "9"),
    ];
    let trend = analyze_temperature_trends(&logs, "fridge");
    assert_eq!(trend.trend, Trend::Falling);
    assert_eq!(trend.min, 3.0);
    assert_eq!(trend.max, 9.0);
    assert_eq!(trend.average, 6.0);
}

#[test]
fn test_odd_series_splits_at_floor_midpoint() {
    // First half [1], second half [2, 10].
    let logs = vec![
        reading("a", "fridge", 3, "1"),
        reading("b", "fridge", 2, "2"),
        reading("c", "fridge", 1, "10"),
    ];
    let trend = analyze_temperature_trends(&logs, "fridge");
    assert_eq!(trend.trend, Trend::Rising);
    assert_eq!(trend.readings, 3);
}

#[test]
fn test_single_reading_is_stable() {
    let logs = vec![reading("a", "fridge", 1, "12")];
    let trend = analyze_temperature_trends(&logs, "fridge");
    assert_eq!(trend.trend, Trend::Stable);
    assert_eq!(trend.min, 12.0);
    assert_eq!(trend.max, 12.0);
    assert_eq!(trend.average, 12.0);
}

#[test]
fn test_unparsable_and_foreign_logs_are_dropped() {
    let logs = vec![
        reading("a", "fridge", 3, "2"),
        reading("b", "fridge", 2, "broken probe"),
        reading("c", "freezer", 2, "-20"),
        reading("d", "fridge", 1, "4"),
    ];
    let trend = analyze_temperature_trends(&logs, "fridge");
    assert_eq!(trend.readings, 2);
    assert_eq!(trend.average, 3.0);
}

#[test]
fn test_out_of_range_count_trusts_stored_flag() {
    let logs = vec![
        // Flagged when written, even though the value looks fine now.
        reading("a", "fridge", 3, "3").flagged(true),
        // Out of range for a fridge but never flagged.
        reading("b", "fridge", 2, "12"),
        reading("c", "fridge", 1, "4").flagged(true),
    ];
    assert_eq!(analyze_temperature_trends(&logs, "fridge").out_of_range_count, 2);
}
