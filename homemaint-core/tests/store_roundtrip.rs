//! Round-trip coverage for the CSV store: what `save` writes, `load`
//! reads back field-for-field.

use chrono::NaiveDate;
use homemaint_core::{TaskKind, TaskRecord, default_records, load, save};
use tempfile::TempDir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn fresh_defaults_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("home.csv");

    let records = default_records();
    save(&path, &records).unwrap();

    assert_eq!(load(&path).unwrap(), records);
}

#[test]
fn serviced_records_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("home.csv");

    let mut records = default_records();
    records[0].complete(d(2024, 5, 1)); // furnace, +3 months
    records[2].complete(d(2023, 10, 15)); // detector, +12 months

    save(&path, &records).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(loaded, records);
    assert_eq!(loaded[0].next_due, Some(d(2024, 8, 1)));
    assert_eq!(loaded[2].next_due, Some(d(2024, 10, 15)));
}

#[test]
fn save_overwrites_rather_than_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("home.csv");

    let mut records = default_records();
    save(&path, &records).unwrap();

    records[1].complete(d(2024, 1, 31));
    save(&path, &records).unwrap();

    let loaded = load(&path).unwrap();
    assert_eq!(loaded.len(), 4);
    // Jan 31 + 12 months lands on Jan 31 again, no clamping needed.
    assert_eq!(loaded[1].next_due, Some(d(2025, 1, 31)));
}

#[test]
fn save_normalizes_row_order_and_fills_missing_kinds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("home.csv");

    // Out of catalog order and missing fridge/detector entirely.
    let mut furnace = TaskRecord::fresh(TaskKind::Furnace);
    furnace.complete(d(2024, 5, 1));
    let records = vec![TaskRecord::fresh(TaskKind::Dryer), furnace];

    save(&path, &records).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let kinds: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(kinds, ["furnace", "fridge", "detector", "dryer"]);

    let loaded = load(&path).unwrap();
    assert_eq!(loaded.len(), 4);
    assert_eq!(loaded[0].next_due, Some(d(2024, 8, 1)));
    assert!(!loaded[1].is_serviced());
    assert!(!loaded[2].is_serviced());
    assert!(!loaded[3].is_serviced());
}

#[test]
fn file_layout_is_fixed_header_and_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("home.csv");

    save(&path, &default_records()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "type,done,due");
    let kinds: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(kinds, ["furnace", "fridge", "detector", "dryer"]);
    assert_eq!(TaskKind::ALL.len(), kinds.len());
}
