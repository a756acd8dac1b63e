// Shared test fixtures

#![allow(dead_code)]

use traffic_counter::models::Record;

pub fn rec(s: &str) -> Record {
    s.parse().expect("valid record")
}

pub fn records(lines: &[&str]) -> Vec<Record> {
    lines.iter().map(|l| rec(l)).collect()
}

/// Reference dataset: 24 records over four days, daily totals [179, 81, 134, 4], total 398.
pub fn record_seek() -> Vec<Record> {
    let text = include_str!("../fixtures/record_seek.txt");
    let out: Vec<Record> = text.lines().map(rec).collect();
    assert_eq!(out.len(), 24);
    out
}

/// Three contiguous records on one day: 5 + 15 + 30 = 50.
pub fn record_oneday() -> Vec<Record> {
    records(&[
        "2021-12-01T05:00:00 5",
        "2021-12-01T05:30:00 15",
        "2021-12-01T06:00:00 30",
    ])
}

/// Same day-of-month in two months, 100 cars: one contiguous run of three on
/// the first day, a run of two plus a lone record on the second.
pub fn record_onemonth() -> Vec<Record> {
    records(&[
        "2021-11-01T05:00:00 5",
        "2021-11-01T05:30:00 15",
        "2021-11-01T06:00:00 30",
        "2021-12-01T10:00:00 5",
        "2021-12-01T10:30:00 15",
        "2021-12-01T12:00:00 30",
    ])
}

/// Six contiguous records across a new year, 100 cars.
pub fn record_newyear() -> Vec<Record> {
    records(&[
        "2021-12-31T22:30:00 30",
        "2021-12-31T23:00:00 15",
        "2021-12-31T23:30:00 5",
        "2022-01-01T00:00:00 5",
        "2022-01-01T00:30:00 15",
        "2022-01-01T01:00:00 30",
    ])
}

/// Record on 2021-12-01 at `hour:00`.
pub fn at_hour(hour: u32, count: i64) -> Record {
    rec(&format!("2021-12-01T{hour:02}:00:00 {count}"))
}
