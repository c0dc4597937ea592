#![allow(dead_code)]

use serde::{Deserialize, de::DeserializeOwned};
use std::num::NonZero;
use tickgraph::{AsciiChart, ChartConfig, Price, PriceHistory, Sample, Timestamp};

/// One row of the reference price series.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RefSample {
    pub timestamp: Timestamp,
    pub price: Price,
}

impl From<RefSample> for Sample {
    fn from(r: RefSample) -> Self {
        Sample::new(r.timestamp, r.price)
    }
}

/// One hour of simulated prices at a 5 second cadence, starting at
/// 2023-11-14 22:13:20 UTC.
const PRICES_PATH: &str = "tests/fixtures/data/prices.csv";

/// Load the reference price series.
pub fn load_reference_samples() -> Vec<Sample> {
    load_records::<RefSample>(PRICES_PATH, "invalid price record")
        .into_iter()
        .map(Sample::from)
        .collect()
}

/// History holding the whole reference series.
pub fn reference_history() -> PriceHistory {
    let mut history = PriceHistory::new();
    history.extend(load_reference_samples());
    history
}

/// Load expected chart rows, one per line.
pub fn load_expected_chart(path: &str) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to open {path}: {e}"))
        .lines()
        .map(str::to_owned)
        .collect()
}

pub fn renderer(width: usize, height: usize) -> AsciiChart {
    AsciiChart::new(
        ChartConfig::builder()
            .width(NonZero::new(width).unwrap())
            .height(NonZero::new(height).unwrap())
            .build(),
    )
}

/// Assert rendered rows match the expected rows, reporting the first
/// differing row.
pub fn assert_rows_match(actual: &[String], expected: &[String]) {
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(a, e, "row {i} differs");
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "row count: actual {}, expected {}",
        actual.len(),
        expected.len()
    );
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
