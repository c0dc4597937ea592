// src/test_util.rs

use std::num::NonZero;

use rand::{SeedableRng, rngs::StdRng};

use crate::{Price, PriceHistory, Sample, Timestamp};

/// Deterministic RNG so draws and random walks repeat across runs.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

pub fn sample(timestamp: Timestamp, price: Price) -> Sample {
    Sample::new(timestamp, price)
}

pub fn history(capacity: usize) -> PriceHistory {
    PriceHistory::with_capacity(NonZero::new(capacity).unwrap())
}
