use std::fmt::{Display, Formatter};

use rand::Rng;

use crate::{Price, PriceHistory, Sample, Timestamp};

/// Random-walk price generator for the simulated market.
///
/// Each step moves the last price by a uniform amount in `[-step, step)` and
/// clamps the result at `floor`. An empty history starts from `start`.
/// A `step` that is not positive, or so large that `2 * step` is not finite,
/// holds the price still.
///
/// # Example
///
/// ```
/// use tickgraph::{PriceFeed, PriceHistory};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let feed = PriceFeed::default();
/// let mut history = PriceHistory::new();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// for tick in 0..3 {
///     let sample = feed.next_sample(&history, tick * 5_000, &mut rng);
///     history.append(sample);
/// }
///
/// assert_eq!(history.len(), 3);
/// assert!(history.iter().all(|s| (97.0..=103.0).contains(&s.price())));
/// ```
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct PriceFeed {
    pub start: Price,
    pub floor: Price,
    pub step: Price,
}

impl PriceFeed {
    /// Next price after `last`, or after [`start`](Self::start) when there is
    /// no previous price.
    pub fn next_price<R: Rng>(&self, last: Option<Price>, rng: &mut R) -> Price {
        let last = last.unwrap_or(self.start);
        let change = if self.step > 0.0 && (2.0 * self.step).is_finite() {
            rng.random_range(-self.step..self.step)
        } else {
            0.0
        };

        (last + change).max(self.floor)
    }

    /// Next sample for `history`, stamped `now`.
    pub fn next_sample<R: Rng>(&self, history: &PriceHistory, now: Timestamp, rng: &mut R) -> Sample {
        let last = history.latest().map(|s| s.price());

        Sample::new(now, self.next_price(last, rng))
    }
}

impl Default for PriceFeed {
    fn default() -> Self {
        Self {
            start: 100.0,
            floor: 1.0,
            step: 1.0,
        }
    }
}

impl Display for PriceFeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PriceFeed(start={}, floor={}, step={})",
            self.start, self.floor, self.step
        )
    }
}
