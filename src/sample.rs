use std::fmt::{Display, Formatter};

/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// Sample timestamp in epoch milliseconds.
///
/// Samples are appended in real time, so consecutive timestamps are
/// expected to be non-decreasing. Nothing in the crate enforces it.
pub type Timestamp = u64;

/// One timestamped price observation.
///
/// # Example
///
/// ```
/// use tickgraph::Sample;
///
/// let sample = Sample::new(1_700_000_000_000, 101.5);
/// assert_eq!(sample.timestamp(), 1_700_000_000_000);
/// assert_eq!(sample.price(), 101.5);
/// ```
#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Sample {
    timestamp: Timestamp,
    price: Price,
}

impl Sample {
    #[must_use]
    pub const fn new(timestamp: Timestamp, price: Price) -> Self {
        Self { timestamp, price }
    }

    /// Observation time in epoch milliseconds.
    #[inline]
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}@{}", self.price, self.timestamp)
    }
}

impl From<(Timestamp, Price)> for Sample {
    fn from((timestamp, price): (Timestamp, Price)) -> Self {
        Self::new(timestamp, price)
    }
}
