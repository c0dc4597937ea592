use std::num::NonZero;

use crate::{AsciiChart, ChartError, DisplayWindow, Sample, Timestamp, ring_buffer::RingBuffer};

/// Placeholder shown instead of a chart when the window holds no samples.
pub const NO_DATA: &str = "No data.";

/// Rolling price history.
///
/// Keeps the most recent `capacity` samples in insertion order. Appending to
/// a full history evicts the oldest sample, which bounds memory for a
/// simulation that runs indefinitely.
///
/// Timestamps are not validated: callers append in real time, so order is
/// guaranteed by construction. Queries filter by value and stay correct for
/// any ordering.
///
/// # Example
///
/// ```
/// use tickgraph::{PriceHistory, Sample};
/// use std::num::NonZero;
///
/// let mut history = PriceHistory::with_capacity(NonZero::new(2).unwrap());
/// history.append(Sample::new(1_000, 100.0));
/// history.append(Sample::new(2_000, 101.0));
/// history.append(Sample::new(3_000, 99.5));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.query_range(3_000, 1).len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct PriceHistory {
    samples: RingBuffer<Sample>,
}

impl PriceHistory {
    /// Capacity used by [`PriceHistory::new`].
    pub const DEFAULT_CAPACITY: NonZero<usize> = NonZero::new(10_000).unwrap();

    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            samples: RingBuffer::new(capacity.get()),
        }
    }

    /// Appends a sample, evicting the oldest one when at capacity.
    #[inline]
    pub fn append(&mut self, sample: Sample) {
        if let Some(evicted) = self.samples.push(sample) {
            tracing::trace!(%evicted, capacity = self.samples.capacity(), "evicted oldest sample");
        }
    }

    /// Returns retained samples with `timestamp >= now - window_seconds * 1000`,
    /// oldest first. Empty when nothing qualifies.
    #[must_use]
    pub fn query_range(&self, now: Timestamp, window_seconds: u64) -> Vec<Sample> {
        let cutoff = now.saturating_sub(window_seconds.saturating_mul(1000));

        self.samples
            .iter()
            .filter(|s| s.timestamp() >= cutoff)
            .copied()
            .collect()
    }

    /// Renders the samples inside `window`, or [`NO_DATA`] when there are none.
    /// A renderer whose grid is too large yields its error message.
    #[must_use]
    pub fn chart(&self, now: Timestamp, window: DisplayWindow, renderer: &AsciiChart) -> String {
        let samples = self.query_range(now, window.seconds());

        match renderer.render(&samples) {
            Ok(chart) => chart.to_string(),
            Err(ChartError::EmptyInput) => {
                tracing::debug!(%window, "nothing to chart");
                NO_DATA.to_owned()
            }
            Err(err) => {
                tracing::warn!(%window, %err, "chart not rendered");
                err.to_string()
            }
        }
    }

    /// Most recently appended sample.
    #[inline]
    #[must_use]
    pub fn latest(&self) -> Option<Sample> {
        self.samples.last()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.len() == 0
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Sample> for PriceHistory {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for sample in iter {
            self.append(sample);
        }
    }
}
