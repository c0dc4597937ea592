use std::{
    fmt::{Display, Formatter},
    num::NonZero,
};

use chrono::{DateTime, FixedOffset, Offset, Utc};
use thiserror::Error;

use crate::{Price, Sample, Timestamp};

/// Background cell.
pub const EMPTY_GLYPH: char = '░';
/// Cell on the price line.
pub const FILLED_GLYPH: char = '█';
/// Cosmetic shade under the price line.
pub const SHADOW_GLYPH: char = '▒';

/// Characters taken by the value axis on every row.
pub const AXIS_WIDTH: usize = 6;

const TICK_EVERY: usize = 4;
const SHADOW_DEPTH: usize = 2;
const TIME_LABELS: usize = 4;
const PRICE_STEP: Price = 5.0;
const FENCE: &str = "```";

/// Largest grid, in cells, a single render will allocate.
pub const MAX_CELLS: usize = 1 << 20;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChartError {
    /// Render was called with no samples. Callers show a "no data"
    /// placeholder instead.
    #[error("no samples to render")]
    EmptyInput,
    /// `width * height` exceeds [`MAX_CELLS`].
    #[error("chart of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}

/// Size and clock settings for an [`AsciiChart`].
///
/// # Example
///
/// ```rust
/// use tickgraph::ChartConfig;
/// use std::num::NonZero;
///
/// let config = ChartConfig::builder()
///     .width(NonZero::new(30).unwrap())
///     .build();
/// assert_eq!(config.width(), 30);
/// assert_eq!(config.height(), 20);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ChartConfig {
    width: usize,
    height: usize,
    utc_offset: FixedOffset,
}

impl ChartConfig {
    #[must_use]
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::new()
    }

    /// Plot columns, excluding the value axis.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Plot rows, excluding the bottom rule and the time row.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Offset the time axis is printed in.
    #[inline]
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Display for ChartConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ChartConfig({}x{}, {})",
            self.width, self.height, self.utc_offset
        )
    }
}

/// Builder for [`ChartConfig`].
///
/// Defaults: 50 columns, 20 rows, UTC.
pub struct ChartConfigBuilder {
    width: usize,
    height: usize,
    utc_offset: FixedOffset,
}

impl ChartConfigBuilder {
    const DEFAULT_WIDTH: usize = 50;
    const DEFAULT_HEIGHT: usize = 20;

    fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            utc_offset: Utc.fix(),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(mut self, width: NonZero<usize>) -> Self {
        self.width = width.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn height(mut self, height: NonZero<usize>) -> Self {
        self.height = height.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn utc_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> ChartConfig {
        ChartConfig {
            width: self.width,
            height: self.height,
            utc_offset: self.utc_offset,
        }
    }
}

/// A rendered chart: `height` plot rows, the bottom rule and the time row.
///
/// [`Display`] wraps the rows in a code fence so chat clients show them in a
/// fixed-width font.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Chart {
    lines: Vec<String>,
}

impl Chart {
    /// Unfenced rows, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Display for Chart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{FENCE}{}{FENCE}", self.lines.join("\n"))
    }
}

/// ASCII line chart of a price series.
///
/// The value axis is rounded outward to multiples of 5. Each plot column
/// takes the nearest sample (no averaging), and neighbouring columns are
/// joined by a vertical run of [`FILLED_GLYPH`] with up to two
/// [`SHADOW_GLYPH`] cells beneath. Every fourth row carries a price tick;
/// the time row carries four `HH:MM` labels spread between the first and
/// last sample.
///
/// # Example
///
/// ```rust
/// use tickgraph::{AsciiChart, ChartConfig, Sample};
///
/// let chart = AsciiChart::new(ChartConfig::default());
/// let samples = [Sample::new(0, 10.0), Sample::new(60_000, 20.0)];
///
/// let rendered = chart.render(&samples).unwrap();
/// assert_eq!(rendered.lines().len(), 20 + 2);
/// assert!(rendered.lines()[0].starts_with("  20 ┤"));
/// ```
#[derive(Clone, Debug)]
pub struct AsciiChart {
    config: ChartConfig,
}

impl AsciiChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Renders `samples` in their given order.
    ///
    /// # Errors
    ///
    /// [`ChartError::EmptyInput`] when `samples` is empty, and
    /// [`ChartError::TooLarge`] when the grid would exceed [`MAX_CELLS`].
    pub fn render(&self, samples: &[Sample]) -> Result<Chart, ChartError> {
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return Err(ChartError::EmptyInput);
        };

        let ChartConfig { width, height, .. } = self.config;
        if !width.checked_mul(height).is_some_and(|cells| cells <= MAX_CELLS) {
            return Err(ChartError::TooLarge { width, height });
        }
        let scale = Scale::fit(samples);

        let rows: Vec<usize> = (0..width)
            .map(|x| scale.row(samples[x * samples.len() / width].price(), height))
            .collect();

        let mut grid = Grid::new(width, height);
        for (x, pair) in rows.windows(2).enumerate() {
            let (top, bottom) = if pair[0] < pair[1] {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };

            for row in top..=bottom {
                grid.set(row, x, FILLED_GLYPH);
            }
            for row in (bottom + 1..height).take(SHADOW_DEPTH) {
                grid.set(row, x, SHADOW_GLYPH);
            }
        }

        let mut lines = Vec::with_capacity(height + 2);
        for row in 0..height {
            let mut line = if row % TICK_EVERY == 0 {
                format!("{:>4} ┤", scale.tick(row, height))
            } else {
                "     │".to_owned()
            };
            line.extend(grid.row(row));
            lines.push(line);
        }
        lines.push(format!("     └{}", "─".repeat(width)));
        lines.push(self.time_axis(first.timestamp(), last.timestamp()));

        Ok(Chart { lines })
    }

    fn time_axis(&self, start: Timestamp, end: Timestamp) -> String {
        let width = self.config.width;
        let mut row = vec![' '; width];

        let span = i128::from(end) - i128::from(start);
        for i in 0..TIME_LABELS {
            let at = i128::from(start) + span * i as i128 / (TIME_LABELS as i128 - 1);
            let label = self.clock(at);

            let centre = i * (width - 1) / (TIME_LABELS - 1);
            let half = label.chars().count() / 2;

            for (j, ch) in label.chars().enumerate() {
                let Some(col) = (centre + j).checked_sub(half) else {
                    continue;
                };
                if col >= width {
                    break;
                }
                row[col] = ch;
            }
        }

        let mut line = " ".repeat(AXIS_WIDTH);
        line.extend(row);
        line
    }

    fn clock(&self, millis: i128) -> String {
        i64::try_from(millis)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map_or_else(
                || "--:--".to_owned(),
                |t| {
                    t.with_timezone(&self.config.utc_offset)
                        .format("%H:%M")
                        .to_string()
                },
            )
    }
}

/// Value axis bounds, rounded outward to [`PRICE_STEP`].
#[derive(Debug)]
struct Scale {
    min: Price,
    max: Price,
    range: Price,
}

impl Scale {
    fn fit(samples: &[Sample]) -> Self {
        let (lo, hi) = samples
            .iter()
            .map(Sample::price)
            .fold((Price::INFINITY, Price::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p), hi.max(p))
            });

        let min = (lo / PRICE_STEP).floor() * PRICE_STEP;
        let max = (hi / PRICE_STEP).ceil() * PRICE_STEP;

        Self {
            min,
            max,
            range: (max - min).max(1.0),
        }
    }

    /// Grid row for `price`; the axis minimum lands on the bottom row.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn row(&self, price: Price, height: usize) -> usize {
        let bottom = height - 1;
        let offset = ((price - self.min) / self.range * bottom as f64).floor();

        bottom - (offset as usize).min(bottom)
    }

    /// Price printed next to `row`. The denominator is clamped so a single
    /// row chart still gets a label.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn tick(&self, row: usize, height: usize) -> i64 {
        let denom = (height - 1).max(1) as f64;

        (self.max - (row as f64 / denom * self.range).floor()) as i64
    }
}

/// Row-major cell scratch for one render. Callers keep `width * height`
/// within [`MAX_CELLS`].
struct Grid {
    cells: Vec<char>,
    width: usize,
}

impl Grid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![EMPTY_GLYPH; width * height],
            width,
        }
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, glyph: char) {
        self.cells[row * self.width + col] = glyph;
    }

    fn row(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        self.cells[row * self.width..(row + 1) * self.width]
            .iter()
            .copied()
    }
}
