//! Price charts and loot draws for chat bots.
//!
//! [`PriceHistory`] keeps a bounded rolling series of [`Sample`]s fed by a
//! [`PriceFeed`] and answers trailing-window queries. [`AsciiChart`] turns a
//! window of samples into a fixed-size text chart ready to paste into a chat
//! message. [`draw`] and [`LootContainer`] perform weighted reward draws.
//!
//! Everything here is synchronous and free of I/O. Scheduling, chat
//! transport and persistence belong to the host bot.
//!
//! ```
//! use tickgraph::{AsciiChart, ChartConfig, DisplayWindow, PriceFeed, PriceHistory};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let feed = PriceFeed::default();
//! let mut history = PriceHistory::new();
//! let mut rng = StdRng::seed_from_u64(3);
//!
//! for tick in 0..120 {
//!     let sample = feed.next_sample(&history, tick * 5_000, &mut rng);
//!     history.append(sample);
//! }
//!
//! let window: DisplayWindow = "5m".parse().unwrap();
//! let text = history.chart(119 * 5_000, window, &AsciiChart::new(ChartConfig::default()));
//! assert!(text.starts_with("```"));
//! ```

mod chart;
mod feed;
mod history;
mod inventory;
mod loot;
mod ring_buffer;
mod sample;
mod window;

pub use crate::sample::{Price, Sample, Timestamp};

pub use crate::chart::{
    AXIS_WIDTH, AsciiChart, Chart, ChartConfig, ChartConfigBuilder, ChartError, EMPTY_GLYPH,
    FILLED_GLYPH, MAX_CELLS, SHADOW_GLYPH,
};
pub use crate::feed::PriceFeed;
pub use crate::history::{NO_DATA, PriceHistory};
pub use crate::inventory::{EMPTY_INVENTORY, format_inventory, redeem, tally};
pub use crate::loot::{LootContainer, LootItem, draw};
pub use crate::window::{DisplayWindow, WindowError};

#[cfg(test)]
mod test_util;
