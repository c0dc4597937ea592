use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    time::Duration,
};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum WindowError {
    /// Input is not a number followed by `m` or `h`, e.g. `30m` or `2h`.
    #[error("invalid range `{0}`, use e.g. `30m` or `2h`")]
    Malformed(String),

    /// Parsed duration is zero or longer than [`DisplayWindow::MAX_SECONDS`].
    #[error("range of {0}s is outside 1s..={max}s", max = DisplayWindow::MAX_SECONDS)]
    OutOfRange(u64),
}

/// Trailing duration of price history shown on a chart.
///
/// Parsed from user input such as `30m` or `2h` (case-insensitive) and
/// limited to at most twelve hours.
///
/// # Example
///
/// ```
/// use tickgraph::DisplayWindow;
///
/// let window: DisplayWindow = "90m".parse().unwrap();
/// assert_eq!(window.seconds(), 5_400);
/// assert!("13h".parse::<DisplayWindow>().is_err());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct DisplayWindow {
    seconds: u64,
}

impl DisplayWindow {
    /// One hour.
    pub const DEFAULT: Self = Self { seconds: 3_600 };

    /// Twelve hours.
    pub const MAX_SECONDS: u64 = 43_200;

    /// # Errors
    ///
    /// [`WindowError::OutOfRange`] unless `0 < seconds <= MAX_SECONDS`.
    pub fn from_seconds(seconds: u64) -> Result<Self, WindowError> {
        if seconds == 0 || seconds > Self::MAX_SECONDS {
            return Err(WindowError::OutOfRange(seconds));
        }

        Ok(Self { seconds })
    }

    #[inline]
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.seconds)
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for DisplayWindow {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || WindowError::Malformed(s.to_owned());

        let (digits, unit) = s.split_at_checked(s.len().saturating_sub(1)).ok_or_else(malformed)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let scale = match unit {
            "m" | "M" => 60,
            "h" | "H" => 3_600,
            _ => return Err(malformed()),
        };

        // Digit strings too long for u64 are far past the limit anyway.
        let count: u64 = digits.parse().unwrap_or(u64::MAX);

        Self::from_seconds(count.saturating_mul(scale))
    }
}

impl Display for DisplayWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.seconds % 3_600 == 0 {
            write!(f, "{}h", self.seconds / 3_600)
        } else if self.seconds % 60 == 0 {
            write!(f, "{}m", self.seconds / 60)
        } else {
            write!(f, "{}s", self.seconds)
        }
    }
}
