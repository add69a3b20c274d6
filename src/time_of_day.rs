//! # Time-of-Day Parsing
//!
//! Highlighted ranges are configured with wall-clock strings such as `"06:00"`
//! or `"17:45:30"`. This module turns those strings into seconds since
//! midnight and maps them onto the dial.
//!
//! ## Dial Convention
//! A full day covers two revolutions of the dial, so the angle of a time of
//! day is `4π × seconds / 86400`. The hour hand uses the same convention,
//! which keeps a range arc and the hour hand in agreement at any instant.

use crate::ClockError;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A wall-clock time between `00:00:00` and `24:00:00` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    seconds: u32,
}

impl TimeOfDay {
    /// Build from seconds since midnight. `86400` is accepted as end of day.
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        (seconds <= SECONDS_PER_DAY).then_some(Self { seconds })
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        self.seconds
    }

    /// Dial angle in radians on the 4π/24h scale.
    pub fn dial_angle(&self) -> f64 {
        4.0 * PI * (self.seconds as f64 / SECONDS_PER_DAY as f64)
    }
}

impl FromStr for TimeOfDay {
    type Err = ClockError;

    /// Parse `HH:MM` or `HH:MM:SS`. Hours may be one digit; minutes and
    /// seconds are always two. `24:00` is the only value past `23:59:59`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ClockError::InvalidRangeFormat {
            value: value.to_string(),
        };

        let parts: Vec<&str> = value.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let field = |text: &str, min_len: usize, max: u32| -> Result<u32, ClockError> {
            if text.len() < min_len || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(invalid());
            }
            let n: u32 = text.parse().map_err(|_| invalid())?;
            if n > max {
                return Err(invalid());
            }
            Ok(n)
        };

        let hours = field(parts[0], 1, 24)?;
        let minutes = field(parts[1], 2, 59)?;
        let seconds = match parts.get(2) {
            Some(s) => field(s, 2, 59)?,
            None => 0,
        };

        if hours == 24 && (minutes != 0 || seconds != 0) {
            return Err(invalid());
        }

        Ok(Self {
            seconds: hours * 3600 + minutes * 60 + seconds,
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.seconds / 3600;
        let m = (self.seconds % 3600) / 60;
        let s = self.seconds % 60;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}
