//! Duration value object for job timing settings

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default wait before the first status poll (3 seconds)
pub const DEFAULT_INITIAL_DELAY_SECS: u64 = 3;

/// Default wait between status polls (3 seconds)
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

/// Default overall deadline for one transcription job (5 minutes)
pub const DEFAULT_DEADLINE_SECS: u64 = 5 * 60;

/// Default backoff before the first fetch retry (1 second)
pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 1;

/// Value object representing a positive time span.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    /// Create a Duration from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create a Duration from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    pub const fn default_initial_delay() -> Self {
        Self::from_secs(DEFAULT_INITIAL_DELAY_SECS)
    }

    pub const fn default_poll_interval() -> Self {
        Self::from_secs(DEFAULT_POLL_INTERVAL_SECS)
    }

    pub const fn default_deadline() -> Self {
        Self::from_secs(DEFAULT_DEADLINE_SECS)
    }

    pub const fn default_retry_backoff() -> Self {
        Self::from_secs(DEFAULT_RETRY_BACKOFF_SECS)
    }

    /// Get duration in whole seconds
    pub const fn as_secs(&self) -> u64 {
        self.milliseconds / 1000
    }

    /// Get duration in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl From<Duration> for StdDuration {
    fn from(d: Duration) -> Self {
        d.as_std()
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Parse a duration string into a Duration value object.
    /// Supported formats: "500ms", "30s", "1m", "2m30s", "1m500ms"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let invalid = || DurationParseError {
            input: s.to_string(),
        };

        let mut total_ms: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }
            if current_num.is_empty() {
                return Err(invalid());
            }

            let value: u64 = current_num.parse().map_err(|_| invalid())?;
            let unit_ms = match ch {
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    1
                }
                'm' => 60_000,
                's' => 1000,
                _ => return Err(invalid()),
            };

            total_ms = value
                .checked_mul(unit_ms)
                .and_then(|ms| total_ms.checked_add(ms))
                .ok_or_else(invalid)?;
            current_num.clear();
            found_any = true;
        }

        // Leftover digits without a unit
        if !current_num.is_empty() || !found_any || total_ms == 0 {
            return Err(invalid());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.milliseconds % 1000 != 0 {
            return write!(f, "{}ms", self.milliseconds);
        }

        let total_secs = self.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes == 0 {
            write!(f, "{}s", seconds)
        } else if seconds == 0 {
            write!(f, "{}m", minutes)
        } else {
            write!(f, "{}m{}s", minutes, seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seconds_only() {
        let d: Duration = "30s".parse().unwrap();
        assert_eq!(d.as_secs(), 30);
        assert_eq!(d.as_millis(), 30000);
    }

    #[test]
    fn parse_minutes_only() {
        let d: Duration = "5m".parse().unwrap();
        assert_eq!(d.as_secs(), 300);
    }

    #[test]
    fn parse_minutes_and_seconds() {
        let d: Duration = "2m30s".parse().unwrap();
        assert_eq!(d.as_secs(), 150);
    }

    #[test]
    fn parse_milliseconds() {
        let d: Duration = "250ms".parse().unwrap();
        assert_eq!(d.as_millis(), 250);

        let d: Duration = "1m500ms".parse().unwrap();
        assert_eq!(d.as_millis(), 60_500);
    }

    #[test]
    fn parse_case_insensitive_and_trimmed() {
        let d: Duration = "  1M30S ".parse().unwrap();
        assert_eq!(d.as_secs(), 90);
    }

    #[test]
    fn parse_invalid_inputs() {
        assert!("".parse::<Duration>().is_err());
        assert!("0s".parse::<Duration>().is_err());
        assert!("0ms".parse::<Duration>().is_err());
        assert!("30".parse::<Duration>().is_err());
        assert!("abc".parse::<Duration>().is_err());
        assert!("30x".parse::<Duration>().is_err());
        assert!("ms".parse::<Duration>().is_err());
    }

    #[test]
    fn parse_overflow_is_rejected() {
        assert!("99999999999999999999m".parse::<Duration>().is_err());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Duration::from_secs(30).to_string(), "30s");
        assert_eq!(Duration::from_secs(300).to_string(), "5m");
        assert_eq!(Duration::from_secs(150).to_string(), "2m30s");
        assert_eq!(Duration::from_millis(1500).to_string(), "1500ms");
    }

    #[test]
    fn display_parses_back() {
        for d in [
            Duration::from_millis(20),
            Duration::from_secs(3),
            Duration::from_secs(150),
        ] {
            assert_eq!(d.to_string().parse::<Duration>().unwrap(), d);
        }
    }

    #[test]
    fn default_values() {
        assert_eq!(Duration::default_initial_delay().as_secs(), 3);
        assert_eq!(Duration::default_poll_interval().as_secs(), 3);
        assert_eq!(Duration::default_deadline().as_secs(), 300);
        assert_eq!(Duration::default_retry_backoff().as_secs(), 1);
        assert_eq!(
            Duration::default_deadline().as_std(),
            StdDuration::from_secs(300)
        );
    }
}
