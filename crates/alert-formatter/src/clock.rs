//! Wall-clock access for alert timestamps.

use chrono::{DateTime, Utc};

/// Timestamp layout used in rendered alerts.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// A source of the current time.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Create a clock fixed at the given instant.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format an instant the way alerts display it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).unwrap();
        assert_eq!(format_timestamp(at), "2024-05-01 09:03:07 UTC");
    }

    #[test]
    fn test_fixed_clock() {
        let at = Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
