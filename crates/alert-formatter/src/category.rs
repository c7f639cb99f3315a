//! Alert categories and alarm classification.

use std::fmt;

use alarm_notice::StateChangeNotice;
use serde::Serialize;

/// The four outcomes an alarm state change can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlertCategory {
    /// The primary instance is down.
    PrimaryDown,
    /// The backup instance is down; primary still serving.
    SecondaryDown,
    /// Traffic has failed over to the backup instance.
    FailoverActive,
    /// Anything else, including genuine recoveries.
    Recovered,
}

impl AlertCategory {
    /// All categories, in classification order.
    pub const ALL: [AlertCategory; 4] = [
        Self::PrimaryDown,
        Self::SecondaryDown,
        Self::FailoverActive,
        Self::Recovered,
    ];

    /// Stable name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryDown => "primary_down",
            Self::SecondaryDown => "secondary_down",
            Self::FailoverActive => "failover_active",
            Self::Recovered => "recovered",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alarm-name substrings checked against firing alarms, in order.
///
/// The first match wins, so a name containing both "Primary" and
/// "Secondary" is a primary outage.
pub const CLASSIFICATION_RULES: [(&str, AlertCategory); 3] = [
    ("Primary", AlertCategory::PrimaryDown),
    ("Secondary", AlertCategory::SecondaryDown),
    ("Backup-Only", AlertCategory::FailoverActive),
];

/// Classify an alarm state change.
///
/// Only notices in the `ALARM` state can match a rule; every other state
/// falls through to `Recovered`.
pub fn classify(notice: &StateChangeNotice) -> AlertCategory {
    classify_parts(&notice.alarm_name, &notice.new_state)
}

/// Classify from a raw alarm name and state.
pub fn classify_parts(alarm_name: &str, new_state: &str) -> AlertCategory {
    if new_state != alarm_notice::ALARM_STATE {
        return AlertCategory::Recovered;
    }

    CLASSIFICATION_RULES
        .iter()
        .find(|(needle, _)| alarm_name.contains(needle))
        .map(|(_, category)| *category)
        .unwrap_or(AlertCategory::Recovered)
}
