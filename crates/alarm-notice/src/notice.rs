//! The alarm state-change notice carried inside a notification record.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::NoticeError;

/// Alarm name used when the notice does not carry one.
pub const DEFAULT_ALARM_NAME: &str = "Unknown";

/// State used when the notice does not carry one.
pub const DEFAULT_STATE: &str = "Unknown";

/// Reason used when the notice does not carry one.
pub const DEFAULT_REASON: &str = "No reason provided";

/// The state value that marks an alarm as firing.
pub const ALARM_STATE: &str = "ALARM";

/// Wire shape of the notice. Every field is optional; `null` counts as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawNotice {
    #[serde(default)]
    alarm_name: Option<String>,
    #[serde(default)]
    new_state_value: Option<String>,
    #[serde(default)]
    new_state_reason: Option<String>,
    #[serde(default)]
    alarm_description: Option<String>,
    #[serde(default)]
    old_state_value: Option<String>,
    #[serde(default)]
    state_change_time: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

/// An alarm state transition, with defaults applied to missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateChangeNotice {
    /// Alarm identifier (e.g., "Primary-API-Health").
    pub alarm_name: String,

    /// The state the alarm moved into (e.g., "ALARM", "OK").
    pub new_state: String,

    /// Free-text explanation from the monitoring service.
    pub reason: String,

    /// Alarm description, if configured.
    pub description: Option<String>,

    /// The state the alarm left.
    pub old_state: Option<String>,

    /// When the transition happened, as reported by the monitoring service.
    pub state_change_time: Option<String>,

    /// Region the alarm lives in.
    pub region: Option<String>,
}

impl StateChangeNotice {
    /// Parse a notice from the JSON message payload.
    ///
    /// Missing fields are filled with their defaults. Fails only when the
    /// payload is not a JSON object or a consumed field has a non-string value.
    pub fn parse(payload: &str) -> Result<Self, NoticeError> {
        let value: Value = serde_json::from_str(payload).map_err(NoticeError::MalformedPayload)?;

        // Struct derives also accept sequences; only an object is a notice.
        if !value.is_object() {
            return Err(NoticeError::MalformedPayload(serde_json::Error::custom(
                "notice payload must be a JSON object",
            )));
        }

        let raw: RawNotice =
            serde_json::from_value(value).map_err(NoticeError::MalformedPayload)?;
        Ok(raw.into_notice())
    }

    /// Create a notice from the three fields used for classification.
    pub fn new(
        alarm_name: impl Into<String>,
        new_state: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            alarm_name: alarm_name.into(),
            new_state: new_state.into(),
            reason: reason.into(),
            description: None,
            old_state: None,
            state_change_time: None,
            region: None,
        }
    }

    /// Whether the alarm moved into the firing state.
    pub fn is_alarm(&self) -> bool {
        self.new_state == ALARM_STATE
    }
}

impl RawNotice {
    fn into_notice(self) -> StateChangeNotice {
        StateChangeNotice {
            alarm_name: self
                .alarm_name
                .unwrap_or_else(|| DEFAULT_ALARM_NAME.to_string()),
            new_state: self.new_state_value.unwrap_or_else(|| DEFAULT_STATE.to_string()),
            reason: self
                .new_state_reason
                .unwrap_or_else(|| DEFAULT_REASON.to_string()),
            description: self.alarm_description,
            old_state: self.old_state_value,
            state_change_time: self.state_change_time,
            region: self.region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_fields() {
        let payload = r#"{
            "AlarmName": "Primary-API-Health",
            "AlarmDescription": "Route 53 health check for primary",
            "NewStateValue": "ALARM",
            "NewStateReason": "Health check failed",
            "OldStateValue": "OK",
            "StateChangeTime": "2024-05-01T12:00:00.000+0000",
            "Region": "US East (N. Virginia)"
        }"#;
        let notice = StateChangeNotice::parse(payload).unwrap();

        assert_eq!(notice.alarm_name, "Primary-API-Health");
        assert_eq!(notice.new_state, "ALARM");
        assert_eq!(notice.reason, "Health check failed");
        assert_eq!(notice.old_state.as_deref(), Some("OK"));
        assert_eq!(notice.region.as_deref(), Some("US East (N. Virginia)"));
        assert!(notice.is_alarm());
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let notice = StateChangeNotice::parse("{}").unwrap();

        assert_eq!(notice.alarm_name, "Unknown");
        assert_eq!(notice.new_state, "Unknown");
        assert_eq!(notice.reason, "No reason provided");
        assert!(notice.description.is_none());
        assert!(!notice.is_alarm());
    }

    #[test]
    fn test_null_treated_as_missing() {
        let notice =
            StateChangeNotice::parse(r#"{"AlarmName": null, "NewStateValue": "OK"}"#).unwrap();

        assert_eq!(notice.alarm_name, DEFAULT_ALARM_NAME);
        assert_eq!(notice.new_state, "OK");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let payload = r#"{"AlarmName": "x", "Trigger": {"MetricName": "HealthCheckStatus"}}"#;
        let notice = StateChangeNotice::parse(payload).unwrap();
        assert_eq!(notice.alarm_name, "x");
    }

    #[test]
    fn test_state_comparison_is_exact() {
        assert!(!StateChangeNotice::new("a", "alarm", "r").is_alarm());
        assert!(!StateChangeNotice::new("a", "ALARM ", "r").is_alarm());
        assert!(StateChangeNotice::new("a", "ALARM", "r").is_alarm());
    }

    #[test]
    fn test_invalid_json() {
        let err = StateChangeNotice::parse("{\"AlarmName\": ").unwrap_err();
        assert!(matches!(err, NoticeError::MalformedPayload(_)));
    }

    #[test]
    fn test_payload_not_an_object() {
        for payload in ["[]", r#"["Primary","ALARM","r"]"#, r#""str""#, "42", "null"] {
            let err = StateChangeNotice::parse(payload).unwrap_err();
            assert!(
                matches!(err, NoticeError::MalformedPayload(_)),
                "payload {} should be rejected",
                payload
            );
        }
    }

    #[test]
    fn test_array_payload_not_read_positionally() {
        let result = StateChangeNotice::parse(r#"["Primary-API-Health","ALARM","boom"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_field() {
        let err = StateChangeNotice::parse(r#"{"AlarmName": 42}"#).unwrap_err();
        assert!(matches!(err, NoticeError::MalformedPayload(_)));
    }
}
