//! The invocation entry point.

use std::sync::Arc;

use alarm_notice::{NotificationEvent, StateChangeNotice};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::category::classify;
use crate::clock::{Clock, SystemClock};
use crate::config::AlertConfig;
use crate::error::HandlerError;
use crate::sink::{AlertSink, StdoutSink};
use crate::template::{render, FormattedAlert};

/// Status code returned for every processed alert.
pub const PROCESSED_STATUS: u16 = 200;

/// Body returned for every processed alert.
pub const PROCESSED_BODY: &str = "Alert processed";

/// The result handed back to the invoking runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// The fixed response for a processed alert.
    pub fn processed() -> Self {
        Self {
            status_code: PROCESSED_STATUS,
            body: PROCESSED_BODY.to_string(),
        }
    }
}

/// Classifies alarm notifications and emits the rendered alert.
///
/// Holds no per-invocation state, so one handler can serve any number of
/// invocations, concurrently or not.
#[derive(Clone)]
pub struct AlertHandler {
    config: AlertConfig,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn AlertSink>,
}

impl AlertHandler {
    /// Create a handler with explicit clock and sink.
    pub fn new(config: AlertConfig, clock: Arc<dyn Clock>, sink: Arc<dyn AlertSink>) -> Self {
        Self {
            config,
            clock,
            sink,
        }
    }

    /// Create a handler that reads the system clock and writes to stdout.
    pub fn with_defaults(config: AlertConfig) -> Self {
        Self::new(config, Arc::new(SystemClock), Arc::new(StdoutSink))
    }

    /// Get the handler configuration.
    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Handle an envelope given as JSON text.
    pub fn handle_json(&self, input: &str) -> Result<HandlerResponse, HandlerError> {
        let event = NotificationEvent::from_json(input)?;
        self.handle(&event)
    }

    /// Handle a parsed envelope.
    pub fn handle(&self, event: &NotificationEvent) -> Result<HandlerResponse, HandlerError> {
        let notice = event.notice()?;
        let alert = self.format(&notice);
        self.sink.emit(&alert.text);
        Ok(HandlerResponse::processed())
    }

    /// Classify and render a notice without emitting it.
    pub fn format(&self, notice: &StateChangeNotice) -> FormattedAlert {
        let category = classify(notice);

        info!(
            alarm_name = %notice.alarm_name,
            new_state = %notice.new_state,
            category = %category,
            "Classified alarm state change"
        );
        debug!(
            old_state = notice.old_state.as_deref().unwrap_or("-"),
            region = notice.region.as_deref().unwrap_or("-"),
            state_change_time = notice.state_change_time.as_deref().unwrap_or("-"),
            description = notice.description.as_deref().unwrap_or("-"),
            "Notice details"
        );

        render(category, notice, self.clock.now(), &self.config)
    }
}

impl std::fmt::Debug for AlertHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertHandler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::AlertCategory;
    use crate::clock::FixedClock;
    use crate::sink::MemorySink;
    use chrono::{TimeZone, Utc};

    fn handler() -> (AlertHandler, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let handler = AlertHandler::new(AlertConfig::default(), Arc::new(clock), sink.clone());
        (handler, sink)
    }

    #[test]
    fn test_response_serialization() {
        let json = serde_json::to_value(HandlerResponse::processed()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "statusCode": 200, "body": "Alert processed" })
        );
    }

    #[test]
    fn test_format_does_not_emit() {
        let (handler, sink) = handler();
        let notice = StateChangeNotice::new("Backup-Only-Routing", "ALARM", "failover engaged");

        let alert = handler.format(&notice);
        assert_eq!(alert.category, AlertCategory::FailoverActive);
        assert!(sink.emitted().is_empty());
    }

    #[test]
    fn test_handle_emits_once() {
        let (handler, sink) = handler();
        let message = serde_json::json!({
            "AlarmName": "Primary-API-Health",
            "NewStateValue": "ALARM",
            "NewStateReason": "Health check failed"
        })
        .to_string();
        let input = serde_json::json!({ "Records": [{ "Sns": { "Message": message } }] });

        let response = handler.handle_json(&input.to_string()).unwrap();
        assert_eq!(response, HandlerResponse::processed());

        let emitted = sink.emitted();
        assert_eq!(emitted.len(), 1);
        assert!(emitted[0].contains("• Time: 2024-05-01 12:00:00 UTC"));
    }

    #[test]
    fn test_malformed_input_emits_nothing() {
        let (handler, sink) = handler();
        let input = serde_json::json!({ "Records": [{ "Sns": { "Message": "{oops" } }] });

        let err = handler.handle_json(&input.to_string()).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(sink.emitted().is_empty());
    }

    #[test]
    fn test_handler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AlertHandler>();
    }
}
