//! Alert classification and formatting for KNOW API alarm notifications.
//!
//! Each invocation carries one alarm state change. The handler classifies it
//! into one of four categories, renders the matching message and writes it to
//! the log sink:
//!
//! - `PrimaryDown` - "Primary" alarm firing
//! - `SecondaryDown` - "Secondary" alarm firing
//! - `FailoverActive` - "Backup-Only" alarm firing
//! - `Recovered` - everything else
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use alert_formatter::{AlertConfig, AlertHandler, HandlerResponse, MemorySink, SystemClock};
//!
//! # fn example() -> Result<(), alert_formatter::HandlerError> {
//! let sink = Arc::new(MemorySink::new());
//! let handler = AlertHandler::new(AlertConfig::default(), Arc::new(SystemClock), sink.clone());
//!
//! let input = r#"{"Records":[{"Sns":{"Message":"{\"AlarmName\":\"Primary-API-Health\",\"NewStateValue\":\"OK\"}"}}]}"#;
//! let response = handler.handle_json(input)?;
//!
//! assert_eq!(response, HandlerResponse::processed());
//! assert!(sink.last().unwrap().contains("KNOW API RECOVERY"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod category;
pub mod clock;
pub mod config;
pub mod error;
pub mod handler;
pub mod sink;
pub mod template;

pub use alarm_notice::{NotificationEvent, NoticeError, StateChangeNotice};
pub use category::{classify, classify_parts, AlertCategory, CLASSIFICATION_RULES};
pub use clock::{format_timestamp, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use config::{AlertConfig, ConfigError, LogFormat};
pub use error::HandlerError;
pub use handler::{AlertHandler, HandlerResponse, PROCESSED_BODY, PROCESSED_STATUS};
pub use sink::{AlertSink, MemorySink, StdoutSink};
pub use template::{render, title, FormattedAlert};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
