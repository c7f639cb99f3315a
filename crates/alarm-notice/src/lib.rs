//! Alarm notification types for KNOW API alerting.
//!
//! This crate unpacks the envelope a pub/sub transport delivers on each
//! invocation and extracts the alarm state-change notice inside it:
//!
//! - `NotificationEvent` - the `Records[].Sns.Message` envelope
//! - `StateChangeNotice` - alarm name, new state and reason, with defaults
//!
//! # Example
//!
//! ```rust
//! use alarm_notice::NotificationEvent;
//!
//! # fn example() -> Result<(), alarm_notice::NoticeError> {
//! let input = r#"{"Records":[{"Sns":{"Message":"{\"AlarmName\":\"Primary-API-Health\",\"NewStateValue\":\"ALARM\"}"}}]}"#;
//! let event = NotificationEvent::from_json(input)?;
//! let notice = event.notice()?;
//!
//! assert_eq!(notice.alarm_name, "Primary-API-Health");
//! assert_eq!(notice.reason, "No reason provided");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod envelope;
pub mod error;
pub mod notice;

pub use envelope::{NotificationEvent, NotificationRecord, TopicMessage};
pub use error::NoticeError;
pub use notice::{
    StateChangeNotice, ALARM_STATE, DEFAULT_ALARM_NAME, DEFAULT_REASON, DEFAULT_STATE,
};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
