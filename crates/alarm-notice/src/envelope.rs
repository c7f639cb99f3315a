//! Notification envelope types delivered by the pub/sub transport.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::NoticeError;
use crate::notice::StateChangeNotice;

/// The outer envelope handed to the handler on each invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Notification records. Only the first one is processed.
    #[serde(rename = "Records")]
    pub records: Vec<NotificationRecord>,
}

/// A single record in the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationRecord {
    /// Origin of the record (e.g., "aws:sns").
    #[serde(default)]
    pub event_source: Option<String>,

    /// Record format version.
    #[serde(default)]
    pub event_version: Option<String>,

    /// Subscription that delivered this record.
    #[serde(default)]
    pub event_subscription_arn: Option<String>,

    /// The published message.
    pub sns: TopicMessage,
}

/// A message published to a notification topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopicMessage {
    /// Message type (usually "Notification").
    #[serde(default)]
    pub r#type: Option<String>,

    /// Unique message identifier.
    #[serde(default)]
    pub message_id: Option<String>,

    /// Topic the message was published to.
    #[serde(default)]
    pub topic_arn: Option<String>,

    /// Optional subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// The JSON-encoded state-change notice.
    pub message: String,

    /// Publish time as sent by the transport.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl NotificationEvent {
    /// Parse an envelope from its JSON text.
    ///
    /// The envelope, each record and each record's `Sns` must be JSON
    /// objects; array-shaped values are rejected.
    pub fn from_json(input: &str) -> Result<Self, NoticeError> {
        let value: Value = serde_json::from_str(input).map_err(NoticeError::InvalidEnvelope)?;
        require_objects(&value).map_err(NoticeError::InvalidEnvelope)?;
        serde_json::from_value(value).map_err(NoticeError::InvalidEnvelope)
    }

    /// The record this invocation is about.
    pub fn first_record(&self) -> Result<&NotificationRecord, NoticeError> {
        let record = self.records.first().ok_or(NoticeError::NoRecords)?;

        if self.records.len() > 1 {
            warn!(
                records = self.records.len(),
                "Envelope carries more than one record; only the first is processed"
            );
        }

        Ok(record)
    }

    /// Parse the state-change notice carried by the first record.
    pub fn notice(&self) -> Result<StateChangeNotice, NoticeError> {
        let record = self.first_record()?;
        debug!(
            message_id = record.sns.message_id.as_deref().unwrap_or("-"),
            topic = record.sns.topic_arn.as_deref().unwrap_or("-"),
            "Unpacking notification record"
        );
        StateChangeNotice::parse(&record.sns.message)
    }
}

fn require_objects(envelope: &Value) -> Result<(), serde_json::Error> {
    let envelope = envelope
        .as_object()
        .ok_or_else(|| serde_json::Error::custom("envelope must be a JSON object"))?;

    let records = match envelope.get("Records") {
        Some(Value::Array(records)) => records,
        _ => return Ok(()),
    };

    for (index, record) in records.iter().enumerate() {
        let record = record.as_object().ok_or_else(|| {
            serde_json::Error::custom(format!("Records[{}] must be a JSON object", index))
        })?;
        if let Some(sns) = record.get("Sns") {
            if !sns.is_object() {
                return Err(serde_json::Error::custom(format!(
                    "Records[{}].Sns must be a JSON object",
                    index
                )));
            }
        }
    }

    Ok(())
}
