//! Message templates for each alert category.

use alarm_notice::StateChangeNotice;
use chrono::{DateTime, Utc};

use crate::category::AlertCategory;
use crate::clock::format_timestamp;
use crate::config::AlertConfig;

/// A rendered alert, ready to be written to the log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAlert {
    /// The category the text was rendered for.
    pub category: AlertCategory,
    /// The full multi-line message.
    pub text: String,
}

impl FormattedAlert {
    /// The title line of the message.
    pub fn title(&self) -> &'static str {
        title(self.category)
    }
}

/// The emoji-framed title line for a category.
pub fn title(category: AlertCategory) -> &'static str {
    match category {
        AlertCategory::PrimaryDown => "🚨 KNOW API ALERT 🚨",
        AlertCategory::SecondaryDown => "⚠️ KNOW API WARNING ⚠️",
        AlertCategory::FailoverActive => "🔄 KNOW API FAILOVER 🔄",
        AlertCategory::Recovered => "✅ KNOW API RECOVERY ✅",
    }
}

/// Render the message for a classified notice.
///
/// Values are interpolated verbatim; nothing is escaped or truncated.
pub fn render(
    category: AlertCategory,
    notice: &StateChangeNotice,
    at: DateTime<Utc>,
    config: &AlertConfig,
) -> FormattedAlert {
    let time = format_timestamp(at);
    let mut lines: Vec<String> = vec![String::new(), title(category).to_string(), String::new()];

    match category {
        AlertCategory::PrimaryDown => {
            lines.push("Primary instance (containers) is DOWN!".to_string());
            lines.push(format!("• Time: {}", time));
            lines.push(format!("• Alarm: {}", notice.alarm_name));
            lines.push(format!("• Status: {}", notice.new_state));
            lines.push(format!("• Reason: {}", notice.reason));
            lines.push("• Action: Traffic automatically routed to backup instance".to_string());
            lines.push(format!("• Check: {}", config.health_check_url));
            lines.push(String::new());
            lines.push("Next steps:".to_string());
            lines.push("1. Check EC2 instance status".to_string());
            lines.push("2. Check Docker containers".to_string());
            lines.push("3. Review logs if needed".to_string());
        }
        AlertCategory::SecondaryDown => {
            lines.push(format!(
                "Backup instance ({}) is DOWN!",
                config.backup_instance
            ));
            lines.push(format!("• Time: {}", time));
            lines.push("• Status: Running on primary only (no backup)".to_string());
            lines.push("• Consider investigating backup instance".to_string());
        }
        AlertCategory::FailoverActive => {
            lines.push("API is now running on BACKUP instance!".to_string());
            lines.push("• Primary: DOWN".to_string());
            lines.push("• Secondary: UP (serving traffic)".to_string());
            lines.push(format!("• Time: {}", time));
            lines.push(format!("• URL: {} still works", config.production_url));
        }
        AlertCategory::Recovered => {
            lines.push("System is back to normal!".to_string());
            lines.push(format!("• Time: {}", time));
            lines.push(format!("• Alarm: {}", notice.alarm_name));
            lines.push(format!("• Status: {}", notice.new_state));
        }
    }

    FormattedAlert {
        category,
        text: lines.join("\n"),
    }
}
