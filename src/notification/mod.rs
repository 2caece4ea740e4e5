// Notification log (alerts shown to every viewer)

mod log;
#[cfg(test)]
mod tests;

pub use log::NotificationLog;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category tag attached to a notification.
///
/// Only `Delay` is produced by the lifecycle ticker. `Refusal` and `Failed`
/// exist so the companion feed can filter them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Delay,
    Refusal,
    Failed,
}

impl NotificationKind {
    /// Kinds hidden from the Family Member companion view
    pub fn is_clinical_alert(&self) -> bool {
        matches!(
            self,
            NotificationKind::Delay | NotificationKind::Refusal | NotificationKind::Failed
        )
    }
}

/// Extra fields carried by a delay alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayContext {
    pub task_name: String,
    pub robot: String,
    pub room: String,
}

/// One entry in the notification log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// UUIDv7 identifier (time-ordered, unique within a millisecond)
    pub id: Uuid,

    pub message: String,

    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationKind>,

    /// Present only when `kind` is `Delay`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<DelayContext>,
}

impl Notification {
    pub fn is_delay(&self) -> bool {
        self.kind == Some(NotificationKind::Delay)
    }
}

/// A notification that has not been appended yet.
///
/// Produced by pure planning code (the lifecycle ticker) and turned into a
/// `Notification` by `NotificationLog::append`.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDraft {
    pub message: String,
    pub kind: Option<NotificationKind>,
    pub context: Option<DelayContext>,
}

impl NotificationDraft {
    /// Untagged informational message
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            context: None,
        }
    }

    /// Delay alert with its task context
    pub fn delay(message: impl Into<String>, context: DelayContext) -> Self {
        Self {
            message: message.into(),
            kind: Some(NotificationKind::Delay),
            context: Some(context),
        }
    }
}
