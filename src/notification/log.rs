use crate::notification::{DelayContext, Notification, NotificationDraft, NotificationKind};
use chrono::Utc;
use std::collections::VecDeque;
use tracing::debug;
use uuid::Uuid;

/// Append-only, insertion-ordered notification log.
///
/// Entries are never mutated. The only removals are `clear()` and, when a
/// capacity is configured, eviction of the oldest entry on overflow.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,

    /// `None` keeps every entry for the whole session
    max_entries: Option<usize>,
}

impl NotificationLog {
    /// Create an unbounded log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that keeps at most `max_entries` (0 means unbounded)
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: (max_entries > 0).then_some(max_entries),
        }
    }

    /// Append a message. Context is kept only for delay alerts.
    pub fn add(
        &mut self,
        message: impl Into<String>,
        kind: Option<NotificationKind>,
        context: Option<DelayContext>,
    ) -> Notification {
        let context = match kind {
            Some(NotificationKind::Delay) => context,
            _ => None,
        };

        let notification = Notification {
            id: Uuid::now_v7(),
            message: message.into(),
            created_at: Utc::now(),
            kind,
            context,
        };

        if let Some(max) = self.max_entries {
            while self.entries.len() >= max {
                if let Some(evicted) = self.entries.pop_front() {
                    debug!(notification_id = %evicted.id, "Evicted oldest notification");
                }
            }
        }

        self.entries.push_back(notification.clone());
        notification
    }

    /// Append a prepared draft
    pub fn append(&mut self, draft: NotificationDraft) -> Notification {
        self.add(draft.message, draft.kind, draft.context)
    }

    /// Remove every entry; returns how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Entries in insertion order (most recent last)
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries visible in the Family Member companion view
    pub fn companion_feed(&self) -> Vec<&Notification> {
        self.entries
            .iter()
            .filter(|n| !n.kind.is_some_and(|k| k.is_clinical_alert()))
            .collect()
    }

    /// Delay alerts, for the "analyze delay" affordance
    pub fn delay_alerts(&self) -> Vec<&Notification> {
        self.entries.iter().filter(|n| n.is_delay()).collect()
    }
}
