use crate::dashboard::{Role, Section};
use crate::fleet::{FleetStats, FloorRobot};
use crate::i18n::Locale;
use crate::notification::Notification;
use crate::task::{Task, TaskSummary};
use serde::Serialize;
use std::collections::BTreeMap;

/// Change event broadcast to renderers after every mutation
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    TaskAdded { task_id: u64 },
    TaskUpdated { task_id: u64 },
    NotificationAdded { notification: Notification },
    NotificationsCleared { removed: usize },
    InventoryChanged { item: String, quantity: u32 },
    EmergencyStop { active: bool },
    SectionChanged { section: Section },
    RobotsArrived { count: usize },
    FleetUpdated { stats: FleetStats },
    Tick { report: TickReport },
}

/// Counts from one applied lifecycle tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    pub advanced: usize,
    pub delayed: usize,
    pub delivered: usize,
    /// True when the tick was skipped by emergency stop
    pub paused: bool,
}

/// Read-only view of the whole session for rendering
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub tasks: Vec<Task>,
    pub summary: TaskSummary,
    pub notifications: Vec<Notification>,
    /// `None` when the current role may not view inventory
    pub inventory: Option<BTreeMap<String, u32>>,
    pub emergency_stopped: bool,
    pub user_interacted: bool,
    pub role: Role,
    pub active_section: Section,
    pub locale: Locale,
    pub fleet: FleetStats,
    pub floor_robots: Vec<FloorRobot>,
}
