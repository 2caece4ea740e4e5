// Delivery task model and registry

mod registry;
mod seed;
mod validation;

pub use registry::{TaskRegistry, TaskSummary};
pub use seed::initial_tasks;
pub use validation::{
    validate_form, validate_signature, SignatureError, TaskFormError, MISSING_FIELDS_MESSAGE,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a delivery task.
///
/// The simulation only produces `Pending`, `InTransit` and `Delivered`.
/// `AttemptingRedelivery` and `Failed` are display vocabulary with no
/// producing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    #[serde(rename = "Attempting Redelivery")]
    AttemptingRedelivery,
    Failed,
}

impl TaskStatus {
    /// Returns `true` once no further transition can occur
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Delivered)
    }

    /// Counted under "in progress" on the delivery dashboard
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            TaskStatus::InTransit | TaskStatus::AttemptingRedelivery
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InTransit => "In Transit",
            TaskStatus::Delivered => "Delivered",
            TaskStatus::AttemptingRedelivery => "Attempting Redelivery",
            TaskStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery priority; higher rank sorts first in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Emergency,
}

impl Priority {
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Emergency => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// One robot delivery assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Registry-assigned id (max existing + 1, never reused)
    pub id: u64,

    /// Service type, e.g. "Medication Delivery"
    pub name: String,

    pub robot: String,
    pub status: TaskStatus,

    /// Percent complete, 0..=100
    pub progress: u8,

    /// Destination room shown on the dashboard
    pub room: String,

    pub pick_up: String,
    pub drop_off: String,
    pub priority: Priority,
    pub signature_needed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Set once when the one-shot delay event fires
    pub delayed: bool,

    pub compartment: String,
    pub patient_id: String,
    pub requested_by: String,
    pub special_instructions: String,
    pub refusal_count: u32,
}

impl Task {
    /// Build a freshly assigned task from a request payload
    pub fn from_request(id: u64, request: NewTask) -> Self {
        Self {
            id,
            name: request.name,
            robot: request.robot,
            status: TaskStatus::Pending,
            progress: 0,
            room: request.drop_off.clone(),
            pick_up: request.pick_up,
            drop_off: request.drop_off,
            priority: request.priority.unwrap_or_default(),
            signature_needed: false,
            signature: None,
            delayed: false,
            compartment: "N/A".to_string(),
            patient_id: request.patient_id,
            requested_by: request.requested_by,
            special_instructions: request.special_instructions,
            refusal_count: 0,
        }
    }

    /// Delivered, needs a signature and has none yet
    pub fn awaits_signature(&self) -> bool {
        self.status == TaskStatus::Delivered && self.signature_needed && self.signature.is_none()
    }
}

/// Payload for creating a task; omitted fields default to empty strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTask {
    pub name: String,
    pub robot: String,
    pub pick_up: String,
    pub drop_off: String,
    pub priority: Option<Priority>,
    pub patient_id: String,
    pub requested_by: String,
    pub special_instructions: String,
}

/// Partial update merged into an existing task (last writer wins).
///
/// Any task field except `id` can be set. Changing `priority` does not
/// reorder the registry; ordering is only applied on insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub robot: Option<String>,
    pub pick_up: Option<String>,
    pub drop_off: Option<String>,
    pub priority: Option<Priority>,
    pub patient_id: Option<String>,
    pub requested_by: Option<String>,
    pub special_instructions: Option<String>,
    pub status: Option<TaskStatus>,
    pub progress: Option<u8>,
    pub delayed: Option<bool>,
    pub signature: Option<String>,
    pub signature_needed: Option<bool>,
    pub compartment: Option<String>,
    pub room: Option<String>,
    pub refusal_count: Option<u32>,
}

impl TaskUpdate {
    /// Update that finalizes a delivery with a recipient signature
    pub fn signed(signature: impl Into<String>) -> Self {
        Self {
            signature: Some(signature.into()),
            status: Some(TaskStatus::Delivered),
            progress: Some(100),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge every `Some` field into `task`
    pub fn apply_to(&self, task: &mut Task) {
        merge(&mut task.name, &self.name);
        merge(&mut task.robot, &self.robot);
        merge(&mut task.pick_up, &self.pick_up);
        merge(&mut task.drop_off, &self.drop_off);
        merge(&mut task.patient_id, &self.patient_id);
        merge(&mut task.requested_by, &self.requested_by);
        merge(&mut task.special_instructions, &self.special_instructions);
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(progress) = self.progress {
            task.progress = progress.min(100);
        }
        if let Some(delayed) = self.delayed {
            task.delayed = delayed;
        }
        if let Some(signature) = &self.signature {
            task.signature = Some(signature.clone());
        }
        if let Some(needed) = self.signature_needed {
            task.signature_needed = needed;
        }
        if let Some(compartment) = &self.compartment {
            task.compartment = compartment.clone();
        }
        if let Some(room) = &self.room {
            task.room = room.clone();
        }
        if let Some(count) = self.refusal_count {
            task.refusal_count = count;
        }
    }
}

fn merge(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        field.clone_from(value);
    }
}
