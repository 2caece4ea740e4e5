use super::{NewTask, Task, TaskStatus, TaskUpdate};
use serde::Serialize;
use tracing::{debug, info};

/// Ordered, append-only collection of delivery tasks.
///
/// Kept sorted by descending priority rank after every insertion; the sort is
/// stable so equal priorities stay in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

/// Headline counts for the delivery dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with existing tasks (sorted on entry)
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut registry = Self { tasks };
        registry.sort_by_priority();
        registry
    }

    /// Next id: max existing id + 1, or 1 when empty
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    /// Create a Pending task from the request and insert it
    pub fn add(&mut self, request: NewTask) -> Task {
        let task = Task::from_request(self.next_id(), request);

        self.tasks.push(task.clone());
        self.sort_by_priority();

        info!(
            task_id = task.id,
            name = %task.name,
            robot = %task.robot,
            priority = ?task.priority,
            "Task added"
        );

        task
    }

    /// Merge `update` into the task with `id`; `None` if no such task
    pub fn update(&mut self, id: u64, update: &TaskUpdate) -> Option<&Task> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(task_id = id, "Update for unknown task ignored");
            return None;
        };

        update.apply_to(task);
        Some(&*task)
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            total: self.tasks.len(),
            completed: self.count(|s| s == TaskStatus::Delivered),
            in_progress: self.count(|s| s.is_in_progress()),
            pending: self.count(|s| s == TaskStatus::Pending),
        }
    }

    /// Delivered tasks still waiting for a recipient signature
    pub fn awaiting_signature(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.awaits_signature()).collect()
    }

    /// Tasks whose robot is en route or waiting to leave
    pub fn active(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| matches!(t.status, TaskStatus::InTransit | TaskStatus::Pending))
            .collect()
    }

    fn count(&self, pred: impl Fn(TaskStatus) -> bool) -> usize {
        self.tasks.iter().filter(|t| pred(t.status)).count()
    }

    fn sort_by_priority(&mut self) {
        // Vec::sort_by is stable
        self.tasks
            .sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    }
}
