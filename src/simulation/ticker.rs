use crate::config::SimulationConfig;
use crate::i18n::Translator;
use crate::inventory::InventoryAdjustment;
use crate::notification::{DelayContext, NotificationDraft};
use crate::simulation::DelayRoll;
use crate::task::{Task, TaskStatus, TaskUpdate};

/// Numeric knobs of the lifecycle simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSettings {
    pub progress_step: u8,
    pub delay_checkpoint: u8,
    pub delay_probability: f64,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self::from(&SimulationConfig::default())
    }
}

impl From<&SimulationConfig> for TickSettings {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            progress_step: config.progress_step,
            delay_checkpoint: config.delay_checkpoint,
            delay_probability: config.delay_probability,
        }
    }
}

/// Session flags read by every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickFlags {
    pub emergency_stopped: bool,
    pub user_interacted: bool,
}

/// Outcome of one tick for one task
#[derive(Debug, Clone, PartialEq)]
pub enum TaskStep {
    /// Not in transit, already complete, or paused by emergency stop
    Unchanged,
    /// Progress moved forward, still in transit
    Advanced { progress: u8 },
    /// Delay fired; progress for this tick is discarded
    Delayed(DelayContext),
    /// Progress reached 100
    Delivered,
}

/// Decide what one tick does to a single task.
///
/// Pure apart from the draw taken from `roll`, which happens only when the
/// task first lands on the delay checkpoint and is not already delayed.
pub fn step_task(
    task: &Task,
    flags: TickFlags,
    settings: &TickSettings,
    roll: &mut dyn DelayRoll,
) -> TaskStep {
    if flags.emergency_stopped {
        return TaskStep::Unchanged;
    }
    if task.status != TaskStatus::InTransit || task.progress >= 100 {
        return TaskStep::Unchanged;
    }

    let progress = task.progress.saturating_add(settings.progress_step).min(100);

    if progress == settings.delay_checkpoint
        && !task.delayed
        && roll.roll(settings.delay_probability)
    {
        return TaskStep::Delayed(DelayContext {
            task_name: task.name.clone(),
            robot: task.robot.clone(),
            room: task.room.clone(),
        });
    }

    if progress == 100 {
        TaskStep::Delivered
    } else {
        TaskStep::Advanced { progress }
    }
}

/// Everything one tick wants to change, computed without touching state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickPlan {
    /// Field merges keyed by task id
    pub updates: Vec<(u64, TaskUpdate)>,
    /// Log entries in the order they should be appended
    pub notifications: Vec<NotificationDraft>,
    pub adjustments: Vec<InventoryAdjustment>,
    /// Ids of tasks delivered this tick
    pub delivered: Vec<u64>,
    /// Ids of tasks that hit the delay event this tick
    pub delayed: Vec<u64>,
    /// Whether the completion chime should sound
    pub play_chime: bool,
}

impl TickPlan {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.notifications.is_empty()
    }
}

/// Plan one lifecycle tick across every task.
///
/// Tasks are evaluated independently, so ordering does not matter beyond
/// the order of the resulting notifications.
pub fn plan_tick(
    tasks: &[Task],
    flags: TickFlags,
    settings: &TickSettings,
    roll: &mut dyn DelayRoll,
    translator: &Translator,
) -> TickPlan {
    let mut plan = TickPlan::default();

    for task in tasks {
        match step_task(task, flags, settings, roll) {
            TaskStep::Unchanged => {}
            TaskStep::Advanced { progress } => {
                plan.updates.push((
                    task.id,
                    TaskUpdate {
                        progress: Some(progress),
                        ..Default::default()
                    },
                ));
            }
            TaskStep::Delayed(context) => {
                let message = format!(
                    "ALERT: Delivery of \"{}\" by {} to {} is experiencing a delay.",
                    context.task_name, context.robot, context.room
                );
                plan.updates.push((
                    task.id,
                    TaskUpdate {
                        delayed: Some(true),
                        ..Default::default()
                    },
                ));
                plan.notifications
                    .push(NotificationDraft::delay(message, context));
                plan.delayed.push(task.id);
            }
            TaskStep::Delivered => {
                plan.updates.push((
                    task.id,
                    TaskUpdate {
                        progress: Some(100),
                        status: Some(TaskStatus::Delivered),
                        ..Default::default()
                    },
                ));
                plan.notifications.push(NotificationDraft::info(format!(
                    "{}: {} has completed delivery of \"{}\" to {}.",
                    translator.t("deliveryConfirmed"),
                    task.robot,
                    task.name,
                    task.room
                )));
                if let Some(adjustment) = InventoryAdjustment::for_delivery(&task.name) {
                    plan.adjustments.push(adjustment);
                }
                plan.delivered.push(task.id);
            }
        }
    }

    plan.play_chime = flags.user_interacted && !plan.delivered.is_empty();
    plan
}
