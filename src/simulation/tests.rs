use super::*;
use crate::i18n::{Locale, Translator};
use crate::inventory::MEDICATION_COUNTER;
use crate::notification::NotificationKind;
use crate::task::{initial_tasks, NewTask, Task, TaskStatus};

fn task(id: u64, name: &str, status: TaskStatus, progress: u8) -> Task {
    let mut task = Task::from_request(
        id,
        NewTask {
            name: name.to_string(),
            robot: "Robot B".to_string(),
            drop_off: "Laboratory".to_string(),
            ..Default::default()
        },
    );
    task.status = status;
    task.progress = progress;
    task
}

/// Counts how many times the delay was rolled
struct CountingRoll {
    calls: usize,
    outcome: bool,
}

impl DelayRoll for CountingRoll {
    fn roll(&mut self, _probability: f64) -> bool {
        self.calls += 1;
        self.outcome
    }
}

fn running() -> TickFlags {
    TickFlags::default()
}

#[test]
fn test_step_advances_by_configured_step() {
    let t = task(1, "Lab Sample Transport", TaskStatus::InTransit, 30);
    let settings = TickSettings {
        progress_step: 25,
        ..Default::default()
    };

    let step = step_task(&t, running(), &settings, &mut FixedRoll(false));
    assert_eq!(step, TaskStep::Advanced { progress: 55 });
}

#[test]
fn test_step_clamps_at_hundred() {
    let t = task(1, "Lab Sample Transport", TaskStatus::InTransit, 95);
    let step = step_task(&t, running(), &TickSettings::default(), &mut FixedRoll(false));
    assert_eq!(step, TaskStep::Delivered);
}

#[test]
fn test_step_skips_non_transit_statuses() {
    let settings = TickSettings::default();
    for status in [
        TaskStatus::Pending,
        TaskStatus::Delivered,
        TaskStatus::AttemptingRedelivery,
        TaskStatus::Failed,
    ] {
        let t = task(1, "Lab Sample Transport", status, 50);
        assert_eq!(
            step_task(&t, running(), &settings, &mut FixedRoll(true)),
            TaskStep::Unchanged
        );
    }
}

#[test]
fn test_step_paused_by_emergency_stop() {
    let t = task(1, "Lab Sample Transport", TaskStatus::InTransit, 60);
    let flags = TickFlags {
        emergency_stopped: true,
        ..Default::default()
    };
    let mut roll = CountingRoll {
        calls: 0,
        outcome: true,
    };

    assert_eq!(
        step_task(&t, flags, &TickSettings::default(), &mut roll),
        TaskStep::Unchanged
    );
    assert_eq!(roll.calls, 0);
}

#[test]
fn test_roll_only_on_checkpoint() {
    let settings = TickSettings::default();
    let mut roll = CountingRoll {
        calls: 0,
        outcome: false,
    };

    for progress in [0, 10, 20, 30, 40, 50, 70, 80, 90] {
        let t = task(1, "Lab Sample Transport", TaskStatus::InTransit, progress);
        step_task(&t, running(), &settings, &mut roll);
    }
    assert_eq!(roll.calls, 0);

    let t = task(1, "Lab Sample Transport", TaskStatus::InTransit, 60);
    step_task(&t, running(), &settings, &mut roll);
    assert_eq!(roll.calls, 1);
}

#[test]
fn test_already_delayed_task_is_not_rolled() {
    let mut t = task(1, "Lab Sample Transport", TaskStatus::InTransit, 60);
    t.delayed = true;
    let mut roll = CountingRoll {
        calls: 0,
        outcome: true,
    };

    let step = step_task(&t, running(), &TickSettings::default(), &mut roll);

    assert_eq!(step, TaskStep::Advanced { progress: 70 });
    assert_eq!(roll.calls, 0);
}

#[test]
fn test_plan_delay_alert() {
    let tasks = vec![task(7, "Lab Sample Transport", TaskStatus::InTransit, 60)];

    let plan = plan_tick(
        &tasks,
        running(),
        &TickSettings::default(),
        &mut FixedRoll(true),
        &Translator::default(),
    );

    assert_eq!(plan.delayed, vec![7]);
    assert_eq!(plan.updates.len(), 1);
    assert_eq!(plan.updates[0].1.delayed, Some(true));
    assert_eq!(plan.updates[0].1.progress, None);

    let draft = &plan.notifications[0];
    assert_eq!(draft.kind, Some(NotificationKind::Delay));
    assert_eq!(draft.context.as_ref().unwrap().robot, "Robot B");
    assert!(!plan.play_chime);
}

#[test]
fn test_plan_delivery() {
    let tasks = vec![task(3, "Medication Delivery", TaskStatus::InTransit, 90)];
    let flags = TickFlags {
        user_interacted: true,
        ..Default::default()
    };

    let plan = plan_tick(
        &tasks,
        flags,
        &TickSettings::default(),
        &mut FixedRoll(false),
        &Translator::default(),
    );

    assert_eq!(plan.delivered, vec![3]);
    assert_eq!(plan.updates[0].1.status, Some(TaskStatus::Delivered));
    assert_eq!(plan.updates[0].1.progress, Some(100));
    assert_eq!(plan.adjustments.len(), 1);
    assert_eq!(plan.adjustments[0].item, MEDICATION_COUNTER);
    assert!(plan.play_chime);
}

#[test]
fn test_plan_delivery_message_uses_locale() {
    let tasks = vec![task(3, "Medication Delivery", TaskStatus::InTransit, 90)];

    let plan = plan_tick(
        &tasks,
        running(),
        &TickSettings::default(),
        &mut FixedRoll(false),
        &Translator::new(Locale::Es),
    );

    assert_eq!(
        plan.notifications[0].message,
        "Entrega Confirmada: Robot B has completed delivery of \"Medication Delivery\" to Laboratory."
    );
}

#[test]
fn test_plan_seed_tasks() {
    let tasks = initial_tasks();

    let plan = plan_tick(
        &tasks,
        running(),
        &TickSettings::default(),
        &mut FixedRoll(false),
        &Translator::default(),
    );

    // Two in transit, one pending
    assert_eq!(plan.updates.len(), 2);
    assert!(plan.notifications.is_empty());
    assert!(!plan.is_empty());
}

#[test]
fn test_plan_nothing_to_do() {
    let tasks = vec![task(1, "Lab Sample Transport", TaskStatus::Delivered, 100)];

    let plan = plan_tick(
        &tasks,
        running(),
        &TickSettings::default(),
        &mut FixedRoll(true),
        &Translator::default(),
    );

    assert!(plan.is_empty());
}

#[test]
fn test_settings_from_config() {
    let config = crate::config::SimulationConfig {
        progress_step: 5,
        delay_checkpoint: 50,
        delay_probability: 0.0,
        ..Default::default()
    };

    let settings = TickSettings::from(&config);
    assert_eq!(settings.progress_step, 5);
    assert_eq!(settings.delay_checkpoint, 50);
}
