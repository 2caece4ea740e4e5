// Task lifecycle simulation and timer-driven runners

mod delay;
pub mod runner;
mod ticker;
#[cfg(test)]
mod tests;

pub use delay::{DelayRoll, FixedRoll};
pub use runner::{
    spawn_fleet_animation, spawn_fleet_telemetry, spawn_lifecycle_ticker, TickerHandle,
};
pub use ticker::{plan_tick, step_task, TaskStep, TickFlags, TickPlan, TickSettings};
