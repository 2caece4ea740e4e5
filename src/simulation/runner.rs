use crate::dashboard::SharedDashboard;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Owns a spawned periodic task; dropping the handle stops it.
#[derive(Debug)]
pub struct TickerHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the ticker now (same as dropping it)
    pub fn cancel(self) {}
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!(ticker = self.name, "Ticker stopped");
    }
}

/// Shortest period a ticker will run at
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Run `body` every `period`, first firing one period after spawn.
///
/// A zero period is raised to `MIN_PERIOD`; tokio intervals panic on zero.
fn spawn_periodic<F, Fut>(name: &'static str, period: Duration, mut body: F) -> TickerHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let period = if period.is_zero() {
        warn!(ticker = name, "Zero ticker period, using minimum");
        MIN_PERIOD
    } else {
        period
    };
    info!(ticker = name, period_ms = period.as_millis() as u64, "Starting ticker");

    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);

        // Skip missed ticks so a stalled runtime doesn't replay a burst
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            body().await;
        }
    });

    TickerHandle { name, task }
}

/// Periodically advance every delivery task.
///
/// Each firing takes the session lock once and performs one full pass.
pub fn spawn_lifecycle_ticker<R>(
    dashboard: SharedDashboard,
    period: Duration,
    rng: R,
) -> TickerHandle
where
    R: Rng + Send + 'static,
{
    let rng = std::sync::Arc::new(tokio::sync::Mutex::new(rng));

    spawn_periodic("lifecycle", period, move || {
        let dashboard = dashboard.clone();
        let rng = rng.clone();
        async move {
            let mut rng = rng.lock().await;
            dashboard.lock().await.tick(&mut *rng);
        }
    })
}

/// Periodically move floor-map robots along their waypoints
pub fn spawn_fleet_animation(dashboard: SharedDashboard, period: Duration) -> TickerHandle {
    spawn_periodic("floor-map", period, move || {
        let dashboard = dashboard.clone();
        async move {
            dashboard.lock().await.step_floor_map();
        }
    })
}

/// Periodically drift fleet telemetry (battery, temperature, signal)
pub fn spawn_fleet_telemetry<R>(
    dashboard: SharedDashboard,
    period: Duration,
    rng: R,
) -> TickerHandle
where
    R: Rng + Send + 'static,
{
    let rng = std::sync::Arc::new(tokio::sync::Mutex::new(rng));

    spawn_periodic("telemetry", period, move || {
        let dashboard = dashboard.clone();
        let rng = rng.clone();
        async move {
            let mut rng = rng.lock().await;
            dashboard.lock().await.update_fleet_telemetry(&mut *rng);
        }
    })
}
