use anyhow::{Context, Result};
use medibot::config::{self, apply_env_overrides, MedibotConfig, CONFIG_PATH_ENV};
use medibot::dashboard::{Dashboard, DashboardEvent};
use medibot::simulation::{spawn_fleet_animation, spawn_fleet_telemetry, spawn_lifecycle_ticker};
use medibot::task::initial_tasks;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medibot=info".into()),
        )
        .init();

    info!("MediBot dashboard starting...");

    // Load configuration
    let mut config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => {
            info!(path = %path, "Loading configuration");
            config::load_config(&path)
                .map_err(|e| anyhow::anyhow!("{}", e))
                .with_context(|| format!("Failed to load config from {}", path))?
        }
        Err(_) => {
            info!("No config file set, using defaults");
            MedibotConfig::default()
        }
    };
    apply_env_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    info!(
        tick_interval_ms = config.simulation.tick_interval_ms,
        locale = %config.session.locale,
        role = %config.session.role,
        "Configuration loaded"
    );

    // Session state
    let dashboard = Dashboard::new(&config).with_tasks(initial_tasks());
    let mut events = dashboard.subscribe();
    let dashboard = dashboard.into_shared();

    // Tickers stop when their handles drop at the end of main
    let _lifecycle = spawn_lifecycle_ticker(
        dashboard.clone(),
        Duration::from_millis(config.simulation.tick_interval_ms),
        StdRng::from_entropy(),
    );
    let _animation = spawn_fleet_animation(
        dashboard.clone(),
        Duration::from_millis(config.fleet.animation_interval_ms),
    );
    let _telemetry = spawn_fleet_telemetry(
        dashboard.clone(),
        Duration::from_millis(config.fleet.telemetry_interval_ms),
        StdRng::from_entropy(),
    );

    info!("Dashboard running, press Ctrl+C to stop");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(DashboardEvent::NotificationAdded { notification }) => {
                    info!(id = %notification.id, "{}", notification.message);
                }
                Ok(DashboardEvent::Tick { report }) if report.delivered > 0 || report.delayed > 0 => {
                    let summary = dashboard.lock().await.summary();
                    info!(
                        completed = summary.completed,
                        in_progress = summary.in_progress,
                        pending = summary.pending,
                        "Task summary"
                    );
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event listener lagged");
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}
