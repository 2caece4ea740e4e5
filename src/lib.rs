// Configuration loading and env overrides
pub mod config;

// Delivery task model and registry
pub mod task;

// Notification log
pub mod notification;

// Inventory ledger
pub mod inventory;

// Locale string tables
pub mod i18n;

// Task lifecycle ticker and timer-driven runners
pub mod simulation;

// Floor map motion and fleet telemetry
pub mod fleet;

// Dashboard session state and operations
pub mod dashboard;
