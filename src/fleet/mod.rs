// Robot fleet: floor map motion and telemetry simulation

pub mod motion;
pub mod telemetry;

pub use motion::{FloorMap, FloorRobot, FloorStatus, MotionStep, Point, Room, RoomKind};
pub use telemetry::{Fleet, FleetRobot, FleetSort, FleetStats, RobotAction, RobotState};
