//! Closed-loop heading control for a two-wheel differential-drive robot
//! with a single-axis gyro sensor.
//!
//! The crate keeps the robot driving along a commanded heading (PID follow)
//! or rotates it to a commanded absolute heading (bang-bang pivot), using
//! continuous gyro feedback rather than open-loop timing. Hardware access
//! goes through the traits in [`hardware`]; a simulated robot is included
//! for the demo binary, tests, and benches.
//!
//! Both controllers guarantee the drivetrain receives a stop command on
//! every exit path, including faults.

pub mod config;
pub mod control;
pub mod experiments;
pub mod hardware;
pub mod metrics;
pub mod status;

pub use config::{load_config, RuntimeConfig};
pub use control::{
    calibrate, BoundedDuration, CalibratedGyro, CalibrationProfile, CancelFlag, Fault,
    FollowConfig, Forever, HeadingFollow, PidGains, PidTracker, Pivot, PivotConfig,
    TerminationPolicy,
};
pub use hardware::simulated::{SimGyro, SimLeds, SimTank, SimulatedRobot};
pub use hardware::{GyroMode, GyroSensor, LedColor, LedSide, StatusLeds, TankDrive};
pub use metrics::{CycleMetrics, MetricsReport};
pub use status::StatusLog;
