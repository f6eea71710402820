//! Heading control core - calibration, PID follow, pivot turn, termination

pub mod calibrate;
pub mod fault;
pub mod follow;
pub mod pid;
pub mod pivot;
pub mod termination;

pub use calibrate::{calibrate, CalibratedGyro, CalibrationProfile};
pub use fault::Fault;
pub use follow::{FollowConfig, HeadingFollow};
pub use pid::{PidGains, PidTracker};
pub use pivot::{Pivot, PivotConfig};
pub use termination::{BoundedDuration, CancelFlag, Forever, TerminationPolicy};
