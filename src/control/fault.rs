//! Fault kinds - fatal to the current controller invocation
//!
//! Faults are not retried internally. The controller stops the drivetrain,
//! then surfaces the fault to the caller, which decides whether to
//! recalibrate, retune, or abort.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fault {
    /// A requested wheel speed magnitude would exceed the drivetrain's
    /// maximum native speed. The gains or base speed are misconfigured for
    /// the current load; the controller halts rather than silently capping.
    TooFast { requested: f32, limit: f32 },

    /// Heading error stayed outside tolerance for the configured number of
    /// consecutive cycles. The robot cannot track the target: mechanical
    /// obstruction, bad calibration, or an unreachable angle.
    LostHeading { last_error: f32, cycles: u32 },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::TooFast { requested, limit } => write!(
                f,
                "requested wheel speed {:.1} exceeds drive limit {:.1}",
                requested, limit
            ),
            Fault::LostHeading { last_error, cycles } => write!(
                f,
                "heading error {:.1} deg out of tolerance for {} consecutive cycles",
                last_error, cycles
            ),
        }
    }
}

impl Error for Fault {}
