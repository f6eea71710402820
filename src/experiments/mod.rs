//! Experiment entry points - thin glue between the control core and hardware
//!
//! Each experiment is generic over the hardware traits, so the same code
//! runs against the simulated robot and a real binding. No control logic
//! lives here; the experiments wire calibration, controllers, and the
//! status sink together.

mod gyro_move;
mod gyro_rotate;

pub use gyro_move::gyro_move;
pub use gyro_rotate::gyro_rotate;
pub use gyro_test::{classify_veering, gyro_test, Veering};
