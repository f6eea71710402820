//! Gyro rotate - rotate in place to an absolute heading

use crate::config::RuntimeConfig;
use crate::control::{calibrate, CalibratedGyro, Pivot};
use crate::hardware::{GyroSensor, TankDrive};
use crate::status::StatusLog;

/// Calibrate and pivot to the configured absolute angle. Returns the
/// calibrated gyro so the caller can read the final heading.
pub fn gyro_rotate<D: TankDrive, G: GyroSensor>(
    drive: &mut D,
    gyro: G,
    cfg: &RuntimeConfig,
    status: &StatusLog,
) -> CalibratedGyro<G> {
    status.write("calibrating gyro".to_string());
    let gyro = calibrate(gyro, &cfg.calibration_profile());

    let starting_angle = gyro.angle();
    status.write(format!(
        "rotating from {:.1} deg to {:.1} deg",
        starting_angle, cfg.target_angle
    ));

    let cycles = Pivot::new(drive, &gyro).run(&cfg.pivot_config());

    status.write(format!(
        "reached {:.1} deg after {} cycles",
        gyro.angle(),
        cycles
    ));

    gyro
}
