//! Gyro move - pivot to the target heading, then PID-follow it

use crate::config::RuntimeConfig;
use crate::control::{calibrate, BoundedDuration, Fault, HeadingFollow, Pivot};
use crate::hardware::{GyroSensor, TankDrive};
use crate::metrics::CycleMetrics;
use crate::status::StatusLog;

/// Calibrate, rotate in place to the configured target angle, then drive
/// straight along it for the configured duration. A fault from the follow
/// phase propagates to the caller; the drivetrain is already stopped when
/// it does.
pub fn gyro_move<D: TankDrive, G: GyroSensor>(
    drive: &mut D,
    gyro: G,
    cfg: &RuntimeConfig,
    status: &StatusLog,
    metrics: &CycleMetrics,
) -> Result<(), Fault> {
    status.write("calibrating gyro".to_string());
    let gyro = calibrate(gyro, &cfg.calibration_profile());

    status.write(format!("pivoting to {:.0} deg", cfg.target_angle));
    let cycles = Pivot::new(drive, &gyro).run(&cfg.pivot_config());
    status.write(format!("pivot done in {} cycles", cycles));

    status.write(format!(
        "following heading {:.0} deg for {} ms",
        cfg.target_angle, cfg.follow_ms
    ));
    let mut policy = BoundedDuration::from_ms(cfg.follow_ms);
    let result = HeadingFollow::new(drive, &gyro)
        .with_metrics(metrics.clone())
        .run(&cfg.follow_config(), &mut policy);

    match &result {
        Ok(()) => status.write("follow complete".to_string()),
        Err(fault) => status.write(format!("follow fault: {}", fault)),
    }

    result
}
