//! Pivot controller - bang-bang in-place rotation to an absolute heading
//!
//! A discrete relay controller: both wheels run at equal magnitude and
//! opposite sign until the heading enters the tolerance band, then the
//! drivetrain stops exactly once. No PID state and no fault paths; pivot is
//! a short, self-terminating maneuver.

use std::thread;
use std::time::Duration;

use log::info;

use crate::control::calibrate::CalibratedGyro;
use crate::hardware::{GyroSensor, TankDrive};

#[derive(Debug, Clone)]
pub struct PivotConfig {
    /// Pivot speed magnitude, in native units.
    pub speed: f32,
    pub target_angle: f32,
    /// Angular window considered reached, in degrees. The per-cycle heading
    /// change at `speed` must be smaller than the band width, or the robot
    /// oscillates across the target forever.
    pub tolerance_deg: f32,
    pub cycle_delay: Duration,
}

impl PivotConfig {
    pub fn new(speed: f32, target_angle: f32) -> Self {
        Self {
            speed,
            target_angle,
            tolerance_deg: 2.0,
            cycle_delay: Duration::from_millis(10),
        }
    }
}

/// Rotates the robot in place to a target heading, then stops.
pub struct Pivot<'a, D: TankDrive, G: GyroSensor> {
    drive: &'a mut D,
    gyro: &'a CalibratedGyro<G>,
}

impl<'a, D: TankDrive, G: GyroSensor> Pivot<'a, D, G> {
    pub fn new(drive: &'a mut D, gyro: &'a CalibratedGyro<G>) -> Self {
        Self { drive, gyro }
    }

    /// Rotate until the heading is within tolerance of the target. Returns
    /// the number of wheel commands issued.
    pub fn run(&mut self, cfg: &PivotConfig) -> u32 {
        let mut cycles: u32 = 0;

        loop {
            let current = self.gyro.angle();

            if (current - cfg.target_angle).abs() <= cfg.tolerance_deg {
                self.drive.stop();
                info!(
                    "pivot: reached {:.1} deg (target {:.1}) after {} cycles",
                    current, cfg.target_angle, cycles
                );
                return cycles;
            }

            let (left, right) = if current > cfg.target_angle {
                // Overshot clockwise, rotate back counterclockwise
                (-cfg.speed, cfg.speed)
            } else {
                (cfg.speed, -cfg.speed)
            };

            if !cfg.cycle_delay.is_zero() {
                thread::sleep(cfg.cycle_delay);
            }

            self.drive.drive(left, right);
            cycles += 1;
        }
    }
}
