//! Gyro calibration - zero the sensor before control begins
//!
//! The sensor is settled by toggling it between rate sampling and angle
//! accumulation twice, with a delay after each toggle. Switching into angle
//! accumulation zeroes the reading at the robot's current orientation, so
//! the robot must be stationary while this runs.
//!
//! [`calibrate`] consumes the raw sensor and returns a [`CalibratedGyro`],
//! which is the only sensor type the controllers accept. Driving with an
//! unzeroed gyro is therefore unrepresentable rather than a runtime check.

use std::thread;
use std::time::Duration;

use log::info;

use crate::hardware::{GyroMode, GyroSensor};

/// Settling delays for the two calibration stages. The defaults take about
/// 2.5 s total; hardware needs that long for the reading to stabilize.
#[derive(Debug, Clone)]
pub struct CalibrationProfile {
    pub settle_delays: [Duration; 2],
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            settle_delays: [Duration::from_secs(2), Duration::from_millis(500)],
        }
    }
}

impl CalibrationProfile {
    /// No settling delays. Only suitable for simulated sensors.
    pub fn fast() -> Self {
        Self { settle_delays: [Duration::ZERO; 2] }
    }
}

/// A gyro that has been zeroed at a known orientation.
pub struct CalibratedGyro<G: GyroSensor> {
    sensor: G,
}

impl<G: GyroSensor> CalibratedGyro<G> {
    /// Heading in degrees relative to the calibration orientation.
    pub fn angle(&self) -> f32 {
        self.sensor.angle()
    }

    /// Release the sensor, discarding the calibration evidence.
    pub fn into_inner(self) -> G {
        self.sensor
    }
}

/// Run the two-stage settling sequence and zero the sensor.
pub fn calibrate<G: GyroSensor>(mut sensor: G, profile: &CalibrationProfile) -> CalibratedGyro<G> {
    info!("calibrating gyro");

    for delay in profile.settle_delays {
        sensor.set_mode(GyroMode::RateSampling);
        sensor.set_mode(GyroMode::AngleAccumulating);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    info!("gyro calibrated, angle zeroed");
    CalibratedGyro { sensor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::simulated::SimulatedRobot;

    #[test]
    fn calibrate_zeroes_current_orientation() {
        let robot = SimulatedRobot::new(7);
        let (_tank, gyro) = robot.split();
        robot.set_heading(143.0);

        let gyro = calibrate(gyro, &CalibrationProfile::fast());
        assert_eq!(gyro.angle(), 0.0);
    }

    #[test]
    fn reading_tracks_movement_after_calibration() {
        let robot = SimulatedRobot::new(7);
        let (_tank, gyro) = robot.split();
        robot.set_heading(30.0);

        let gyro = calibrate(gyro, &CalibrationProfile::fast());
        robot.set_heading(75.0);
        assert!((gyro.angle() - 45.0).abs() < 1e-4);
    }
}
