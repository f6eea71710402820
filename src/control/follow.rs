//! Heading-follow controller - continuous PID loop along a target heading
//!
//! Each cycle reads the gyro, converts heading error into a differential
//! speed correction, and commands both wheels. Speeds that would exceed the
//! drivetrain's limit are never clamped; the controller stops and faults so
//! a misconfigured PID is visible instead of masked.

use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::control::calibrate::CalibratedGyro;
use crate::control::fault::Fault;
use crate::control::pid::{PidGains, PidTracker};
use crate::control::termination::TerminationPolicy;
use crate::hardware::{GyroSensor, TankDrive};
use crate::metrics::CycleMetrics;

/// Parameters for one follow invocation.
#[derive(Debug, Clone)]
pub struct FollowConfig {
    pub gains: PidGains,
    /// Desired forward speed of the robot's midpoint, in native units.
    pub base_speed: f32,
    pub target_angle: f32,
    /// Angular window considered on target, in degrees.
    pub tolerance_deg: f32,
    /// Consecutive out-of-tolerance cycles tolerated before faulting.
    pub off_target_limit: u32,
    /// Pause between cycles, giving the drivetrain time to respond before
    /// the next reading is trusted.
    pub cycle_delay: Duration,
}

impl FollowConfig {
    pub fn new(gains: PidGains, base_speed: f32, target_angle: f32) -> Self {
        Self {
            gains,
            base_speed,
            target_angle,
            tolerance_deg: 3.0,
            off_target_limit: 20,
            cycle_delay: Duration::from_millis(10),
        }
    }
}

/// Drives the robot along a target heading for as long as the termination
/// policy allows. Owns the drivetrain and gyro exclusively for the run.
pub struct HeadingFollow<'a, D: TankDrive, G: GyroSensor> {
    drive: &'a mut D,
    gyro: &'a CalibratedGyro<G>,
    metrics: Option<CycleMetrics>,
}

impl<'a, D: TankDrive, G: GyroSensor> HeadingFollow<'a, D, G> {
    pub fn new(drive: &'a mut D, gyro: &'a CalibratedGyro<G>) -> Self {
        Self { drive, gyro, metrics: None }
    }

    /// Record per-cycle loop latency into `metrics` during the run.
    pub fn with_metrics(mut self, metrics: CycleMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run the PID loop until the policy signals stop or a fault occurs.
    /// The drivetrain is stopped on every exit path.
    pub fn run(
        &mut self,
        cfg: &FollowConfig,
        policy: &mut dyn TerminationPolicy,
    ) -> Result<(), Fault> {
        let max_speed = self.drive.max_speed();
        let mut pid = PidTracker::new();
        let mut off_target: u32 = 0;

        while policy.should_continue() {
            let cycle_start = Instant::now();

            let current = self.gyro.angle();
            let error = cfg.target_angle - current;
            let turn = pid.update(&cfg.gains, error);

            // Positive error means the heading must increase (clockwise),
            // so the left wheel speeds up and the right slows down.
            let left = cfg.base_speed + turn;
            let right = cfg.base_speed - turn;

            if left.abs() > max_speed || right.abs() > max_speed {
                let requested = if left.abs() > right.abs() { left } else { right };
                warn!(
                    "follow: requested speed {:.1} exceeds drive limit {:.1}, stopping",
                    requested, max_speed
                );
                self.drive.stop();
                return Err(Fault::TooFast { requested, limit: max_speed });
            }

            if error.abs() > cfg.tolerance_deg {
                off_target += 1;
                if off_target >= cfg.off_target_limit {
                    warn!(
                        "follow: heading error {:.1} deg out of tolerance for {} cycles, stopping",
                        error, off_target
                    );
                    self.drive.stop();
                    return Err(Fault::LostHeading { last_error: error, cycles: off_target });
                }
            } else {
                off_target = 0;
            }

            if !cfg.cycle_delay.is_zero() {
                thread::sleep(cfg.cycle_delay);
            }

            self.drive.drive(left, right);

            if let Some(metrics) = &self.metrics {
                metrics.record_cycle(cycle_start.elapsed());
            }
        }

        self.drive.stop();
        Ok(())
    }
}
