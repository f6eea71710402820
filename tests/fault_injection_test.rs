//! Fault-injection tests: degraded hardware against the follow controller

use std::time::Duration;

use gyro_tank::{
    calibrate, CalibrationProfile, Fault, FollowConfig, HeadingFollow, PidGains, SimulatedRobot,
    TerminationPolicy,
};

struct CycleLimit(u32);

impl TerminationPolicy for CycleLimit {
    fn should_continue(&mut self) -> bool {
        if self.0 == 0 {
            false
        } else {
            self.0 -= 1;
            true
        }
    }
}

#[test]
fn stalled_drivetrain_surfaces_lost_heading() {
    // Response factor zero: commands change nothing, as with a blocked wheel
    let robot = SimulatedRobot::with_response(3, 0.0);
    let (mut tank, gyro) = robot.split();
    let gyro = calibrate(gyro, &CalibrationProfile::fast());
    robot.set_heading(15.0);

    let mut cfg = FollowConfig::new(PidGains::new(0.05, 0.0, 0.0), 30.0, 0.0);
    cfg.cycle_delay = Duration::ZERO;
    let result = HeadingFollow::new(&mut tank, &gyro).run(&cfg, &mut CycleLimit(200));

    assert!(matches!(result, Err(Fault::LostHeading { .. })));
    assert_eq!(robot.stop_count(), 1, "drivetrain must be stopped before the fault surfaces");
}

#[test]
fn sensor_noise_within_tolerance_does_not_fault() {
    let robot = SimulatedRobot::with_response(3, 0.02);
    robot.set_noise(0.5);
    let (mut tank, gyro) = robot.split();
    let gyro = calibrate(gyro, &CalibrationProfile::fast());

    let mut cfg = FollowConfig::new(PidGains::new(1.0, 0.0, 0.0), 30.0, 0.0);
    cfg.cycle_delay = Duration::ZERO;
    let result = HeadingFollow::new(&mut tank, &gyro).run(&cfg, &mut CycleLimit(200));

    assert!(result.is_ok(), "half-degree noise is well inside the tolerance band: {:?}", result);
}
