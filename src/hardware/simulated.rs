//! Simulated robot - a kinematic plant model for the demo binary and tests
//!
//! The model advances one step per `drive()` call, matching the control
//! loops' one-command-per-cycle cadence: the heading changes by
//! `(left - right) * deg_per_unit` degrees each step, so equal wheel speeds
//! drive straight and opposing speeds pivot in place. Positive heading is
//! clockwise, consistent with the wheel assignment in the controllers.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{GyroMode, GyroSensor, LedColor, LedSide, StatusLeds, TankDrive};

const MAX_NATIVE_SPEED: f32 = 1050.0;

// Only the most recent commands are kept for inspection
const DRIVE_HISTORY: usize = 1024;

struct SimState {
    heading: f32,
    zero_offset: f32,
    deg_per_unit: f32,
    noise_amplitude: f32,
    rng: StdRng,
    drives: VecDeque<(f32, f32)>,
    drive_count: u64,
    stop_count: u32,
}

/// Handle to a simulated robot. [`split`](SimulatedRobot::split) hands out
/// the drivetrain and gyro halves; the handle itself stays behind for test
/// inspection (command history, stop calls, true heading).
#[derive(Clone)]
pub struct SimulatedRobot {
    state: Arc<Mutex<SimState>>,
}

impl SimulatedRobot {
    pub fn new(seed: u64) -> Self {
        Self::with_response(seed, 0.02)
    }

    /// `deg_per_unit` is the heading change per native speed unit of
    /// left/right difference, per drive step. Zero models a mechanically
    /// stalled robot that ignores commands.
    pub fn with_response(seed: u64, deg_per_unit: f32) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimState {
                heading: 0.0,
                zero_offset: 0.0,
                deg_per_unit,
                noise_amplitude: 0.0,
                rng: StdRng::seed_from_u64(seed),
                drives: VecDeque::with_capacity(DRIVE_HISTORY),
                drive_count: 0,
                stop_count: 0,
            })),
        }
    }

    pub fn split(&self) -> (SimTank, SimGyro) {
        (
            SimTank { state: self.state.clone() },
            SimGyro { state: self.state.clone() },
        )
    }

    /// Uniform noise amplitude applied to every gyro reading, in degrees.
    pub fn set_noise(&self, amplitude: f32) {
        self.state.lock().noise_amplitude = amplitude;
    }

    /// Force the physical orientation, e.g. to model an external knock.
    pub fn set_heading(&self, degrees: f32) {
        self.state.lock().heading = degrees;
    }

    /// True physical heading, ignoring the gyro zero offset.
    pub fn heading(&self) -> f32 {
        self.state.lock().heading
    }

    /// The most recent wheel commands, oldest first.
    pub fn drive_commands(&self) -> Vec<(f32, f32)> {
        self.state.lock().drives.iter().copied().collect()
    }

    pub fn drive_count(&self) -> u64 {
        self.state.lock().drive_count
    }

    pub fn stop_count(&self) -> u32 {
        self.state.lock().stop_count
    }
}

// ============================================================================
// DRIVETRAIN HALF
// ============================================================================

pub struct SimTank {
    state: Arc<Mutex<SimState>>,
}

impl TankDrive for SimTank {
    fn max_speed(&self) -> f32 {
        MAX_NATIVE_SPEED
    }

    fn drive(&mut self, left: f32, right: f32) {
        let mut s = self.state.lock();
        s.heading += (left - right) * s.deg_per_unit;
        s.drives.push_back((left, right));
        if s.drives.len() > DRIVE_HISTORY {
            s.drives.pop_front();
        }
        s.drive_count += 1;
    }

    fn stop(&mut self) {
        self.state.lock().stop_count += 1;
    }
}

// ============================================================================
// GYRO HALF
// ============================================================================

pub struct SimGyro {
    state: Arc<Mutex<SimState>>,
}

impl GyroSensor for SimGyro {
    fn set_mode(&mut self, mode: GyroMode) {
        if mode == GyroMode::AngleAccumulating {
            let mut s = self.state.lock();
            s.zero_offset = s.heading;
        }
    }

    fn angle(&self) -> f32 {
        let mut s = self.state.lock();
        let noise = if s.noise_amplitude > 0.0 {
            let a = s.noise_amplitude;
            s.rng.gen_range(-a..a)
        } else {
            0.0
        };
        s.heading - s.zero_offset + noise
    }
}

// ============================================================================
// STATUS LEDS
// ============================================================================

/// Records the most recent color of each LED.
pub struct SimLeds {
    pub left: LedColor,
    pub right: LedColor,
}

impl SimLeds {
    pub fn new() -> Self {
        Self { left: LedColor::Off, right: LedColor::Off }
    }
}

impl Default for SimLeds {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLeds for SimLeds {
    fn set_color(&mut self, side: LedSide, color: LedColor) {
        match side {
            LedSide::Left => self.left = color,
            LedSide::Right => self.right = color,
        }
    }
}
