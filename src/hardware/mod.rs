//! Hardware abstraction - traits for the gyro sensor, drivetrain, and status LEDs
//!
//! Controllers hold these by reference; real motor/sensor I/O lives behind
//! them. A single active controller must have exclusive use of one
//! drivetrain/gyro pair for the duration of an invocation. Starting two
//! controllers on the same hardware concurrently produces uncoordinated
//! commands and is a caller error, not something guarded here.

pub mod simulated;

// ============================================================================
// GYRO SENSOR
// ============================================================================

/// Sampling mode of the gyro sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroMode {
    /// Sample angular velocity only; the accumulated angle is not maintained.
    RateSampling,
    /// Accumulate heading angle. Switching into this mode zeroes the
    /// accumulated angle at the robot's current physical orientation.
    AngleAccumulating,
}

/// A single-axis rate/angle sensor mounted on the robot's vertical axis.
pub trait GyroSensor {
    fn set_mode(&mut self, mode: GyroMode);

    /// Cumulative heading in degrees since the last zero. Positive is
    /// clockwise when viewed from above.
    fn angle(&self) -> f32;
}

// ============================================================================
// TANK DRIVE
// ============================================================================

/// A differential pair of motors accepting signed per-wheel speeds.
pub trait TankDrive {
    /// Maximum speed magnitude the hardware accepts, in native units.
    fn max_speed(&self) -> f32;

    /// Command both wheels. Speeds are signed, in the same native units
    /// as [`max_speed`](TankDrive::max_speed).
    fn drive(&mut self, left: f32, right: f32);

    /// Halt both wheels. Must be idempotent: stopping an already-stopped
    /// drivetrain is a no-op, never an error.
    fn stop(&mut self);
}

// ============================================================================
// STATUS LEDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    Off,
    Green,
    Amber,
    Red,
}

/// The pair of status LEDs used by the veering-display experiment.
/// Rendering is entirely outside the control core.
pub trait StatusLeds {
    fn set_color(&mut self, side: LedSide, color: LedColor);
}
