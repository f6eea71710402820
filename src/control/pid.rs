//! PID core - gains and per-invocation controller memory

/// Caller-supplied PID constants, immutable for the duration of one
/// follow invocation.
#[derive(Debug, Clone, Copy)]
pub struct PidGains {
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
}

impl PidGains {
    pub fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self { kp, ki, kd }
    }
}

/// Accumulated controller memory. Created fresh at the start of each follow
/// invocation, updated once per cycle, discarded when the invocation ends.
pub struct PidTracker {
    integral: f32,
    last_error: f32,
}

impl PidTracker {
    pub fn new() -> Self {
        Self { integral: 0.0, last_error: 0.0 }
    }

    /// One control cycle: accumulate the error, difference it against the
    /// previous cycle, and combine the three terms into a turn correction.
    pub fn update(&mut self, gains: &PidGains, error: f32) -> f32 {
        self.integral += error;
        let derivative = error - self.last_error;
        self.last_error = error;

        gains.kp * error + gains.ki * self.integral + gains.kd * derivative
    }
}

impl Default for PidTracker {
    fn default() -> Self {
        Self::new()
    }
}
