//! Runtime configuration - TOML-loaded tuning values with safe defaults

use std::time::Duration;

use log::warn;
use serde::Deserialize;

use crate::control::{CalibrationProfile, FollowConfig, PidGains, PivotConfig};

/// Tunable parameters for the heading-control experiments. Defaults are the
/// constants tuned on the real robot; a config file overrides them per run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
    /// Forward speed of the robot's midpoint during follow, native units.
    pub base_speed: f32,
    /// Wheel speed magnitude during pivot turns, native units.
    pub pivot_speed: f32,
    pub target_angle: f32,
    pub follow_tolerance_deg: f32,
    pub pivot_tolerance_deg: f32,
    pub off_target_limit: u32,
    pub cycle_delay_ms: u64,
    /// How long the follow phase of the move experiment runs.
    pub follow_ms: u64,
    /// Settling delays for the two gyro calibration stages.
    pub calibration_settle_ms: [u64; 2],
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            kp: 11.3,
            ki: 0.05,
            kd: 3.2,
            base_speed: 315.0,
            pivot_speed: 52.0,
            target_angle: 90.0,
            follow_tolerance_deg: 3.0,
            pivot_tolerance_deg: 2.0,
            off_target_limit: 20,
            cycle_delay_ms: 10,
            follow_ms: 5000,
            calibration_settle_ms: [2000, 500],
        }
    }
}

impl RuntimeConfig {
    pub fn gains(&self) -> PidGains {
        PidGains::new(self.kp, self.ki, self.kd)
    }

    pub fn cycle_delay(&self) -> Duration {
        Duration::from_millis(self.cycle_delay_ms)
    }

    pub fn follow_config(&self) -> FollowConfig {
        let mut cfg = FollowConfig::new(self.gains(), self.base_speed, self.target_angle);
        cfg.tolerance_deg = self.follow_tolerance_deg;
        cfg.off_target_limit = self.off_target_limit;
        cfg.cycle_delay = self.cycle_delay();
        cfg
    }

    pub fn pivot_config(&self) -> PivotConfig {
        let mut cfg = PivotConfig::new(self.pivot_speed, self.target_angle);
        cfg.tolerance_deg = self.pivot_tolerance_deg;
        cfg.cycle_delay = self.cycle_delay();
        cfg
    }

    pub fn calibration_profile(&self) -> CalibrationProfile {
        CalibrationProfile {
            settle_delays: [
                Duration::from_millis(self.calibration_settle_ms[0]),
                Duration::from_millis(self.calibration_settle_ms[1]),
            ],
        }
    }
}

/// Load a config file, falling back to defaults when the file is missing or
/// does not parse.
pub fn load_config(path: &str) -> RuntimeConfig {
    match std::fs::read_to_string(path) {
        Ok(s) => toml::from_str::<RuntimeConfig>(&s).unwrap_or_else(|e| {
            warn!("config {} did not parse ({}), using defaults", path, e);
            RuntimeConfig::default()
        }),
        Err(_) => {
            warn!("config {} not found, using defaults", path);
            RuntimeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_constants() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.kp, 11.3);
        assert_eq!(cfg.ki, 0.05);
        assert_eq!(cfg.kd, 3.2);
        assert_eq!(cfg.off_target_limit, 20);
        assert_eq!(cfg.cycle_delay(), Duration::from_millis(10));
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let cfg: RuntimeConfig = toml::from_str("kp = 5.0\ntarget_angle = 45.0").unwrap();
        assert_eq!(cfg.kp, 5.0);
        assert_eq!(cfg.target_angle, 45.0);
        // Untouched fields keep their defaults
        assert_eq!(cfg.ki, 0.05);
        assert_eq!(cfg.follow_ms, 5000);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config("no/such/file.toml");
        assert_eq!(cfg.kp, 11.3);
    }
}
