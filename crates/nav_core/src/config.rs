use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be strictly positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("smoothing must lie in 0.0..=1.0 (got {0})")]
    SmoothingOutOfRange(f32),
}

/// Session parameters, fixed for the lifetime of one fly session.
///
/// `base_speed` is in world units per reference step (60 steps/s),
/// `sensitivity` in radians per pointer unit. `smoothing` is the per-step
/// blend weight toward the target velocity: 0 never moves, 1 snaps
/// instantly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    pub base_speed: f32,
    pub sensitivity: f32,
    /// Sprint multiplier while the sprint modifier is held.
    pub boost_factor: f32,
    /// Crouch/slow-walk multiplier while the slow modifier is held.
    pub slow_factor: f32,
    pub smoothing: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.12,
            sensitivity: 0.0025,
            boost_factor: 3.0,
            slow_factor: 0.3,
            smoothing: 0.2,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("base_speed", self.base_speed),
            ("sensitivity", self.sensitivity),
            ("boost_factor", self.boost_factor),
            ("slow_factor", self.slow_factor),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(ConfigError::SmoothingOutOfRange(self.smoothing));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_speed_rejected() {
        let config = SessionConfig {
            base_speed: 0.0,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "base_speed", .. })
        ));
    }

    #[test]
    fn test_negative_factor_rejected() {
        let config = SessionConfig {
            slow_factor: -0.3,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_sensitivity_rejected() {
        let config = SessionConfig {
            sensitivity: f32::NAN,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_smoothing_out_of_range_rejected() {
        let config = SessionConfig {
            smoothing: 1.5,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SmoothingOutOfRange(_))
        ));
    }

    #[test]
    fn test_smoothing_bounds_accepted() {
        for smoothing in [0.0, 1.0] {
            let config = SessionConfig {
                smoothing,
                ..SessionConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }
}
