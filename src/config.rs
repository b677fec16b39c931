//! Tunables of a mounted pet.
//!
//! ```rust
//! use mascot::{PetConfig, RenderStrategy};
//!
//! let config = PetConfig::default()
//!     .with_strategy(RenderStrategy::Blocks)
//!     .with_scale(1.2)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! assert!(config.with_scale(0.0).validate().is_err());
//! ```

use crate::error::ConfigError;
use crate::figure::RenderStrategy;

/// Spring, bounds and idle behavior of the motion controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTuning {
    /// Fraction of the displacement to the target added to velocity every tick.
    pub attraction: f32,
    /// Factor velocity is multiplied by every tick. Must be in `(0, 1)`.
    pub damping: f32,
    /// Horizontal speed, in pixels per tick, above which the facing direction follows velocity.
    pub deadband: f32,
    /// Distance kept between the pet's position and the surface edges.
    pub margin: f32,
    /// Time without input after which the pet starts wandering.
    pub idle_threshold_ms: f64,
    /// Idle time between two wander target changes.
    pub wander_period_s: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            attraction: 0.01,
            damping: 0.85,
            deadband: 0.5,
            margin: 50.0,
            idle_threshold_ms: 3000.0,
            wander_period_s: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PetConfig {
    pub strategy: RenderStrategy,
    /// Uniform scale of the figure.
    pub scale: f32,
    /// Seed of the wander target generator.
    pub seed: u64,
    /// Number of fire-breath particle slots.
    pub particles: usize,
    /// Logical duration of one frame, in seconds.
    pub timestep_s: f64,
    pub motion: MotionTuning,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            strategy: RenderStrategy::Vector,
            scale: 0.8,
            seed: 0x5EED,
            particles: 15,
            timestep_s: 1.0 / 60.0,
            motion: MotionTuning::default(),
        }
    }
}

impl PetConfig {
    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_particles(mut self, particles: usize) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_timestep(mut self, timestep_s: f64) -> Self {
        self.timestep_s = timestep_s;
        self
    }

    pub fn with_motion(mut self, motion: MotionTuning) -> Self {
        self.motion = motion;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let motion = &self.motion;
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::Scale(self.scale));
        }
        if !(self.timestep_s.is_finite() && self.timestep_s > 0.0) {
            return Err(ConfigError::Timestep(self.timestep_s));
        }
        if !(motion.idle_threshold_ms.is_finite() && motion.idle_threshold_ms > 0.0) {
            return Err(ConfigError::IdleThreshold(motion.idle_threshold_ms));
        }
        if !(motion.wander_period_s.is_finite() && motion.wander_period_s > 0.0) {
            return Err(ConfigError::WanderPeriod(motion.wander_period_s));
        }
        if !(motion.damping > 0.0 && motion.damping < 1.0) {
            return Err(ConfigError::Damping(motion.damping));
        }
        if !(motion.attraction.is_finite() && motion.attraction > 0.0) {
            return Err(ConfigError::Attraction(motion.attraction));
        }
        if !(motion.margin.is_finite() && motion.margin >= 0.0) {
            return Err(ConfigError::Margin(motion.margin));
        }
        if !(motion.deadband.is_finite() && motion.deadband >= 0.0) {
            return Err(ConfigError::Deadband(motion.deadband));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PetConfig::default().validate(), Ok(()));
    }

    #[rstest]
    #[case(PetConfig::default().with_scale(-1.0), ConfigError::Scale(-1.0))]
    #[case(PetConfig::default().with_timestep(0.0), ConfigError::Timestep(0.0))]
    #[case(
        PetConfig::default().with_motion(MotionTuning { damping: 1.0, ..MotionTuning::default() }),
        ConfigError::Damping(1.0)
    )]
    #[case(
        PetConfig::default().with_motion(MotionTuning { attraction: 0.0, ..MotionTuning::default() }),
        ConfigError::Attraction(0.0)
    )]
    #[case(
        PetConfig::default().with_motion(MotionTuning { idle_threshold_ms: -5.0, ..MotionTuning::default() }),
        ConfigError::IdleThreshold(-5.0)
    )]
    #[case(
        PetConfig::default().with_motion(MotionTuning { wander_period_s: 0.0, ..MotionTuning::default() }),
        ConfigError::WanderPeriod(0.0)
    )]
    fn invalid_values_are_rejected(#[case] config: PetConfig, #[case] expected: ConfigError) {
        assert_eq!(config.validate(), Err(expected));
    }

    #[test]
    fn nan_damping_is_rejected() {
        let config = PetConfig::default().with_motion(MotionTuning {
            damping: f32::NAN,
            ..MotionTuning::default()
        });
        assert!(matches!(config.validate(), Err(ConfigError::Damping(_))));
    }
}
