use crate::canvas::DrawSurface;
use crate::clock::AnimationClock;
use crate::config::PetConfig;
use crate::figure::{FigureRenderer, RenderStrategy};
use crate::motion::{Mode, MotionController, MotionState};
use crate::pose::{Pose, PoseConfig};

/// Simulation and renderer of one pet.
///
/// ```rust
/// use mascot::{Canvas, Pet, PetConfig};
///
/// let mut canvas = Canvas::new(320, 240);
/// let mut pet = Pet::new(320.0, 240.0, &PetConfig::default());
/// pet.set_target(250.0, 120.0);
/// for _ in 0..30 {
///     pet.update();
/// }
/// pet.draw(&mut canvas);
/// canvas.render();
/// assert!(canvas.painted_pixels() > 0);
/// ```
pub struct Pet {
    motion: MotionController,
    clock: AnimationClock,
    renderer: FigureRenderer,
    pose_config: PoseConfig,
}

impl Pet {
    /// `config` is expected to be valid; see [`PetConfig::validate`].
    pub fn new(width: f32, height: f32, config: &PetConfig) -> Self {
        Self {
            motion: MotionController::new(width, height, config),
            clock: AnimationClock::new(config.timestep_s),
            renderer: FigureRenderer::new(config.strategy),
            pose_config: PoseConfig {
                particles: config.particles,
            },
        }
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.motion.set_target(x, y);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.motion.resize(width, height);
    }

    /// Advances the motion by one tick and the animation clock by one frame.
    pub fn update(&mut self) {
        self.motion.tick();
        self.clock.tick();
    }

    /// Draws the current frame, replacing whatever `surface` held.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let pose = self.pose();
        self.renderer.render(surface, &pose, self.motion.state());
    }

    pub fn pose(&self) -> Pose {
        Pose::at(self.clock.frame(), &self.pose_config)
    }

    pub fn state(&self) -> &MotionState {
        self.motion.state()
    }

    pub fn mode(&self) -> Mode {
        self.motion.mode()
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.renderer.strategy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingSurface;

    #[test]
    fn update_advances_motion_and_clock_together() {
        let mut pet = Pet::new(800.0, 600.0, &PetConfig::default());
        for _ in 0..5 {
            pet.update();
        }
        assert_eq!(pet.clock().frame(), 5);
        assert_eq!(pet.motion().ticks(), 5);
        assert_eq!(pet.pose().frame, 5);
    }

    #[test]
    fn draw_uses_the_configured_strategy() {
        let config = PetConfig::default().with_strategy(RenderStrategy::Blocks);
        let pet = Pet::new(800.0, 600.0, &config);
        let mut surface = RecordingSurface::new(800, 600);
        pet.draw(&mut surface);
        assert_eq!(pet.strategy(), RenderStrategy::Blocks);
        assert!(surface.labels().contains(&"mount.tail_tip"));
    }
}
