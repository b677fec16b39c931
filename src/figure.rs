//! The articulated figure: a rider on a rearing mount, holding a flag, with fire breath.
//!
//! [`FigureRenderer`] draws one frame from a [`Pose`] and a [`MotionState`]. The local frame is
//! anchored at the pet's position, scaled uniformly, mirrored when the pet faces left and
//! offset vertically by the pose's bob. How parts are ordered is decided once, by the
//! [`RenderStrategy`] the renderer is built with.

use ahash::RandomState;
use tracing::trace;

use crate::canvas::DrawSurface;
use crate::motion::MotionState;
use crate::pose::Pose;

mod blocks;
pub mod iso;
mod painter;
pub mod palette;
mod vector;

pub use blocks::build_parts;
pub(crate) use painter::Painter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Hand-ordered vector paths with gradients.
    #[default]
    Vector,
    /// Depth-sorted isometric blocks.
    Blocks,
}

pub struct FigureRenderer {
    strategy: RenderStrategy,
    /// Hashes static part labels into tessellation cache keys
    cache_keys: RandomState,
}

impl FigureRenderer {
    pub fn new(strategy: RenderStrategy) -> Self {
        Self {
            strategy,
            cache_keys: RandomState::new(),
        }
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Clears `surface` and draws the figure on it.
    pub fn render(&self, surface: &mut dyn DrawSurface, pose: &Pose, state: &MotionState) {
        surface.clear();

        let mut painter = Painter::new(surface, &self.cache_keys);
        painter.translate(state.x, state.y);
        painter.scale(state.direction.sign() * state.scale, state.scale);
        painter.translate(0.0, pose.bob);

        match self.strategy {
            RenderStrategy::Vector => vector::draw(&mut painter, pose),
            RenderStrategy::Blocks => blocks::draw(&mut painter, pose),
        }
        trace!(frame = pose.frame, strategy = ?self.strategy, "figure drawn");
    }
}
