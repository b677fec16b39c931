//! An animated pet that chases the pointer across a full-screen overlay.
//!
//! [`Pet`] combines the motion simulation, the per-frame pose and a [`FigureRenderer`]; a
//! [`Stage`] mounts at most one pet into a [`Host`] and drives its frames.

pub use lyon;

mod cache;
mod canvas;
mod clock;
mod color;
mod config;
mod driver;
mod error;
mod figure;
mod motion;
mod paint;
mod pet;
mod pose;
mod shape;
mod stroke;
mod transform;
mod vertex;

pub use canvas::{Canvas, DrawCommand, DrawSurface, FrameStats, RecordingSurface};
pub use clock::AnimationClock;
pub use color::{BlockShades, Color};
pub use config::{MotionTuning, PetConfig};
#[cfg(feature = "window")]
pub use driver::{run_overlay, OverlayError, OverlayOptions, WindowHost};
pub use driver::{
    EventKind, FrameRequest, HeadlessHost, Host, InputEvent, ListenerId, PetHandle, Stage,
    SUBSCRIBED_EVENTS,
};
pub use error::{CanvasError, ConfigError, MountError};
pub use figure::{build_parts, iso, palette, FigureRenderer, RenderStrategy};
pub use motion::{Bounds, Direction, Mode, MotionController, MotionState, Wander};
pub use paint::{GradientStop, GradientStops, Paint};
pub use pet::Pet;
pub use pose::{FireParticle, Pose, PoseConfig, FIRE_CYCLE_FRAMES};
pub use shape::{PathShape, RectShape, Shape, ShapeBuilder};
pub use stroke::{LineCap, Stroke};
pub use transform::TransformStack;
pub use vertex::Vertex;
