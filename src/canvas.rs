//! A software 2D drawing surface.
//!
//! Shapes are queued together with the transform they are drawn under, then [`Canvas::render`]
//! tessellates them (reusing cached meshes for shapes submitted with a cache key) and rasterizes
//! the triangles in queue order into a premultiplied RGBA float buffer. Readback converts that
//! buffer into byte layouts a presenter can use.

use std::num::NonZeroUsize;

use lyon::math::{point, Point, Transform};
use lyon::tessellation::{FillTessellator, StrokeTessellator, VertexBuffers};
use tracing::{trace, warn};

use crate::cache::Cache;
use crate::shape::Shape;
use crate::vertex::Vertex;
use crate::{Color, Paint};

mod construction;
mod draw_queue;
mod raster;
mod readback;
mod rendering;
mod surface;
mod types;

pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use types::FrameStats;

use raster::RasterTarget;
use types::QueuedShape;

/// Number of distinct cached tessellations kept alive.
const DEFAULT_TESSELLATION_CACHE_SIZE: usize = 256;

pub struct Canvas {
    /// Size of the pixel buffer
    size: (u32, u32),
    /// Premultiplied RGBA, row-major
    pixels: Vec<[f32; 4]>,
    clear_color: Color,

    draw_queue: Vec<QueuedShape>,

    fill_tessellator: FillTessellator,
    stroke_tessellator: StrokeTessellator,
    tessellation_cache: Cache,

    last_frame_stats: FrameStats,
    /// Set once the queue has been rasterized, reset by any queue change
    rendered: bool,
}
