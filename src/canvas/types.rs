use super::*;

#[derive(Debug)]
pub(super) struct QueuedShape {
    pub(super) label: &'static str,
    pub(super) shape: Shape,
    pub(super) transform: Transform,
    pub(super) cache_key: Option<u64>,
}

/// Counters collected while rasterizing the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Shapes that were rasterized.
    pub shapes_drawn: u32,
    /// Shapes dropped because their geometry could not be tessellated.
    pub shapes_skipped: u32,
    /// Triangles submitted to the rasterizer, including ones fully outside the canvas.
    pub triangles: u32,
    /// Keyed shapes whose tessellation was reused.
    pub cache_hits: u32,
    /// Keyed shapes that had to be tessellated and were stored for later frames.
    pub cache_misses: u32,
}
