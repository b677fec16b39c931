use super::*;

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let cache_size = NonZeroUsize::new(DEFAULT_TESSELLATION_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN);
        Self {
            size: (width, height),
            pixels: vec![[0.0; 4]; pixel_count(width, height)],
            clear_color: Color::TRANSPARENT,
            draw_queue: Vec::new(),
            fill_tessellator: FillTessellator::new(),
            stroke_tessellator: StrokeTessellator::new(),
            tessellation_cache: Cache::new(cache_size),
            last_frame_stats: FrameStats::default(),
            rendered: false,
        }
    }

    /// Color every pixel starts from before shapes are drawn. Transparent by default.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Re-fits the pixel buffer. The draw queue and the tessellation cache survive, since
    /// geometry is kept in local space.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.size == (width, height) {
            return;
        }
        trace!(width, height, "resizing canvas");
        self.size = (width, height);
        self.pixels.clear();
        self.pixels.resize(pixel_count(width, height), [0.0; 4]);
        self.rendered = false;
    }

    pub fn last_frame_stats(&self) -> FrameStats {
        self.last_frame_stats
    }

    /// Number of shapes whose tessellation is currently cached.
    pub fn cached_tessellations(&self) -> usize {
        self.tessellation_cache.len()
    }
}

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
