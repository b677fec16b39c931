use super::*;
use crate::shape::TessellatedShape;

impl Canvas {
    /// Rasterizes the draw queue into the pixel buffer. Does nothing if the queue has not
    /// changed since the last call.
    pub fn render(&mut self) {
        if self.rendered {
            return;
        }

        let Canvas {
            size,
            pixels,
            clear_color,
            draw_queue,
            fill_tessellator,
            stroke_tessellator,
            tessellation_cache,
            last_frame_stats,
            rendered,
        } = self;

        let mut target = RasterTarget::new(pixels, *size);
        target.clear(*clear_color);
        let mut stats = FrameStats::default();

        for queued in draw_queue.iter() {
            let uncached: TessellatedShape;
            let meshes = match queued.cache_key {
                Some(cache_key) => {
                    if tessellation_cache.get_tessellation(&cache_key).is_some() {
                        stats.cache_hits += 1;
                    } else {
                        match queued.shape.tessellate(fill_tessellator, stroke_tessellator) {
                            Ok(tessellation) => {
                                tessellation_cache.insert_tessellation(cache_key, tessellation);
                                stats.cache_misses += 1;
                            }
                            Err(error) => {
                                warn!(label = queued.label, %error, "skipping shape");
                                stats.shapes_skipped += 1;
                                continue;
                            }
                        }
                    }
                    match tessellation_cache.get_tessellation(&cache_key) {
                        Some(tessellation) => tessellation,
                        None => continue,
                    }
                }
                None => match queued.shape.tessellate(fill_tessellator, stroke_tessellator) {
                    Ok(tessellation) => {
                        uncached = tessellation;
                        &uncached
                    }
                    Err(error) => {
                        warn!(label = queued.label, %error, "skipping shape");
                        stats.shapes_skipped += 1;
                        continue;
                    }
                },
            };

            if let (Some(mesh), Some(paint)) = (&meshes.fill, queued.shape.fill()) {
                stats.triangles += target.fill_mesh(mesh, paint, &queued.transform);
            }
            if let (Some(mesh), Some(stroke)) = (&meshes.stroke, queued.shape.stroke()) {
                let paint = Paint::Solid(stroke.color);
                stats.triangles += target.fill_mesh(mesh, &paint, &queued.transform);
            }
            stats.shapes_drawn += 1;
        }

        trace!(?stats, "canvas rendered");
        *last_frame_stats = stats;
        *rendered = true;
    }
}
