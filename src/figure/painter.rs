use ahash::RandomState;

use crate::canvas::{DrawCommand, DrawSurface};
use crate::transform::TransformStack;
use crate::Shape;

/// Issues shapes to a surface under a canvas-style transform stack.
pub(crate) struct Painter<'a> {
    surface: &'a mut dyn DrawSurface,
    stack: TransformStack,
    cache_keys: &'a RandomState,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(surface: &'a mut dyn DrawSurface, cache_keys: &'a RandomState) -> Self {
        Self {
            surface,
            stack: TransformStack::new(),
            cache_keys,
        }
    }

    pub(crate) fn save(&mut self) {
        self.stack.save();
    }

    pub(crate) fn restore(&mut self) {
        self.stack.restore();
    }

    pub(crate) fn translate(&mut self, x: f32, y: f32) {
        self.stack.translate(x, y);
    }

    pub(crate) fn rotate(&mut self, radians: f32) {
        self.stack.rotate(radians);
    }

    pub(crate) fn scale(&mut self, x: f32, y: f32) {
        self.stack.scale(x, y);
    }

    /// Draws a shape whose geometry changes from frame to frame.
    pub(crate) fn draw(&mut self, label: &'static str, shape: impl Into<Shape>) {
        self.push(label, shape.into(), None);
    }

    /// Draws a shape whose geometry is the same every frame. `label` must be unique to that
    /// geometry; it keys the surface's tessellation cache.
    pub(crate) fn draw_static(&mut self, label: &'static str, shape: impl Into<Shape>) {
        let cache_key = self.cache_keys.hash_one(label);
        self.push(label, shape.into(), Some(cache_key));
    }

    fn push(&mut self, label: &'static str, shape: Shape, cache_key: Option<u64>) {
        self.surface.push(DrawCommand {
            label,
            shape,
            transform: self.stack.current(),
            cache_key,
        });
    }
}
