use super::*;

impl Canvas {
    /// Queues a shape drawn under `transform`. Shapes submitted with the same `cache_key` must
    /// have identical geometry; their tessellation is computed once and reused.
    ///
    /// Returns the position of the shape in the draw queue.
    pub fn add_shape(
        &mut self,
        shape: impl Into<Shape>,
        transform: Transform,
        cache_key: Option<u64>,
    ) -> usize {
        self.add_labeled_shape("shape", shape.into(), transform, cache_key)
    }

    pub(super) fn add_labeled_shape(
        &mut self,
        label: &'static str,
        shape: Shape,
        transform: Transform,
        cache_key: Option<u64>,
    ) -> usize {
        self.draw_queue.push(QueuedShape {
            label,
            shape,
            transform,
            cache_key,
        });
        self.rendered = false;
        self.draw_queue.len() - 1
    }

    pub fn clear_draw_queue(&mut self) {
        self.draw_queue.clear();
        self.rendered = false;
    }

    pub fn queued_shapes(&self) -> usize {
        self.draw_queue.len()
    }

    /// Labels of the queued shapes, in draw order.
    pub fn draw_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.draw_queue.iter().map(|queued| queued.label)
    }
}
