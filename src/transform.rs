//! A save/restore stack of 2D affine transforms.
//!
//! Operations compose the way a canvas context does: each call prepends a local transform to the
//! current one, so `translate` then `rotate` rotates around the translated origin.

use lyon::math::{point, Angle, Point, Transform};
use smallvec::SmallVec;

#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform,
    saved: SmallVec<[Transform; 8]>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from `base` instead of the identity.
    pub fn with_base(base: Transform) -> Self {
        Self {
            current: base,
            saved: SmallVec::new(),
        }
    }

    pub fn current(&self) -> Transform {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the last saved transform. Restoring an empty stack leaves the transform untouched.
    pub fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.prepend(Transform::translation(x, y));
    }

    /// Rotates clockwise on screen (y grows downwards) by `radians`.
    pub fn rotate(&mut self, radians: f32) {
        self.prepend(Transform::rotation(Angle::radians(radians)));
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        self.prepend(Transform::scale(x, y));
    }

    /// Maps a local point to the space the stack was based in.
    pub fn apply(&self, x: f32, y: f32) -> Point {
        self.current.transform_point(point(x, y))
    }

    fn prepend(&mut self, local: Transform) {
        self.current = local.then(&self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn translate_then_rotate_rotates_around_the_new_origin() {
        let mut stack = TransformStack::new();
        stack.translate(100.0, 50.0);
        stack.rotate(FRAC_PI_2);
        let p = stack.apply(10.0, 0.0);
        assert_relative_eq!(p.x, 100.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 60.0, epsilon = 1e-4);
    }

    #[test]
    fn mirrored_scale_flips_x_only() {
        let mut stack = TransformStack::new();
        stack.translate(10.0, 10.0);
        stack.scale(-2.0, 2.0);
        let p = stack.apply(5.0, 5.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 20.0, epsilon = 1e-5);
    }

    #[test]
    fn restore_returns_to_the_saved_transform() {
        let mut stack = TransformStack::new();
        stack.translate(3.0, 4.0);
        stack.save();
        stack.scale(10.0, 10.0);
        stack.rotate(1.0);
        assert_eq!(stack.depth(), 1);
        stack.restore();
        assert_eq!(stack.current(), Transform::translation(3.0, 4.0));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut stack = TransformStack::with_base(Transform::scale(2.0, 2.0));
        stack.restore();
        assert_eq!(stack.current(), Transform::scale(2.0, 2.0));
    }
}
