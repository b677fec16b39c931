//! Fill styles for shapes: flat colors and linear/radial gradients.
//!
//! Gradient geometry is expressed in the shape's local coordinate space, the same space its path
//! is built in, so a gradient moves, rotates and mirrors together with the shape it fills.

use crate::Color;
use lyon::math::Point;
use smallvec::SmallVec;

/// A single color stop of a gradient. `offset` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

pub type GradientStops = SmallVec<[GradientStop; 4]>;

/// Describes how the interior of a shape is colored.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Colors vary along the segment `start -> end`, clamped beyond its ends.
    Linear {
        start: Point,
        end: Point,
        stops: GradientStops,
    },
    /// Colors vary with the distance from `center`, from `inner_radius` (offset 0) to
    /// `outer_radius` (offset 1).
    Radial {
        center: Point,
        inner_radius: f32,
        outer_radius: f32,
        stops: GradientStops,
    },
}

impl Paint {
    pub fn linear(start: (f32, f32), end: (f32, f32), stops: &[(f32, Color)]) -> Self {
        Paint::Linear {
            start: start.into(),
            end: end.into(),
            stops: collect_stops(stops),
        }
    }

    pub fn radial(
        center: (f32, f32),
        inner_radius: f32,
        outer_radius: f32,
        stops: &[(f32, Color)],
    ) -> Self {
        Paint::Radial {
            center: center.into(),
            inner_radius: inner_radius.max(0.0),
            outer_radius: outer_radius.max(0.0),
            stops: collect_stops(stops),
        }
    }

    /// True when nothing painted with this paint can ever be visible.
    pub fn is_invisible(&self) -> bool {
        match self {
            Paint::Solid(color) => color.is_transparent(),
            Paint::Linear { stops, .. } | Paint::Radial { stops, .. } => {
                stops.iter().all(|stop| stop.color.is_transparent())
            }
        }
    }

    /// Evaluates the paint at a point in local space, returning straight (non-premultiplied)
    /// normalized RGBA.
    pub fn sample(&self, point: Point) -> [f32; 4] {
        match self {
            Paint::Solid(color) => color.normalize(),
            Paint::Linear { start, end, stops } => {
                let axis = *end - *start;
                let length_squared = axis.square_length();
                let t = if length_squared <= f32::EPSILON {
                    0.0
                } else {
                    (point - *start).dot(axis) / length_squared
                };
                sample_stops(stops, t)
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let distance = (point - *center).length();
                let span = outer_radius - inner_radius;
                let t = if span <= f32::EPSILON {
                    if distance < *outer_radius {
                        0.0
                    } else {
                        1.0
                    }
                } else {
                    (distance - inner_radius) / span
                };
                sample_stops(stops, t)
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(value: Color) -> Self {
        Paint::Solid(value)
    }
}

fn collect_stops(stops: &[(f32, Color)]) -> GradientStops {
    let mut collected: GradientStops = stops
        .iter()
        .map(|(offset, color)| GradientStop::new(*offset, *color))
        .collect();
    collected.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    collected
}

fn sample_stops(stops: &[GradientStop], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0; 4];
    };
    if t <= first.offset {
        return first.color.normalize();
    }
    if t >= last.offset {
        return last.color.normalize();
    }

    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if t <= to.offset {
            let span = to.offset - from.offset;
            let local = if span <= f32::EPSILON {
                1.0
            } else {
                (t - from.offset) / span
            };
            let a = from.color.normalize();
            let b = to.color.normalize();
            return [
                a[0] + (b[0] - a[0]) * local,
                a[1] + (b[1] - a[1]) * local,
                a[2] + (b[2] - a[2]) * local,
                a[3] + (b[3] - a[3]) * local,
            ];
        }
    }

    last.color.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lyon::math::point;

    #[test]
    fn linear_gradient_clamps_outside_the_segment() {
        let paint = Paint::linear(
            (0.0, 0.0),
            (10.0, 0.0),
            &[(0.0, Color::BLACK), (1.0, Color::WHITE)],
        );
        assert_eq!(paint.sample(point(-5.0, 0.0)), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(paint.sample(point(50.0, 3.0)), [1.0, 1.0, 1.0, 1.0]);
        assert_relative_eq!(paint.sample(point(5.0, 7.0))[0], 0.5, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_linear_gradient_uses_first_stop() {
        let paint = Paint::linear((3.0, 3.0), (3.0, 3.0), &[(0.0, Color::WHITE), (1.0, Color::BLACK)]);
        assert_eq!(paint.sample(point(100.0, 100.0)), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn radial_gradient_fades_to_the_outer_stop() {
        let paint = Paint::radial(
            (0.0, 0.0),
            0.0,
            10.0,
            &[
                (0.0, Color::rgba(255, 255, 0, 255)),
                (0.5, Color::rgba(255, 100, 0, 255)),
                (1.0, Color::rgba(255, 0, 0, 0)),
            ],
        );
        assert_eq!(paint.sample(point(0.0, 0.0))[3], 1.0);
        assert_eq!(paint.sample(point(0.0, 12.0))[3], 0.0);
        let mid = paint.sample(point(5.0, 0.0));
        assert_relative_eq!(mid[1], 100.0 / 255.0, epsilon = 1e-6);
    }

    #[test]
    fn stops_are_sorted_by_offset() {
        let paint = Paint::linear(
            (0.0, 0.0),
            (1.0, 0.0),
            &[(1.0, Color::WHITE), (0.0, Color::BLACK)],
        );
        assert_eq!(paint.sample(point(0.0, 0.0)), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn fully_transparent_gradients_are_invisible() {
        let paint = Paint::radial((0.0, 0.0), 0.0, 1.0, &[(0.0, Color::TRANSPARENT)]);
        assert!(paint.is_invisible());
        assert!(!Paint::Solid(Color::BLACK).is_invisible());
    }
}
