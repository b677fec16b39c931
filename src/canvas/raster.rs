use super::*;

/// Sub-pixel steps per pixel used for edge evaluation.
const SUBPIXEL_STEPS: i64 = 16;
/// Coordinates are clamped to this many pixels away from the origin before snapping.
const MAX_COORDINATE: f32 = 1_000_000.0;

type FixedPoint = (i64, i64);

/// Triangle rasterizer writing into a premultiplied RGBA buffer.
///
/// Vertices are snapped to a fixed-point grid so the edge functions are exact, and pixels lying
/// exactly on a shared edge are attributed to one triangle only. Neighbouring triangles of a
/// mesh therefore never blend twice over the same pixel.
pub(super) struct RasterTarget<'a> {
    pixels: &'a mut [[f32; 4]],
    width: u32,
    height: u32,
}

impl<'a> RasterTarget<'a> {
    pub(super) fn new(pixels: &'a mut [[f32; 4]], (width, height): (u32, u32)) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    pub(super) fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.normalize();
        self.pixels.fill([r * a, g * a, b * a, a]);
    }

    /// Rasterizes every triangle of `mesh`, whose vertices are in the local space `transform`
    /// maps to pixels. Returns the number of triangles processed.
    pub(super) fn fill_mesh(
        &mut self,
        mesh: &VertexBuffers<Vertex, u16>,
        paint: &Paint,
        transform: &Transform,
    ) -> u32 {
        let mut triangles = 0;
        for indices in mesh.indices.chunks_exact(3) {
            let vertex = |index: u16| {
                mesh.vertices
                    .get(index as usize)
                    .map(|vertex| point(vertex.position[0], vertex.position[1]))
            };
            let (Some(a), Some(b), Some(c)) =
                (vertex(indices[0]), vertex(indices[1]), vertex(indices[2]))
            else {
                continue;
            };
            let local = [a, b, c];
            let screen = local.map(|p| transform.transform_point(p));
            self.fill_triangle(local, screen, paint);
            triangles += 1;
        }
        triangles
    }

    fn fill_triangle(&mut self, mut local: [Point; 3], screen: [Point; 3], paint: &Paint) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        if screen.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return;
        }

        let mut fixed = screen.map(to_fixed);
        let mut area = edge(fixed[0], fixed[1], fixed[2]);
        if area == 0 {
            return;
        }
        if area < 0 {
            fixed.swap(1, 2);
            local.swap(1, 2);
            area = -area;
        }

        let min_x = fixed.iter().map(|p| p.0).min().unwrap_or(0);
        let max_x = fixed.iter().map(|p| p.0).max().unwrap_or(0);
        let min_y = fixed.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = fixed.iter().map(|p| p.1).max().unwrap_or(0);
        let Some((x_start, x_end)) = pixel_span(min_x, max_x, self.width) else {
            return;
        };
        let Some((y_start, y_end)) = pixel_span(min_y, max_y, self.height) else {
            return;
        };

        let owns = [
            owns_edge(fixed[1], fixed[2]),
            owns_edge(fixed[2], fixed[0]),
            owns_edge(fixed[0], fixed[1]),
        ];
        let solid = match paint {
            Paint::Solid(color) => Some(color.normalize()),
            _ => None,
        };
        let inverse_area = 1.0 / area as f32;

        for y in y_start..=y_end {
            let center_y = y * SUBPIXEL_STEPS + SUBPIXEL_STEPS / 2;
            let row = y as usize * self.width as usize;
            for x in x_start..=x_end {
                let sample = (x * SUBPIXEL_STEPS + SUBPIXEL_STEPS / 2, center_y);
                let weights = [
                    edge(fixed[1], fixed[2], sample),
                    edge(fixed[2], fixed[0], sample),
                    edge(fixed[0], fixed[1], sample),
                ];
                let inside = weights
                    .iter()
                    .zip(owns)
                    .all(|(weight, owned)| *weight > 0 || (*weight == 0 && owned));
                if !inside {
                    continue;
                }

                let color = match solid {
                    Some(color) => color,
                    None => {
                        let [w0, w1, w2] = weights.map(|weight| weight as f32 * inverse_area);
                        let local_point = point(
                            local[0].x * w0 + local[1].x * w1 + local[2].x * w2,
                            local[0].y * w0 + local[1].y * w1 + local[2].y * w2,
                        );
                        paint.sample(local_point)
                    }
                };
                if let Some(pixel) = self.pixels.get_mut(row + x as usize) {
                    blend_over(pixel, color);
                }
            }
        }
    }
}

/// Source-over composition of a straight-alpha color onto a premultiplied pixel.
pub(super) fn blend_over(destination: &mut [f32; 4], source: [f32; 4]) {
    let alpha = source[3].clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let remaining = 1.0 - alpha;
    destination[0] = source[0] * alpha + destination[0] * remaining;
    destination[1] = source[1] * alpha + destination[1] * remaining;
    destination[2] = source[2] * alpha + destination[2] * remaining;
    destination[3] = alpha + destination[3] * remaining;
}

fn to_fixed(p: Point) -> FixedPoint {
    let snap = |value: f32| {
        (value.clamp(-MAX_COORDINATE, MAX_COORDINATE) * SUBPIXEL_STEPS as f32).round() as i64
    };
    (snap(p.x), snap(p.y))
}

/// Twice the signed area of `(a, b, p)`. Exact, and antisymmetric in `a` and `b`.
fn edge(a: FixedPoint, b: FixedPoint, p: FixedPoint) -> i64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// Tie-break for samples exactly on an edge: of the two directions of an edge, exactly one
/// owns it.
fn owns_edge(a: FixedPoint, b: FixedPoint) -> bool {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    dy > 0 || (dy == 0 && dx < 0)
}

/// Range of pixel indices whose centers may lie in `[min, max]` (fixed point), clipped to
/// `0..limit`.
fn pixel_span(min: i64, max: i64, limit: u32) -> Option<(i64, i64)> {
    let half = SUBPIXEL_STEPS / 2;
    let start = (min - half).div_euclid(SUBPIXEL_STEPS).max(0);
    let end = (max - half).div_euclid(SUBPIXEL_STEPS).min(limit as i64 - 1);
    (start <= end).then_some((start, end))
}
