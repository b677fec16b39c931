use lyon::tessellation::{FillVertex, FillVertexConstructor, StrokeVertex, StrokeVertexConstructor};

/// A tessellated vertex in the shape's local coordinate space.
///
/// Colors are not baked into vertices: the rasterizer interpolates local positions and evaluates
/// the shape's [`Paint`](crate::Paint) per pixel, which keeps gradients exact on meshes that
/// have no interior vertices (a tessellated circle only has vertices on its rim).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
}

pub(crate) struct VertexConverter;

impl FillVertexConstructor<Vertex> for VertexConverter {
    fn new_vertex(&mut self, vertex: FillVertex) -> Vertex {
        Vertex {
            position: vertex.position().to_array(),
        }
    }
}

impl StrokeVertexConstructor<Vertex> for VertexConverter {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> Vertex {
        Vertex {
            position: vertex.position().to_array(),
        }
    }
}
