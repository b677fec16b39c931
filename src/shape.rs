//! The `shape` module provides the vector primitives the figure is drawn with: rectangles,
//! ellipses, polygons, stroked polylines and free-form paths, each with an optional fill
//! [`Paint`] and an optional [`Stroke`].
//!
//! # Examples
//!
//! ```rust
//! use mascot::{Color, Paint, Shape, Stroke};
//!
//! // A hoof
//! let hoof = Shape::ellipse((5.0, 62.0), (9.5, 5.0), 0.0, Color::hex(0x333333));
//!
//! // A leg drawn as a thick round-capped polyline
//! let leg = Shape::polyline(
//!     &[(0.0, 0.0), (-5.0, 30.0), (5.0, 60.0)],
//!     Stroke::new(15.0, Color::hex(0xE0E0E0)).rounded(),
//! );
//!
//! // A custom path with a gradient fill and an outline
//! let tail = Shape::builder()
//!     .fill(Paint::linear(
//!         (-100.0, 20.0),
//!         (-140.0, 100.0),
//!         &[(0.0, Color::hex(0xFFE082)), (1.0, Color::hex(0xFFB300))],
//!     ))
//!     .stroke(Stroke::new(1.0, Color::hex(0xF57F17)))
//!     .begin((-70.0, 20.0))
//!     .cubic_bezier_to((-100.0, 30.0), (-120.0, 80.0), (-140.0, 100.0))
//!     .cubic_bezier_to((-110.0, 90.0), (-90.0, 40.0), (-60.0, 25.0))
//!     .close()
//!     .build();
//! ```

use crate::error::CanvasError;
use crate::vertex::{Vertex, VertexConverter};
use crate::{Paint, Stroke};
use lyon::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use lyon::math::{point, vector, Angle, Box2D};
use lyon::path::{PathEvent, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, StrokeTessellator, VertexBuffers,
};

/// Flattening tolerance used for curves, in local units.
pub(crate) const TESSELLATION_TOLERANCE: f32 = 0.2;

/// Represents a graphical shape, which can be either a custom path or a simple rectangle.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A custom path shape defined using Bézier curves and lines.
    Path(PathShape),
    /// A simple axis-aligned rectangle.
    Rect(RectShape),
}

impl Shape {
    /// Creates a new [`ShapeBuilder`] for constructing complex shapes.
    pub fn builder() -> ShapeBuilder {
        ShapeBuilder::new()
    }

    /// Creates a filled rectangle from its top-left and bottom-right corners.
    pub fn rect(rect: [(f32, f32); 2], fill: impl Into<Paint>) -> Shape {
        Shape::Rect(RectShape::new(rect, fill.into()))
    }

    /// Creates a filled ellipse. `rotation` is in radians.
    pub fn ellipse(
        center: (f32, f32),
        radii: (f32, f32),
        rotation: f32,
        fill: impl Into<Paint>,
    ) -> Shape {
        let mut path_builder = lyon::path::Path::builder();
        path_builder.add_ellipse(
            point(center.0, center.1),
            vector(radii.0.abs(), radii.1.abs()),
            Angle::radians(rotation),
            Winding::Positive,
        );
        Shape::Path(PathShape::new(
            path_builder.build(),
            Some(fill.into()),
            None,
        ))
    }

    /// Creates a filled circle.
    pub fn circle(center: (f32, f32), radius: f32, fill: impl Into<Paint>) -> Shape {
        let mut path_builder = lyon::path::Path::builder();
        path_builder.add_circle(point(center.0, center.1), radius.abs(), Winding::Positive);
        Shape::Path(PathShape::new(
            path_builder.build(),
            Some(fill.into()),
            None,
        ))
    }

    /// Creates a closed, filled polygon. Fewer than three points produce an empty shape.
    pub fn polygon(points: &[(f32, f32)], fill: impl Into<Paint>) -> Shape {
        let mut builder = ShapeBuilder::new().fill(fill);
        if let Some((first, rest)) = points.split_first() {
            builder = builder.begin(*first);
            for p in rest {
                builder = builder.line_to(*p);
            }
            builder = builder.close();
        }
        builder.build()
    }

    /// Creates an open polyline that is only stroked.
    pub fn polyline(points: &[(f32, f32)], stroke: Stroke) -> Shape {
        let mut builder = ShapeBuilder::new().stroke(stroke);
        if let Some((first, rest)) = points.split_first() {
            builder = builder.begin(*first);
            for p in rest {
                builder = builder.line_to(*p);
            }
        }
        builder.build()
    }

    /// The paint used for the interior, if any.
    pub fn fill(&self) -> Option<&Paint> {
        match self {
            Shape::Path(path_shape) => path_shape.fill.as_ref(),
            Shape::Rect(rect_shape) => Some(&rect_shape.fill),
        }
    }

    /// The outline, if any.
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            Shape::Path(path_shape) => path_shape.stroke.as_ref(),
            Shape::Rect(rect_shape) => rect_shape.stroke.as_ref(),
        }
    }

    /// Returns the same shape with its outline replaced.
    pub fn with_stroke(mut self, stroke: Stroke) -> Shape {
        match &mut self {
            Shape::Path(path_shape) => path_shape.stroke = Some(stroke),
            Shape::Rect(rect_shape) => rect_shape.stroke = Some(stroke),
        }
        self
    }

    /// Local-space bounding box of the geometry, ignoring stroke width.
    pub fn bounding_box(&self) -> Box2D {
        match self {
            Shape::Path(path_shape) => path_bounding_box(&path_shape.path),
            Shape::Rect(rect_shape) => rect_shape.to_box(),
        }
    }

    /// Tessellates the shape into triangle meshes, one for the fill and one for the stroke.
    pub(crate) fn tessellate(
        &self,
        fill_tessellator: &mut FillTessellator,
        stroke_tessellator: &mut StrokeTessellator,
    ) -> Result<TessellatedShape, CanvasError> {
        match self {
            Shape::Path(path_shape) => path_shape.tessellate(fill_tessellator, stroke_tessellator),
            Shape::Rect(rect_shape) => rect_shape.tessellate(stroke_tessellator),
        }
    }
}

impl From<PathShape> for Shape {
    fn from(value: PathShape) -> Self {
        Shape::Path(value)
    }
}

impl From<RectShape> for Shape {
    fn from(value: RectShape) -> Self {
        Shape::Rect(value)
    }
}

/// The triangle meshes of a shape, in local space.
#[derive(Debug, Clone, Default)]
pub(crate) struct TessellatedShape {
    pub fill: Option<VertexBuffers<Vertex, u16>>,
    pub stroke: Option<VertexBuffers<Vertex, u16>>,
}

/// Represents a simple rectangular shape with a fill and an optional stroke.
///
/// You typically do not need to use `RectShape` directly; instead, use the [`Shape::rect`] method.
#[derive(Debug, Clone)]
pub struct RectShape {
    /// Top-left and bottom-right corners.
    pub(crate) rect: [(f32, f32); 2],
    pub(crate) fill: Paint,
    pub(crate) stroke: Option<Stroke>,
}

impl RectShape {
    pub fn new(rect: [(f32, f32); 2], fill: Paint) -> Self {
        Self {
            rect,
            fill,
            stroke: None,
        }
    }

    fn to_box(&self) -> Box2D {
        let [(x0, y0), (x1, y1)] = self.rect;
        Box2D::new(
            point(x0.min(x1), y0.min(y1)),
            point(x0.max(x1), y0.max(y1)),
        )
    }

    fn tessellate(
        &self,
        stroke_tessellator: &mut StrokeTessellator,
    ) -> Result<TessellatedShape, CanvasError> {
        let rect = self.to_box();
        let corners = [
            [rect.min.x, rect.min.y],
            [rect.max.x, rect.min.y],
            [rect.min.x, rect.max.y],
            [rect.max.x, rect.max.y],
        ];

        let mut fill = VertexBuffers::new();
        fill.vertices
            .extend(corners.iter().map(|position| Vertex { position: *position }));
        fill.indices.extend([0u16, 1, 2, 2, 1, 3]);

        let stroke = match self.stroke.filter(|stroke| !stroke.is_empty()) {
            Some(stroke) => {
                let mut path_builder = lyon::path::Path::builder();
                path_builder.add_rectangle(&rect, Winding::Positive);
                let path = path_builder.build();
                Some(stroke_path(&path, &stroke, stroke_tessellator)?)
            }
            None => None,
        };

        Ok(TessellatedShape {
            fill: Some(fill),
            stroke,
        })
    }
}

/// Represents a custom path shape with an optional fill and an optional stroke.
///
/// You typically do not need to use `PathShape` directly; instead, use the [`Shape::builder`]
/// method to construct complex shapes.
#[derive(Clone, Debug)]
pub struct PathShape {
    pub(crate) path: lyon::path::Path,
    pub(crate) fill: Option<Paint>,
    pub(crate) stroke: Option<Stroke>,
}

impl PathShape {
    pub fn new(path: lyon::path::Path, fill: Option<Paint>, stroke: Option<Stroke>) -> Self {
        Self { path, fill, stroke }
    }

    fn tessellate(
        &self,
        fill_tessellator: &mut FillTessellator,
        stroke_tessellator: &mut StrokeTessellator,
    ) -> Result<TessellatedShape, CanvasError> {
        let fill = match self.fill.as_ref().filter(|paint| !paint.is_invisible()) {
            Some(_) => {
                let mut buffers: VertexBuffers<Vertex, u16> = VertexBuffers::new();
                let options = FillOptions::default().with_tolerance(TESSELLATION_TOLERANCE);
                fill_tessellator.tessellate_path(
                    &self.path,
                    &options,
                    &mut BuffersBuilder::new(&mut buffers, VertexConverter),
                )?;
                Some(buffers)
            }
            None => None,
        };

        let stroke = match self.stroke.filter(|stroke| !stroke.is_empty()) {
            Some(stroke) => Some(stroke_path(&self.path, &stroke, stroke_tessellator)?),
            None => None,
        };

        Ok(TessellatedShape { fill, stroke })
    }
}

/// Tight bounds of every segment of `path`. An empty path has zero-sized bounds at the origin.
fn path_bounding_box(path: &lyon::path::Path) -> Box2D {
    path.iter()
        .filter_map(|event| match event {
            PathEvent::Begin { at } => Some(Box2D::new(at, at)),
            PathEvent::Line { from, to } => Some(LineSegment { from, to }.bounding_box()),
            PathEvent::Quadratic { from, ctrl, to } => {
                Some(QuadraticBezierSegment { from, ctrl, to }.bounding_box())
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Some(
                CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                }
                .bounding_box(),
            ),
            PathEvent::End { .. } => None,
        })
        .reduce(|bounds, segment| bounds.union(&segment))
        .unwrap_or_else(Box2D::zero)
}

fn stroke_path(
    path: &lyon::path::Path,
    stroke: &Stroke,
    stroke_tessellator: &mut StrokeTessellator,
) -> Result<VertexBuffers<Vertex, u16>, CanvasError> {
    let mut buffers: VertexBuffers<Vertex, u16> = VertexBuffers::new();
    stroke_tessellator.tessellate_path(
        path,
        &stroke.tessellation_options(TESSELLATION_TOLERANCE),
        &mut BuffersBuilder::new(&mut buffers, VertexConverter),
    )?;
    Ok(buffers)
}

/// A builder for creating complex shapes using a fluent interface.
///
/// Sub-paths left open are ended automatically when a new one begins or when the shape is
/// built, so stroked polylines need no explicit terminator.
///
/// # Examples
///
/// ```rust
/// use mascot::{Color, ShapeBuilder};
///
/// let ear = ShapeBuilder::new()
///     .fill(Color::WHITE)
///     .begin((-15.0, 0.0))
///     .line_to((-20.0, -15.0))
///     .line_to((-10.0, -5.0))
///     .close()
///     .build();
/// ```
#[derive(Clone)]
pub struct ShapeBuilder {
    fill: Option<Paint>,
    stroke: Option<Stroke>,
    path_builder: lyon::path::Builder,
    in_subpath: bool,
}

impl Default for ShapeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBuilder {
    /// Creates a new `ShapeBuilder` with neither fill nor stroke.
    pub fn new() -> Self {
        Self {
            fill: None,
            stroke: None,
            path_builder: lyon::path::Path::builder(),
            in_subpath: false,
        }
    }

    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = Some(paint.into());
        self
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Begin a sub-path at point, ending the previous one (open) if needed.
    pub fn begin(mut self, point: (f32, f32)) -> Self {
        if self.in_subpath {
            self.path_builder.end(false);
        }
        self.path_builder.begin(point.into());
        self.in_subpath = true;
        self
    }

    pub fn line_to(mut self, point: (f32, f32)) -> Self {
        if self.in_subpath {
            self.path_builder.line_to(point.into());
        }
        self
    }

    pub fn quadratic_bezier_to(mut self, ctrl: (f32, f32), to: (f32, f32)) -> Self {
        if self.in_subpath {
            self.path_builder.quadratic_bezier_to(ctrl.into(), to.into());
        }
        self
    }

    pub fn cubic_bezier_to(mut self, ctrl: (f32, f32), ctrl2: (f32, f32), to: (f32, f32)) -> Self {
        if self.in_subpath {
            self.path_builder
                .cubic_bezier_to(ctrl.into(), ctrl2.into(), to.into());
        }
        self
    }

    /// Closes the current sub-path by drawing a line back to its starting point.
    pub fn close(mut self) -> Self {
        if self.in_subpath {
            self.path_builder.close();
            self.in_subpath = false;
        }
        self
    }

    /// Builds the [`Shape`] from the accumulated path, fill and stroke.
    pub fn build(mut self) -> Shape {
        if self.in_subpath {
            self.path_builder.end(false);
        }
        Shape::Path(PathShape {
            path: self.path_builder.build(),
            fill: self.fill,
            stroke: self.stroke,
        })
    }
}

impl From<ShapeBuilder> for Shape {
    fn from(value: ShapeBuilder) -> Self {
        value.build()
    }
}
