use crate::Color;
use lyon::tessellation::{LineCap as LyonLineCap, LineJoin, StrokeOptions};

/// Shape used at the open ends of stroked paths.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Clone, Debug, Copy, PartialEq, Default)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: impl Into<Color>) -> Self {
        Self {
            width,
            color: color.into(),
            cap: LineCap::Butt,
        }
    }

    /// Round caps and round joins, the look of a limb drawn with a thick brush.
    #[inline]
    pub fn rounded(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }

    /// True if width is zero or color is transparent
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.color == Color::TRANSPARENT
    }

    pub(crate) fn tessellation_options(&self, tolerance: f32) -> StrokeOptions {
        let options = StrokeOptions::default()
            .with_line_width(self.width)
            .with_tolerance(tolerance);
        match self.cap {
            LineCap::Butt => options,
            LineCap::Round => options
                .with_line_cap(LyonLineCap::Round)
                .with_line_join(LineJoin::Round),
        }
    }
}
