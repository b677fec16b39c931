use mascot::Color;

/// What a checked pixel should hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expected {
    /// A specific straight RGBA color, within the expectation's tolerance.
    Color(Color),
    /// Any coverage at all.
    Painted,
    /// No coverage.
    Transparent,
}

/// A single pixel check to run after rendering.
#[derive(Debug, Clone)]
pub struct PixelExpectation {
    pub x: u32,
    pub y: u32,
    pub expected: Expected,
    /// Per-channel tolerance for [`Expected::Color`] (default 5).
    pub tolerance: u8,
    /// Human-readable label for failure messages.
    pub label: &'static str,
}

impl PixelExpectation {
    pub fn new(x: u32, y: u32, expected: Expected, label: &'static str) -> Self {
        Self {
            x,
            y,
            expected,
            tolerance: 5,
            label,
        }
    }

    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn color(x: u32, y: u32, color: Color, label: &'static str) -> Self {
        Self::new(x, y, Expected::Color(color), label)
    }

    pub fn painted(x: u32, y: u32, label: &'static str) -> Self {
        Self::new(x, y, Expected::Painted, label)
    }

    pub fn transparent(x: u32, y: u32, label: &'static str) -> Self {
        Self::new(x, y, Expected::Transparent, label)
    }
}

/// Validates pixel expectations against straight RGBA8 data from
/// [`Canvas::render_to_buffer`](mascot::Canvas::render_to_buffer).
///
/// Returns one description per failed expectation; an empty list means everything passed.
pub fn check_pixels(
    pixel_data: &[u8],
    width: u32,
    height: u32,
    expectations: &[PixelExpectation],
) -> Vec<String> {
    let stride = width as usize * 4;
    let mut failures = Vec::new();

    for expectation in expectations {
        if expectation.x >= width || expectation.y >= height {
            failures.push(format!(
                "[{}] pixel ({},{}) is outside canvas {}x{}",
                expectation.label, expectation.x, expectation.y, width, height,
            ));
            continue;
        }

        let offset = expectation.y as usize * stride + expectation.x as usize * 4;
        let Some(actual) = pixel_data.get(offset..offset + 4) else {
            failures.push(format!(
                "[{}] pixel ({},{}) is past the end of the buffer (len {})",
                expectation.label,
                expectation.x,
                expectation.y,
                pixel_data.len(),
            ));
            continue;
        };
        let actual = [actual[0], actual[1], actual[2], actual[3]];

        let (matches, wanted) = match expectation.expected {
            Expected::Color(color) => {
                let tolerance = expectation.tolerance as i16;
                let matches = actual
                    .iter()
                    .zip(color.to_array())
                    .all(|(actual, expected)| (*actual as i16 - expected as i16).abs() <= tolerance);
                let [r, g, b, a] = color.to_array();
                (
                    matches,
                    format!("rgba({r},{g},{b},{a}) ±{}", expectation.tolerance),
                )
            }
            Expected::Painted => (actual[3] > 0, "any coverage".to_string()),
            Expected::Transparent => (actual[3] == 0, "no coverage".to_string()),
        };

        if !matches {
            failures.push(format!(
                "[{}] pixel ({},{}) expected {} but got rgba({},{},{},{})",
                expectation.label,
                expectation.x,
                expectation.y,
                wanted,
                actual[0],
                actual[1],
                actual[2],
                actual[3],
            ));
        }
    }

    failures
}
