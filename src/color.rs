/// Represents a color in RGBA format.
///
/// Each channel is an 8-bit unsigned integer. Besides construction and normalization, `Color`
/// carries the small amount of shading math the figure needs to fake volume: lighter and darker
/// tints of a base color, linear mixing, and the three face shades of an isometric block.
///
/// # Examples
///
/// ```
/// use mascot::Color;
///
/// let gold = Color::hex(0xFFB300);
/// assert_eq!(gold, Color::rgb(255, 179, 0));
///
/// // Highlights move towards white, shadows towards black, alpha is untouched.
/// let faded = gold.with_alpha(128);
/// assert_eq!(faded.lighten(1.0), Color::rgba(255, 255, 255, 128));
/// assert_eq!(faded.darken(1.0), Color::rgba(0, 0, 0, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// A transparent color.
    ///
    /// All color channels are set to zero, making the color fully transparent.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    /// A black color.
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// A white color.
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    /// Creates a new color with the specified RGB values and full opacity.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Creates a new color with the specified RGBA values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    ///
    /// ```
    /// use mascot::Color;
    ///
    /// assert_eq!(Color::hex(0xD50000), Color::rgb(0xD5, 0x00, 0x00));
    /// ```
    pub const fn hex(rgb: u32) -> Self {
        Self([
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
            255,
        ])
    }

    /// Returns the same color with the alpha channel replaced.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self([self.0[0], self.0[1], self.0[2], alpha])
    }

    /// Returns the same color with its alpha scaled by `opacity` (clamped to `[0, 1]`).
    pub fn fade(self, opacity: f32) -> Self {
        let alpha = (self.0[3] as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(alpha)
    }

    /// Normalizes the color values to the range [0.0, 1.0].
    pub fn normalize(&self) -> [f32; 4] {
        [
            self.0[0] as f32 / 255.0,
            self.0[1] as f32 / 255.0,
            self.0[2] as f32 / 255.0,
            self.0[3] as f32 / 255.0,
        ]
    }

    /// Builds a color back from normalized channels, clamping each one to [0.0, 1.0].
    pub fn from_normalized(channels: [f32; 4]) -> Self {
        let to_byte = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self([
            to_byte(channels[0]),
            to_byte(channels[1]),
            to_byte(channels[2]),
            to_byte(channels[3]),
        ])
    }

    /// Returns the color as an array of 4 `u8` values.
    pub fn to_array(&self) -> [u8; 4] {
        self.0
    }

    /// True if the alpha channel is zero.
    pub fn is_transparent(&self) -> bool {
        self.0[3] == 0
    }

    /// Moves every color channel towards white by `amount` (0 = unchanged, 1 = white).
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let channel = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
        Self([
            channel(self.0[0]),
            channel(self.0[1]),
            channel(self.0[2]),
            self.0[3],
        ])
    }

    /// Moves every color channel towards black by `amount` (0 = unchanged, 1 = black).
    pub fn darken(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let channel = |c: u8| (c as f32 * (1.0 - amount)).round() as u8;
        Self([
            channel(self.0[0]),
            channel(self.0[1]),
            channel(self.0[2]),
            self.0[3],
        ])
    }

    /// Linear interpolation between two colors, alpha included.
    pub fn mix(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let a = self.normalize();
        let b = other.normalize();
        Self::from_normalized([
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ])
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

/// Amount the top face of a block is lightened.
const TOP_FACE_HIGHLIGHT: f32 = 0.2;
/// Amount the left (viewer-facing) face of a block is darkened.
const LEFT_FACE_SHADOW: f32 = 0.1;
/// Amount the right face of a block is darkened.
const RIGHT_FACE_SHADOW: f32 = 0.28;

/// The three visible face colors of an isometric block lit from the upper left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockShades {
    pub top: Color,
    pub left: Color,
    pub right: Color,
}

impl BlockShades {
    pub fn from_base(base: Color) -> Self {
        Self {
            top: base.lighten(TOP_FACE_HIGHLIGHT),
            left: base.darken(LEFT_FACE_SHADOW),
            right: base.darken(RIGHT_FACE_SHADOW),
        }
    }
}
