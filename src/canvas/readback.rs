use super::*;

fn unpremultiply(pixel: &[f32; 4]) -> [f32; 4] {
    let alpha = pixel[3];
    if alpha <= 0.0 {
        return [0.0; 4];
    }
    [pixel[0] / alpha, pixel[1] / alpha, pixel[2] / alpha, alpha]
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Canvas {
    /// Renders the queue and copies the result into `buffer` as tightly packed, non-premultiplied
    /// RGBA8 rows.
    pub fn render_to_buffer(&mut self, buffer: &mut Vec<u8>) {
        self.render();
        buffer.clear();
        buffer.reserve(self.pixels.len() * 4);
        for pixel in &self.pixels {
            buffer.extend(unpremultiply(pixel).map(to_byte));
        }
    }

    /// Renders the queue and composites it over an opaque `backdrop` into `0RGB` words, the
    /// layout window presenters expect. `buffer` must hold at least `width * height` words;
    /// extra words are left untouched.
    pub fn render_to_xrgb32(&mut self, buffer: &mut [u32], backdrop: Color) {
        self.render();
        let [br, bg, bb, _] = backdrop.normalize();
        for (word, pixel) in buffer.iter_mut().zip(&self.pixels) {
            let remaining = 1.0 - pixel[3];
            let r = to_byte(pixel[0] + br * remaining) as u32;
            let g = to_byte(pixel[1] + bg * remaining) as u32;
            let b = to_byte(pixel[2] + bb * remaining) as u32;
            *word = (r << 16) | (g << 8) | b;
        }
    }

    /// Color of a single rendered pixel, or `None` outside the canvas. Reflects the last call to
    /// [`Canvas::render`].
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let (width, height) = self.size;
        if x >= width || y >= height {
            return None;
        }
        let pixel = self.pixels.get(y as usize * width as usize + x as usize)?;
        Some(Color::from_normalized(unpremultiply(pixel)))
    }

    /// Number of pixels with any coverage after the last render.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel[3] > 0.0).count()
    }
}
