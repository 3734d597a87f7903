use image::Rgba;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color. Deserializes from `[r, g, b]` (opaque) or `[r, g, b, a]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "[u8; 4]")]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b, a: 255 }
    }
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel { r, g, b, a }
    }
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);
    /// Returned for every ray that misses the scene.
    pub const BACKGROUND: Pixel = Pixel::BLACK;

    pub fn opaque(self) -> Pixel {
        Pixel { a: 255, ..self }
    }

    /// Scales the color channels by `factor`, rounding and clamping into `0..=255`.
    /// The result is always opaque.
    pub fn scaled(self, factor: f64) -> Pixel {
        let channel = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Pixel::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(p: Pixel) -> Rgba<u8> {
        Rgba([p.r, p.g, p.b, p.a])
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(p: Pixel) -> [u8; 4] {
        [p.r, p.g, p.b, p.a]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(c: [u8; 4]) -> Pixel {
        Pixel::with_alpha(c[0], c[1], c[2], c[3])
    }
}

impl TryFrom<Vec<u8>> for Pixel {
    type Error = String;
    fn try_from(channels: Vec<u8>) -> Result<Pixel, String> {
        match channels.as_slice() {
            [r, g, b] => Ok(Pixel::new(*r, *g, *b)),
            [r, g, b, a] => Ok(Pixel::with_alpha(*r, *g, *b, *a)),
            other => Err(format!(
                "expected 3 or 4 color channels, got {}",
                other.len()
            )),
        }
    }
}
