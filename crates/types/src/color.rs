//! 24-bit RGB colors and their packed `u32` encoding.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GRAY: Rgb = Rgb::new(128, 128, 128);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the canvas color representation.
    #[inline]
    pub const fn encode(self) -> u32 {
        encode_rgb(self.r, self.g, self.b)
    }

    /// Unpack from the canvas color representation.
    #[inline]
    pub const fn decode(packed: u32) -> Self {
        decode_rgb(packed)
    }

    /// Multiply every channel by `t`, saturating to `0..=255`.
    pub fn scale(self, t: f32) -> Self {
        let ch = |c: u8| (c as f32 * t).round().clamp(0.0, 255.0) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }
}

impl From<Rgb> for u32 {
    fn from(rgb: Rgb) -> Self {
        rgb.encode()
    }
}

/// Pack `r`, `g`, `b` as `r | g << 8 | b << 16`.
#[inline]
pub const fn encode_rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// Inverse of [`encode_rgb`]. Bits 24-31 are ignored.
#[inline]
pub const fn decode_rgb(packed: u32) -> Rgb {
    Rgb {
        r: (packed & 0xff) as u8,
        g: ((packed >> 8) & 0xff) as u8,
        b: ((packed >> 16) & 0xff) as u8,
    }
}
