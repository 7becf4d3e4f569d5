//! Unlit materials.

use std::sync::Arc;

use crate::texture::TextureData;

/// Linear RGB color, components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// From `0xRRGGBB`; bits above the low 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    pub fn to_hex(self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Flat color, optionally multiplied by a texture. Not affected by lights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BasicMaterial {
    pub color: Color,
    pub map: Option<Arc<TextureData>>,
}

impl BasicMaterial {
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// White, so the texture shows unmodified.
    pub fn with_map(map: Arc<TextureData>) -> Self {
        Self {
            map: Some(map),
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_textured(&self) -> bool {
        self.map.is_some()
    }
}
