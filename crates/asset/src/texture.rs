//! RGBA8 texture data for textured primitives.

use std::path::Path;

use anyhow::{Context, Result, ensure};

/// Texture pixels in CPU memory, rows top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl TextureData {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Wrap raw RGBA8 pixels. Fails when the buffer length doesn't match.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        ensure!(
            data.len() == expected,
            "RGBA8 texture {}x{} needs {} bytes, got {}",
            width,
            height,
            expected,
            data.len()
        );
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Decode an image file (PNG) into RGBA8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading texture from {}", path.display());

        let img = image::open(path)
            .with_context(|| format!("Failed to open image {}", path.display()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::info!("Loaded texture {}x{}", width, height);
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// White/gray checkerboard, `size` x `size` pixels with `cell`-pixel squares.
    pub fn checkerboard(size: u32, cell: u32) -> Self {
        let cell = cell.max(1);
        let mut data = Vec::with_capacity(size as usize * size as usize * Self::BYTES_PER_PIXEL);
        for y in 0..size {
            for x in 0..size {
                if ((x / cell) + (y / cell)) % 2 == 0 {
                    data.extend_from_slice(&[255, 255, 255, 255]);
                } else {
                    data.extend_from_slice(&[128, 128, 128, 255]);
                }
            }
        }
        Self {
            data,
            width: size,
            height: size,
        }
    }

    /// RGBA at `(x, y)`, `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn is_valid(&self) -> bool {
        let expected = self.width as usize * self.height as usize * Self::BYTES_PER_PIXEL;
        self.width > 0 && self.height > 0 && self.data.len() == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates_cells() {
        let tex = TextureData::checkerboard(16, 8);
        assert!(tex.is_valid());
        assert_eq!(tex.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(tex.pixel(8, 0), Some([128, 128, 128, 255]));
        assert_eq!(tex.pixel(8, 8), Some([255, 255, 255, 255]));
        assert_eq!(tex.pixel(16, 0), None);
    }

    #[test]
    fn from_rgba8_checks_length() {
        assert!(TextureData::from_rgba8(2, 2, vec![0; 16]).is_ok());
        assert!(TextureData::from_rgba8(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn large_dimensions_do_not_overflow() {
        // 65536 * 65536 * 4 overflows u32.
        let tex = TextureData {
            data: Vec::new(),
            width: 65_536,
            height: 65_536,
        };
        assert!(!tex.is_valid());
        assert_eq!(tex.pixel(65_535, 65_535), None);
        assert!(TextureData::from_rgba8(65_536, 65_536, Vec::new()).is_err());
    }

    #[test]
    fn loading_a_missing_file_fails() {
        let err = TextureData::load("does/not/exist.png").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.png"));
    }
}
