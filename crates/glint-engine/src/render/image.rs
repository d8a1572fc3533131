use std::path::Path;

use anyhow::{Context, Result};

/// Decoded image data ready for GPU upload.
///
/// Pixel data is always RGBA8 regardless of the source format; decoders
/// expand grayscale/RGB sources and synthesize an opaque alpha channel.
/// The source channel count is kept for diagnostics.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data, tightly packed row-major.
    pub data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel count of the source image, before RGBA expansion.
    pub channels: u8,
}

impl ImageData {
    /// Loads and decodes an image from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let img = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?;

        let channels = img.color().channel_count();
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::info!(
            "loaded image {}x{} ({} channel source) from {}",
            width,
            height,
            channels,
            path.display()
        );

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
            channels,
        })
    }

    /// Decodes an image from an in-memory buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img =
            image::load_from_memory(bytes).context("failed to decode image from memory")?;

        let channels = img.color().channel_count();
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
            channels,
        })
    }

    /// Creates a solid color image (useful for testing and defaults).
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Size of the pixel data in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Byte stride of one pixel row, as required for texture upload layouts.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_color_fills_every_pixel() {
        let img = ImageData::solid_color(4, 4, [255, 0, 0, 255]);

        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
        assert_eq!(&img.data[60..64], &[255, 0, 0, 255]);
    }

    #[test]
    fn bytes_per_row_is_four_per_pixel() {
        let img = ImageData::solid_color(7, 3, [0, 0, 0, 255]);
        assert_eq!(img.bytes_per_row(), 28);
    }

    #[test]
    fn rgb_sources_gain_an_opaque_alpha_channel() {
        use image::{ImageBuffer, Rgb};
        use std::io::Cursor;

        let rgb: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(2, 1, |x, _| Rgb([x as u8 * 100, 50, 200]));

        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(rgb)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let decoded = ImageData::from_bytes(&png).unwrap();

        // Pixels are expanded to RGBA; the 3-channel origin stays recorded.
        assert_eq!((decoded.width, decoded.height), (2, 1));
        assert_eq!(decoded.channels, 3);
        assert_eq!(decoded.data.len(), 8);
        assert_eq!(decoded.data[3], 255);
        assert_eq!(decoded.data[7], 255);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(ImageData::from_bytes(b"definitely not an image").is_err());
    }
}
