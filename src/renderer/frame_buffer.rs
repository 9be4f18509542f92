use crate::color::Color;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// RGBA frame buffer for rendering
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>, // RGBA, 4 bytes per pixel
}

impl FrameBuffer {
    /// Create new frame buffer with given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height * 4) as usize;
        Self {
            width,
            height,
            pixels: vec![0; size],
        }
    }

    /// Clear buffer with color
    pub fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color.as_bytes());
        }
    }

    /// Set pixel at position
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            self.pixels[idx..idx + 4].copy_from_slice(&color.as_bytes());
        }
    }

    /// Get pixel at position
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            let p = &self.pixels[idx..idx + 4];
            Some(Color::rgba(p[0], p[1], p[2], p[3]))
        } else {
            None
        }
    }

    /// Blend a color onto the buffer at position, scaled by `coverage`
    /// in [0, 1]. Used for antialiased shape edges.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let Some(bg) = self.get_pixel(x, y) else {
            return;
        };

        let alpha = (color.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let inv_alpha = 1.0 - alpha;

        let blended = Color::rgba(
            (color.r as f32 * alpha + bg.r as f32 * inv_alpha) as u8,
            (color.g as f32 * alpha + bg.g as f32 * inv_alpha) as u8,
            (color.b as f32 * alpha + bg.b as f32 * inv_alpha) as u8,
            255, // Output alpha is always opaque
        );

        self.set_pixel(x, y, blended);
    }

    /// Get buffer dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get raw pixel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Save as PPM (simple image format)
    pub fn save_ppm(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create frame file: {}", path.display()))?;
        let mut writer = std::io::BufWriter::new(file);

        // PPM header
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        // Write RGB data (skip alpha channel)
        for chunk in self.pixels.chunks_exact(4) {
            writer.write_all(&chunk[0..3])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Save as PNG
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .context("Frame buffer size mismatch")?;
        img.save(path)
            .with_context(|| format!("Failed to save frame: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_buffer_creation() {
        let fb = FrameBuffer::new(1920, 1080);
        assert_eq!(fb.dimensions(), (1920, 1080));
        assert_eq!(fb.pixels.len(), 1920 * 1080 * 4);
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new(100, 100);
        fb.clear(Color::rgb(255, 0, 0));

        assert_eq!(fb.get_pixel(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(fb.get_pixel(50, 50), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = FrameBuffer::new(100, 100);
        fb.set_pixel(10, 20, Color::rgb(100, 150, 200));

        assert_eq!(fb.get_pixel(10, 20), Some(Color::rgb(100, 150, 200)));
        assert_eq!(fb.get_pixel(100, 100), None); // Out of bounds
    }

    #[test]
    fn test_alpha_blending() {
        let mut fb = FrameBuffer::new(100, 100);
        fb.clear(Color::WHITE);

        // Blend 50% transparent red at full coverage
        fb.blend_pixel(50, 50, Color::rgba(255, 0, 0, 128), 1.0);

        let pixel = fb.get_pixel(50, 50).unwrap();
        // Should be approximately pink
        assert_eq!(pixel.r, 255);
        assert!(pixel.g > 120 && pixel.g < 135);
        assert!(pixel.b > 120 && pixel.b < 135);
    }

    #[test]
    fn test_coverage_scales_blend() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.clear(Color::BLACK);

        fb.blend_pixel(5, 5, Color::WHITE, 0.5);
        let pixel = fb.get_pixel(5, 5).unwrap();
        assert!(pixel.r > 120 && pixel.r < 135);

        // Zero coverage leaves the pixel untouched
        fb.blend_pixel(6, 6, Color::WHITE, 0.0);
        assert_eq!(fb.get_pixel(6, 6), Some(Color::rgba(0, 0, 0, 255)));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let mut fb = FrameBuffer::new(16, 16);
        fb.clear(Color::rgb(10, 20, 30));
        fb.save_png(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_save_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");

        let mut fb = FrameBuffer::new(4, 4);
        fb.clear(Color::WHITE);
        fb.save_ppm(&path).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert!(data.starts_with(b"P6\n4 4\n255\n"));
        assert_eq!(data.len(), 11 + 4 * 4 * 3);
    }
}
