use thiserror::Error;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CanvasSizeError {
    #[error("canvas size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Pixel dimensions of the drawing canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasSizeError> {
        if width == 0 || height == 0 {
            return Err(CanvasSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}
