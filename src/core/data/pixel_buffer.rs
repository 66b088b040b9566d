use crate::core::data::canvas_size::CanvasSize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("{len} bytes do not fit into a pixel buffer of {capacity} bytes")]
    ExceedsCapacity { len: usize, capacity: usize },
    #[error("canvas size {width}x{height} requires {expected} bytes, got {actual}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// RGBA image data backing the canvas.
///
/// The dimensions are fixed at construction; renders only ever overwrite the
/// backing bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            buffer: vec![0; size.byte_len()],
        }
    }

    pub fn from_data(size: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        if size.byte_len() != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                width: size.width(),
                height: size.height(),
                expected: size.byte_len(),
                actual: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Copies `data` over the start of the buffer. Bytes past `data.len()`
    /// keep their previous value.
    pub fn overwrite(&mut self, data: &[u8]) -> Result<(), PixelBufferError> {
        let capacity = self.capacity();

        if data.len() > capacity {
            return Err(PixelBufferError::ExceedsCapacity {
                len: data.len(),
                capacity,
            });
        }

        self.buffer[..data.len()].copy_from_slice(data);
        Ok(())
    }
}
