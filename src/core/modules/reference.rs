use rayon::prelude::*;

use crate::core::data::canvas_size::BYTES_PER_PIXEL;
use crate::core::envelope::write_envelope;
use crate::core::ports::compute_module::{ComputeModule, ComputeModuleError, ComputeModuleLoader};

/// Native colour-square generator with the same contract as the wasm module.
///
/// Renders a `width` x `width` square where pixel (x, y) is
/// `[red, 256 * x / width, 256 * y / width, alpha]`. Green grows left to
/// right and blue grows top to bottom.
#[derive(Debug, Default)]
pub struct ReferenceColourSquare {
    memory: Vec<u8>,
}

impl ReferenceColourSquare {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn gradient(position: usize, width: usize) -> u8 {
    ((position * 256) / width) as u8
}

impl ComputeModule for ReferenceColourSquare {
    fn get_colour_square(&mut self, width: u32, red: u8, alpha: u8) -> Result<(), ComputeModuleError> {
        let side = width as usize;
        let row_bytes = side
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(ComputeModuleError::SquareTooLarge { width })?;
        let payload_len = row_bytes
            .checked_mul(side)
            .ok_or(ComputeModuleError::SquareTooLarge { width })?;
        let payload = write_envelope(&mut self.memory, payload_len)
            .map_err(|_| ComputeModuleError::SquareTooLarge { width })?;

        if side == 0 {
            return Ok(());
        }

        payload
            .par_chunks_exact_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                let blue = gradient(y, side);

                for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                    pixel[0] = red;
                    pixel[1] = gradient(x, side);
                    pixel[2] = blue;
                    pixel[3] = alpha;
                }
            });

        Ok(())
    }

    fn memory(&self) -> &[u8] {
        &self.memory
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceColourSquareLoader;

impl ComputeModuleLoader for ReferenceColourSquareLoader {
    type Module = ReferenceColourSquare;

    fn load(&self) -> Result<Self::Module, ComputeModuleError> {
        tracing::info!("using built-in reference colour square module");
        Ok(ReferenceColourSquare::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::envelope::{copy_result_bytes, read_length_prefix};

    fn pixel(data: &[u8], width: usize, x: usize, y: usize) -> &[u8] {
        let index = (y * width + x) * BYTES_PER_PIXEL;
        &data[index..index + BYTES_PER_PIXEL]
    }

    #[test]
    fn test_length_prefix_covers_square() {
        let mut module = ReferenceColourSquare::new();

        module.get_colour_square(8, 0, 0).unwrap();

        assert_eq!(read_length_prefix(module.memory()), Ok(8 * 8 * 4));
        assert_eq!(module.memory().len(), 4 + 8 * 8 * 4);
    }

    #[test]
    fn test_pixels_follow_gradients() {
        let mut module = ReferenceColourSquare::new();
        module.get_colour_square(4, 17, 200).unwrap();
        let data = copy_result_bytes(module.memory(), 64).unwrap();

        assert_eq!(pixel(&data, 4, 0, 0), &[17, 0, 0, 200]);
        assert_eq!(pixel(&data, 4, 1, 0), &[17, 64, 0, 200]);
        assert_eq!(pixel(&data, 4, 0, 2), &[17, 0, 128, 200]);
        assert_eq!(pixel(&data, 4, 3, 3), &[17, 192, 192, 200]);
    }

    #[test]
    fn test_large_square_stays_within_byte_range() {
        let mut module = ReferenceColourSquare::new();
        module.get_colour_square(300, 1, 2).unwrap();
        let data = copy_result_bytes(module.memory(), 300 * 300 * 4).unwrap();

        assert_eq!(pixel(&data, 300, 299, 299), &[1, 255, 255, 2]);
    }

    #[test]
    fn test_rerender_replaces_previous_envelope() {
        let mut module = ReferenceColourSquare::new();
        module.get_colour_square(16, 0, 0).unwrap();
        module.get_colour_square(2, 5, 6).unwrap();

        assert_eq!(read_length_prefix(module.memory()), Ok(16));
        assert_eq!(module.memory().len(), 20);
    }

    #[test]
    fn test_width_beyond_length_prefix_is_rejected_without_allocating() {
        let mut module = ReferenceColourSquare::new();
        module.get_colour_square(2, 1, 1).unwrap();
        let before = module.memory().to_vec();

        let result = module.get_colour_square(32_768, 0, 0);

        assert!(matches!(
            result,
            Err(ComputeModuleError::SquareTooLarge { width: 32_768 })
        ));
        assert_eq!(module.memory(), before.as_slice());
        assert!(module.memory.capacity() < 1024);
    }

    #[test]
    fn test_huge_width_is_rejected() {
        let mut module = ReferenceColourSquare::new();

        let result = module.get_colour_square(40_000, 0, 0);

        assert!(matches!(
            result,
            Err(ComputeModuleError::SquareTooLarge { width: 40_000 })
        ));
    }

    #[test]
    fn test_zero_width_writes_empty_envelope() {
        let mut module = ReferenceColourSquare::new();

        module.get_colour_square(0, 0, 0).unwrap();

        assert_eq!(module.memory(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut module = ReferenceColourSquare::new();
        module.get_colour_square(32, 90, 45).unwrap();
        let first = module.memory().to_vec();
        module.get_colour_square(32, 90, 45).unwrap();

        assert_eq!(module.memory(), first.as_slice());
    }
}
