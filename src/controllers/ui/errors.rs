use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::envelope::EnvelopeError;
use crate::core::ports::compute_module::ComputeModuleError;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Module(#[from] ComputeModuleError),
    #[error("invalid result envelope: {0}")]
    Envelope(#[from] EnvelopeError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}
