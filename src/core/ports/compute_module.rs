use std::path::PathBuf;
use thiserror::Error;

/// Name of the exported render entry point.
pub const EXPORT_GET_COLOUR_SQUARE: &str = "getColourSquare";
/// Name of the exported linear memory.
pub const EXPORT_MEMORY: &str = "memory";

#[derive(Debug, Error)]
pub enum ComputeModuleError {
    #[error("failed to read compute module {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to compile compute module: {message}")]
    Compile { message: String },
    #[error("failed to instantiate compute module: {message}")]
    Instantiate { message: String },
    #[error("compute module does not export `{name}` with the expected type: {message}")]
    MissingExport { name: &'static str, message: String },
    #[error("`getColourSquare` trapped: {message}")]
    Trap { message: String },
    #[error("canvas width {width} does not fit the module's i32 parameter")]
    WidthOutOfRange { width: u32 },
    #[error("a {width}x{width} colour square does not fit a 32-bit length prefix")]
    SquareTooLarge { width: u32 },
}

/// The external colour-square module.
///
/// A call to [`ComputeModule::get_colour_square`] leaves a length-prefixed RGBA
/// buffer at offset 0 of [`ComputeModule::memory`]. The buffer is only valid
/// until the next call.
pub trait ComputeModule {
    fn get_colour_square(&mut self, width: u32, red: u8, alpha: u8) -> Result<(), ComputeModuleError>;
    fn memory(&self) -> &[u8];
}

/// Produces a ready-to-use [`ComputeModule`].
pub trait ComputeModuleLoader {
    type Module: ComputeModule;

    fn load(&self) -> Result<Self::Module, ComputeModuleError>;
}
