//! Command-line configuration shared by the headless and GUI binaries.

use std::path::PathBuf;

use clap::Parser;

use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::render_params::RenderParameters;

pub const DEFAULT_MODULE_PATH: &str = "./wasm_lib/colour_map.wasm";
pub const DEFAULT_OUTPUT_PATH: &str = "output/colour_square.ppm";

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Render a colour square with a WebAssembly compute module")]
pub struct AppConfig {
    /// Path to the compiled colour square module.
    #[arg(long, default_value = DEFAULT_MODULE_PATH)]
    pub module: PathBuf,

    /// Use the built-in reference module instead of loading a wasm file.
    #[arg(long)]
    pub reference: bool,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Initial red slider value.
    #[arg(long, default_value_t = 128)]
    pub red: u8,

    /// Initial alpha slider value.
    #[arg(long, default_value_t = 255)]
    pub alpha: u8,

    /// Where the headless renderer writes its PPM image.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Enable debug logging unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    pub fn canvas(&self) -> Result<CanvasSize, CanvasSizeError> {
        CanvasSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn initial_params(&self) -> RenderParameters {
        RenderParameters::new(self.red, self.alpha)
    }
}
