mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub mod config;
pub mod logging;

pub use adapters::wasmtime_module::{WasmColourSquareModule, WasmFileLoader};
pub use controllers::cli::snapshot::CliSnapshotController;
pub use controllers::cli::snapshot_view::SnapshotView;
pub use controllers::ui::controller::UiController;
pub use controllers::ui::elements::{LabelId, SliderId};
pub use controllers::ui::errors::ControllerError;
pub use controllers::ui::ports::view::ColourSquareViewPort;
pub use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pointer_position::PointerPosition;
pub use crate::core::data::render_params::RenderParameters;
pub use crate::core::envelope::{EnvelopeError, copy_result_bytes, read_length_prefix};
pub use crate::core::modules::reference::{ReferenceColourSquare, ReferenceColourSquareLoader};
pub use crate::core::ports::compute_module::{ComputeModule, ComputeModuleError, ComputeModuleLoader};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::{factory::PixelsPresenterFactory, presenter::PixelsPresenter};
