use std::path::Path;

use tracing::info;

use crate::controllers::cli::snapshot_view::SnapshotView;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ui::controller::UiController;
use crate::controllers::ui::errors::ControllerError;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParameters;
use crate::core::ports::compute_module::ComputeModuleLoader;

/// Renders a single colour square without a window and hands it to a file
/// presenter.
pub struct CliSnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliSnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate<L: ComputeModuleLoader>(
        &mut self,
        loader: &L,
        canvas: CanvasSize,
        params: RenderParameters,
    ) -> Result<(), ControllerError> {
        info!(
            width = canvas.width(),
            height = canvas.height(),
            red = params.red,
            alpha = params.alpha,
            "rendering colour square"
        );

        let controller = UiController::initialize(loader, SnapshotView::new(params), canvas)?;

        if let Some(duration) = controller.last_render_duration() {
            info!(?duration, "render finished");
        }

        self.buffer = Some(controller.pixel_buffer().clone());

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!(path = %filepath.as_ref().display(), "saved colour square");
        }

        Ok(())
    }
}
