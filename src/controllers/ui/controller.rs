use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::controllers::ui::elements::{LabelId, SliderId};
use crate::controllers::ui::errors::ControllerError;
use crate::controllers::ui::ports::view::ColourSquareViewPort;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pointer_position::PointerPosition;
use crate::core::data::render_params::RenderParameters;
use crate::core::envelope::copy_result_bytes;
use crate::core::ports::compute_module::{ComputeModule, ComputeModuleLoader};

/// Wires slider and pointer events to the compute module and the canvas.
///
/// Holds the handles established by [`UiController::initialize`] for the
/// lifetime of the page. Every event runs to completion before the next one
/// is handled.
pub struct UiController<M: ComputeModule, V: ColourSquareViewPort> {
    module: M,
    view: V,
    canvas: CanvasSize,
    pixel_buffer: PixelBuffer,
    last_params: Option<RenderParameters>,
    last_render_duration: Option<Duration>,
}

impl<M: ComputeModule, V: ColourSquareViewPort> UiController<M, V> {
    /// Loads the module, sizes the pixel buffer to the canvas and renders once
    /// with the sliders' current values.
    pub fn initialize<L>(loader: &L, view: V, canvas: CanvasSize) -> Result<Self, ControllerError>
    where
        L: ComputeModuleLoader<Module = M>,
    {
        let module = loader.load()?;
        let mut controller = Self::with_module(module, view, canvas);

        let red = controller.view.slider_value(SliderId::Red);
        let alpha = controller.view.slider_value(SliderId::Alpha);
        controller.render(red, alpha)?;

        Ok(controller)
    }

    /// Builds a controller around an already loaded module without rendering.
    pub fn with_module(module: M, view: V, canvas: CanvasSize) -> Self {
        Self {
            module,
            view,
            canvas,
            pixel_buffer: PixelBuffer::new(canvas),
            last_params: None,
            last_render_duration: None,
        }
    }

    pub fn on_red_changed(&mut self, red: u8) -> Result<(), ControllerError> {
        let alpha = self.view.slider_value(SliderId::Alpha);

        self.render(red, alpha)
    }

    pub fn on_alpha_changed(&mut self, alpha: u8) -> Result<(), ControllerError> {
        let red = self.view.slider_value(SliderId::Red);

        self.render(red, alpha)
    }

    /// Shows the pointer offset: x in the green label, y in the blue label.
    pub fn on_pointer_move(&mut self, position: PointerPosition) {
        self.view.set_label(LabelId::GreenValue, &position.x.to_string());
        self.view.set_label(LabelId::BlueValue, &position.y.to_string());
    }

    /// Renders one frame. The red and alpha labels only change once the new
    /// frame has been shown, so a failed render leaves them at the last
    /// displayed values.
    pub fn render(&mut self, red: u8, alpha: u8) -> Result<(), ControllerError> {
        let start = Instant::now();

        self.module.get_colour_square(self.canvas.width(), red, alpha)?;

        let bytes = copy_result_bytes(self.module.memory(), self.pixel_buffer.capacity())
            .inspect_err(|e| warn!(red, alpha, "rejected compute result: {e}"))?;

        self.pixel_buffer.overwrite(&bytes)?;
        self.view.put_image_data(&self.pixel_buffer);
        self.view.set_label(LabelId::RedValue, &red.to_string());
        self.view.set_label(LabelId::AlphaValue, &alpha.to_string());

        let elapsed = start.elapsed();
        self.view.set_label(LabelId::RenderTime, &format_duration(elapsed));
        self.last_params = Some(RenderParameters::new(red, alpha));
        self.last_render_duration = Some(elapsed);

        debug!(red, alpha, bytes = bytes.len(), ?elapsed, "rendered colour square");

        Ok(())
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixel_buffer
    }

    /// Parameters of the last successful render.
    #[must_use]
    pub fn last_params(&self) -> Option<RenderParameters> {
        self.last_params
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

fn format_duration(duration: Duration) -> String {
    format!("{:.2} ms", duration.as_secs_f64() * 1000.0)
}
