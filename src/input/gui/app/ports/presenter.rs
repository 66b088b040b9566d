use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pointer_position::PointerPosition;

pub trait GuiPresenterPort {
    fn new(window: &'static Window, canvas: CanvasSize) -> Result<Self, pixels::Error>
    where
        Self: Sized;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext, frame: Option<&[u8]>) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
    /// Maps a physical window position to canvas pixel coordinates.
    fn window_pos_to_canvas(&self, physical_position: (f32, f32)) -> Option<PointerPosition>;
}
