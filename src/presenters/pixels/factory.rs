use winit::window::Window;

use crate::core::data::canvas_size::CanvasSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window, canvas: CanvasSize) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, canvas)
    }
}
