use std::error::Error;
use std::marker::PhantomData;

use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::ui::controller::UiController;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::render_params::RenderParameters;
use crate::core::ports::compute_module::ComputeModuleLoader;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiView;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self { presenter_factory, _phantom: PhantomData }
    }

    /// Loads the compute module, opens the window and runs until the window
    /// is closed. A load failure returns before any window exists.
    pub fn execute<L: ComputeModuleLoader>(
        &self,
        loader: &L,
        canvas: CanvasSize,
        initial: RenderParameters,
    ) -> Result<(), Box<dyn Error>> {
        let controller = UiController::initialize(loader, GuiView::new(initial), canvas)?;
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Colour Square")
                .with_inner_size(LogicalSize::new(canvas.width() as f64, canvas.height() as f64))
                .with_min_inner_size(LogicalSize::new(100.0, 100.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, canvas)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut redraw_pending = true;

        info!(width = canvas.width(), height = canvas.height(), "window opened");

        event_loop.run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // Forward event to egui first
                    let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                    if egui_repaint {
                        redraw_pending = true;
                    }

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            let egui_output = app.update_ui(window);

                            app.egui_state.handle_platform_output(
                                window,
                                egui_output.platform_output.clone(),
                            );

                            if egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero())
                            {
                                redraw_pending = true;
                            }

                            if let Err(e) = app.render(egui_output) {
                                error!("render error: {e}");
                                elwt.exit();
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } if !egui_consumed => {
                            if app.pointer_moved((position.x as f32, position.y as f32)) {
                                redraw_pending = true;
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
