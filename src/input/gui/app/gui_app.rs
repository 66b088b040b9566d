use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::error;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::ui::controller::UiController;
use crate::controllers::ui::elements::{LabelId, SliderId};
use crate::controllers::ui::errors::ControllerError;
use crate::controllers::ui::ports::view::ColourSquareViewPort;
use crate::core::ports::compute_module::ComputeModule;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiView;

const SLIDER_LABELS: &[(SliderId, &str)] = &[(SliderId::Red, "Red"), (SliderId::Alpha, "Alpha")];

pub struct GuiApp<P: GuiPresenterPort, M: ComputeModule> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: P,
    pub controller: UiController<M, GuiView>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort, M: ComputeModule> GuiApp<P, M> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: P,
        controller: UiController<M, GuiView>,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        let frame = self.controller.view_mut().take_frame();
        self.presenter.render(egui_output, &self.egui_ctx, frame)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.presenter.resize(width, height);
    }

    /// Forwards a cursor position to the controller when it is over the canvas.
    ///
    /// Returns true when the coordinate labels changed.
    pub fn pointer_moved(&mut self, physical_position: (f32, f32)) -> bool {
        match self.presenter.window_pos_to_canvas(physical_position) {
            Some(position) => {
                self.controller.on_pointer_move(position);
                true
            }
            None => false,
        }
    }

    pub fn slider_changed(&mut self, slider: SliderId, value: u8) {
        self.controller.view_mut().set_slider(slider, value);

        let result = match slider {
            SliderId::Red => self.controller.on_red_changed(value),
            SliderId::Alpha => self.controller.on_alpha_changed(value),
        };

        self.report(result);
    }

    fn report(&mut self, result: Result<(), ControllerError>) {
        if let Err(e) = result {
            error!("render failed: {e}");
            self.controller.view_mut().last_error_message = Some(e.to_string());
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let egui_ctx = self.egui_ctx.clone();
        let mut changes = Vec::new();

        let output = egui_ctx.run(raw_input, |ctx| {
            let view = self.controller.view();

            egui::Window::new("Colour Square")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .show(ctx, |ui| {
                    for &(slider, name) in SLIDER_LABELS {
                        let mut value = view.slider_value(slider);

                        ui.horizontal(|ui| {
                            ui.label(name);
                            if ui.add(egui::Slider::new(&mut value, 0..=255)).changed() {
                                changes.push((slider, value));
                            }
                        });
                    }

                    ui.separator();

                    for &label in LabelId::ALL {
                        ui.horizontal(|ui| {
                            ui.label(format!("{}:", label.display_name()));
                            ui.monospace(view.label(label));
                        });
                    }

                    if let Some(message) = &view.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        for (slider, value) in changes {
            self.slider_changed(slider, value);
        }

        output
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
