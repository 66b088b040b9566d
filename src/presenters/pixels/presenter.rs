use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pointer_position::PointerPosition;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use tracing::warn;
use winit::window::Window;

/// Shows the canvas through a pixels framebuffer with the egui panel on top.
///
/// The framebuffer keeps the canvas dimensions; window resizes only change
/// the surface and pixels scales the canvas into it.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    has_frame: bool,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, canvas: CanvasSize) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(canvas.width(), canvas.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
            has_frame: false,
        })
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
        frame: Option<&[u8]>,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if let Some(frame) = frame {
            self.copy_frame(frame);
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the canvas underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(e) = self.pixels.resize_surface(width, height) {
            warn!("failed to resize surface to {width}x{height}: {e}");
        }
    }

    fn window_pos_to_canvas(&self, physical_position: (f32, f32)) -> Option<PointerPosition> {
        self.pixels
            .window_pos_to_pixel(physical_position)
            .ok()
            .map(|(x, y)| PointerPosition {
                x: x as u32,
                y: y as u32,
            })
    }
}

impl PixelsPresenter {
    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[255, 255, 255, 255]);
        }
    }

    fn copy_frame(&mut self, frame: &[u8]) {
        let dest = self.pixels.frame_mut();

        if dest.len() != frame.len() {
            warn!(
                "frame length {} does not match framebuffer length {}",
                frame.len(),
                dest.len()
            );
            return;
        }

        dest.copy_from_slice(frame);
        self.has_frame = true;
    }
}
