use std::collections::HashMap;

use tracing::trace;

use crate::adapters::pixel_format::flatten_rgba_over_white;
use crate::controllers::ui::elements::{LabelId, SliderId};
use crate::controllers::ui::ports::view::ColourSquareViewPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParameters;

/// View state shown by the egui panel and the pixels framebuffer.
pub struct GuiView {
    sliders: RenderParameters,
    labels: HashMap<LabelId, String>,
    frame: Vec<u8>,
    frame_dirty: bool,
    pub last_error_message: Option<String>,
}

impl GuiView {
    #[must_use]
    pub fn new(sliders: RenderParameters) -> Self {
        Self {
            sliders,
            labels: HashMap::new(),
            frame: Vec::new(),
            frame_dirty: false,
            last_error_message: None,
        }
    }

    pub fn set_slider(&mut self, slider: SliderId, value: u8) {
        trace!(element = slider.element_id(), value, "slider moved");
        match slider {
            SliderId::Red => self.sliders.red = value,
            SliderId::Alpha => self.sliders.alpha = value,
        }
    }

    #[must_use]
    pub fn label(&self, label: LabelId) -> &str {
        self.labels.get(&label).map_or("", String::as_str)
    }

    /// Returns the flattened frame once after each new image.
    pub fn take_frame(&mut self) -> Option<&[u8]> {
        if !self.frame_dirty {
            return None;
        }

        self.frame_dirty = false;
        Some(&self.frame)
    }
}

impl ColourSquareViewPort for GuiView {
    fn slider_value(&self, slider: SliderId) -> u8 {
        match slider {
            SliderId::Red => self.sliders.red,
            SliderId::Alpha => self.sliders.alpha,
        }
    }

    fn set_label(&mut self, label: LabelId, text: &str) {
        self.labels.insert(label, text.to_string());
    }

    fn put_image_data(&mut self, image: &PixelBuffer) {
        self.frame.resize(image.capacity(), 0);
        flatten_rgba_over_white(image.buffer(), &mut self.frame);
        self.frame_dirty = true;
        self.last_error_message = None;
    }
}
