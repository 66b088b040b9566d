use std::collections::HashMap;

use tracing::trace;

use crate::controllers::ui::elements::{LabelId, SliderId};
use crate::controllers::ui::ports::view::ColourSquareViewPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParameters;

/// Headless view that keeps labels and the last submitted image in memory.
#[derive(Debug, Clone)]
pub struct SnapshotView {
    sliders: RenderParameters,
    labels: HashMap<LabelId, String>,
    image: Option<PixelBuffer>,
    images_submitted: usize,
}

impl SnapshotView {
    #[must_use]
    pub fn new(sliders: RenderParameters) -> Self {
        Self {
            sliders,
            labels: HashMap::new(),
            image: None,
            images_submitted: 0,
        }
    }

    pub fn set_slider(&mut self, slider: SliderId, value: u8) {
        match slider {
            SliderId::Red => self.sliders.red = value,
            SliderId::Alpha => self.sliders.alpha = value,
        }
    }

    #[must_use]
    pub fn label(&self, label: LabelId) -> Option<&str> {
        self.labels.get(&label).map(String::as_str)
    }

    #[must_use]
    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn images_submitted(&self) -> usize {
        self.images_submitted
    }
}

impl ColourSquareViewPort for SnapshotView {
    fn slider_value(&self, slider: SliderId) -> u8 {
        match slider {
            SliderId::Red => self.sliders.red,
            SliderId::Alpha => self.sliders.alpha,
        }
    }

    fn set_label(&mut self, label: LabelId, text: &str) {
        trace!(element = label.element_id(), text, "label updated");
        self.labels.insert(label, text.to_string());
    }

    fn put_image_data(&mut self, image: &PixelBuffer) {
        self.image = Some(image.clone());
        self.images_submitted += 1;
    }
}
