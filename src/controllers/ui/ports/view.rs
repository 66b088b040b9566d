use crate::controllers::ui::elements::{LabelId, SliderId};
use crate::core::data::pixel_buffer::PixelBuffer;

/// The page surface the controller reads from and writes to.
pub trait ColourSquareViewPort {
    fn slider_value(&self, slider: SliderId) -> u8;
    fn set_label(&mut self, label: LabelId, text: &str);
    fn put_image_data(&mut self, image: &PixelBuffer);
}
