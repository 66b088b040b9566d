pub mod canvas_size;
pub mod pixel_buffer;
pub mod pointer_position;
pub mod render_params;
