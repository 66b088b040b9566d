/// Pointer offset relative to the top-left corner of the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: u32,
    pub y: u32,
}
