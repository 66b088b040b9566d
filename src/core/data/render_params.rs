/// Slider values for one render call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderParameters {
    pub red: u8,
    pub alpha: u8,
}

impl RenderParameters {
    #[must_use]
    pub fn new(red: u8, alpha: u8) -> Self {
        Self { red, alpha }
    }
}
