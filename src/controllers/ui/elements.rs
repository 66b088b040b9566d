/// Slider inputs feeding the render parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SliderId {
    Red,
    Alpha,
}

impl SliderId {
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Red => "redSlider",
            Self::Alpha => "alphaSlider",
        }
    }
}

/// Text elements written by the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LabelId {
    RedValue,
    AlphaValue,
    /// Horizontal pointer offset.
    GreenValue,
    /// Vertical pointer offset.
    BlueValue,
    RenderTime,
}

impl LabelId {
    pub const ALL: &'static [LabelId] = &[
        LabelId::RedValue,
        LabelId::AlphaValue,
        LabelId::GreenValue,
        LabelId::BlueValue,
        LabelId::RenderTime,
    ];

    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::RedValue => "redValue",
            Self::AlphaValue => "alphaValue",
            Self::GreenValue => "greenValue",
            Self::BlueValue => "blueValue",
            Self::RenderTime => "renderTime",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::RedValue => "Red",
            Self::AlphaValue => "Alpha",
            Self::GreenValue => "Green (x)",
            Self::BlueValue => "Blue (y)",
            Self::RenderTime => "Render time",
        }
    }
}
