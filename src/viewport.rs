pub const DEFAULT_MAP_BREAKPOINT: f64 = 768.0;

const MAP_MOBILE_IMAGE: &str = "/assets/maps/map-mobile.webp";
const MAP_DESKTOP_IMAGE: &str = "/assets/maps/map-web.webp";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }

    pub fn map_image(self) -> &'static str {
        match self {
            Self::Narrow => MAP_MOBILE_IMAGE,
            Self::Wide => MAP_DESKTOP_IMAGE,
        }
    }
}

/// The map section's view of the window width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    breakpoint: f64,
    class: ViewportClass,
}

impl ViewportState {
    /// Classifies once from the width observed at construction.
    pub fn new(width: f64, breakpoint: f64) -> Self {
        Self {
            breakpoint,
            class: ViewportClass::classify(width, breakpoint),
        }
    }

    pub fn on_resize(self, width: f64) -> Self {
        Self {
            class: ViewportClass::classify(width, self.breakpoint),
            ..self
        }
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }
}
