use serde::{Deserialize, Serialize};

/// Vertical scroll offset, in pixels, past which the header turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 40.0;

const HEADER_BASE_CLASS: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-500";

/// Header background state driven by the page scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollState {
    #[default]
    Top,
    Scrolled,
}

impl ScrollState {
    /// Strictly greater than the threshold counts as scrolled.
    pub fn from_offset(offset_y: f64) -> Self {
        if offset_y > SCROLL_THRESHOLD_PX {
            ScrollState::Scrolled
        } else {
            ScrollState::Top
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == ScrollState::Scrolled
    }

    pub fn header_class(self) -> String {
        let background = match self {
            ScrollState::Top => "bg-transparent",
            ScrollState::Scrolled => "bg-emerald-950/95 backdrop-blur-md shadow-lg shadow-emerald-900/30",
        };
        format!("{} {}", HEADER_BASE_CLASS, background)
    }
}

/// What an image slot shows. Once an image fails it stays on the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageDisplay {
    #[default]
    Image,
    Fallback,
}

impl ImageDisplay {
    pub fn on_error(self) -> Self {
        ImageDisplay::Fallback
    }

    pub fn shows_image(self) -> bool {
        self == ImageDisplay::Image
    }
}

pub fn copyright_line(year: i32, legal_name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, legal_name)
}
