//! Color themes for the viewer.

use ratatui::style::Color;

/// Point fill matching the original paint spec (deep sky blue).
const POINT_FILL: Color = Color::Rgb(0, 191, 255);

/// Theme palette applied across all widgets.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Map canvas background.
    pub background: Color,
    /// Base map landmass color.
    pub base_map: Color,
    /// Site point color.
    pub point: Color,
    /// Selected site highlight color.
    pub point_selected: Color,
    /// Header bar foreground.
    pub header_fg: Color,
    /// Header bar background.
    pub header_bg: Color,
    /// Footer help text color.
    pub footer_fg: Color,
    /// Year slider gauge color.
    pub slider: Color,
}

impl Theme {
    /// Dark base map, the viewer default.
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            base_map: Color::DarkGray,
            point: POINT_FILL,
            point_selected: Color::White,
            header_fg: Color::White,
            header_bg: Color::DarkGray,
            footer_fg: Color::DarkGray,
            slider: Color::Cyan,
        }
    }

    /// Light base map.
    pub fn light() -> Self {
        Self {
            background: Color::White,
            base_map: Color::Gray,
            point: Color::Blue,
            point_selected: Color::Black,
            header_fg: Color::Black,
            header_bg: Color::Gray,
            footer_fg: Color::Gray,
            slider: Color::Blue,
        }
    }

    /// Resolves a configured theme name; unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        if name == "light" {
            Self::light()
        } else {
            Self::dark()
        }
    }
}
