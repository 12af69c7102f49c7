//! Theme and color palette definitions for the terminal UI.

use ratatui::style::{Color, palette::tailwind};
use strum::{Display, EnumIter, EnumString};

/// Color palette derived from the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub buffer_bg: Color,
    pub header_text: Color,
    pub text: Color,
    pub border_color: Color,
    pub selected_border: Color,
    pub badge_bg: Color,
    pub badge_fg: Color,
    pub accent: Color,
    pub light_gray: Color,
    pub gray: Color,
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        if true_color_enabled {
            Self {
                buffer_bg: tailwind::SLATE.c950,
                header_text: color.c500,
                text: tailwind::SLATE.c200,
                border_color: tailwind::SLATE.c600,
                selected_border: color.c400,
                badge_bg: color.c600,
                badge_fg: tailwind::WHITE,
                accent: color.c400,
                light_gray: tailwind::SLATE.c400,
                gray: tailwind::SLATE.c700,
            }
        } else {
            Self {
                buffer_bg: Color::Black,
                header_text: color.c500,
                text: Color::White,
                border_color: Color::DarkGray,
                selected_border: color.c400,
                badge_bg: color.c600,
                badge_fg: Color::Black,
                accent: color.c400,
                light_gray: Color::Gray,
                gray: Color::DarkGray,
            }
        }
    }
}

/// Available color themes for the application.
#[derive(
    Debug,
    Default,
    Eq,
    PartialEq,
    Copy,
    Clone,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    Blue,
    #[default]
    Emerald,
    Indigo,
    Red,
}

// Fallback palettes for terminals without true color support.
const BASIC_BLUE_PALLETE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightCyan,
    c100: Color::LightCyan,
    c200: Color::LightCyan,
    c300: Color::LightCyan,
    c400: Color::LightCyan,
    c500: Color::Cyan,
    c600: Color::Cyan,
    c700: Color::Cyan,
    c800: Color::Cyan,
    c900: Color::Cyan,
    c950: Color::Cyan,
};

const BASIC_RED_PALLETE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightRed,
    c100: Color::LightRed,
    c200: Color::LightRed,
    c300: Color::LightRed,
    c400: Color::LightRed,
    c500: Color::Red,
    c600: Color::Red,
    c700: Color::Red,
    c800: Color::Red,
    c900: Color::Red,
    c950: Color::Red,
};

const BASIC_GREEN_PALLETE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightGreen,
    c100: Color::LightGreen,
    c200: Color::LightGreen,
    c300: Color::LightGreen,
    c400: Color::LightGreen,
    c500: Color::Green,
    c600: Color::Green,
    c700: Color::Green,
    c800: Color::Green,
    c900: Color::Green,
    c950: Color::Green,
};

const BASIC_MAGENTA_PALLETE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightMagenta,
    c100: Color::LightMagenta,
    c200: Color::LightMagenta,
    c300: Color::LightMagenta,
    c400: Color::LightMagenta,
    c500: Color::Magenta,
    c600: Color::Magenta,
    c700: Color::Magenta,
    c800: Color::Magenta,
    c900: Color::Magenta,
    c950: Color::Magenta,
};

impl Theme {
    /// Parses a theme from its name (case insensitive), falling back to the
    /// default theme for unknown names.
    pub fn from_string(value: &str) -> Theme {
        value.parse::<Theme>().unwrap_or_else(|_| {
            log::warn!("unknown theme {value}, using {}", Theme::default());
            Theme::default()
        })
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(
        self,
        true_color_enabled: bool,
    ) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_BLUE_PALLETE,
                Theme::Red => &BASIC_RED_PALLETE,
                Theme::Indigo => &BASIC_MAGENTA_PALLETE,
                Theme::Emerald => &BASIC_GREEN_PALLETE,
            }
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
