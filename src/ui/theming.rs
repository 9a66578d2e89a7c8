// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the dashboard color schemes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Surface and text colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub accent: Color,
    pub on_accent: Color,

    // Overlay colors
    pub scrim: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            surface: palette::GRAY_100,
            surface_raised: palette::GRAY_200,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_950,
            text_secondary: palette::GRAY_700,

            accent: palette::ACCENT_700,
            on_accent: palette::GRAY_950,

            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Dark theme (Dark mode), the dashboard's native look.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::GRAY_950,
            surface: palette::GRAY_900,
            surface_raised: palette::GRAY_800,
            border: palette::GRAY_700,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_400,

            accent: palette::ACCENT_500,
            on_accent: palette::GRAY_950,

            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Picks the scheme matching an Iced theme's background luminance.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let bg = theme.extended_palette().background.base.color;
        if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Returns the Iced theme to render with.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
