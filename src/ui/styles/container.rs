// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Page background behind the grid.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Sidebar and elements bar: page background with a right-hand divider look.
pub fn sidebar(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Raised panel surface used by section cards, the settings panel and the
/// edit view's side column.
pub fn panel(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Modal dialog surface (upload dialog, delete confirmation).
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        ..panel(theme)
    }
}

/// Placeholder rectangle standing in for a thumbnail or variant preview.
pub fn thumbnail(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_raised)),
        text_color: Some(scheme.text_secondary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small pill label (categories, ratios, "Template").
pub fn badge(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_raised)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Accent pill ("Template" marker in the edit header).
pub fn accent_badge(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.accent)),
        text_color: Some(scheme.on_accent),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind overlays.
pub fn scrim(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).scrim)),
        ..Default::default()
    }
}

/// Selected variant row in the edit view.
pub fn selected_row(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_raised)),
        border: Border {
            color: scheme.accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
