// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Lime call-to-action button ("Save Changes", "Upload").
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(scheme.accent)),
            text_color: scheme.on_accent,
            border: Border {
                color: scheme.accent,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ACCENT_300)),
            text_color: scheme.on_accent,
            border: Border {
                color: palette::ACCENT_300,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(&scheme),
    }
}

/// Outlined secondary button ("Cancel", "Upload Asset").
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    let background = match status {
        button::Status::Hovered => Some(Background::Color(scheme.surface_raised)),
        button::Status::Pressed => Some(Background::Color(scheme.border)),
        _ => Some(Background::Color(scheme.surface)),
    };

    match status {
        button::Status::Disabled => disabled_style(&scheme),
        _ => button::Style {
            background,
            text_color: scheme.text_primary,
            border: Border {
                color: scheme.border,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless button that only shows a background on hover (links, icons).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(scheme.surface))
            }
            _ => None,
        },
        text_color: match status {
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..scheme.text_secondary
            },
            _ => scheme.text_primary,
        },
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Destructive action ("Delete" in the confirmation prompt).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Disabled => return disabled_style(&scheme),
        _ => opacity::OPAQUE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::ERROR_500
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style pour bouton désactivé (grisé, sans action).
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| disabled_style(&ColorScheme::for_theme(theme))
}

fn disabled_style(scheme: &ColorScheme) -> button::Style {
    button::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..scheme.text_secondary
        },
        border: Border {
            color: scheme.border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Sidebar navigation entry; `selected` entries get a raised background.
pub fn nav_item(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let background = if selected {
            Some(Background::Color(scheme.surface_raised))
        } else if matches!(status, button::Status::Hovered | button::Status::Pressed) {
            Some(Background::Color(scheme.surface))
        } else {
            None
        };

        button::Style {
            background,
            text_color: if selected {
                scheme.text_primary
            } else {
                scheme.text_secondary
            },
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Pill-shaped toggle chip used by the aspect filters and view-mode switch.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let (background, text_color, border_color) = if selected {
            (scheme.accent, scheme.on_accent, scheme.accent)
        } else if matches!(status, button::Status::Hovered) {
            (scheme.surface_raised, scheme.text_primary, scheme.border)
        } else {
            (scheme.surface, scheme.text_secondary, scheme.border)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Invisible button wrapping a whole card or list row.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.accent,
        _ => scheme.border,
    };

    button::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: scheme.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_accent_background() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ACCENT_500))
        );
    }

    #[test]
    fn primary_disabled_is_not_accent() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        assert_ne!(
            style.background,
            Some(Background::Color(palette::ACCENT_500))
        );
    }

    #[test]
    fn selected_chip_differs_from_unselected() {
        let on = chip(true)(&Theme::Dark, button::Status::Active);
        let off = chip(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(on.background, off.background);
    }

    #[test]
    fn unselected_nav_item_is_transparent_until_hovered() {
        let idle = nav_item(false)(&Theme::Dark, button::Status::Active);
        let hovered = nav_item(false)(&Theme::Dark, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }
}
