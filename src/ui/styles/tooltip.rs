// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the surrounding theme (light bubble on the dark dashboard)
//! so that hints on disabled controls stay readable.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Style for the tooltip bubble.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    let inverted = if scheme == ColorScheme::dark() {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    };

    container::Style {
        background: Some(Background::Color(inverted.surface)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: inverted.border,
        },
        shadow: shadow::MD,
        text_color: Some(inverted.text_primary),
        ..Default::default()
    }
}

/// Wraps `content` in a styled tooltip showing `tip`.
///
/// ```ignore
/// use crate::ui::styles::tooltip;
///
/// tooltip::styled(delete_button, "Cannot delete last remaining variant", tooltip::Position::Top)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_container_has_background_and_text_color() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = tooltip_container(&theme);
            assert!(style.background.is_some());
            assert!(style.text_color.is_some());
        }
    }

    #[test]
    fn dark_theme_uses_light_tooltip() {
        let style = tooltip_container(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r > 0.5);
    }

    #[test]
    fn light_theme_uses_dark_tooltip() {
        let style = tooltip_container(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r < 0.5);
    }
}
