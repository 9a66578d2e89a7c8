// SPDX-License-Identifier: MPL-2.0
//! Asset tiles for the grid and rows for the list display mode.

use crate::domain::asset::Asset;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, text, Column, Container, Row, Space};
use iced::{ContentFit, Element, Length};

/// Grid tile: thumbnail with badges, name and variant summary.
pub fn grid_card<'a, Message: Clone + 'a>(
    asset: &'a Asset,
    i18n: &'a I18n,
    on_open: Message,
) -> Element<'a, Message> {
    let mut top = Row::new();
    if asset.is_template() {
        top = top.push(accent_badge(i18n.tr("asset-template-badge")));
    }

    let mut bottom = Row::new().push(Space::new().width(Length::Fill));
    if let Some(duration) = &asset.duration {
        bottom = bottom.push(badge(duration.clone()));
    }

    let overlay = Column::new()
        .padding(spacing::XS)
        .height(Length::Fill)
        .push(top)
        .push(Space::new().height(Length::Fill))
        .push(bottom);

    let thumb = thumbnail(
        asset,
        Length::Fixed(sizing::CARD_WIDTH),
        Length::Fixed(sizing::CARD_THUMB_HEIGHT),
        overlay.into(),
    );

    let info = Column::new()
        .spacing(spacing::XXS)
        .padding([spacing::XS, spacing::SM])
        .push(text(asset.display_name()).size(typography::BODY))
        .push(text(ratio_summary(asset)).size(typography::CAPTION));

    button(Column::new().push(thumb).push(info))
        .on_press(on_open)
        .padding(0)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::button::card)
        .into()
}

/// List row: small thumbnail, name, kind, variants, size and date.
pub fn list_row<'a, Message: Clone + 'a>(
    asset: &'a Asset,
    i18n: &'a I18n,
    on_open: Message,
) -> Element<'a, Message> {
    let thumb = thumbnail(
        asset,
        Length::Fixed(sizing::LIST_THUMB_WIDTH),
        Length::Fixed(sizing::LIST_THUMB_HEIGHT),
        Space::new().into(),
    );

    let mut name = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(asset.display_name()).size(typography::BODY));
    if asset.is_template() {
        name = name.push(accent_badge(i18n.tr("asset-template-badge")));
    }

    let label = Column::new()
        .spacing(2.0)
        .width(Length::Fill)
        .push(name)
        .push(text(i18n.tr(asset.kind.category().i18n_key())).size(typography::CAPTION));

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(thumb)
        .push(label)
        .push(
            text(ratio_summary(asset))
                .size(typography::CAPTION)
                .width(Length::Fixed(140.0)),
        )
        .push(
            text(asset.file_size.as_str())
                .size(typography::CAPTION)
                .width(Length::Fixed(72.0))
                .align_x(Horizontal::Right),
        )
        .push(
            text(asset.date.as_str())
                .size(typography::CAPTION)
                .width(Length::Fixed(96.0))
                .align_x(Horizontal::Right),
        );

    button(row)
        .on_press(on_open)
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::card)
        .into()
}

/// Variant labels joined for display, e.g. `16:9 · 9:16`.
#[must_use]
pub fn ratio_summary(asset: &Asset) -> String {
    asset
        .aspect_ratios
        .iter()
        .map(|ratio| ratio.label())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Thumbnail image when the asset has one, a placeholder otherwise, with
/// `overlay` drawn on top.
fn thumbnail<'a, Message: 'a>(
    asset: &'a Asset,
    width: Length,
    height: Length,
    overlay: Element<'a, Message>,
) -> Element<'a, Message> {
    let background: Element<'a, Message> = match &asset.thumbnail {
        Some(path) => image(path.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(
            text(asset.media_format.extension().to_uppercase()).size(typography::CAPTION),
        )
        .width(width)
        .height(height)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::thumbnail)
        .into(),
    };

    iced::widget::Stack::new()
        .width(width)
        .height(height)
        .push(background)
        .push(overlay)
        .into()
}

fn badge<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge)
        .into()
}

fn accent_badge<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::accent_badge)
        .into()
}
