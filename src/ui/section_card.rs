// SPDX-License-Identifier: MPL-2.0
//! One dashboard section ("Intros", "Midtros") with its own aspect filter.
//!
//! The section receives the already searched assets of its kind. Its ratio
//! filter is local: it narrows what this section shows and never reaches
//! the grid or the sibling sections.

use crate::app::config::ViewMode;
use crate::domain::asset::{AspectFilter, Asset, AssetId, AssetKind};
use crate::i18n::fluent::I18n;
use crate::ui::asset_card;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    kind: AssetKind,
    filter: AspectFilter,
}

#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(AspectFilter),
    OpenAsset(AssetId),
    UploadRequested,
    ShowMore,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenAsset(AssetId),
    /// The user wants to upload into this section.
    UploadRequested(AssetKind),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_mode: ViewMode,
    /// Search results for this section's kind.
    pub assets: Vec<&'a Asset>,
}

impl State {
    pub fn new(kind: AssetKind) -> Self {
        Self {
            kind,
            filter: AspectFilter::All,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    #[must_use]
    pub fn filter(&self) -> &AspectFilter {
        &self.filter
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FilterSelected(filter) => {
                self.filter = filter;
                Event::None
            }
            Message::OpenAsset(id) => Event::OpenAsset(id),
            Message::UploadRequested => Event::UploadRequested(self.kind),
            Message::ShowMore => Event::None,
        }
    }

    /// Applies the local ratio filter to the section's assets.
    #[must_use]
    pub fn visible<'b>(&self, assets: &[&'b Asset]) -> Vec<&'b Asset> {
        assets
            .iter()
            .copied()
            .filter(|asset| self.filter.matches(asset))
            .collect()
    }
}

/// Header text such as "Intros (4)". The count ignores the ratio filter.
fn header_title(state: &State, ctx: &ViewContext<'_>) -> String {
    let section_name = ctx.i18n.tr(state.kind.section_key());
    let count = ctx.assets.len().to_string();
    ctx.i18n.tr_with_args(
        "section-title-count",
        &[("title", section_name.as_str()), ("count", count.as_str())],
    )
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let visible = state.visible(&ctx.assets);
    let title = header_title(state, ctx);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(title).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("section-upload")).size(typography::BODY_SM))
                .on_press(Message::UploadRequested)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::secondary),
        );

    let filters = AspectFilter::choices().into_iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, filter| {
            let selected = filter == state.filter;
            let label = match &filter {
                AspectFilter::All => i18n.tr("filter-all"),
                AspectFilter::Only(ratio) => ratio.label().to_string(),
            };
            row.push(
                button(text(label).size(typography::CAPTION))
                    .on_press(Message::FilterSelected(filter))
                    .padding([2.0, spacing::SM])
                    .style(styles::button::chip(selected)),
            )
        },
    );

    let body: Element<'a, Message> = if visible.is_empty() {
        Container::new(text(i18n.tr("section-empty")).size(typography::BODY_SM))
            .padding(spacing::MD)
            .into()
    } else {
        match ctx.view_mode {
            ViewMode::Grid => {
                let cards = visible.into_iter().map(|asset| {
                    asset_card::grid_card(asset, i18n, Message::OpenAsset(asset.id))
                });
                Row::with_children(cards)
                    .spacing(spacing::MD)
                    .wrap()
                    .vertical_spacing(spacing::MD)
                    .into()
            }
            ViewMode::List => {
                let rows = visible.into_iter().map(|asset| {
                    asset_card::list_row(asset, i18n, Message::OpenAsset(asset.id))
                });
                Column::with_children(rows).spacing(spacing::XS).into()
            }
        }
    };

    let show_more = button(text(i18n.tr("section-show-more")).size(typography::BODY_SM))
        .on_press(Message::ShowMore)
        .style(styles::button::ghost);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(filters)
            .push(body)
            .push(show_more),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}
