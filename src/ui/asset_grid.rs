// SPDX-License-Identifier: MPL-2.0
//! Main dashboard area: filter bar plus one section card per asset kind.
//!
//! The grid owns the search text and the display mode. The collection
//! itself lives in [`AssetLibrary`] and is only read here.

use crate::app::config::ViewMode;
use crate::domain::asset::{AssetId, AssetKind, SearchQuery};
use crate::i18n::fluent::I18n;
use crate::library::{AssetLibrary, DASHBOARD_SECTIONS};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::section_card;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row, Space};
use iced::{Element, Length};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct State {
    query: SearchQuery,
    view_mode: ViewMode,
    sections: BTreeMap<AssetKind, section_card::State>,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ViewModeSelected(ViewMode),
    Section(AssetKind, section_card::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenAsset(AssetId),
    UploadRequested(AssetKind),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a AssetLibrary,
}

impl State {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            query: SearchQuery::default(),
            view_mode,
            sections: DASHBOARD_SECTIONS
                .iter()
                .map(|&kind| (kind, section_card::State::new(kind)))
                .collect(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn section(&self, kind: AssetKind) -> Option<&section_card::State> {
        self.sections.get(&kind)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SearchChanged(raw) => {
                self.query = SearchQuery::new(raw);
                Event::None
            }
            Message::ViewModeSelected(mode) => {
                self.view_mode = mode;
                Event::None
            }
            Message::Section(kind, message) => {
                let Some(section) = self.sections.get_mut(&kind) else {
                    return Event::None;
                };
                match section.update(message) {
                    section_card::Event::None => Event::None,
                    section_card::Event::OpenAsset(id) => Event::OpenAsset(id),
                    section_card::Event::UploadRequested(kind) => Event::UploadRequested(kind),
                }
            }
        }
    }
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let search = text_input(&i18n.tr("grid-search-placeholder"), state.query.as_str())
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(320.0));

    let modes = ViewMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &mode| {
            row.push(
                button(text(i18n.tr(mode.i18n_key())).size(typography::BODY_SM))
                    .on_press(Message::ViewModeSelected(mode))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::chip(mode == state.view_mode)),
            )
        });

    let filter_bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(text(i18n.tr("grid-title")).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(search)
        .push(modes);

    let mut sections = Column::new().spacing(spacing::LG);
    for section in ctx.library.sections(&state.query) {
        let kind = section.kind;
        let Some(section_state) = state.sections.get(&kind) else {
            continue;
        };
        let section_ctx = section_card::ViewContext {
            i18n,
            view_mode: state.view_mode,
            assets: section.assets,
        };
        sections = sections.push(
            section_card::view(section_state, &section_ctx)
                .map(move |message| Message::Section(kind, message)),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(filter_bar)
            .push(scrollable(sections).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page)
    .into()
}
