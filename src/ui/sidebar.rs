// SPDX-License-Identifier: MPL-2.0
//! Left-hand navigation: the elements bar and the category list.
//!
//! Selecting a category only moves the highlight; the grid does not follow
//! it. The settings button at the bottom opens the settings panel.

use crate::domain::asset::Category;
use crate::i18n::fluent::I18n;
use crate::library::AssetLibrary;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, rule, text, tooltip, Column, Container, Row, Space};
use iced::{Element, Length};

/// Entry of the category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    AllAssets,
    Category(Category),
}

/// Tools on the elements bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Assets,
    Text,
    Graphics,
    Audio,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Assets, Tool::Text, Tool::Graphics, Tool::Audio];

    fn glyph(self) -> &'static str {
        match self {
            Tool::Assets => "▦",
            Tool::Text => "T",
            Tool::Graphics => "◆",
            Tool::Audio => "♪",
        }
    }

    fn i18n_key(self) -> &'static str {
        match self {
            Tool::Assets => "elements-assets",
            Tool::Text => "elements-text",
            Tool::Graphics => "elements-graphics",
            Tool::Audio => "elements-audio",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    selection: Selection,
    tool: Tool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(Selection),
    ToolSelected(Tool),
    OpenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenSettings,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a AssetLibrary,
    pub settings_open: bool,
}

impl State {
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Select(selection) => {
                self.selection = selection;
                Event::None
            }
            Message::ToolSelected(tool) => {
                self.tool = tool;
                Event::None
            }
            Message::OpenSettings => Event::OpenSettings,
        }
    }
}

/// Count shown next to a category entry.
#[must_use]
pub fn count_for(library: &AssetLibrary, selection: Selection) -> usize {
    match selection {
        Selection::AllAssets => library.len(),
        Selection::Category(category) => library.count_in_category(category),
    }
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .height(Length::Fill)
        .push(elements_bar(state, ctx))
        .push(category_panel(state, ctx))
        .into()
}

fn elements_bar<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tools = Tool::ALL
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, &tool| {
            let entry = button(
                text(tool.glyph())
                    .size(typography::TITLE_SM)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .on_press(Message::ToolSelected(tool))
            .width(Length::Fixed(sizing::ICON_LG + spacing::MD))
            .padding(spacing::XS)
            .style(styles::button::nav_item(state.tool == tool));

            column.push(styles::tooltip::styled(
                entry,
                ctx.i18n.tr(tool.i18n_key()),
                tooltip::Position::Right,
            ))
        });

    Container::new(tools)
        .width(Length::Fixed(sizing::ELEMENTS_BAR_WIDTH))
        .height(Length::Fill)
        .padding([spacing::MD, spacing::XS])
        .align_x(Horizontal::Center)
        .style(styles::container::sidebar)
        .into()
}

fn category_panel<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entries = std::iter::once(Selection::AllAssets)
        .chain(Category::ALL.into_iter().map(Selection::Category))
        .fold(Column::new().spacing(spacing::XXS), |column, selection| {
            column.push(category_entry(state, ctx, selection))
        });

    let settings = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(text("⚙").size(typography::BODY_LG))
            .push(text(ctx.i18n.tr("sidebar-settings")).size(typography::BODY)),
    )
    .on_press(Message::OpenSettings)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::NAV_ITEM_HEIGHT))
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::nav_item(ctx.settings_open));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(text(ctx.i18n.tr("sidebar-title")).size(typography::TITLE_SM))
        .push(text(ctx.i18n.tr("sidebar-categories")).size(typography::CAPTION))
        .push(entries)
        .push(Space::new().height(Length::Fill))
        .push(rule::horizontal(1))
        .push(settings);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

fn category_entry<'a>(
    state: &'a State,
    ctx: &ViewContext<'a>,
    selection: Selection,
) -> Element<'a, Message> {
    let label = match selection {
        Selection::AllAssets => ctx.i18n.tr("sidebar-all-assets"),
        Selection::Category(category) => ctx.i18n.tr(category.i18n_key()),
    };
    let count = count_for(ctx.library, selection).to_string();

    button(
        Row::new()
            .align_y(Vertical::Center)
            .push(text(label).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(text(count).size(typography::CAPTION)),
    )
    .on_press(Message::Select(selection))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::NAV_ITEM_HEIGHT))
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::nav_item(state.selection == selection))
    .into()
}
