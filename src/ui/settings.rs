// SPDX-License-Identifier: MPL-2.0
//! Settings side panel.
//!
//! Every setting is local to the panel and only lives for the session.
//! Opening and closing is driven by the sidebar; the panel reports
//! [`Event::Close`] from its close, cancel and save buttons.

use crate::app::config::ViewMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{
    button, pick_list, rule, scrollable, text, toggler, Column, Container, Row, Space,
};
use iced::{Element, Length};
use std::fmt;

/// Page sizes offered in the Display section.
pub const ITEMS_PER_PAGE_OPTIONS: [u32; 4] = [12, 24, 48, 96];

/// Order of assets in the library view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    Name,
    Size,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::Newest, SortBy::Oldest, SortBy::Name, SortBy::Size];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortBy::Newest => "settings-sort-newest",
            SortBy::Oldest => "settings-sort-oldest",
            SortBy::Name => "settings-sort-name",
            SortBy::Size => "settings-sort-size",
        }
    }
}

/// Local settings state.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub notifications: bool,
    pub auto_save: bool,
    pub view_mode: ViewMode,
    pub items_per_page: u32,
    pub thumbnail_previews: bool,
    /// Kept for parity with the stored preferences; no control is shown.
    pub dark_mode: bool,
    pub autoplay: bool,
    pub high_quality_thumbnails: bool,
    pub sort_by: SortBy,
}

impl Default for State {
    fn default() -> Self {
        Self {
            notifications: true,
            auto_save: true,
            view_mode: ViewMode::Grid,
            items_per_page: 24,
            thumbnail_previews: true,
            dark_mode: true,
            autoplay: false,
            high_quality_thumbnails: true,
            sort_by: SortBy::Newest,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NotificationsToggled(bool),
    AutoSaveToggled(bool),
    ViewModeSelected(ViewMode),
    ItemsPerPageSelected(u32),
    ThumbnailPreviewsToggled(bool),
    AutoplayToggled(bool),
    HighQualityThumbnailsToggled(bool),
    SortBySelected(SortBy),
    /// Link-style buttons ("Edit Profile", "Manage", "View Docs", "Contact").
    LinkPressed(&'static str),
    Close,
    Cancel,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NotificationsToggled(value) => self.notifications = value,
            Message::AutoSaveToggled(value) => self.auto_save = value,
            Message::ViewModeSelected(mode) => self.view_mode = mode,
            Message::ItemsPerPageSelected(count) => {
                if ITEMS_PER_PAGE_OPTIONS.contains(&count) {
                    self.items_per_page = count;
                }
            }
            Message::ThumbnailPreviewsToggled(value) => self.thumbnail_previews = value,
            Message::AutoplayToggled(value) => self.autoplay = value,
            Message::HighQualityThumbnailsToggled(value) => self.high_quality_thumbnails = value,
            Message::SortBySelected(sort) => self.sort_by = sort,
            Message::LinkPressed(link) => {
                tracing::debug!(link, "settings link pressed");
            }
            Message::Close | Message::Cancel => return Event::Close,
            Message::Save => {
                tracing::debug!(settings = ?self, "settings kept for this session");
                return Event::Close;
            }
        }
        Event::None
    }
}

/// Pick-list entry pairing a value with its translated label.
#[derive(Debug, Clone, PartialEq)]
struct Choice<T> {
    value: T,
    label: String,
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn choices<T: Copy>(values: &[T], label: impl Fn(T) -> String) -> Vec<Choice<T>> {
    values
        .iter()
        .map(|&value| Choice {
            value,
            label: label(value),
        })
        .collect()
}

fn selected<T: Copy + PartialEq>(options: &[Choice<T>], current: T) -> Option<Choice<T>> {
    options.iter().find(|choice| choice.value == current).cloned()
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(text(i18n.tr("settings-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("×").size(typography::TITLE_MD))
                .on_press(Message::Close)
                .padding([0.0, spacing::XS])
                .style(styles::button::ghost),
        );

    let account = section(
        i18n.tr("settings-section-account"),
        vec![link_row(
            i18n.tr("settings-profile-label"),
            i18n.tr("settings-edit-profile"),
            "edit-profile",
        )],
    );

    let notifications = section(
        i18n.tr("settings-section-notifications"),
        vec![
            toggle_row(
                i18n.tr("settings-notifications"),
                state.notifications,
                Message::NotificationsToggled,
            ),
            toggle_row(
                i18n.tr("settings-auto-save"),
                state.auto_save,
                Message::AutoSaveToggled,
            ),
        ],
    );

    let view_modes = choices(&ViewMode::ALL, |mode| i18n.tr(mode.i18n_key()));
    let current_mode = selected(&view_modes, state.view_mode);
    let page_sizes = choices(&ITEMS_PER_PAGE_OPTIONS, |count| count.to_string());
    let current_page_size = selected(&page_sizes, state.items_per_page);
    let sort_orders = choices(&SortBy::ALL, |sort| i18n.tr(sort.i18n_key()));
    let current_sort = selected(&sort_orders, state.sort_by);

    let display = section(
        i18n.tr("settings-section-display"),
        vec![
            picker_row(
                i18n.tr("settings-view-mode"),
                pick_list(view_modes, current_mode, |choice| {
                    Message::ViewModeSelected(choice.value)
                })
                .into(),
            ),
            picker_row(
                i18n.tr("settings-items-per-page"),
                pick_list(page_sizes, current_page_size, |choice| {
                    Message::ItemsPerPageSelected(choice.value)
                })
                .into(),
            ),
            toggle_row(
                i18n.tr("settings-thumbnail-previews"),
                state.thumbnail_previews,
                Message::ThumbnailPreviewsToggled,
            ),
        ],
    );

    let media = section(
        i18n.tr("settings-section-media"),
        vec![
            toggle_row(
                i18n.tr("settings-autoplay"),
                state.autoplay,
                Message::AutoplayToggled,
            ),
            toggle_row(
                i18n.tr("settings-high-quality-thumbnails"),
                state.high_quality_thumbnails,
                Message::HighQualityThumbnailsToggled,
            ),
            picker_row(
                i18n.tr("settings-sort-by"),
                pick_list(sort_orders, current_sort, |choice| {
                    Message::SortBySelected(choice.value)
                })
                .into(),
            ),
        ],
    );

    let privacy = section(
        i18n.tr("settings-section-privacy"),
        vec![link_row(
            i18n.tr("settings-privacy-label"),
            i18n.tr("settings-manage"),
            "manage-privacy",
        )],
    );

    let help = section(
        i18n.tr("settings-section-help"),
        vec![
            link_row(
                i18n.tr("settings-documentation"),
                i18n.tr("settings-view-docs"),
                "view-docs",
            ),
            link_row(
                i18n.tr("settings-support"),
                i18n.tr("settings-contact"),
                "contact-support",
            ),
        ],
    );

    let body = Column::new()
        .spacing(spacing::LG)
        .push(account)
        .push(notifications)
        .push(display)
        .push(media)
        .push(privacy)
        .push(help);

    let version = i18n.tr_with_args(
        "settings-version",
        &[("version", env!("CARGO_PKG_VERSION"))],
    );

    let footer = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(version).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("settings-cancel")).size(typography::BODY_SM))
                .on_press(Message::Cancel)
                .style(styles::button::secondary),
        )
        .push(
            button(text(i18n.tr("settings-save")).size(typography::BODY_SM))
                .on_press(Message::Save)
                .style(styles::button::primary),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(rule::horizontal(1))
            .push(scrollable(body).height(Length::Fill))
            .push(rule::horizontal(1))
            .push(footer),
    )
    .width(Length::Fixed(sizing::SETTINGS_PANEL_WIDTH))
    .height(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn section<'a>(title: String, rows: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(text(title).size(typography::BODY_SM))
        .push(Column::with_children(rows).spacing(spacing::SM))
        .into()
}

fn toggle_row<'a>(
    label: String,
    value: bool,
    on_toggle: fn(bool) -> Message,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(toggler(value).on_toggle(on_toggle).size(20.0))
        .into()
}

fn picker_row<'a>(label: String, picker: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(picker)
        .into()
}

fn link_row<'a>(label: String, action: String, link: &'static str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(action).size(typography::BODY_SM))
                .on_press(Message::LinkPressed(link))
                .style(styles::button::ghost),
        )
        .into()
}
