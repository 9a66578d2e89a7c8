// SPDX-License-Identifier: MPL-2.0
//! Edit view layout: header, variant preview and the side panel.

use super::{preview_size, EditMode, Message, State, ViewContext};
use crate::domain::asset::{AspectRatio, Category};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, checkbox, container, pick_list, rule, scrollable, text, text_input, tooltip, Column,
    Container, Row, Space, Text,
};
use iced::{Background, Border, Element, Length, Theme};
use std::fmt;

/// Scale applied to the fixed variant box for the large preview.
const PREVIEW_SCALE: f32 = 6.0;

/// Author shown for templates that carry none.
const DEFAULT_TEMPLATE_AUTHOR: &str = "WSC Sport";

/// Entry of the "add variant" picker.
#[derive(Debug, Clone, PartialEq)]
struct VariantOption {
    ratio: AspectRatio,
    label: String,
}

impl fmt::Display for VariantOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Renders the edit panel. The caller is responsible for the backdrop.
pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let side_panel: Element<'a, Message> = match state.mode() {
        EditMode::Template => template_info(state, ctx),
        EditMode::Upload { .. } => upload_panel(state, ctx),
    };

    let body = Row::new()
        .spacing(spacing::LG)
        .height(Length::Fill)
        .push(preview_section(state, ctx))
        .push(
            scrollable(side_panel)
                .width(Length::Fixed(sizing::EDITOR_PANEL_WIDTH))
                .height(Length::Fill),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header(state, ctx))
        .push(rule::horizontal(1))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::dialog)
        .into()
}

fn header<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut title_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(state.header_title()).size(typography::TITLE_MD));

    if state.is_template() {
        title_row = title_row.push(
            container(text(ctx.i18n.tr("editor-template-badge")).size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::accent_badge),
        );
    } else if state.is_dirty() {
        title_row = title_row.push(dirty_dot());
    }

    let action = if state.is_template() {
        button(text(ctx.i18n.tr("editor-use-template")).size(typography::BODY))
            .on_press(Message::UseTemplate)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
    } else {
        button(text(ctx.i18n.tr("editor-save-changes")).size(typography::BODY))
            .on_press_maybe(state.can_save().then_some(Message::Save))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
    };

    let close = button(text("×").size(typography::TITLE_MD))
        .on_press(Message::Close)
        .padding([0.0, spacing::XS])
        .style(styles::button::ghost);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title_row)
        .push(Space::new().width(Length::Fill))
        .push(action)
        .push(close)
        .into()
}

fn dirty_dot<'a>() -> Element<'a, Message> {
    container(Space::new().width(8.0).height(8.0))
        .style(|theme: &Theme| {
            container::Style {
                background: Some(Background::Color(ColorScheme::for_theme(theme).accent)),
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

fn preview_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = state.selected_variant();
    let (width, height) = preview_size(selected);

    let play_label = if state.is_playing() { "❚❚" } else { "▶" };
    let play = button(text(play_label).size(typography::TITLE_LG))
        .on_press(Message::TogglePlayback)
        .padding(spacing::SM)
        .style(styles::button::ghost);

    let frame = Container::new(play)
        .width(Length::Fixed(width * PREVIEW_SCALE))
        .height(Length::Fixed(height * PREVIEW_SCALE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::thumbnail);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(text(ratio_label(selected, ctx.i18n)).size(typography::BODY))
        .push(text(state.variant_file_name(selected)).size(typography::CAPTION));

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Space::new().height(Length::Fill))
        .push(frame)
        .push(caption)
        .push(Space::new().height(Length::Fill))
        .into()
}

fn upload_panel<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut panel = Column::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::SM])
        .push(name_section(state, ctx))
        .push(categories_section(state, ctx))
        .push(variants_section(state, ctx));

    if let Some(ratio) = state.confirm_delete() {
        panel = panel.push(delete_prompt(ratio, ctx));
    }

    panel
        .push(visibility_section(ctx))
        .push(details_section(state, ctx))
        .into()
}

/// Every asset is visible to all users; the rules link does nothing yet.
fn visibility_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let rules_label = text(ctx.i18n.tr("editor-visibility-edit-rules")).size(typography::CAPTION);
    let rules = button(rules_label)
        .on_press(Message::EditVisibilityRules)
        .padding([0.0, spacing::XXS])
        .style(styles::button::ghost);

    Column::new()
        .spacing(spacing::XXS)
        .push(section_title(ctx.i18n.tr("editor-visibility-label")))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    text(ctx.i18n.tr("editor-visibility-all-users")).size(typography::BODY_SM),
                )
                .push(Space::new().width(Length::Fill))
                .push(rules),
        )
        .into()
}

fn section_title<'a>(label: String) -> Text<'a> {
    text(label).size(typography::BODY_SM)
}

fn name_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let placeholder = ctx.i18n.tr("editor-name-placeholder");
    let input = text_input(&placeholder, state.name())
        .on_input(Message::NameChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    Column::new()
        .spacing(spacing::XXS)
        .push(section_title(ctx.i18n.tr("editor-name-label")))
        .push(input)
        .into()
}

fn categories_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XS);
    for category in Category::ALL {
        list = list.push(
            checkbox(state.categories().contains(&category))
                .label(ctx.i18n.tr(category.i18n_key()))
                .on_toggle(move |_| Message::ToggleCategory(category)),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(section_title(ctx.i18n.tr("editor-categories-label")))
        .push(list)
        .into()
}

fn variants_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let count = state.aspect_ratios().len().to_string();
    let title = ctx
        .i18n
        .tr_with_args("editor-variants-title", &[("count", count.as_str())]);

    let mut list = Column::new()
        .spacing(spacing::XS)
        .push(section_title(title));

    for ratio in state.aspect_ratios() {
        list = list.push(variant_row(state, ratio, ctx));
    }

    let options: Vec<VariantOption> = state
        .available_to_add()
        .into_iter()
        .map(|ratio| VariantOption {
            label: ratio_label(&ratio, ctx.i18n),
            ratio,
        })
        .collect();

    if options.is_empty() {
        list = list.push(text(ctx.i18n.tr("editor-all-variants-added")).size(typography::CAPTION));
    } else {
        list = list.push(
            pick_list(options, None::<VariantOption>, |option| {
                Message::AddVariant(option.ratio)
            })
            .placeholder(ctx.i18n.tr("editor-add-variant"))
            .padding(spacing::XS)
            .width(Length::Fill),
        );
    }

    list.into()
}

fn variant_row<'a>(
    state: &'a State,
    ratio: &'a AspectRatio,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let (width, height) = preview_size(ratio);
    let thumb = Container::new(Space::new())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(styles::container::thumbnail);

    let info = Column::new()
        .spacing(2.0)
        .push(text(state.variant_file_name(ratio)).size(typography::BODY_SM))
        .push(
            text(format!(
                "{} · {}",
                ratio_label(ratio, ctx.i18n),
                state.asset().file_size
            ))
            .size(typography::CAPTION),
        );

    let select = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(thumb)
            .push(info),
    )
    .on_press(Message::SelectVariant(ratio.clone()))
    .width(Length::Fill)
    .padding(spacing::XXS)
    .style(styles::button::ghost);

    let delete: Element<'a, Message> = if state.can_delete_variant() {
        button(text("🗑").size(typography::BODY))
            .on_press(Message::RequestDeleteVariant(ratio.clone()))
            .padding(spacing::XXS)
            .style(styles::button::ghost)
            .into()
    } else {
        styles::tooltip::styled(
            button(text("🗑").size(typography::BODY))
                .padding(spacing::XXS)
                .style(styles::button::disabled()),
            ctx.i18n.tr("editor-delete-last-variant-tooltip"),
            tooltip::Position::Left,
        )
        .into()
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(select)
        .push(delete);

    let framed = Container::new(row).padding(spacing::XXS).width(Length::Fill);
    if state.selected_variant() == ratio {
        framed.style(styles::container::selected_row).into()
    } else {
        framed.into()
    }
}

fn delete_prompt<'a>(ratio: &AspectRatio, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let prompt = ctx
        .i18n
        .tr_with_args("editor-delete-variant-prompt", &[("ratio", ratio.label())]);

    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(ctx.i18n.tr("editor-cancel")).size(typography::BODY_SM))
                .on_press(Message::CancelDeleteVariant)
                .style(styles::button::secondary),
        )
        .push(
            button(text(ctx.i18n.tr("editor-delete")).size(typography::BODY_SM))
                .on_press(Message::ConfirmDeleteVariant)
                .style(styles::button::danger),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(text(prompt).size(typography::BODY))
            .push(buttons),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::dialog)
    .into()
}

fn details_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let asset = state.asset();
    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(section_title(ctx.i18n.tr("editor-details-label")))
        .push(detail_row(ctx.i18n.tr("editor-file-size"), asset.file_size.clone()))
        .push(detail_row(ctx.i18n.tr("editor-added"), asset.date.clone()));

    if let Some(duration) = &asset.duration {
        details = details.push(detail_row(ctx.i18n.tr("editor-duration"), duration.clone()));
    }
    if let Some(modified) = &asset.last_modified {
        details = details.push(detail_row(
            ctx.i18n.tr("editor-last-modified"),
            modified.clone(),
        ));
    }

    details.into()
}

fn detail_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(text(value).size(typography::CAPTION))
        .into()
}

fn template_info<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let asset = state.asset();

    let categories = state
        .categories()
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, category| {
            row.push(badge(ctx.i18n.tr(category.i18n_key())))
        });

    let ratios = state
        .aspect_ratios()
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, ratio| {
            row.push(
                button(text(ratio.label().to_string()).size(typography::CAPTION))
                    .on_press(Message::SelectVariant(ratio.clone()))
                    .padding([2.0, spacing::XS])
                    .style(styles::button::chip(state.selected_variant() == ratio)),
            )
        });

    let author = asset
        .created_by
        .clone()
        .unwrap_or_else(|| DEFAULT_TEMPLATE_AUTHOR.to_string());

    Column::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::SM])
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(section_title(ctx.i18n.tr("editor-name-label")))
                .push(text(state.name()).size(typography::BODY_LG)),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(section_title(ctx.i18n.tr("editor-categories-label")))
                .push(categories),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(section_title(ctx.i18n.tr("editor-ratios-label")))
                .push(ratios),
        )
        .push(rule::horizontal(1))
        .push(text(ctx.i18n.tr("editor-template-shared")).size(typography::BODY))
        .push(detail_row(ctx.i18n.tr("editor-template-created-by"), author))
        .push(detail_row(ctx.i18n.tr("editor-added"), asset.date.clone()))
        .push(
            Container::new(text(ctx.i18n.tr("editor-template-read-only")).size(typography::BODY_SM))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::badge),
        )
        .into()
}

fn badge<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge)
        .into()
}

/// Formats a ratio as `16:9 (Landscape)`; ratios without a known
/// orientation show the bare label.
pub(crate) fn ratio_label(ratio: &AspectRatio, i18n: &I18n) -> String {
    match ratio.orientation() {
        Some(orientation) => format!("{} ({})", ratio.label(), i18n.tr(orientation.i18n_key())),
        None => ratio.label().to_string(),
    }
}
