// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The dashboard (sidebar plus grid) is always drawn. Overlays are stacked
//! above it in a fixed order: settings panel, edit view, upload dialog and
//! finally the toasts.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::library::AssetLibrary;
use crate::ui::asset_editor::{self, State as EditorState};
use crate::ui::asset_grid;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::settings::{self, State as SettingsState};
use crate::ui::sidebar;
use crate::ui::styles;
use crate::ui::upload_dialog::{self, State as UploadState};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{opaque, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a AssetLibrary,
    pub grid: &'a asset_grid::State,
    pub sidebar: &'a sidebar::State,
    pub settings: &'a SettingsState,
    pub settings_open: bool,
    pub editor: Option<&'a EditorState>,
    pub upload: Option<&'a UploadState>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the dashboard and every open overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sidebar = sidebar::view(
        ctx.sidebar,
        &sidebar::ViewContext {
            i18n: ctx.i18n,
            library: ctx.library,
            settings_open: ctx.settings_open,
        },
    )
    .map(Message::Sidebar);

    let grid = asset_grid::view(
        ctx.grid,
        &asset_grid::ViewContext {
            i18n: ctx.i18n,
            library: ctx.library,
        },
    )
    .map(Message::Grid);

    let dashboard = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(sidebar)
        .push(grid);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(dashboard);

    if ctx.settings_open {
        layers = layers.push(view_settings(ctx.settings, ctx.i18n));
    }

    if let Some(editor) = ctx.editor {
        let content = asset_editor::view(editor, &asset_editor::ViewContext { i18n: ctx.i18n })
            .map(Message::Editor);
        layers = layers.push(modal(content, spacing::XL));
    }

    if let Some(upload) = ctx.upload {
        let content = upload_dialog::view(upload, &upload_dialog::ViewContext { i18n: ctx.i18n })
            .map(Message::Upload);
        layers = layers.push(modal(content, 0.0));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_settings<'a>(settings: &'a SettingsState, i18n: &'a I18n) -> Element<'a, Message> {
    let panel = settings::view(settings, &settings::ViewContext { i18n }).map(Message::Settings);

    Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .into()
}

/// Centers `content` over a scrim that swallows clicks meant for the
/// dashboard underneath.
fn modal(content: Element<'_, Message>, inset: f32) -> Element<'_, Message> {
    let centered = Container::new(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(inset)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::scrim);

    opaque(centered)
}
