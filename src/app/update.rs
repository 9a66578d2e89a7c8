// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report [`Event`](crate::ui::asset_grid::Event)s; the handlers
//! here apply them to the shared state and start any asynchronous work.

use super::{Message, Overlay};
use crate::domain::asset::{Asset, AssetId, AssetKind};
use crate::i18n::fluent::I18n;
use crate::library::AssetLibrary;
use crate::ui::asset_editor::{self, Event as EditorEvent, State as EditorState};
use crate::ui::asset_grid::{self, Event as GridEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use crate::ui::sidebar::{self, Event as SidebarEvent};
use crate::ui::upload_dialog::{self, Event as UploadEvent, SessionId, State as UploadState};
use iced::Task;
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub library: &'a mut AssetLibrary,
    pub grid: &'a mut asset_grid::State,
    pub sidebar: &'a mut sidebar::State,
    pub settings: &'a mut SettingsState,
    pub settings_open: &'a mut bool,
    pub editor: &'a mut Option<EditorState>,
    pub upload: &'a mut Option<UploadState>,
    pub notifications: &'a mut notifications::Manager,
    pub close_delay: Duration,
}

impl UpdateContext<'_> {
    fn overlay(&self) -> Overlay {
        Overlay::topmost(*self.settings_open, self.editor.is_some(), self.upload.is_some())
    }
}

pub fn handle_grid_message(
    ctx: &mut UpdateContext<'_>,
    message: asset_grid::Message,
) -> Task<Message> {
    match ctx.grid.update(message) {
        GridEvent::None => Task::none(),
        GridEvent::OpenAsset(id) => {
            open_editor(ctx, id);
            Task::none()
        }
        GridEvent::UploadRequested(kind) => {
            open_upload(ctx, kind);
            Task::none()
        }
    }
}

fn open_editor(ctx: &mut UpdateContext<'_>, id: AssetId) {
    let Some(asset) = ctx.library.get(id).cloned() else {
        tracing::warn!(asset = id.value(), "asked to edit an asset that is not in the library");
        return;
    };
    tracing::debug!(title = %asset.title, template = asset.is_template(), "opening edit view");
    *ctx.editor = Some(EditorState::open(asset, ctx.close_delay));
}

fn open_upload(ctx: &mut UpdateContext<'_>, kind: AssetKind) {
    tracing::debug!(?kind, "opening upload dialog");
    *ctx.upload = Some(UploadState::new(kind));
}

pub fn handle_sidebar_message(
    ctx: &mut UpdateContext<'_>,
    message: sidebar::Message,
) -> Task<Message> {
    match ctx.sidebar.update(message) {
        SidebarEvent::None => {}
        SidebarEvent::OpenSettings => *ctx.settings_open = !*ctx.settings_open,
    }
    Task::none()
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => {}
        SettingsEvent::Close => *ctx.settings_open = false,
    }
    Task::none()
}

pub fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: asset_editor::Message,
) -> Task<Message> {
    let Some(editor) = ctx.editor.as_mut() else {
        return Task::none();
    };

    match editor.update(message) {
        EditorEvent::None => {}
        EditorEvent::Saved(asset) => {
            if ctx.library.replace(asset) {
                ctx.notifications
                    .push(Notification::success("notification-save-success"));
            } else {
                tracing::warn!("saved asset is no longer in the library");
            }
        }
        EditorEvent::Closed => *ctx.editor = None,
    }
    Task::none()
}

pub fn handle_upload_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_dialog::Message,
) -> Task<Message> {
    let Some(dialog) = ctx.upload.as_mut() else {
        return Task::none();
    };

    match dialog.update(message) {
        UploadEvent::None => Task::none(),
        UploadEvent::PickFile => {
            let title = ctx.i18n.tr("upload-browse");
            Task::perform(upload_dialog::pick_file(title), Message::UploadFilePicked)
        }
        UploadEvent::Submit(request) => {
            tracing::info!(
                path = %request.path.display(),
                kind = ?request.kind,
                "uploading asset"
            );
            let session = request.session;
            Task::perform(upload_dialog::build_asset(request), move |asset| {
                Message::UploadBuilt(session, asset)
            })
        }
        UploadEvent::Cancelled => {
            *ctx.upload = None;
            Task::none()
        }
    }
}

/// Adds a built upload, unless the dialog that submitted it is gone.
pub fn handle_upload_built(
    ctx: &mut UpdateContext<'_>,
    session: SessionId,
    asset: Asset,
) -> Task<Message> {
    let awaited = ctx
        .upload
        .as_ref()
        .is_some_and(|dialog| dialog.awaits_build(session));
    if !awaited {
        tracing::debug!(title = %asset.title, "dropping upload from a cancelled dialog");
        return Task::none();
    }

    ctx.library.receive_upload(asset);
    ctx.notifications
        .push(Notification::success("notification-upload-success"));
    *ctx.upload = None;
    Task::none()
}

/// Escape acts on the topmost overlay as if its close button was pressed.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.overlay() {
        Overlay::None => Task::none(),
        Overlay::Upload => handle_upload_message(ctx, upload_dialog::Message::Cancel),
        Overlay::Editor => handle_editor_message(ctx, asset_editor::Message::Close),
        Overlay::Settings => handle_settings_message(ctx, settings::Message::Close),
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);

    if ctx.editor.as_ref().is_some_and(|editor| editor.close_due(now)) {
        tracing::debug!("closing edit view after save");
        *ctx.editor = None;
    }
    Task::none()
}
