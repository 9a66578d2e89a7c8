// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::asset::Asset;
use crate::ui::asset_editor;
use crate::ui::asset_grid;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::sidebar;
use crate::ui::upload_dialog;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(asset_grid::Message),
    Sidebar(sidebar::Message),
    Settings(settings::Message),
    Editor(asset_editor::Message),
    Upload(upload_dialog::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the native file picker opened by the upload dialog.
    UploadFilePicked(Option<PathBuf>),
    /// The uploaded asset has been built for the given dialog session.
    UploadBuilt(upload_dialog::SessionId, Asset),
    /// Escape closes the topmost overlay.
    EscapePressed,
    Tick(Instant), // Notification auto-dismiss and save auto-close
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ASSET_DECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
