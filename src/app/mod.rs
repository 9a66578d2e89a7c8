// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard and its
//! overlays.
//!
//! The `App` struct wires together the asset library, localization and the
//! UI components, and translates component events into side effects such as
//! opening the file picker or building an uploaded asset.

pub mod config;
mod message;
mod overlay;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use overlay::Overlay;

use crate::i18n::fluent::I18n;
use crate::library::AssetLibrary;
use crate::ui::asset_editor::State as EditorState;
use crate::ui::asset_grid;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::State as SettingsState;
use crate::ui::sidebar;
use crate::ui::theming::ThemeMode;
use crate::ui::upload_dialog::{self, State as UploadState};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    library: AssetLibrary,
    grid: asset_grid::State,
    sidebar: sidebar::State,
    settings: SettingsState,
    /// Whether the settings side panel is shown.
    settings_open: bool,
    /// Open edit session, if any.
    editor: Option<EditorState>,
    /// Open upload dialog, if any.
    upload: Option<UploadState>,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Delay between a save and the edit view closing.
    close_delay: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("assets", &self.library.len())
            .field("overlay", &self.overlay())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            library: AssetLibrary::with_sample_data(),
            grid: asset_grid::State::new(config::ViewMode::default()),
            sidebar: sidebar::State::default(),
            settings: SettingsState::default(),
            settings_open: false,
            editor: None,
            upload: None,
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            close_delay: Duration::from_millis(config::DEFAULT_SAVE_CLOSE_DELAY_MS),
        }
    }
}

impl App {
    /// Initializes application state from the configuration file and the
    /// launcher `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(std::path::PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir);
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            grid: asset_grid::State::new(config.library.default_view_mode),
            theme_mode: config.general.theme_mode,
            close_delay: config.library.save_close_delay(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }

        tracing::info!(
            assets = app.library.len(),
            locale = %app.i18n.current_locale(),
            view_mode = %config.library.default_view_mode,
            "dashboard ready"
        );

        (app, Task::none())
    }

    fn overlay(&self) -> Overlay {
        Overlay::topmost(self.settings_open, self.editor.is_some(), self.upload.is_some())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match &self.editor {
            Some(editor) if editor.is_dirty() => {
                format!("{}* - {app_name}", editor.header_title())
            }
            Some(editor) => format!("{} - {app_name}", editor.header_title()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.overlay());
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.editor.as_ref().is_some_and(EditorState::is_closing),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            library: &mut self.library,
            grid: &mut self.grid,
            sidebar: &mut self.sidebar,
            settings: &mut self.settings,
            settings_open: &mut self.settings_open,
            editor: &mut self.editor,
            upload: &mut self.upload,
            notifications: &mut self.notifications,
            close_delay: self.close_delay,
        };

        match message {
            Message::Grid(message) => update::handle_grid_message(&mut ctx, message),
            Message::Sidebar(message) => update::handle_sidebar_message(&mut ctx, message),
            Message::Settings(message) => update::handle_settings_message(&mut ctx, message),
            Message::Editor(message) => update::handle_editor_message(&mut ctx, message),
            Message::Upload(message) => update::handle_upload_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::UploadFilePicked(path) => update::handle_upload_message(
                &mut ctx,
                upload_dialog::Message::FilePicked(path),
            ),
            Message::UploadBuilt(session, asset) => {
                update::handle_upload_built(&mut ctx, session, asset)
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            library: &self.library,
            grid: &self.grid,
            sidebar: &self.sidebar,
            settings: &self.settings,
            settings_open: self.settings_open,
            editor: self.editor.as_ref(),
            upload: self.upload.as_ref(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::{AspectRatio, Asset, AssetKind, AssetOrigin};
    use crate::ui::asset_editor;
    use crate::ui::section_card;
    use crate::ui::settings;
    use std::path::PathBuf;
    use std::time::Instant;

    fn first_upload(app: &App) -> Asset {
        app.library
            .assets()
            .iter()
            .find(|asset| asset.origin == AssetOrigin::Upload)
            .cloned()
            .expect("sample data contains uploads")
    }

    fn first_template(app: &App) -> Asset {
        app.library
            .assets()
            .iter()
            .find(|asset| asset.is_template())
            .cloned()
            .expect("sample data contains templates")
    }

    fn open(app: &mut App, asset: &Asset) {
        let _ = app.update(Message::Grid(asset_grid::Message::Section(
            asset.kind,
            section_card::Message::OpenAsset(asset.id),
        )));
    }

    #[test]
    fn default_app_shows_dashboard_only() {
        let app = App::default();
        assert_eq!(app.overlay(), Overlay::None);
        assert!(!app.library.is_empty());
    }

    #[test]
    fn opening_an_asset_starts_an_edit_session() {
        let mut app = App::default();
        let asset = first_upload(&app);

        open(&mut app, &asset);

        let editor = app.editor.as_ref().expect("edit view should be open");
        assert_eq!(editor.asset().id, asset.id);
        assert_eq!(app.overlay(), Overlay::Editor);
    }

    #[test]
    fn saving_replaces_asset_and_closes_after_delay() {
        let mut app = App::default();
        let asset = first_upload(&app);
        open(&mut app, &asset);

        let _ = app.update(Message::Editor(asset_editor::Message::NameChanged(
            "Renamed".into(),
        )));
        let _ = app.update(Message::Editor(asset_editor::Message::Save));

        let stored = app.library.get(asset.id).expect("asset still in library");
        assert!(stored.title.starts_with("Renamed"));
        assert!(app.notifications.has_notifications());
        assert!(app.editor.as_ref().is_some_and(EditorState::is_closing));

        let _ = app.update(Message::Tick(Instant::now() + app.close_delay));
        assert!(app.editor.is_none());
    }

    #[test]
    fn tick_before_delay_keeps_edit_view_open() {
        let mut app = App::default();
        let asset = first_upload(&app);
        open(&mut app, &asset);

        let _ = app.update(Message::Editor(asset_editor::Message::AddVariant(
            AspectRatio::Cinematic,
        )));
        let _ = app.update(Message::Editor(asset_editor::Message::Save));
        let _ = app.update(Message::Tick(Instant::now()));

        assert!(app.editor.is_some());
    }

    #[test]
    fn closing_discards_unsaved_edits() {
        let mut app = App::default();
        let asset = first_upload(&app);
        open(&mut app, &asset);

        let _ = app.update(Message::Editor(asset_editor::Message::NameChanged(
            "Discarded".into(),
        )));
        let _ = app.update(Message::Editor(asset_editor::Message::Close));

        assert!(app.editor.is_none());
        assert_eq!(app.library.get(asset.id), Some(&asset));
    }

    #[test]
    fn template_session_cannot_change_library() {
        let mut app = App::default();
        let template = first_template(&app);
        open(&mut app, &template);

        let _ = app.update(Message::Editor(asset_editor::Message::Save));

        assert_eq!(app.library.get(template.id), Some(&template));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn sidebar_toggles_settings_panel() {
        let mut app = App::default();

        let _ = app.update(Message::Sidebar(sidebar::Message::OpenSettings));
        assert!(app.settings_open);

        let _ = app.update(Message::Settings(settings::Message::Cancel));
        assert!(!app.settings_open);
    }

    #[test]
    fn escape_closes_topmost_overlay() {
        let mut app = App::default();
        let _ = app.update(Message::Sidebar(sidebar::Message::OpenSettings));
        let asset = first_upload(&app);
        open(&mut app, &asset);

        let _ = app.update(Message::EscapePressed);
        assert!(app.editor.is_none());
        assert!(app.settings_open);

        let _ = app.update(Message::EscapePressed);
        assert!(!app.settings_open);
    }

    #[test]
    fn upload_request_opens_dialog_for_section() {
        let mut app = App::default();
        request_upload(&mut app, AssetKind::Midtro);

        let dialog = app.upload.as_ref().expect("upload dialog should be open");
        assert_eq!(dialog.kind(), AssetKind::Midtro);
    }

    #[test]
    fn picked_file_reaches_open_dialog() {
        let mut app = App::default();
        request_upload(&mut app, AssetKind::Intro);

        let _ = app.update(Message::UploadFilePicked(Some(PathBuf::from(
            "/tmp/Opening.mp4",
        ))));

        let dialog = app.upload.as_ref().expect("upload dialog should be open");
        assert_eq!(dialog.name(), "Opening");
    }

    fn request_upload(app: &mut App, kind: AssetKind) {
        let _ = app.update(Message::Grid(asset_grid::Message::Section(
            kind,
            section_card::Message::UploadRequested,
        )));
    }

    /// Opens a dialog, picks a file and submits it. Returns the session
    /// whose build is now in flight.
    fn submit_upload(app: &mut App, kind: AssetKind, path: &str) -> upload_dialog::SessionId {
        request_upload(app, kind);
        let _ = app.update(Message::UploadFilePicked(Some(PathBuf::from(path))));
        let session = app
            .upload
            .as_ref()
            .map(UploadState::session)
            .expect("upload dialog should be open");
        let _ = app.update(Message::Upload(upload_dialog::Message::Submit));
        session
    }

    #[test]
    fn built_upload_is_prepended_and_dialog_closes() {
        let mut app = App::default();
        let before = app.library.len();
        let session = submit_upload(&mut app, AssetKind::Intro, "/tmp/Fresh.mp4");

        let asset = Asset::new("Fresh.mp4", AssetKind::Intro, AssetOrigin::Upload);
        let _ = app.update(Message::UploadBuilt(session, asset.clone()));

        assert_eq!(app.library.len(), before + 1);
        assert_eq!(app.library.assets()[0].id, asset.id);
        assert!(app.upload.is_none());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn cancelled_upload_is_discarded_when_its_build_finishes() {
        let mut app = App::default();
        let before = app.library.len();
        let session = submit_upload(&mut app, AssetKind::Intro, "/tmp/Dropped.mp4");

        let _ = app.update(Message::Upload(upload_dialog::Message::Cancel));
        assert!(app.upload.is_none());

        let asset = Asset::new("Dropped.mp4", AssetKind::Intro, AssetOrigin::Upload);
        let _ = app.update(Message::UploadBuilt(session, asset.clone()));

        assert_eq!(app.library.len(), before);
        assert!(app.library.get(asset.id).is_none());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn late_build_leaves_newer_dialog_open() {
        let mut app = App::default();
        let before = app.library.len();
        let session = submit_upload(&mut app, AssetKind::Intro, "/tmp/Old.mp4");
        let _ = app.update(Message::EscapePressed);
        request_upload(&mut app, AssetKind::Midtro);

        let asset = Asset::new("Old.mp4", AssetKind::Intro, AssetOrigin::Upload);
        let _ = app.update(Message::UploadBuilt(session, asset));

        let dialog = app.upload.as_ref().expect("newer dialog should stay open");
        assert_eq!(dialog.kind(), AssetKind::Midtro);
        assert_eq!(app.library.len(), before);
    }

    #[test]
    fn title_marks_unsaved_edits() {
        let mut app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));

        let asset = first_upload(&app);
        open(&mut app, &asset);
        assert!(!app.title().contains('*'));

        let _ = app.update(Message::Editor(asset_editor::Message::AddVariant(
            AspectRatio::Classic,
        )));
        assert!(app.title().contains('*'));
    }
}
