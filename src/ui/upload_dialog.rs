// SPDX-License-Identifier: MPL-2.0
//! Upload dialog opened from a section card.
//!
//! The dialog collects a file, a name and the initial variants. Picking the
//! file and reading its size are asynchronous; the component only reports
//! [`Event`]s and the application turns them into tasks.

use crate::domain::asset::{AspectRatio, Asset, AssetKind, AssetOrigin, MediaFormat};
use crate::i18n::fluent::I18n;
use crate::ui::asset_editor::ratio_label;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, checkbox, text, text_input, Column, Container, Row, Space};
use iced::{Element, Length};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Author recorded on assets uploaded from this dashboard.
pub const UPLOAD_AUTHOR: &str = "You";

/// Date format shared with the bundled sample data ("Jan 12, 2025").
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Extensions offered by the native file picker.
const PICKER_EXTENSIONS: [&str; 7] = ["mp4", "mov", "webp", "gif", "png", "jpg", "jpeg"];

/// Identifies one opening of the dialog. A build result is only accepted by
/// the dialog session that submitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Everything needed to build the uploaded asset.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub session: SessionId,
    pub kind: AssetKind,
    pub path: PathBuf,
    pub name: String,
    pub aspect_ratios: Vec<AspectRatio>,
}

#[derive(Debug, Clone)]
pub struct State {
    session: SessionId,
    kind: AssetKind,
    file: Option<PathBuf>,
    name: String,
    aspect_ratios: Vec<AspectRatio>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Browse,
    FilePicked(Option<PathBuf>),
    NameChanged(String),
    ToggleRatio(AspectRatio),
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The native file picker should be shown.
    PickFile,
    /// The user confirmed; the asset still has to be built.
    Submit(UploadRequest),
    Cancelled,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn new(kind: AssetKind) -> Self {
        Self {
            session: SessionId::next(),
            kind,
            file: None,
            name: String::new(),
            aspect_ratios: vec![AspectRatio::DEFAULT],
            submitting: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Whether `session` is this dialog and its build is still awaited.
    #[must_use]
    pub fn awaits_build(&self, session: SessionId) -> bool {
        self.submitting && self.session == session
    }

    #[must_use]
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn aspect_ratios(&self) -> &[AspectRatio] {
        &self.aspect_ratios
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.aspect_ratios.is_empty() && !self.submitting
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Browse => {
                if !self.submitting {
                    return Event::PickFile;
                }
            }
            Message::FilePicked(Some(path)) => {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    self.name = stem.to_string();
                }
                self.file = Some(path);
            }
            Message::FilePicked(None) => {}
            Message::NameChanged(name) => self.name = name,
            Message::ToggleRatio(ratio) => self.toggle_ratio(ratio),
            Message::Submit => {
                if let Some(request) = self.request() {
                    self.submitting = true;
                    return Event::Submit(request);
                }
            }
            Message::Cancel => return Event::Cancelled,
        }
        Event::None
    }

    /// Selects or deselects a ratio. The last selected ratio stays selected.
    fn toggle_ratio(&mut self, ratio: AspectRatio) {
        if let Some(pos) = self.aspect_ratios.iter().position(|r| *r == ratio) {
            if self.aspect_ratios.len() > 1 {
                self.aspect_ratios.remove(pos);
            }
        } else {
            self.aspect_ratios.push(ratio);
        }
    }

    fn request(&self) -> Option<UploadRequest> {
        if !self.can_submit() {
            return None;
        }
        let path = self.file.clone()?;

        // Keep catalog order regardless of click order.
        let aspect_ratios = AspectRatio::catalog()
            .iter()
            .filter(|ratio| self.aspect_ratios.contains(ratio))
            .cloned()
            .collect();

        Some(UploadRequest {
            session: self.session,
            kind: self.kind,
            path,
            name: self.name.trim().to_string(),
            aspect_ratios,
        })
    }
}

/// Shows the native file picker.
pub async fn pick_file(title: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Media", &PICKER_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Builds the uploaded asset, reading the file size from disk.
///
/// A file that can no longer be read still uploads, with an empty size label.
pub async fn build_asset(request: UploadRequest) -> Asset {
    let file_size = match tokio::fs::metadata(&request.path).await {
        Ok(metadata) => format_file_size(metadata.len()),
        Err(err) => {
            tracing::warn!(path = %request.path.display(), %err, "could not read upload size");
            String::new()
        }
    };

    let extension = request
        .path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let stem = request
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let name = if request.name.is_empty() {
        stem
    } else {
        request.name.as_str()
    };
    let title = match &extension {
        Some(ext) => format!("{name}.{ext}"),
        None => name.to_string(),
    };
    let media_format = extension
        .as_deref()
        .map_or(MediaFormat::Video, MediaFormat::from_extension);

    let mut asset = Asset::new(title, request.kind, AssetOrigin::Upload)
        .with_media_format(media_format)
        .with_aspect_ratios(request.aspect_ratios)
        .with_file_size(file_size)
        .with_date(chrono::Local::now().format(DATE_FORMAT).to_string())
        .with_created_by(UPLOAD_AUTHOR);

    // Still images are their own thumbnail.
    if media_format == MediaFormat::Image {
        asset = asset.with_thumbnail(request.path);
    }
    asset
}

/// Formats a byte count the way the dashboard shows sizes ("24.6 MB").
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let category = i18n.tr(state.kind.category().i18n_key());
    let title = i18n.tr_with_args("upload-title", &[("category", category.as_str())]);

    let file_label = state.file.as_ref().map_or_else(
        || i18n.tr("upload-no-file"),
        |path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        },
    );

    let file_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(text(i18n.tr("upload-browse")).size(typography::BODY_SM))
                .on_press_maybe((!state.submitting).then_some(Message::Browse))
                .style(styles::button::secondary),
        )
        .push(text(file_label).size(typography::BODY_SM));

    let name_input = text_input(&i18n.tr("upload-name-placeholder"), &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let ratios = AspectRatio::catalog()
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, ratio| {
            let message = Message::ToggleRatio(ratio.clone());
            column.push(
                checkbox(state.aspect_ratios.contains(ratio))
                    .label(ratio_label(ratio, i18n))
                    .on_toggle(move |_| message.clone()),
            )
        });

    let submit_label = if state.submitting {
        i18n.tr("upload-in-progress")
    } else {
        i18n.tr("upload-submit")
    };

    let footer = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("upload-cancel")).size(typography::BODY_SM))
                .on_press(Message::Cancel)
                .style(styles::button::secondary),
        )
        .push(
            button(text(submit_label).size(typography::BODY_SM))
                .on_press_maybe(state.can_submit().then_some(Message::Submit))
                .style(styles::button::primary),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(text(title).size(typography::TITLE_SM))
        .push(file_row)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(text(i18n.tr("upload-name-label")).size(typography::BODY_SM))
                .push(name_input),
        )
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(text(i18n.tr("upload-ratios-label")).size(typography::BODY_SM))
                .push(ratios),
        )
        .push(footer);

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::Category;
    use std::io::Write;

    fn picked(path: &str) -> State {
        let mut state = State::new(AssetKind::Midtro);
        state.update(Message::FilePicked(Some(PathBuf::from(path))));
        state
    }

    #[test]
    fn new_dialog_defaults_to_widescreen_without_file() {
        let state = State::new(AssetKind::Intro);
        assert_eq!(state.aspect_ratios(), &[AspectRatio::Widescreen]);
        assert!(state.file().is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn browse_requests_file_picker() {
        let mut state = State::new(AssetKind::Intro);
        assert_eq!(state.update(Message::Browse), Event::PickFile);
    }

    #[test]
    fn picking_a_file_prefills_name_from_stem() {
        let state = picked("/videos/Kickoff Intro.mp4");
        assert_eq!(state.name(), "Kickoff Intro");
        assert!(state.can_submit());
    }

    #[test]
    fn cancelled_picker_keeps_state() {
        let mut state = picked("/videos/a.mp4");
        state.update(Message::FilePicked(None));
        assert_eq!(state.file(), Some(Path::new("/videos/a.mp4")));
    }

    #[test]
    fn last_ratio_cannot_be_deselected() {
        let mut state = State::new(AssetKind::Intro);
        state.update(Message::ToggleRatio(AspectRatio::Widescreen));
        assert_eq!(state.aspect_ratios(), &[AspectRatio::Widescreen]);
    }

    #[test]
    fn submit_orders_ratios_by_catalog() {
        let mut state = picked("/videos/clip.mov");
        state.update(Message::ToggleRatio(AspectRatio::Square));
        state.update(Message::ToggleRatio(AspectRatio::Vertical));

        let Event::Submit(request) = state.update(Message::Submit) else {
            panic!("expected submit event");
        };
        assert_eq!(request.kind, AssetKind::Midtro);
        assert_eq!(
            request.aspect_ratios,
            vec![
                AspectRatio::Widescreen,
                AspectRatio::Vertical,
                AspectRatio::Square
            ]
        );
    }

    #[test]
    fn submitting_twice_is_ignored() {
        let mut state = picked("/videos/clip.mov");
        assert!(matches!(state.update(Message::Submit), Event::Submit(_)));
        assert_eq!(state.update(Message::Submit), Event::None);
    }

    #[test]
    fn only_the_submitting_session_awaits_a_build() {
        let mut state = picked("/videos/clip.mov");
        let other = State::new(AssetKind::Midtro);
        assert!(!state.awaits_build(state.session()));

        let Event::Submit(request) = state.update(Message::Submit) else {
            panic!("expected submit event");
        };
        assert_eq!(request.session, state.session());
        assert!(state.awaits_build(request.session));
        assert!(!other.awaits_build(request.session));
        assert_ne!(other.session(), state.session());
    }

    #[test]
    fn cancel_reports_cancelled() {
        let mut state = picked("/videos/clip.mov");
        assert_eq!(state.update(Message::Cancel), Event::Cancelled);
    }

    #[test]
    fn file_sizes_are_human_readable() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(25_794_150), "24.6 MB");
    }

    #[tokio::test]
    async fn build_asset_fills_upload_metadata() {
        let mut file = tempfile::Builder::new()
            .suffix(".mp4")
            .tempfile()
            .expect("create temp file");
        file.write_all(&[0u8; 2048]).expect("write temp file");

        let request = UploadRequest {
            session: SessionId::next(),
            kind: AssetKind::Intro,
            path: file.path().to_path_buf(),
            name: "Kickoff".to_string(),
            aspect_ratios: vec![AspectRatio::Widescreen, AspectRatio::Square],
        };
        let asset = build_asset(request).await;

        assert_eq!(asset.title, "Kickoff.mp4");
        assert_eq!(asset.display_name(), "Kickoff");
        assert_eq!(asset.origin, AssetOrigin::Upload);
        assert_eq!(asset.media_format, MediaFormat::Video);
        assert!(asset.categories.contains(&Category::Intros));
        assert_eq!(asset.file_size, "2.0 KB");
        assert_eq!(asset.created_by.as_deref(), Some(UPLOAD_AUTHOR));
        assert!(!asset.date.is_empty());
        assert!(asset.thumbnail.is_none());
    }

    #[tokio::test]
    async fn build_asset_survives_missing_file() {
        let request = UploadRequest {
            session: SessionId::next(),
            kind: AssetKind::Midtro,
            path: PathBuf::from("/definitely/not/here/cover.png"),
            name: String::new(),
            aspect_ratios: vec![AspectRatio::Square],
        };
        let asset = build_asset(request).await;

        assert_eq!(asset.title, "cover.png");
        assert_eq!(asset.media_format, MediaFormat::Image);
        assert!(asset.file_size.is_empty());
        assert!(asset.thumbnail.is_some());
    }
}
