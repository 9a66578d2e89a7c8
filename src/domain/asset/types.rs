// SPDX-License-Identifier: MPL-2.0
//! Core asset record and its value types.

use super::aspect_ratio::AspectRatio;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// File extensions hidden from asset display names.
pub const KNOWN_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "mp4", "mov", "gif", "webp"];

/// Strips one trailing known extension (case-insensitive) from `title`.
///
/// Only a final `.ext` suffix is removed: `"Promo.mp4"` becomes `"Promo"`,
/// `"Promo.mp4.mov"` becomes `"Promo.mp4"`, and `"Promo.txt"` is unchanged.
#[must_use]
pub fn strip_known_extension(title: &str) -> &str {
    match title.rsplit_once('.') {
        Some((stem, ext))
            if KNOWN_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext)) =>
        {
            stem
        }
        _ => title,
    }
}

// =============================================================================
// Identity
// =============================================================================

/// Unique identifier for an asset, stable for the asset's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(u64);

impl AssetId {
    /// Allocates a new identifier, unique for the running process.
    pub fn fresh() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Which dashboard section an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    Intro,
    Midtro,
    Outro,
    Thumbnail,
    Overlay,
}

impl AssetKind {
    /// Returns the category an upload into this section is tagged with.
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            AssetKind::Intro => Category::Intros,
            AssetKind::Midtro => Category::Midtros,
            AssetKind::Outro => Category::Outros,
            AssetKind::Thumbnail => Category::Thumbnails,
            AssetKind::Overlay => Category::OverlayGraphics,
        }
    }

    /// Returns the i18n key of the section title.
    #[must_use]
    pub fn section_key(self) -> &'static str {
        self.category().i18n_key()
    }
}

/// Where an asset came from. Templates are shared and read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOrigin {
    Template,
    Upload,
}

impl AssetOrigin {
    #[must_use]
    pub fn is_template(self) -> bool {
        matches!(self, AssetOrigin::Template)
    }
}

/// Whether the underlying media is a video or a still image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFormat {
    #[default]
    Video,
    Image,
}

impl MediaFormat {
    /// Returns the extension shown next to draft names.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            MediaFormat::Video => "mp4",
            MediaFormat::Image => "png",
        }
    }

    /// Classifies a file extension. Unknown extensions are treated as video.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "webp" => MediaFormat::Image,
            _ => MediaFormat::Video,
        }
    }
}

/// Fixed category vocabulary an asset can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Intros,
    Midtros,
    Outros,
    Thumbnails,
    OverlayGraphics,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Intros,
        Category::Midtros,
        Category::Outros,
        Category::Thumbnails,
        Category::OverlayGraphics,
    ];

    /// Returns the i18n key for this category.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Intros => "category-intros",
            Category::Midtros => "category-midtros",
            Category::Outros => "category-outros",
            Category::Thumbnails => "category-thumbnails",
            Category::OverlayGraphics => "category-overlay-graphics",
        }
    }
}

// =============================================================================
// Asset Record
// =============================================================================

/// A media asset as shown on the dashboard.
///
/// `id`, `kind`, `origin` and the descriptive metadata are fixed once the
/// asset exists; `title`, `categories` and `aspect_ratios` are replaced as a
/// whole when an edit session saves.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub title: String,
    pub kind: AssetKind,
    pub origin: AssetOrigin,
    pub media_format: MediaFormat,
    pub categories: BTreeSet<Category>,
    /// Ordered, duplicate-free, never empty for assets created through the
    /// dashboard. Sample data may still carry an empty list.
    pub aspect_ratios: Vec<AspectRatio>,
    pub thumbnail: Option<PathBuf>,
    pub duration: Option<String>,
    pub file_size: String,
    pub date: String,
    pub created_by: Option<String>,
    pub last_modified: Option<String>,
}

impl Asset {
    /// Creates an asset with a fresh id, tagged with its section category and
    /// a single 16:9 variant.
    pub fn new(title: impl Into<String>, kind: AssetKind, origin: AssetOrigin) -> Self {
        Self {
            id: AssetId::fresh(),
            title: title.into(),
            kind,
            origin,
            media_format: MediaFormat::default(),
            categories: BTreeSet::from([kind.category()]),
            aspect_ratios: vec![AspectRatio::DEFAULT],
            thumbnail: None,
            duration: None,
            file_size: String::new(),
            date: String::new(),
            created_by: None,
            last_modified: None,
        }
    }

    #[must_use]
    pub fn with_media_format(mut self, format: MediaFormat) -> Self {
        self.media_format = format;
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Replaces the variant list, dropping duplicates while keeping the first
    /// occurrence of each ratio.
    #[must_use]
    pub fn with_aspect_ratios<R>(mut self, ratios: impl IntoIterator<Item = R>) -> Self
    where
        R: Into<AspectRatio>,
    {
        let mut unique: Vec<AspectRatio> = Vec::new();
        for ratio in ratios.into_iter().map(Into::into) {
            if !unique.contains(&ratio) {
                unique.push(ratio);
            }
        }
        self.aspect_ratios = unique;
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, path: impl Into<PathBuf>) -> Self {
        self.thumbnail = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn with_file_size(mut self, size: impl Into<String>) -> Self {
        self.file_size = size.into();
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn with_created_by(mut self, author: impl Into<String>) -> Self {
        self.created_by = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_last_modified(mut self, when: impl Into<String>) -> Self {
        self.last_modified = Some(when.into());
        self
    }

    /// Returns the title without its trailing media extension.
    #[must_use]
    pub fn display_name(&self) -> &str {
        strip_known_extension(&self.title)
    }

    /// Returns `true` if this asset is offered in the given ratio.
    #[must_use]
    pub fn has_ratio(&self, ratio: &AspectRatio) -> bool {
        self.aspect_ratios.contains(ratio)
    }

    #[must_use]
    pub fn is_template(&self) -> bool {
        self.origin.is_template()
    }
}
