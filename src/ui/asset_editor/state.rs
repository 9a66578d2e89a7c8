// SPDX-License-Identifier: MPL-2.0
//! Edit session state: the draft, its frozen baseline and the pending close.

use crate::domain::asset::{strip_known_extension, AspectRatio, Asset, Category};
use std::collections::{BTreeSet, HashSet};
use std::time::{Duration, Instant};

/// Editable copy of an asset's name, categories and variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub categories: BTreeSet<Category>,
    /// Never empty, never contains duplicates.
    pub aspect_ratios: Vec<AspectRatio>,
}

impl Draft {
    fn from_asset(asset: &Asset) -> Self {
        let aspect_ratios = if asset.aspect_ratios.is_empty() {
            vec![AspectRatio::DEFAULT]
        } else {
            asset.aspect_ratios.clone()
        };

        Self {
            name: strip_known_extension(&asset.title).to_string(),
            categories: asset.categories.clone(),
            aspect_ratios,
        }
    }

    fn ratio_set(&self) -> HashSet<&AspectRatio> {
        self.aspect_ratios.iter().collect()
    }
}

/// Whether the session may modify the asset. Fixed when the session opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    /// Shared template, read-only.
    Template,
    /// User upload; `baseline` is the draft as it was at open time.
    Upload { baseline: Draft },
}

/// Close scheduled after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClose {
    deadline: Instant,
}

impl PendingClose {
    #[must_use]
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Fixed preview box (width, height) for a variant thumbnail.
#[must_use]
pub fn preview_size(ratio: &AspectRatio) -> (f32, f32) {
    match ratio {
        AspectRatio::Widescreen => (80.0, 45.0),
        AspectRatio::Vertical => (28.0, 50.0),
        AspectRatio::Square => (50.0, 50.0),
        AspectRatio::Portrait => (40.0, 50.0),
        AspectRatio::Classic => (67.0, 50.0),
        AspectRatio::Cinematic => (80.0, 34.0),
        AspectRatio::ClassicPortrait | AspectRatio::Custom(_) => (80.0, 45.0),
    }
}

/// One open edit session over a single asset.
///
/// Dropping the session discards the draft together with any pending close,
/// so a close scheduled by a previous session can never reach a newer one.
#[derive(Debug, Clone)]
pub struct State {
    asset: Asset,
    mode: EditMode,
    draft: Draft,
    selected_variant: AspectRatio,
    is_playing: bool,
    confirm_delete: Option<AspectRatio>,
    close_delay: Duration,
    pending_close: Option<PendingClose>,
}

impl State {
    /// Opens a session; the mode follows the asset's origin.
    pub fn open(asset: Asset, close_delay: Duration) -> Self {
        let draft = Draft::from_asset(&asset);
        let mode = if asset.is_template() {
            EditMode::Template
        } else {
            EditMode::Upload {
                baseline: draft.clone(),
            }
        };
        let selected_variant = draft
            .aspect_ratios
            .first()
            .cloned()
            .unwrap_or(AspectRatio::DEFAULT);

        tracing::debug!(
            asset = asset.id.value(),
            template = asset.is_template(),
            "edit session opened"
        );

        Self {
            asset,
            mode,
            draft,
            selected_variant,
            is_playing: false,
            confirm_delete: None,
            close_delay,
            pending_close: None,
        }
    }

    #[must_use]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    #[must_use]
    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    #[must_use]
    pub fn is_template(&self) -> bool {
        matches!(self.mode, EditMode::Template)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.draft.name
    }

    #[must_use]
    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.draft.categories
    }

    #[must_use]
    pub fn aspect_ratios(&self) -> &[AspectRatio] {
        &self.draft.aspect_ratios
    }

    #[must_use]
    pub fn selected_variant(&self) -> &AspectRatio {
        &self.selected_variant
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn confirm_delete(&self) -> Option<&AspectRatio> {
        self.confirm_delete.as_ref()
    }

    /// Returns `true` once a save has scheduled the close.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.pending_close.is_some()
    }

    #[must_use]
    pub fn pending_close(&self) -> Option<PendingClose> {
        self.pending_close
    }

    /// Header title: the draft name plus the media extension.
    #[must_use]
    pub fn header_title(&self) -> String {
        format!("{}.{}", self.draft.name, self.asset.media_format.extension())
    }

    /// File name shown on a variant row, e.g. `Promo_9x16.mp4`.
    #[must_use]
    pub fn variant_file_name(&self, ratio: &AspectRatio) -> String {
        format!("{}_{}.mp4", self.draft.name, ratio.file_tag())
    }

    /// Catalog ratios not yet present in the draft, in catalog order.
    #[must_use]
    pub fn available_to_add(&self) -> Vec<AspectRatio> {
        AspectRatio::catalog()
            .iter()
            .filter(|ratio| !self.draft.aspect_ratios.contains(ratio))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn can_delete_variant(&self) -> bool {
        self.is_editable() && self.draft.aspect_ratios.len() > 1
    }

    /// Compares the draft with the baseline frozen at open time. Variant
    /// order is ignored. Always `false` for templates.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match &self.mode {
            EditMode::Template => false,
            EditMode::Upload { baseline } => {
                self.draft.name != baseline.name
                    || self.draft.categories != baseline.categories
                    || self.draft.ratio_set() != baseline.ratio_set()
            }
        }
    }

    #[must_use]
    pub fn can_save(&self) -> bool {
        self.is_editable() && self.is_dirty()
    }

    fn is_editable(&self) -> bool {
        !self.is_template() && !self.is_closing()
    }

    pub fn rename(&mut self, name: String) {
        if self.is_editable() {
            self.draft.name = name;
        }
    }

    /// Adds the category if absent, removes it otherwise.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.is_editable() {
            return;
        }
        if !self.draft.categories.remove(&category) {
            self.draft.categories.insert(category);
        }
    }

    /// Appends a variant. Returns `false` when it was already present.
    pub fn add_variant(&mut self, ratio: AspectRatio) -> bool {
        if !self.is_editable() || self.draft.aspect_ratios.contains(&ratio) {
            return false;
        }
        self.draft.aspect_ratios.push(ratio);
        true
    }

    /// Removes a variant unless it is the last one. Deleting the selected
    /// variant reselects the first remaining one.
    pub fn delete_variant(&mut self, ratio: &AspectRatio) -> bool {
        if !self.can_delete_variant() {
            tracing::debug!(ratio = %ratio, "refusing to delete variant");
            return false;
        }
        let Some(pos) = self.draft.aspect_ratios.iter().position(|r| r == ratio) else {
            return false;
        };

        self.draft.aspect_ratios.remove(pos);
        if &self.selected_variant == ratio {
            self.selected_variant = self
                .draft
                .aspect_ratios
                .first()
                .cloned()
                .unwrap_or(AspectRatio::DEFAULT);
        }
        true
    }

    /// Asks for confirmation before deleting `ratio`.
    pub fn request_delete(&mut self, ratio: AspectRatio) {
        if self.can_delete_variant() {
            self.confirm_delete = Some(ratio);
        }
    }

    /// Deletes the variant awaiting confirmation, if any.
    pub fn confirm_pending_delete(&mut self) -> bool {
        match self.confirm_delete.take() {
            Some(ratio) => self.delete_variant(&ratio),
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Selects a variant for preview. Works in both modes.
    pub fn select_variant(&mut self, ratio: AspectRatio) {
        if self.draft.aspect_ratios.contains(&ratio) {
            self.selected_variant = ratio;
        }
    }

    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Builds the saved asset and schedules the close. Returns `None` when
    /// nothing can be saved.
    pub fn save(&mut self, now: Instant) -> Option<Asset> {
        if !self.can_save() {
            return None;
        }

        let mut saved = self.asset.clone();
        saved.title = self.draft.name.clone();
        saved.categories = self.draft.categories.clone();
        saved.aspect_ratios = self.draft.aspect_ratios.clone();

        self.confirm_delete = None;
        self.pending_close = Some(PendingClose::new(now, self.close_delay));
        tracing::info!(asset = saved.id.value(), title = %saved.title, "asset changes saved");

        Some(saved)
    }

    /// Returns `true` when the scheduled close is due at `now`.
    #[must_use]
    pub fn close_due(&self, now: Instant) -> bool {
        self.pending_close.is_some_and(|pending| pending.is_due(now))
    }
}
