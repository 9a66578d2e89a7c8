// SPDX-License-Identifier: MPL-2.0
//! The in-memory asset collection backing the dashboard.
//!
//! [`AssetLibrary`] is the single source of truth for assets during a
//! session. Views never hold their own copies: they ask the library for a
//! filtered, grouped snapshot on every render and report changes back as
//! whole assets (a new upload, or a saved edit).

pub mod sample;

use crate::domain::asset::{Asset, AssetId, AssetKind, Category, SearchQuery};
use std::collections::BTreeMap;

/// Sections rendered on the dashboard, in order.
pub const DASHBOARD_SECTIONS: [AssetKind; 2] = [AssetKind::Intro, AssetKind::Midtro];

/// A titled slice of the filtered collection.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub kind: AssetKind,
    pub assets: Vec<&'a Asset>,
}

impl Section<'_> {
    #[must_use]
    pub fn count(&self) -> usize {
        self.assets.len()
    }
}

/// Ordered asset collection, most recent upload first.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    assets: Vec<Asset>,
}

impl AssetLibrary {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Creates a library seeded with the bundled sample assets.
    pub fn with_sample_data() -> Self {
        Self::new(sample::assets())
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    /// Returns every asset whose title matches `query`, in collection order.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|asset| query.matches(asset))
            .collect()
    }

    /// Partitions the matches of `query` by kind. Every matching asset lands
    /// in exactly one group; order inside a group follows the collection.
    #[must_use]
    pub fn group_by_kind(&self, query: &SearchQuery) -> BTreeMap<AssetKind, Vec<&Asset>> {
        let mut groups: BTreeMap<AssetKind, Vec<&Asset>> = BTreeMap::new();
        for asset in self.search(query) {
            groups.entry(asset.kind).or_default().push(asset);
        }
        groups
    }

    /// Returns the dashboard sections for `query`. Sections are always
    /// present, even when empty.
    #[must_use]
    pub fn sections(&self, query: &SearchQuery) -> Vec<Section<'_>> {
        let mut groups = self.group_by_kind(query);
        DASHBOARD_SECTIONS
            .iter()
            .map(|&kind| Section {
                kind,
                assets: groups.remove(&kind).unwrap_or_default(),
            })
            .collect()
    }

    /// Number of assets tagged with `category`.
    #[must_use]
    pub fn count_in_category(&self, category: Category) -> usize {
        self.assets
            .iter()
            .filter(|asset| asset.categories.contains(&category))
            .count()
    }

    /// Adds a freshly uploaded asset at the front of the collection.
    pub fn receive_upload(&mut self, asset: Asset) {
        tracing::info!(id = asset.id.value(), title = %asset.title, "asset uploaded");
        self.assets.insert(0, asset);
    }

    /// Replaces the asset with the same id, keeping its position.
    ///
    /// Returns `false` if no asset with that id exists.
    pub fn replace(&mut self, asset: Asset) -> bool {
        match self.assets.iter_mut().find(|existing| existing.id == asset.id) {
            Some(slot) => {
                tracing::info!(id = asset.id.value(), title = %asset.title, "asset updated");
                *slot = asset;
                true
            }
            None => {
                tracing::warn!(id = asset.id.value(), "saved asset no longer in library");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::AssetOrigin;

    fn library() -> AssetLibrary {
        AssetLibrary::new(vec![
            Asset::new("Sports Open.mp4", AssetKind::Intro, AssetOrigin::Upload),
            Asset::new("Logo.png", AssetKind::Midtro, AssetOrigin::Template),
            Asset::new("Outro Sting.mov", AssetKind::Outro, AssetOrigin::Upload),
        ])
    }

    #[test]
    fn search_returns_only_matching_titles() {
        let library = library();
        let hits = library.search(&SearchQuery::new("sport"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Sports Open.mp4");
    }

    #[test]
    fn group_by_kind_is_exclusive() {
        let library = library();
        let groups = library.group_by_kind(&SearchQuery::default());
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, library.len());
        assert_eq!(groups[&AssetKind::Outro].len(), 1);
    }

    #[test]
    fn sections_include_empty_dashboard_groups() {
        let library = library();
        let sections = library.sections(&SearchQuery::new("logo"));
        assert_eq!(sections.len(), DASHBOARD_SECTIONS.len());
        assert_eq!(sections[0].kind, AssetKind::Intro);
        assert_eq!(sections[0].count(), 0);
        assert_eq!(sections[1].count(), 1);
    }

    #[test]
    fn receive_upload_prepends() {
        let mut library = library();
        let upload = Asset::new("New.mp4", AssetKind::Intro, AssetOrigin::Upload);
        let id = upload.id;
        library.receive_upload(upload);
        assert_eq!(library.assets()[0].id, id);
        assert_eq!(library.len(), 4);
    }

    #[test]
    fn replace_swaps_record_in_place() {
        let mut library = library();
        let mut edited = library.assets()[1].clone();
        edited.title = "Logo Reveal".to_string();

        assert!(library.replace(edited));
        assert_eq!(library.assets()[1].title, "Logo Reveal");
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn replace_unknown_id_is_rejected() {
        let mut library = library();
        let stranger = Asset::new("Ghost.mp4", AssetKind::Intro, AssetOrigin::Upload);
        assert!(!library.replace(stranger));
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn count_in_category_uses_tags() {
        let library = library();
        assert_eq!(library.count_in_category(Category::Intros), 1);
        assert_eq!(library.count_in_category(Category::Thumbnails), 0);
    }
}
