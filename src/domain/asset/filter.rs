// SPDX-License-Identifier: MPL-2.0
//! Asset filtering types for the domain layer.
//!
//! # Available Filters
//!
//! - [`SearchQuery`]: Case-insensitive substring match on titles
//! - [`AspectFilter`]: Per-section filter on offered aspect ratios

use super::aspect_ratio::{AspectRatio, SECTION_FILTERS};
use super::types::Asset;
use std::fmt;

// =============================================================================
// Search Query
// =============================================================================

/// Free-text title search.
///
/// The query is lower-cased once on construction; an empty query matches
/// every asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// Returns the text exactly as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns `true` if the asset title contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        self.is_empty() || asset.title.to_lowercase().contains(&self.needle)
    }
}

// =============================================================================
// Aspect Filter
// =============================================================================

/// Section-local aspect-ratio filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AspectFilter {
    /// Show every asset.
    #[default]
    All,
    /// Show only assets offered in this ratio.
    Only(AspectRatio),
}

impl AspectFilter {
    /// Returns the choices offered in a section header, "All" first.
    #[must_use]
    pub fn choices() -> Vec<AspectFilter> {
        std::iter::once(AspectFilter::All)
            .chain(SECTION_FILTERS.iter().cloned().map(AspectFilter::Only))
            .collect()
    }

    /// Returns `true` if this filter matches the given asset.
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        match self {
            Self::All => true,
            Self::Only(ratio) => asset.has_ratio(ratio),
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

impl fmt::Display for AspectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(ratio) => write!(f, "{ratio}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::{AssetKind, AssetOrigin};

    fn asset(title: &str, ratios: &[&str]) -> Asset {
        Asset::new(title, AssetKind::Intro, AssetOrigin::Upload)
            .with_aspect_ratios(ratios.iter().copied())
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let query = SearchQuery::new("sport");
        assert!(query.matches(&asset("Sports Open.mp4", &["16:9"])));
        assert!(!query.matches(&asset("Logo.png", &["16:9"])));
    }

    #[test]
    fn uppercase_query_matches_lowercase_title() {
        let query = SearchQuery::new("LOGO");
        assert!(query.matches(&asset("animated logo sting.mp4", &["1:1"])));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = SearchQuery::default();
        assert!(query.is_empty());
        assert!(query.matches(&asset("anything", &["16:9"])));
    }

    #[test]
    fn aspect_filter_keeps_assets_offering_the_ratio() {
        let filter = AspectFilter::Only(AspectRatio::Vertical);
        assert!(!filter.matches(&asset("a", &["16:9"])));
        assert!(filter.matches(&asset("b", &["9:16", "1:1"])));
    }

    #[test]
    fn all_filter_is_inactive_and_matches() {
        assert!(!AspectFilter::All.is_active());
        assert!(AspectFilter::All.matches(&asset("a", &["21:9"])));
        assert!(AspectFilter::Only(AspectRatio::Square).is_active());
    }

    #[test]
    fn choices_start_with_all() {
        let choices = AspectFilter::choices();
        assert_eq!(choices.len(), 6);
        assert_eq!(choices[0], AspectFilter::All);
        assert_eq!(choices[3].to_string(), "3:4");
    }
}
