// SPDX-License-Identifier: MPL-2.0
//! Aspect ratio value type.
//!
//! Every asset ships as one or more *variants*, one per aspect ratio. Known
//! ratios get their own variant so that the editor can attach orientation
//! labels and preview sizes; anything else read from data is kept verbatim
//! as [`AspectRatio::Custom`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An aspect ratio label such as `16:9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AspectRatio {
    /// 16:9 landscape.
    Widescreen,
    /// 9:16 portrait.
    Vertical,
    /// 1:1.
    Square,
    /// 4:5 portrait.
    Portrait,
    /// 4:3 landscape.
    Classic,
    /// 21:9 cinematic.
    Cinematic,
    /// 3:4 portrait.
    ClassicPortrait,
    /// Any other label, preserved as written.
    Custom(String),
}

/// Ratios that can be added as variants in the asset editor, in display order.
pub static VARIANT_CATALOG: [AspectRatio; 6] = [
    AspectRatio::Widescreen,
    AspectRatio::Vertical,
    AspectRatio::Square,
    AspectRatio::Portrait,
    AspectRatio::Classic,
    AspectRatio::Cinematic,
];

/// Ratios offered by the per-section filter bar (after "All").
pub static SECTION_FILTERS: [AspectRatio; 5] = [
    AspectRatio::Widescreen,
    AspectRatio::Vertical,
    AspectRatio::ClassicPortrait,
    AspectRatio::Portrait,
    AspectRatio::Square,
];

/// Coarse orientation used for the "16:9 (Landscape)" style labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
    Cinematic,
}

impl Orientation {
    /// Returns the i18n key for this orientation.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Orientation::Landscape => "orientation-landscape",
            Orientation::Portrait => "orientation-portrait",
            Orientation::Square => "orientation-square",
            Orientation::Cinematic => "orientation-cinematic",
        }
    }
}

impl AspectRatio {
    /// The ratio used when an asset or draft has no ratio to fall back on.
    pub const DEFAULT: AspectRatio = AspectRatio::Widescreen;

    /// Returns the canonical `W:H` label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "4:5",
            AspectRatio::Classic => "4:3",
            AspectRatio::Cinematic => "21:9",
            AspectRatio::ClassicPortrait => "3:4",
            AspectRatio::Custom(label) => label,
        }
    }

    /// Returns the orientation for ratios that belong to the variant catalog.
    #[must_use]
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            AspectRatio::Widescreen | AspectRatio::Classic => Some(Orientation::Landscape),
            AspectRatio::Vertical | AspectRatio::Portrait => Some(Orientation::Portrait),
            AspectRatio::Square => Some(Orientation::Square),
            AspectRatio::Cinematic => Some(Orientation::Cinematic),
            AspectRatio::ClassicPortrait | AspectRatio::Custom(_) => None,
        }
    }

    /// Returns the label in file-name form, `16:9` becoming `16x9`.
    #[must_use]
    pub fn file_tag(&self) -> String {
        self.label().replace(':', "x")
    }

    /// Returns the variants that can be added in the editor.
    #[must_use]
    pub fn catalog() -> &'static [AspectRatio] {
        &VARIANT_CATALOG
    }
}

impl FromStr for AspectRatio {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed {
            "16:9" => AspectRatio::Widescreen,
            "9:16" => AspectRatio::Vertical,
            "1:1" => AspectRatio::Square,
            "4:5" => AspectRatio::Portrait,
            "4:3" => AspectRatio::Classic,
            "21:9" => AspectRatio::Cinematic,
            "3:4" => AspectRatio::ClassicPortrait,
            other => AspectRatio::Custom(other.to_string()),
        })
    }
}

impl From<&str> for AspectRatio {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(ratio) => ratio,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_parse_to_named_variants() {
        assert_eq!(AspectRatio::from("16:9"), AspectRatio::Widescreen);
        assert_eq!(AspectRatio::from("9:16"), AspectRatio::Vertical);
        assert_eq!(AspectRatio::from(" 3:4 "), AspectRatio::ClassicPortrait);
    }

    #[test]
    fn unknown_labels_are_preserved_verbatim() {
        let ratio = AspectRatio::from("2.39:1");
        assert_eq!(ratio, AspectRatio::Custom("2.39:1".to_string()));
        assert_eq!(ratio.to_string(), "2.39:1");
        assert!(ratio.orientation().is_none());
    }

    #[test]
    fn catalog_lists_six_ratios_and_excludes_three_by_four() {
        let labels: Vec<&str> = AspectRatio::catalog().iter().map(AspectRatio::label).collect();
        assert_eq!(labels, ["16:9", "9:16", "1:1", "4:5", "4:3", "21:9"]);
    }

    #[test]
    fn section_filters_follow_dashboard_order() {
        let labels: Vec<&str> = SECTION_FILTERS.iter().map(AspectRatio::label).collect();
        assert_eq!(labels, ["16:9", "9:16", "3:4", "4:5", "1:1"]);
    }

    #[test]
    fn file_tag_replaces_colon() {
        assert_eq!(AspectRatio::Cinematic.file_tag(), "21x9");
    }

    #[test]
    fn every_catalog_entry_has_an_orientation() {
        assert!(AspectRatio::catalog()
            .iter()
            .all(|ratio| ratio.orientation().is_some()));
    }
}
