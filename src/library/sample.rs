// SPDX-License-Identifier: MPL-2.0
//! Bundled sample assets shown on first launch.

use crate::domain::asset::{Asset, AssetKind, AssetOrigin, Category, MediaFormat};

const TEMPLATE_AUTHOR: &str = "WSC Sport";

/// Returns the seed collection: a mix of shared templates and uploads for
/// the intro and midtro sections, plus a few assets from other sections so
/// that sidebar counts are non-trivial.
#[must_use]
pub fn assets() -> Vec<Asset> {
    vec![
        Asset::new("Sports Open.mp4", AssetKind::Intro, AssetOrigin::Template)
            .with_aspect_ratios(["16:9", "9:16", "1:1"])
            .with_duration("0:08")
            .with_file_size("24.6 MB")
            .with_date("Jan 12, 2025")
            .with_created_by(TEMPLATE_AUTHOR),
        Asset::new("Matchday Countdown.mp4", AssetKind::Intro, AssetOrigin::Upload)
            .with_aspect_ratios(["16:9", "4:5"])
            .with_duration("0:12")
            .with_file_size("31.2 MB")
            .with_date("Feb 3, 2025")
            .with_last_modified("Feb 10, 2025"),
        Asset::new("Stadium Flyover.mov", AssetKind::Intro, AssetOrigin::Upload)
            .with_categories([Category::Intros, Category::Outros])
            .with_aspect_ratios(["16:9", "21:9"])
            .with_duration("0:15")
            .with_file_size("48.9 MB")
            .with_date("Feb 18, 2025"),
        Asset::new("Team Lineup Intro.mp4", AssetKind::Intro, AssetOrigin::Template)
            .with_aspect_ratios(["9:16", "3:4"])
            .with_duration("0:10")
            .with_file_size("18.4 MB")
            .with_date("Mar 1, 2025")
            .with_created_by(TEMPLATE_AUTHOR),
        Asset::new("Halftime Break.mp4", AssetKind::Midtro, AssetOrigin::Template)
            .with_aspect_ratios(["16:9", "1:1"])
            .with_duration("0:06")
            .with_file_size("12.7 MB")
            .with_date("Jan 20, 2025"),
        Asset::new("Sponsor Bumper.mp4", AssetKind::Midtro, AssetOrigin::Upload)
            .with_aspect_ratios(["16:9", "9:16", "4:5"])
            .with_duration("0:05")
            .with_file_size("9.8 MB")
            .with_date("Feb 27, 2025"),
        Asset::new("Replay Transition.webp", AssetKind::Midtro, AssetOrigin::Upload)
            .with_media_format(MediaFormat::Image)
            .with_categories([Category::Midtros, Category::OverlayGraphics])
            .with_aspect_ratios(["1:1"])
            .with_file_size("2.1 MB")
            .with_date("Mar 5, 2025"),
        Asset::new("Final Whistle.mp4", AssetKind::Outro, AssetOrigin::Upload)
            .with_aspect_ratios(["16:9"])
            .with_duration("0:09")
            .with_file_size("15.3 MB")
            .with_date("Mar 9, 2025"),
        Asset::new("Scoreboard Lower Third.png", AssetKind::Overlay, AssetOrigin::Template)
            .with_media_format(MediaFormat::Image)
            .with_aspect_ratios(["16:9", "9:16"])
            .with_file_size("640 KB")
            .with_date("Dec 2, 2024")
            .with_created_by(TEMPLATE_AUTHOR),
        Asset::new("Highlights Cover.jpg", AssetKind::Thumbnail, AssetOrigin::Upload)
            .with_media_format(MediaFormat::Image)
            .with_aspect_ratios(["16:9", "1:1", "4:5"])
            .with_file_size("1.4 MB")
            .with_date("Mar 11, 2025"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let assets = assets();
        let mut ids: Vec<_> = assets.iter().map(|asset| asset.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), assets.len());
    }

    #[test]
    fn sample_assets_all_have_a_variant() {
        assert!(assets().iter().all(|asset| !asset.aspect_ratios.is_empty()));
    }

    #[test]
    fn sample_covers_both_dashboard_sections_and_origins() {
        let assets = assets();
        for kind in crate::library::DASHBOARD_SECTIONS {
            assert!(assets.iter().any(|a| a.kind == kind && a.is_template()));
            assert!(assets.iter().any(|a| a.kind == kind && !a.is_template()));
        }
    }
}
