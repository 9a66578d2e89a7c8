// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::domain::asset::{AssetKind, AssetOrigin, MediaFormat};
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(1000);

fn upload(title: &str, ratios: &[&str]) -> Asset {
    Asset::new(title, AssetKind::Intro, AssetOrigin::Upload)
        .with_aspect_ratios(ratios.iter().copied())
        .with_file_size("12.4 MB")
}

fn template(title: &str) -> Asset {
    Asset::new(title, AssetKind::Intro, AssetOrigin::Template)
        .with_aspect_ratios(["16:9", "9:16"])
}

fn open(asset: Asset) -> State {
    State::open(asset, DELAY)
}

#[test]
fn open_strips_extension_and_selects_first_variant() {
    let session = open(upload("Promo.mp4", &["9:16", "16:9"]));

    assert_eq!(session.name(), "Promo");
    assert_eq!(session.selected_variant(), &AspectRatio::Vertical);
    assert!(!session.is_dirty());
}

#[test]
fn open_without_ratios_falls_back_to_widescreen() {
    let session = open(upload("Empty.mov", &[]));

    assert_eq!(session.aspect_ratios(), &[AspectRatio::Widescreen]);
    assert_eq!(session.selected_variant(), &AspectRatio::Widescreen);
    assert!(!session.is_dirty());
}

#[test]
fn rename_and_save_yields_new_title() {
    let original = upload("Promo.mp4", &["16:9"]);
    let id = original.id;
    let mut session = open(original);

    session.update(Message::NameChanged("Promo Intro".into()));
    assert!(session.is_dirty());

    let Event::Saved(saved) = session.update(Message::Save) else {
        panic!("expected a saved asset");
    };
    assert_eq!(saved.id, id);
    assert_eq!(saved.title, "Promo Intro");
}

#[test]
fn renaming_back_to_baseline_is_clean() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    session.rename("Other".into());
    session.rename("Promo".into());
    assert!(!session.is_dirty());
}

#[test]
fn empty_name_can_be_saved() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    session.rename(String::new());
    assert!(session.can_save());
    let saved = session.save(Instant::now()).expect("dirty upload saves");
    assert_eq!(saved.title, "");
}

#[test]
fn category_toggle_is_symmetric() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    assert!(session.categories().contains(&Category::Intros));

    session.toggle_category(Category::Outros);
    assert!(session.categories().contains(&Category::Outros));
    assert!(session.is_dirty());

    session.toggle_category(Category::Outros);
    assert!(!session.categories().contains(&Category::Outros));
    assert!(!session.is_dirty());
}

#[test]
fn adding_present_ratio_is_a_noop() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));

    assert!(!session.add_variant(AspectRatio::Widescreen));
    assert_eq!(session.aspect_ratios().len(), 1);
    assert!(!session.is_dirty());
}

#[test]
fn adding_new_ratio_appends_and_marks_dirty() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));

    session.update(Message::AddVariant(AspectRatio::Square));
    assert_eq!(
        session.aspect_ratios(),
        &[AspectRatio::Widescreen, AspectRatio::Square]
    );
    assert!(session.is_dirty());
}

#[test]
fn available_to_add_excludes_present_ratios() {
    let session = open(upload("Promo.mp4", &["16:9", "1:1"]));
    let available = session.available_to_add();

    assert_eq!(
        available,
        vec![
            AspectRatio::Vertical,
            AspectRatio::Portrait,
            AspectRatio::Classic,
            AspectRatio::Cinematic,
        ]
    );
}

#[test]
fn last_variant_cannot_be_deleted() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));

    assert!(!session.can_delete_variant());
    assert!(!session.delete_variant(&AspectRatio::Widescreen));
    assert_eq!(session.aspect_ratios().len(), 1);

    session.update(Message::RequestDeleteVariant(AspectRatio::Widescreen));
    assert!(session.confirm_delete().is_none());
}

#[test]
fn deleting_selected_variant_reselects_first() {
    let mut session = open(upload("Promo.mp4", &["16:9", "9:16", "1:1"]));
    session.select_variant(AspectRatio::Vertical);

    assert!(session.delete_variant(&AspectRatio::Vertical));
    assert_eq!(session.selected_variant(), &AspectRatio::Widescreen);
}

#[test]
fn deleting_other_variant_keeps_selection() {
    let mut session = open(upload("Promo.mp4", &["16:9", "9:16", "1:1"]));
    session.select_variant(AspectRatio::Square);

    assert!(session.delete_variant(&AspectRatio::Vertical));
    assert_eq!(session.selected_variant(), &AspectRatio::Square);
}

#[test]
fn ratio_count_never_drops_below_one() {
    let mut session = open(upload("Promo.mp4", &["16:9", "9:16"]));
    let sequence = [
        AspectRatio::Widescreen,
        AspectRatio::Vertical,
        AspectRatio::Square,
        AspectRatio::Widescreen,
    ];

    for ratio in &sequence {
        session.delete_variant(ratio);
        assert!(!session.aspect_ratios().is_empty());
        session.add_variant(AspectRatio::Cinematic);
        session.delete_variant(&AspectRatio::Cinematic);
        assert!(!session.aspect_ratios().is_empty());
    }
}

#[test]
fn confirmed_delete_removes_variant() {
    let mut session = open(upload("Promo.mp4", &["16:9", "9:16"]));

    session.update(Message::RequestDeleteVariant(AspectRatio::Vertical));
    assert_eq!(session.confirm_delete(), Some(&AspectRatio::Vertical));

    session.update(Message::ConfirmDeleteVariant);
    assert_eq!(session.aspect_ratios(), &[AspectRatio::Widescreen]);
    assert!(session.confirm_delete().is_none());
}

#[test]
fn cancelled_delete_keeps_variant() {
    let mut session = open(upload("Promo.mp4", &["16:9", "9:16"]));

    session.update(Message::RequestDeleteVariant(AspectRatio::Vertical));
    session.update(Message::CancelDeleteVariant);
    assert_eq!(session.aspect_ratios().len(), 2);
}

#[test]
fn reordering_variants_is_not_dirty() {
    let mut session = open(upload("Promo.mp4", &["16:9", "9:16"]));

    session.delete_variant(&AspectRatio::Widescreen);
    session.add_variant(AspectRatio::Widescreen);

    assert_eq!(
        session.aspect_ratios(),
        &[AspectRatio::Vertical, AspectRatio::Widescreen]
    );
    assert!(!session.is_dirty());
}

#[test]
fn swapping_a_variant_is_dirty_even_with_same_count() {
    let mut session = open(upload("Promo.mp4", &["16:9", "9:16"]));

    session.delete_variant(&AspectRatio::Vertical);
    session.add_variant(AspectRatio::Square);

    assert_eq!(session.aspect_ratios().len(), 2);
    assert!(session.is_dirty());
}

#[test]
fn template_session_is_read_only() {
    let mut session = open(template("Team Lineup Intro"));
    assert!(session.is_template());

    session.update(Message::NameChanged("Hacked".into()));
    session.update(Message::ToggleCategory(Category::Outros));
    session.update(Message::AddVariant(AspectRatio::Square));
    session.update(Message::RequestDeleteVariant(AspectRatio::Vertical));

    assert_eq!(session.name(), "Team Lineup Intro");
    assert_eq!(session.aspect_ratios().len(), 2);
    assert!(!session.is_dirty());
    assert!(!session.can_save());
    assert_eq!(session.update(Message::Save), Event::None);
}

#[test]
fn template_allows_variant_selection() {
    let mut session = open(template("Halftime Break"));
    session.update(Message::SelectVariant(AspectRatio::Vertical));
    assert_eq!(session.selected_variant(), &AspectRatio::Vertical);
}

#[test]
fn selecting_absent_variant_is_ignored() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    session.select_variant(AspectRatio::Cinematic);
    assert_eq!(session.selected_variant(), &AspectRatio::Widescreen);
}

#[test]
fn clean_upload_cannot_save() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    assert!(!session.can_save());
    assert_eq!(session.update(Message::Save), Event::None);
    assert!(!session.is_closing());
}

#[test]
fn save_schedules_close_after_delay() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    session.rename("Promo Intro".into());

    let now = Instant::now();
    let event = session.update_at(Message::Save, now);
    assert!(matches!(event, Event::Saved(_)));
    assert!(session.is_closing());

    assert!(!session.close_due(now));
    assert!(!session.close_due(now + Duration::from_millis(999)));
    assert!(session.close_due(now + DELAY));
}

#[test]
fn closing_session_ignores_edits_and_second_save() {
    let mut session = open(upload("Promo.mp4", &["16:9", "9:16"]));
    session.rename("Promo Intro".into());
    let now = Instant::now();
    session.save(now);

    session.rename("Late edit".into());
    session.add_variant(AspectRatio::Square);
    session.delete_variant(&AspectRatio::Vertical);

    assert_eq!(session.name(), "Promo Intro");
    assert_eq!(session.aspect_ratios().len(), 2);
    assert_eq!(session.update_at(Message::Save, now), Event::None);
}

#[test]
fn saved_asset_keeps_identity_and_metadata() {
    let original = upload("Clip.mov", &["16:9"])
        .with_media_format(MediaFormat::Video)
        .with_date("2024-03-01");
    let mut session = open(original.clone());
    session.toggle_category(Category::Thumbnails);
    session.add_variant(AspectRatio::Portrait);

    let saved = session.save(Instant::now()).expect("dirty upload saves");

    assert_eq!(saved.id, original.id);
    assert_eq!(saved.kind, original.kind);
    assert_eq!(saved.date, original.date);
    assert_eq!(saved.file_size, original.file_size);
    assert_eq!(saved.title, "Clip");
    assert!(saved.categories.contains(&Category::Thumbnails));
    assert_eq!(
        saved.aspect_ratios,
        vec![AspectRatio::Widescreen, AspectRatio::Portrait]
    );
}

#[test]
fn close_discards_draft() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    session.rename("Unsaved".into());
    assert_eq!(session.update(Message::Close), Event::Closed);
}

#[test]
fn visibility_rules_link_is_inert() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));

    assert_eq!(session.update(Message::EditVisibilityRules), Event::None);
    assert!(!session.is_dirty());
    assert!(!session.can_save());
}

#[test]
fn playback_toggle_flips_local_state() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    assert!(!session.is_playing());
    session.update(Message::TogglePlayback);
    assert!(session.is_playing());
    session.update(Message::TogglePlayback);
    assert!(!session.is_playing());
}

#[test]
fn variant_file_name_uses_draft_name_and_ratio_tag() {
    let mut session = open(upload("Promo.mp4", &["16:9"]));
    assert_eq!(
        session.variant_file_name(&AspectRatio::Vertical),
        "Promo_9x16.mp4"
    );
    session.rename("Promo Intro".into());
    assert_eq!(
        session.variant_file_name(&AspectRatio::Widescreen),
        "Promo Intro_16x9.mp4"
    );
}

#[test]
fn header_title_uses_media_extension() {
    let session = open(upload("Cover.png", &["1:1"]).with_media_format(MediaFormat::Image));
    assert_eq!(session.header_title(), "Cover.png");
}

#[test]
fn preview_sizes_follow_ratio_table() {
    assert_eq!(preview_size(&AspectRatio::Widescreen), (80.0, 45.0));
    assert_eq!(preview_size(&AspectRatio::Vertical), (28.0, 50.0));
    assert_eq!(preview_size(&AspectRatio::Square), (50.0, 50.0));
    assert_eq!(preview_size(&AspectRatio::Portrait), (40.0, 50.0));
    assert_eq!(preview_size(&AspectRatio::Classic), (67.0, 50.0));
    assert_eq!(preview_size(&AspectRatio::Cinematic), (80.0, 34.0));
    assert_eq!(preview_size(&AspectRatio::from("2.39:1")), (80.0, 45.0));
}

#[test]
fn pending_close_is_due_at_deadline() {
    let now = Instant::now();
    let pending = PendingClose::new(now, Duration::from_millis(50));
    assert!(!pending.is_due(now));
    assert!(pending.is_due(now + Duration::from_millis(50)));
}
