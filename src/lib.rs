// SPDX-License-Identifier: MPL-2.0
//! `asset_deck` is a media asset dashboard built with the Iced GUI framework.
//!
//! It lets users browse intros, midtros and shared templates, filter them by
//! aspect ratio, upload new assets and edit the variants of their own uploads.
//! Pure asset logic lives in [`domain`] and [`library`]; everything that draws
//! pixels lives in [`ui`] and is orchestrated by [`app`].

#![doc(html_root_url = "https://docs.rs/asset_deck/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod library;
pub mod ui;
