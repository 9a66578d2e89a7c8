// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns a `State`, turns its `Message`s into an `Event` for the
//! application, and renders from a borrowed `ViewContext`.
//!
//! # Dashboard
//!
//! - [`sidebar`] - Elements bar and category list
//! - [`asset_grid`] - Search, display mode and the dashboard sections
//! - [`section_card`] - One section with its local aspect-ratio filter
//! - [`asset_card`] - Grid tiles and list rows
//!
//! # Overlays
//!
//! - [`asset_editor`] - Edit modal with variant management
//! - [`upload_dialog`] - Upload modal opened from a section
//! - [`settings`] - Session-only settings panel
//! - [`notifications`] - Toast notifications
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod asset_card;
pub mod asset_editor;
pub mod asset_grid;
pub mod design_tokens;
pub mod notifications;
pub mod section_card;
pub mod settings;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod upload_dialog;
