// SPDX-License-Identifier: MPL-2.0
//! Asset domain types.
//!
//! This module contains the asset record and the value types it is built
//! from, independent of any presentation concerns.

pub mod aspect_ratio;
pub mod filter;
pub mod types;

// Re-export commonly used types
pub use aspect_ratio::{AspectRatio, Orientation};
pub use filter::{AspectFilter, SearchQuery};
pub use types::{
    strip_known_extension, Asset, AssetId, AssetKind, AssetOrigin, Category, MediaFormat,
    KNOWN_EXTENSIONS,
};
