// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core asset logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so that every
//! rule can be unit tested without a window or a runtime.
//!
//! # Modules
//!
//! - [`asset`]: Asset types ([`Asset`](asset::Asset), [`AspectRatio`](asset::AspectRatio),
//!   [`Category`](asset::Category)), display-name helpers and filters
//!   ([`SearchQuery`](asset::SearchQuery), [`AspectFilter`](asset::AspectFilter))

pub mod asset;
