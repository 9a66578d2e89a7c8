// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Edit Session Defaults
// ==========================================================================

/// Delay between a successful save and the edit view closing (milliseconds).
pub const DEFAULT_SAVE_CLOSE_DELAY_MS: u64 = 1000;

/// Longest accepted close delay. Larger configured values are clamped.
pub const MAX_SAVE_CLOSE_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

const _: () = {
    assert!(DEFAULT_SAVE_CLOSE_DELAY_MS <= MAX_SAVE_CLOSE_DELAY_MS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
