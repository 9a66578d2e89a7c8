// SPDX-License-Identifier: MPL-2.0
//! Overlay stacking order above the dashboard.

/// Topmost surface drawn above the dashboard. Keyboard shortcuts act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Settings,
    Editor,
    Upload,
}

impl Overlay {
    /// Resolves the topmost overlay. Modals sit above the settings panel and
    /// the upload dialog sits above the edit view.
    #[must_use]
    pub fn topmost(settings_open: bool, editor_open: bool, upload_open: bool) -> Self {
        if upload_open {
            Overlay::Upload
        } else if editor_open {
            Overlay::Editor
        } else if settings_open {
            Overlay::Settings
        } else {
            Overlay::None
        }
    }
}
