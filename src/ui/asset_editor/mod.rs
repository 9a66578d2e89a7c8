// SPDX-License-Identifier: MPL-2.0
//! Asset edit view shown as an overlay above the dashboard.
//!
//! Follows the same "state down, messages up" pattern as the other
//! components. The session works on a draft copy of the asset and hands a
//! complete replacement asset to the parent on save; the collection itself
//! is never touched from here.
//!
//! Templates open read-only. Uploads can be renamed, re-categorised and
//! given extra aspect-ratio variants.

mod state;
mod view;

#[cfg(test)]
mod tests;

pub use state::{preview_size, Draft, EditMode, PendingClose, State};
pub use view::view;
pub(crate) use view::ratio_label;

use crate::domain::asset::{AspectRatio, Asset, Category};
use crate::i18n::fluent::I18n;
use std::time::Instant;

/// Contextual data needed to render the edit view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    ToggleCategory(Category),
    AddVariant(AspectRatio),
    RequestDeleteVariant(AspectRatio),
    ConfirmDeleteVariant,
    CancelDeleteVariant,
    SelectVariant(AspectRatio),
    TogglePlayback,
    UseTemplate,
    /// "Edit Rules" in the visibility block; nothing to edit yet.
    EditVisibilityRules,
    Save,
    Close,
}

/// Events reported to the application root.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The user saved; the asset replaces the record with the same id.
    Saved(Asset),
    /// The user closed the view without saving.
    Closed,
}

impl State {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        self.update_at(message, Instant::now())
    }

    /// Same as [`State::update`] with an explicit clock for the save delay.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::NameChanged(name) => self.rename(name),
            Message::ToggleCategory(category) => self.toggle_category(category),
            Message::AddVariant(ratio) => {
                self.add_variant(ratio);
            }
            Message::RequestDeleteVariant(ratio) => self.request_delete(ratio),
            Message::ConfirmDeleteVariant => {
                self.confirm_pending_delete();
            }
            Message::CancelDeleteVariant => self.cancel_delete(),
            Message::SelectVariant(ratio) => self.select_variant(ratio),
            Message::TogglePlayback => self.toggle_playback(),
            Message::UseTemplate => {
                tracing::debug!(asset = self.asset().id.value(), "use template requested");
            }
            Message::EditVisibilityRules => {
                tracing::debug!(
                    asset = self.asset().id.value(),
                    "visibility rules requested"
                );
            }
            Message::Save => {
                if let Some(saved) = self.save(now) {
                    return Event::Saved(saved);
                }
            }
            Message::Close => {
                tracing::debug!(asset = self.asset().id.value(), "edit session closed");
                return Event::Closed;
            }
        }
        Event::None
    }
}
