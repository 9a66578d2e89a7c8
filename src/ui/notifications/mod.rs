// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Successful saves and uploads, as well as configuration problems, are
//! reported through short-lived toasts in the bottom-right corner.
//!
//! - Success toasts stay 3s, warnings 5s.
//! - At most [`MAX_VISIBLE`] toasts are shown; the rest wait in a queue.
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-save-success"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
