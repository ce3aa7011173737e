// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for configuration fallbacks and record outcomes.
//!
//! Notifications carry an i18n key resolved at render time. Up to three are
//! shown at once in the bottom-right corner; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
