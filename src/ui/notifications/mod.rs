// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking feedback.
//!
//! Used for the configuration warning at startup and for preview loads that
//! fail. Notifications appear in the bottom-right corner and never block
//! interaction.
//!
//! - Info toasts last 3s, warnings 5s, errors stay until dismissed
//! - At most 3 toasts are visible, the rest wait in a queue

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
