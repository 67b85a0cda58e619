// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::orchestrator;
use crate::domain::LayoutMode;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Orchestrator(orchestrator::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

impl From<orchestrator::Message> for Message {
    fn from(message: orchestrator::Message) -> Self {
        Message::Orchestrator(message)
    }
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// URL previewed at startup instead of the configured default.
    pub url: Option<String>,
    /// Layout shown at startup.
    pub layout: Option<LayoutMode>,
    /// Optional config directory override (for testing or portable deployments).
    pub config_dir: Option<PathBuf>,
}
